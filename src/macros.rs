//! 宏集合：条件集的字面量式构造。

/// 以映射字面量的写法构造 [`ConditionSet`](crate::ConditionSet)。
///
/// ```
/// use halo_finder::conditions;
///
/// let conds = conditions! {
///     "t.foo =" => "bar",
///     "OR" => conditions! {
///         "foo IS" => "NULL",
///         "bar >" => 42_i64,
///     },
/// };
/// assert_eq!(conds.len(), 2);
/// ```
#[macro_export]
macro_rules! conditions {
    () => {
        $crate::ConditionSet::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut set = $crate::ConditionSet::new();
        $(
            set.push($key, $value);
        )*
        set
    }};
}
pub use crate::conditions;
