//! 条件数据模型：标量、条件值与有序条件集。

use crate::value::SqlValue;
use crate::valuer::{SqlValuer, ValuerError};

/// 条件里的单个标量：现成的值，或绑定时再求值的 Valuer。
#[derive(Debug, Clone)]
pub enum Scalar {
    Value(SqlValue),
    Valuer(Box<dyn SqlValuer>),
}

impl Scalar {
    /// 求出实际绑定的值。
    pub(crate) fn resolve(&self) -> Result<SqlValue, ValuerError> {
        match self {
            Self::Value(v) => Ok(v.clone()),
            Self::Valuer(v) => v.value(),
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            _ => false,
        }
    }
}

impl From<SqlValue> for Scalar {
    fn from(v: SqlValue) -> Self {
        Self::Value(v)
    }
}

impl From<Box<dyn SqlValuer>> for Scalar {
    fn from(v: Box<dyn SqlValuer>) -> Self {
        Self::Valuer(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        SqlValue::from(v).into()
    }
}
impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        SqlValue::from(v).into()
    }
}
impl From<u64> for Scalar {
    fn from(v: u64) -> Self {
        SqlValue::from(v).into()
    }
}
impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        SqlValue::from(v).into()
    }
}
impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        SqlValue::from(v).into()
    }
}
impl From<&'static str> for Scalar {
    fn from(v: &'static str) -> Self {
        SqlValue::from(v).into()
    }
}
impl From<String> for Scalar {
    fn from(v: String) -> Self {
        SqlValue::from(v).into()
    }
}
impl From<Vec<u8>> for Scalar {
    fn from(v: Vec<u8>) -> Self {
        SqlValue::from(v).into()
    }
}
impl From<time::OffsetDateTime> for Scalar {
    fn from(v: time::OffsetDateTime) -> Self {
        SqlValue::from(v).into()
    }
}

impl<T> From<Option<T>> for Scalar
where
    T: Into<SqlValue>,
{
    fn from(v: Option<T>) -> Self {
        Self::Value(SqlValue::from_option(v))
    }
}

/// 条件值：单个标量、标量序列（`IN`/`BETWEEN`），或嵌套条件集
/// （`AND`/`OR` 组）。
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
    Set(ConditionSet),
}

impl ConditionValue {
    /// 用于错误信息里描述实际传入的值形态。
    pub(crate) fn shape(&self) -> String {
        match self {
            Self::Scalar(Scalar::Value(v)) => format!("scalar ({})", v.kind()),
            Self::Scalar(Scalar::Valuer(_)) => "scalar (valuer)".to_string(),
            Self::List(items) => format!("list of {}", items.len()),
            Self::Set(_) => "nested condition set".to_string(),
        }
    }
}

impl<T: Into<Scalar>> From<T> for ConditionValue {
    fn from(v: T) -> Self {
        Self::Scalar(v.into())
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for ConditionValue {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Scalar>, const N: usize> From<[T; N]> for ConditionValue {
    fn from(v: [T; N]) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<ConditionSet> for ConditionValue {
    fn from(v: ConditionSet) -> Self {
        Self::Set(v)
    }
}

/// 有序条件集：key -> 值，按插入顺序编译。
///
/// 顺序即子句的生成顺序，决定了布尔表达式从左到右的结合；除嵌套组
/// 外不会额外加括号。
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConditionSet {
    entries: Vec<(String, ConditionValue)>,
}

impl ConditionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个条件。同名 key 不去重：每个 entry 单独生成一个子句。
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<ConditionValue>) -> &mut Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// 链式追加。
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ConditionValue>) -> Self {
        self.push(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConditionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
