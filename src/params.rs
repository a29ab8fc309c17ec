//! Params：单次编译的命名参数累加器。

use crate::value::SqlValue;

/// 一次编译产生的参数集合。
///
/// 每次编译都从一个全新的 `Params` 开始，占位符名由单调递增的
/// 计数器生成（`:p1`、`:p2`……），同一条语句内不会重复；编译器
/// 本身不在调用之间保留任何累加器状态。
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Params {
    next_index: usize,
    values: Vec<(String, SqlValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// 绑定一个值，返回写进 SQL 文本的占位符（含 `:` 前缀）。
    pub(crate) fn bind(&mut self, value: SqlValue) -> String {
        self.next_index += 1;
        let name = format!("p{}", self.next_index);
        let placeholder = format!(":{name}");
        self.values.push((name, value));
        placeholder
    }

    /// 按占位符名（不含 `:` 前缀）查值。
    pub fn get(&self, name: &str) -> Option<&SqlValue> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// 按绑定顺序遍历 `(name, value)`。
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bind_allocates_unique_placeholders() {
        let mut params = Params::new();
        assert_eq!(params.bind(SqlValue::from("a")), ":p1");
        assert_eq!(params.bind(SqlValue::from("a")), ":p2");
        assert_eq!(params.bind(SqlValue::I64(3)), ":p3");
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn get_by_name() {
        let mut params = Params::new();
        params.bind(SqlValue::from("x"));
        params.bind(SqlValue::I64(42));
        assert_eq!(params.get("p2"), Some(&SqlValue::I64(42)));
        assert_eq!(params.get("p9"), None);
    }

    #[test]
    fn iter_preserves_bind_order() {
        let mut params = Params::new();
        params.bind(SqlValue::I64(1));
        params.bind(SqlValue::I64(2));
        let names: Vec<&str> = params.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["p1", "p2"]);
    }
}
