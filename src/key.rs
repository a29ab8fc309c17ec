//! 条件 key 解析：把形如 `"OR foo.bar >="` 的 key 拆成连接词、字段与操作符。

use crate::compile::CompileError;

/// 条件之间的布尔连接词。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    And,
    Or,
}

impl Connector {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// 条件操作符。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterEqualThan,
    LessThan,
    LessEqualThan,
    Like,
    NotLike,
    In,
    NotIn,
    Between,
    NotBetween,
    Is,
    IsNot,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::GreaterThan => ">",
            Self::GreaterEqualThan => ">=",
            Self::LessThan => "<",
            Self::LessEqualThan => "<=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::Between => "BETWEEN",
            Self::NotBetween => "NOT BETWEEN",
            Self::Is => "IS",
            Self::IsNot => "IS NOT",
        }
    }
}

/// key 去掉连接词与操作符之后剩下的部分。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyKind {
    /// 普通条件：`<field> <operator> <value>`。
    Clause { field: String, operator: Operator },
    /// 纯嵌套组标记（key 只有连接词本身，如 `"OR"`）：值是一个
    /// 子条件集，整组加括号后递归编译。
    Group,
}

/// 解析后的条件 key。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    pub connector: Connector,
    pub kind: KeyKind,
}

// 双词操作符必须先于其单词后缀匹配（NOT BETWEEN / BETWEEN、IS NOT / IS），
// 因此两张表分开，且先查双词表。
const TWO_WORD_OPERATORS: &[(&str, &str, Operator)] = &[
    ("NOT", "BETWEEN", Operator::NotBetween),
    ("NOT", "LIKE", Operator::NotLike),
    ("NOT", "IN", Operator::NotIn),
    ("IS", "NOT", Operator::IsNot),
];

const ONE_WORD_OPERATORS: &[(&str, Operator)] = &[
    ("BETWEEN", Operator::Between),
    ("LIKE", Operator::Like),
    ("IN", Operator::In),
    ("IS", Operator::Is),
    (">=", Operator::GreaterEqualThan),
    ("<=", Operator::LessEqualThan),
    ("!=", Operator::NotEqual),
    ("=", Operator::Equal),
    (">", Operator::GreaterThan),
    ("<", Operator::LessThan),
];

/// 解析条件 key。
///
/// 结构为 `[connector] field [operator]`，按空白切词：
/// - 首 token 大小写不敏感地匹配 `AND`/`OR`，缺省 `AND`；
/// - 尾部 token 大小写不敏感地按最长匹配查操作符表，缺省 `=`；
/// - 剩余部分是字段名，原样传递（字段名不做转义，调用方不得
///   传入不可信输入）。
///
/// 连接词存在而字段、操作符都不存在时，key 是纯嵌套组标记。
/// 其余残缺或多余 token 的形态都会返回 [`CompileError::InvalidConditionKey`]。
pub fn parse_key(key: &str) -> Result<ParsedKey, CompileError> {
    let tokens: Vec<&str> = key.split_whitespace().collect();

    let (connector, rest) = match tokens.split_first() {
        None => return Err(CompileError::InvalidConditionKey(key.to_string())),
        Some((first, rest)) if first.eq_ignore_ascii_case("AND") => (Some(Connector::And), rest),
        Some((first, rest)) if first.eq_ignore_ascii_case("OR") => (Some(Connector::Or), rest),
        Some(_) => (None, tokens.as_slice()),
    };

    let (operator, field_tokens) = split_trailing_operator(rest);

    match (field_tokens, connector, operator) {
        ([field], connector, operator) => Ok(ParsedKey {
            connector: connector.unwrap_or(Connector::And),
            kind: KeyKind::Clause {
                field: field.to_string(),
                operator: operator.unwrap_or(Operator::Equal),
            },
        }),
        ([], Some(connector), None) => Ok(ParsedKey {
            connector,
            kind: KeyKind::Group,
        }),
        _ => Err(CompileError::InvalidConditionKey(key.to_string())),
    }
}

fn split_trailing_operator<'a>(tokens: &'a [&'a str]) -> (Option<Operator>, &'a [&'a str]) {
    if let [head @ .., a, b] = tokens {
        for (t1, t2, op) in TWO_WORD_OPERATORS {
            if a.eq_ignore_ascii_case(t1) && b.eq_ignore_ascii_case(t2) {
                return (Some(*op), head);
            }
        }
    }
    if let [head @ .., last] = tokens {
        for (t, op) in ONE_WORD_OPERATORS {
            if last.eq_ignore_ascii_case(t) {
                return (Some(*op), head);
            }
        }
    }
    (None, tokens)
}
