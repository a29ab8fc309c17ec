//! 条件编译器：递归展开条件集，生成 WHERE 片段并收集参数。

use crate::condition::{ConditionSet, ConditionValue};
use crate::interpolate::InterpolateError;
use crate::key::{KeyKind, Operator, parse_key};
use crate::params::Params;
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;
use crate::valuer::ValuerError;

/// 编译错误。全部是调用方输入校验失败：不可重试，单次编译直接终止，
/// 调用方应丢弃半成品缓冲。
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CompileError {
    #[error("finder invalid condition key `{0}`")]
    InvalidConditionKey(String),
    #[error("finder invalid condition value for key `{key}`: {reason}")]
    InvalidConditionValue { key: String, reason: String },
    #[error("finder having clause is not implemented")]
    NotImplemented,
    #[error("{0}")]
    Valuer(#[from] ValuerError),
    #[error("{0}")]
    Interpolate(#[from] InterpolateError),
}

/// 编译可选项。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// 是否对字段名按 `.` 分段加反引号（`t.foo` -> `` `t`.`foo` ``）。
    ///
    /// 默认关闭：字段出现在函数调用里时整体加引号是错的。无论开关，
    /// 字段名都不做转义，调用方不得传入不可信输入。
    pub quote_fields: bool,
}

impl CompileOptions {
    pub fn quote_fields(mut self, quote: bool) -> Self {
        self.quote_fields = quote;
        self
    }
}

/// 把 `set` 的每个条件追加到 `buf`，参数记入 `params`。
///
/// 每个条件统一以自己的连接词开头；调用方保证缓冲里已有 `1` 这样的
/// 恒真锚点，首条件因此无需特殊处理。嵌套组同理以 `(1` 开头。
pub(crate) fn compile_into(
    set: &ConditionSet,
    buf: &mut StringBuilder,
    params: &mut Params,
    options: &CompileOptions,
) -> Result<(), CompileError> {
    for (key, value) in set.iter() {
        let parsed = parse_key(key)?;
        buf.write_char(' ');
        buf.write_str(parsed.connector.as_str());

        match parsed.kind {
            KeyKind::Group => {
                let ConditionValue::Set(nested) = value else {
                    return Err(invalid_value(key, value, "expected a nested condition set"));
                };
                buf.write_str(" (1");
                compile_into(nested, buf, params, options)?;
                buf.write_char(')');
            }
            KeyKind::Clause { field, operator } => {
                let field = render_field(&field, options);
                match operator {
                    Operator::Equal
                    | Operator::NotEqual
                    | Operator::GreaterThan
                    | Operator::GreaterEqualThan
                    | Operator::LessThan
                    | Operator::LessEqualThan
                    | Operator::Like
                    | Operator::NotLike => {
                        let ConditionValue::Scalar(scalar) = value else {
                            return Err(invalid_value(key, value, "expected a scalar value"));
                        };
                        let placeholder = params.bind(scalar.resolve()?);
                        buf.write_str(&format!(" {field} {} {placeholder}", operator.as_str()));
                    }
                    Operator::In | Operator::NotIn => {
                        let ConditionValue::List(items) = value else {
                            return Err(invalid_value(key, value, "expected a list value"));
                        };
                        if items.is_empty() {
                            return Err(invalid_value(key, value, "expected a non-empty list"));
                        }
                        let mut placeholders = Vec::with_capacity(items.len());
                        for item in items {
                            placeholders.push(params.bind(item.resolve()?));
                        }
                        buf.write_str(&format!(
                            " {field} {} ({})",
                            operator.as_str(),
                            placeholders.join(", ")
                        ));
                    }
                    Operator::Between | Operator::NotBetween => {
                        let ConditionValue::List(items) = value else {
                            return Err(invalid_value(key, value, "expected a list of 2 elements"));
                        };
                        let [lower, upper] = items.as_slice() else {
                            return Err(invalid_value(key, value, "expected a list of 2 elements"));
                        };
                        let lower = params.bind(lower.resolve()?);
                        let upper = params.bind(upper.resolve()?);
                        buf.write_str(&format!(
                            " {field} {} {lower} AND {upper}",
                            operator.as_str()
                        ));
                    }
                    // IS/IS NOT 后面是关键字字面量而不是数据，从不参数化
                    Operator::Is | Operator::IsNot => {
                        let literal = null_literal(key, value)?;
                        buf.write_str(&format!(" {field} {} {literal}", operator.as_str()));
                    }
                }
            }
        }
    }

    Ok(())
}

fn invalid_value(key: &str, value: &ConditionValue, expected: &str) -> CompileError {
    CompileError::InvalidConditionValue {
        key: key.to_string(),
        reason: format!("{expected}, got {}", value.shape()),
    }
}

fn null_literal(key: &str, value: &ConditionValue) -> Result<&'static str, CompileError> {
    let expected = "expected NULL or NOT NULL";
    let ConditionValue::Scalar(scalar) = value else {
        return Err(invalid_value(key, value, expected));
    };
    let SqlValue::String(s) = scalar.resolve()? else {
        return Err(invalid_value(key, value, expected));
    };
    let normalized: Vec<String> = s
        .split_whitespace()
        .map(|t| t.to_ascii_uppercase())
        .collect();
    match normalized.join(" ").as_str() {
        "NULL" => Ok("NULL"),
        "NOT NULL" => Ok("NOT NULL"),
        _ => Err(invalid_value(key, value, expected)),
    }
}

/// 去除字段段两端既有的反引号/双引号，避免重复加引号。
fn unquote(s: &str) -> &str {
    let mut out = s.trim();
    if out.starts_with('`') || out.starts_with('"') {
        out = &out[1..];
    }
    if out.ends_with('`') || out.ends_with('"') {
        out = &out[..out.len() - 1];
    }
    out
}

fn render_field(field: &str, options: &CompileOptions) -> String {
    if !options.quote_fields {
        return field.to_string();
    }
    let parts: Vec<String> = field
        .split('.')
        .filter(|p| !p.is_empty())
        .map(|p| format!("`{}`", unquote(p)))
        .collect();
    parts.join(".")
}
