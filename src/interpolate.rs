//! SQL 插值：把 `:name` 占位符替换为字面量，用于 dump/日志输出。
//!
//! 安全警告：插值永远不如参数化执行安全；本实现只服务于调试输出。

use crate::params::Params;
use crate::value::SqlValue;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InterpolateError {
    #[error("finder missing parameter `:{0}` when interpolating")]
    MissingParam(String),
}

/// 把 `sql` 中的 `:name` 占位符替换为 `params` 里对应值的字面量。
///
/// 扫描时跟踪 `'`、`"`、`` ` `` 引号与反斜杠转义，引号内的 `:`
/// 原样保留；`:` 后不是标识符（字母或下划线开头）时也原样保留。
pub fn interpolate(sql: &str, params: &Params) -> Result<String, InterpolateError> {
    let mut out = String::with_capacity(sql.len() + params.len() * 16);
    let mut quote: Option<char> = None;
    let mut escaping = false;

    let mut iter = sql.char_indices();
    while let Some((i, c)) = iter.next() {
        if escaping {
            out.push(c);
            escaping = false;
            continue;
        }

        match c {
            '\\' if quote.is_some() => {
                out.push(c);
                escaping = true;
            }
            '\'' | '"' | '`' => {
                if quote == Some(c) {
                    quote = None;
                } else if quote.is_none() {
                    quote = Some(c);
                }
                out.push(c);
            }
            ':' if quote.is_none() => {
                let rest = &sql[i + 1..];
                let end = rest
                    .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '_'))
                    .unwrap_or(rest.len());
                let name = &rest[..end];
                if name.is_empty() || name.as_bytes()[0].is_ascii_digit() {
                    out.push(':');
                } else {
                    let value = params
                        .get(name)
                        .ok_or_else(|| InterpolateError::MissingParam(name.to_string()))?;
                    encode_value(&mut out, value);
                    // 占位符名只含 ASCII，按字节数跳过即可
                    for _ in 0..name.len() {
                        iter.next();
                    }
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

/// 单个标量的字面量形式。
///
/// 除 `NULL` 外一律先转成字符串再按方言加引号（`42` -> `'42'`），
/// 与预编译驱动回显参数的习惯一致。
pub fn quote_literal(value: &SqlValue) -> String {
    let mut out = String::new();
    encode_value(&mut out, value);
    out
}

fn encode_value(out: &mut String, value: &SqlValue) {
    match value {
        SqlValue::Null => out.push_str("NULL"),
        SqlValue::Bool(b) => quote_string(out, if *b { "1" } else { "0" }),
        SqlValue::I64(n) => quote_string(out, &n.to_string()),
        SqlValue::U64(n) => quote_string(out, &n.to_string()),
        SqlValue::F64(n) => quote_string(out, &n.to_string()),
        SqlValue::String(s) => quote_string(out, s.as_ref()),
        SqlValue::Bytes(b) => {
            out.push_str("_binary");
            quote_string(out, &String::from_utf8_lossy(b));
        }
        SqlValue::DateTime(dt) => encode_datetime(out, *dt),
    }
}

fn quote_string(out: &mut String, s: &str) {
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\u{0000}' => out.push_str("\\0"),
            '\u{0008}' => out.push_str("\\b"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{001a}' => out.push_str("\\Z"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
}

fn encode_datetime(out: &mut String, dt: time::OffsetDateTime) {
    // 四舍五入到微秒：+500ns
    let dt = dt + time::Duration::nanoseconds(500);
    let items = time::format_description::parse(
        "'[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6]'",
    )
    .expect("invalid dt format");
    out.push_str(&dt.format(&items).expect("format failed"));
}
