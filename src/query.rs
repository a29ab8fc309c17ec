//! 查询编译器：把基础语句、条件、分组、排序、分页拼成完整 SQL。

use crate::compile::{CompileError, CompileOptions, compile_into};
use crate::condition::ConditionSet;
use crate::interpolate::interpolate;
use crate::params::Params;
use crate::string_builder::StringBuilder;

/// 查询参数。所有字段都可选，缺省即不生成对应子句。
#[derive(Debug, Default, Clone, PartialEq)]
pub struct QueryParams {
    pub conditions: Option<ConditionSet>,
    pub group: Option<String>,
    pub order: Option<String>,
    /// 尚未支持；设置后编译失败。
    pub having: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn conditions(mut self, conditions: ConditionSet) -> Self {
        self.conditions = Some(conditions);
        self
    }

    pub fn group(mut self, by: impl Into<String>) -> Self {
        self.group = Some(by.into());
        self
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn having(mut self, having: impl Into<String>) -> Self {
        self.having = Some(having.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// 编译结果：SQL 文本与按占位符名绑定的参数集。
///
/// 每次编译都新建一份，调用之间不共享任何状态。
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    pub sql: String,
    pub params: Params,
}

/// 把 `base` 与 `query` 编译成可执行语句。
///
/// 拼接顺序固定不可配置：base -> 条件 -> GROUP BY -> ORDER BY ->
/// LIMIT/OFFSET。`single` 为真时强制 `LIMIT 1` 并忽略调用方的
/// limit/offset；OFFSET 只在 LIMIT 存在时生成。条件集存在且非空时
/// 先追加恒真锚点 `WHERE 1`，让每个条件都能统一带上自己的连接词。
///
/// 编译失败即整体失败，半成品缓冲直接丢弃，不会返回部分结果。
pub fn compile_query(
    base: &str,
    query: &QueryParams,
    single: bool,
    options: &CompileOptions,
) -> Result<CompiledQuery, CompileError> {
    if query.having.is_some() {
        return Err(CompileError::NotImplemented);
    }

    let mut buf = StringBuilder::new();
    let mut params = Params::new();
    buf.write_str(base);

    if let Some(conditions) = &query.conditions
        && !conditions.is_empty()
    {
        buf.write_leading("WHERE 1");
        compile_into(conditions, &mut buf, &mut params, options)?;
    }

    if let Some(by) = &query.group {
        append_group(&mut buf, by);
    }
    if let Some(order) = &query.order {
        append_order(&mut buf, order);
    }
    if single {
        buf.write_leading("LIMIT 1");
    } else if let Some(limit) = query.limit {
        append_limit(&mut buf, limit, query.offset);
    }

    Ok(CompiledQuery {
        sql: buf.into_string(),
        params,
    })
}

/// 渲染内联 SQL：编译、插值、折叠空白。纯函数，从不执行。
pub fn dump_query(
    base: &str,
    query: &QueryParams,
    single: bool,
    options: &CompileOptions,
) -> Result<String, CompileError> {
    let compiled = compile_query(base, query, single, options)?;
    let inlined = interpolate(&compiled.sql, &compiled.params)?;
    Ok(collapse_whitespace(&inlined))
}

fn append_group(buf: &mut StringBuilder, by: &str) {
    buf.write_leading("GROUP BY ");
    buf.write_str(by);
}

fn append_order(buf: &mut StringBuilder, order: &str) {
    buf.write_leading("ORDER BY ");
    buf.write_str(order);
}

fn append_limit(buf: &mut StringBuilder, limit: u64, offset: Option<u64>) {
    buf.write_leading(&format!("LIMIT {limit}"));
    if let Some(offset) = offset {
        buf.write_leading(&format!("OFFSET {offset}"));
    }
}

/// 把连续空白折叠为单个空格。对整段文本生效（字符串字面量内部也
/// 一样）：输出只用于日志与调试，不回传数据库。
fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_ws = false;
    for c in s.chars() {
        if c.is_whitespace() {
            if !in_ws {
                out.push(' ');
            }
            in_ws = true;
        } else {
            out.push(c);
            in_ws = false;
        }
    }
    out
}
