//! halo-sql-finder：条件映射驱动的 SQL 编译与参数收集库。
//!
//! 把形如 `{"t.foo =": "bar", "OR": {...}}` 的条件映射编译成带命名
//! 占位符（`:p1`）的 SQL 文本与参数集，交给外部执行器执行；也可以
//! 渲染成内联字面量的调试 SQL。

pub mod compile;
pub mod condition;
pub mod executor;
pub mod finder;
pub mod interpolate;
pub mod key;
pub mod macros;
pub use crate::macros::*;
pub mod params;
pub mod query;
#[cfg(test)]
mod query_tests;
pub mod string_builder;
pub mod value;
pub mod valuer;

pub use crate::compile::{CompileError, CompileOptions};
pub use crate::condition::{ConditionSet, ConditionValue, Scalar};
pub use crate::executor::{Executor, FindError};
pub use crate::finder::Finder;
pub use crate::interpolate::{InterpolateError, interpolate, quote_literal};
pub use crate::key::{Connector, KeyKind, Operator, ParsedKey, parse_key};
pub use crate::params::Params;
pub use crate::query::{CompiledQuery, QueryParams, compile_query, dump_query};
pub use crate::value::SqlValue;
pub use crate::valuer::{SqlValuer, ValuerError};
