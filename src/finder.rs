//! Finder：面向调用方的查询入口。

use crate::compile::{CompileError, CompileOptions};
use crate::executor::{Executor, FindError};
use crate::query::{QueryParams, compile_query, dump_query};

/// 持有执行器与编译选项的查询入口。
///
/// 本身不保存任何编译状态，每次调用都独立编译，可跨线程并发使用
/// （只要执行器允许）。
#[derive(Debug, Clone)]
pub struct Finder<E> {
    executor: E,
    options: CompileOptions,
}

impl<E: Executor> Finder<E> {
    pub fn new(executor: E) -> Self {
        Self::with_options(executor, CompileOptions::default())
    }

    pub fn with_options(executor: E, options: CompileOptions) -> Self {
        Self { executor, options }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn options(&self) -> CompileOptions {
        self.options
    }

    /// 编译并执行，返回执行器给出的游标。
    pub fn find(&self, base: &str, query: &QueryParams) -> Result<E::Cursor, FindError<E::Error>> {
        let compiled = compile_query(base, query, false, &self.options)?;
        self.executor
            .execute(&compiled.sql, &compiled.params)
            .map_err(FindError::Execute)
    }

    /// 同 [`find`](Self::find)，但强制 `LIMIT 1`，忽略调用方的
    /// limit/offset。
    pub fn find_one(
        &self,
        base: &str,
        query: &QueryParams,
    ) -> Result<E::Cursor, FindError<E::Error>> {
        let compiled = compile_query(base, query, true, &self.options)?;
        self.executor
            .execute(&compiled.sql, &compiled.params)
            .map_err(FindError::Execute)
    }

    /// 渲染内联 SQL，用于日志与调试。从不执行。
    pub fn dump_query(
        &self,
        base: &str,
        query: &QueryParams,
        single: bool,
    ) -> Result<String, CompileError> {
        dump_query(base, query, single, &self.options)
    }
}
