//! 执行边界：编译结果交给外部执行器，本 crate 不碰连接与事务。

use crate::compile::CompileError;
use crate::params::Params;

/// 外部执行器。
///
/// 接收编译好的 SQL 文本与命名参数集，返回游标/结果集。连接管理、
/// 事务、超时与结果消费都属于实现方；`LIMIT 1` 语句取单行同样是
/// 游标侧的事。
pub trait Executor {
    type Cursor;
    type Error: std::error::Error;

    fn execute(&self, sql: &str, params: &Params) -> Result<Self::Cursor, Self::Error>;
}

/// 查询失败：编译错误，或执行器自身的错误（原样透传）。
#[derive(Debug, thiserror::Error)]
pub enum FindError<E: std::error::Error> {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Execute(E),
}
