//! SqlValuer：可延迟求值的参数。
//!
//! 条件里的标量可以不是现成的值，而是一个在编译（绑定占位符）时
//! 才计算实际值的对象；计算失败会让整次编译失败。

use crate::value::SqlValue;

/// Valuer 求值错误。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("finder sql valuer error: {0}")]
pub struct ValuerError(pub String);

/// 在绑定占位符时动态计算实际值的 trait。
pub trait SqlValuer: dyn_clone::DynClone + std::fmt::Debug {
    fn value(&self) -> Result<SqlValue, ValuerError>;
}

dyn_clone::clone_trait_object!(SqlValuer);
