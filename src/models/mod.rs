//! # 数据模型模块
//!
//! 定义统一的能谱数据模型。
//!
//! ## 依赖关系
//! - 被 `spectrum/` 和 `commands/` 使用
//! - 子模块: spectrum

pub mod spectrum;

pub use spectrum::{BinRecord, EmissionLine};
