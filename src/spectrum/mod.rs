//! # 能谱构建模块
//!
//! 提供能谱构建与表格输出功能。
//!
//! ## 子模块
//! - `library`: 特征发射线数据库
//! - `builder`: 能谱构建器
//! - `table`: 能谱表输出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/spectrum.rs`

pub mod builder;
pub mod library;
pub mod table;

pub use builder::{SelectedLine, SpectrumRequest};
