//! # 统一错误处理模块
//!
//! 定义 Specgen 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Specgen 统一错误类型
#[derive(Error, Debug)]
pub enum SpecgenError {
    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid energy range: {0}")]
    InvalidRange(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    // ─────────────────────────────────────────────────────────────
    // 谱线选择错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown element '{symbol}'. Known: {known}")]
    UnknownElement { symbol: String, known: String },

    #[error("No emission lines selected with the given options")]
    EmptySelection,

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SpecgenError>;
