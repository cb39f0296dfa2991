//! # mono 子命令 CLI 定义
//!
//! 单色谱线参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/mono.rs`

use clap::Args;
use std::path::PathBuf;

/// mono 子命令参数
#[derive(Args, Debug)]
pub struct MonoArgs {
    /// Line energy in keV
    #[arg(long)]
    pub energy: f64,

    /// Counts (weight) for this line
    #[arg(long, default_value_t = 1.0)]
    pub counts: f64,

    /// Polarization mean (0..1)
    #[arg(long, default_value_t = 0.0)]
    pub pol: f64,

    /// Polarization sigma
    #[arg(long, default_value_t = 0.0)]
    pub polerr: f64,

    /// Output file
    #[arg(long, default_value = "spectrum.txt")]
    pub out: PathBuf,
}
