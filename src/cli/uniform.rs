//! # uniform 子命令 CLI 定义
//!
//! 能量区间内的均匀谱参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/uniform.rs`

use clap::Args;
use std::path::PathBuf;

/// uniform 子命令参数
#[derive(Args, Debug)]
pub struct UniformArgs {
    /// Minimum energy in keV
    #[arg(long)]
    pub emin: f64,

    /// Maximum energy in keV
    #[arg(long)]
    pub emax: f64,

    /// Number of bins
    #[arg(long, default_value_t = 100)]
    pub nbins: usize,

    /// Counts per bin
    #[arg(long, default_value_t = 1.0)]
    pub counts: f64,

    /// Polarization mean for all bins (0..1)
    #[arg(long, default_value_t = 0.0)]
    pub pol: f64,

    /// Polarization sigma for all bins
    #[arg(long, default_value_t = 0.0)]
    pub polerr: f64,

    /// Output file
    #[arg(long, default_value = "spectrum.txt")]
    pub out: PathBuf,
}
