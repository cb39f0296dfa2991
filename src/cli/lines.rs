//! # lines 子命令 CLI 定义
//!
//! 特征 X 射线发射线组合谱参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/lines.rs`

use clap::Args;
use std::path::PathBuf;

/// lines 子命令参数
#[derive(Args, Debug)]
pub struct LinesArgs {
    /// Comma-separated list of element symbols (e.g. Cu,Mn,Rb,Mo,Ag)
    #[arg(long)]
    pub elements: String,

    /// Total counts distributed according to relative line intensities
    #[arg(long, default_value_t = 1e5)]
    pub totalcounts: f64,

    /// Exclude Kα2 lines
    #[arg(long, default_value_t = false)]
    pub no_kalpha2: bool,

    /// Exclude Kβ lines
    #[arg(long, default_value_t = false)]
    pub no_kbeta: bool,

    /// Gaussian FWHM in keV; if 0, emit delta-like narrow bins
    #[arg(long, default_value_t = 0.0)]
    pub fwhm: f64,

    /// Bin width in keV used when --fwhm > 0
    #[arg(long, default_value_t = 0.001)]
    pub step: f64,

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
