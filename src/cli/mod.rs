//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `uniform`: 能量区间内的均匀谱
//! - `mono`: 单色谱线
//! - `lines`: 特征 X 射线发射线组合谱
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: uniform, mono, lines

pub mod lines;
pub mod mono;
pub mod uniform;

use clap::{Parser, Subcommand};

/// Specgen - X 射线能谱表生成器
#[derive(Parser)]
#[command(name = "specgen")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "X-ray spectrum table generator for Monte Carlo primary sources", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a uniform spectrum over an energy range
    Uniform(uniform::UniformArgs),

    /// Generate a single monochromatic line
    Mono(mono::MonoArgs),

    /// Generate a spectrum from known characteristic X-ray emission lines
    Lines(lines::LinesArgs),
}
