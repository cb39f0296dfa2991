//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `spectrum/`, `models/`, `utils/`
//! - 子模块: uniform, mono, lines

pub mod lines;
pub mod mono;
pub mod uniform;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Uniform(args) => uniform::execute(args),
        Commands::Mono(args) => mono::execute(args),
        Commands::Lines(args) => lines::execute(args),
    }
}
