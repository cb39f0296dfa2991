//! # Specgen - X 射线能谱表生成器
//!
//! 为下游蒙特卡罗粒子输运模拟的初级粒子发生器生成离散能谱输入表。
//!
//! ## 子命令
//! - `uniform` - 能量区间内的均匀谱
//! - `mono`    - 单色谱线
//! - `lines`   - 特征 X 射线发射线组合谱（可选高斯展宽）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── spectrum/ (能谱构建核心)
//!   │           ├── library (发射线数据库)
//!   │           ├── builder (离散化)
//!   │           └── table   (表格输出)
//!   ├── models/     (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod spectrum;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
