//! # mono 子命令实现
//!
//! 生成单一单色谱线。
//!
//! ## 依赖关系
//! - 使用 `cli/mono.rs` 定义的 MonoArgs
//! - 使用 `spectrum/` 模块构建和写出

use crate::cli::mono::MonoArgs;
use crate::error::Result;
use crate::spectrum::{table, SpectrumRequest};
use crate::utils::output;

/// 执行 mono 能谱生成
pub fn execute(args: MonoArgs) -> Result<()> {
    output::print_header("Monochromatic Line Generation");

    let request = SpectrumRequest::Monochromatic {
        energy_kev: args.energy,
        counts: args.counts,
        polarization: args.pol,
        polarization_error: args.polerr,
    };

    let bins = request.build()?;

    output::print_info(&format!(
        "Line at {:.4} keV, counts {:.1}",
        args.energy, args.counts
    ));

    table::write_spectrum_file(&bins, &args.out)?;

    output::print_success(&format!("Spectrum saved to '{}'", args.out.display()));

    Ok(())
}
