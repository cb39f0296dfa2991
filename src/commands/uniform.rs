//! # uniform 子命令实现
//!
//! 在给定能量区间内生成等宽、等计数的均匀谱。
//!
//! ## 依赖关系
//! - 使用 `cli/uniform.rs` 定义的 UniformArgs
//! - 使用 `spectrum/` 模块构建和写出

use crate::cli::uniform::UniformArgs;
use crate::error::Result;
use crate::spectrum::{table, SpectrumRequest};
use crate::utils::output;

/// 执行 uniform 能谱生成
pub fn execute(args: UniformArgs) -> Result<()> {
    output::print_header("Uniform Spectrum Generation");

    let request = SpectrumRequest::Uniform {
        e_min_kev: args.emin,
        e_max_kev: args.emax,
        n_bins: args.nbins,
        counts_per_bin: args.counts,
        polarization: args.pol,
        polarization_error: args.polerr,
    };

    let bins = request.build()?;

    output::print_info(&format!(
        "Energy range: {:.4} - {:.4} keV in {} bins",
        args.emin,
        args.emax,
        bins.len()
    ));

    table::write_spectrum_file(&bins, &args.out)?;

    let total: f64 = bins.iter().map(|b| b.counts).sum();
    output::print_info(&format!("Total counts: {:.1}", total));
    output::print_success(&format!("Spectrum saved to '{}'", args.out.display()));

    Ok(())
}
