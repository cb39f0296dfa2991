//! # lines 子命令实现
//!
//! 从已知特征 X 射线发射线生成组合谱，可选高斯展宽。
//!
//! ## 依赖关系
//! - 使用 `cli/lines.rs` 定义的 LinesArgs
//! - 使用 `spectrum/` 模块选线、构建和写出

use crate::cli::lines::LinesArgs;
use crate::error::Result;
use crate::spectrum::builder::{self, FWHM_TO_SIGMA};
use crate::spectrum::{table, SelectedLine, SpectrumRequest};
use crate::utils::output;

/// 执行 lines 能谱生成
pub fn execute(args: LinesArgs) -> Result<()> {
    output::print_header("Emission Line Spectrum Generation");

    let elements: Vec<String> = args
        .elements
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    output::print_info(&format!("Requested elements: {}", elements.join(", ")));

    if args.fwhm > 0.0 {
        let sigma = args.fwhm / FWHM_TO_SIGMA;
        output::print_info(&format!(
            "Gaussian broadening: FWHM {:.4} keV (σ = {:.4} keV), step {:.4} keV",
            args.fwhm, sigma, args.step
        ));
        if args.step > sigma {
            output::print_warning(&format!(
                "Step {:.4} keV is coarse relative to σ {:.4} keV, the midpoint \
                 approximation degrades",
                args.step, sigma
            ));
        }
    }

    let request = SpectrumRequest::Lines {
        elements: elements.clone(),
        total_counts: args.totalcounts,
        include_kalpha2: !args.no_kalpha2,
        include_kbeta: !args.no_kbeta,
        fwhm_kev: args.fwhm,
        step_kev: args.step,
        polarization: args.pol,
        polarization_error: args.polerr,
    };

    let bins = request.build()?;

    // 构建成功后选线不会再失败，查一次用于展示分配表
    let selected = builder::select_lines(&elements, !args.no_kalpha2, !args.no_kbeta)?;
    print_line_table(&selected, args.totalcounts);

    table::write_spectrum_file(&bins, &args.out)?;

    let total: f64 = bins.iter().map(|b| b.counts).sum();
    output::print_info(&format!("{} bins, total counts {:.1}", bins.len(), total));
    output::print_success(&format!("Spectrum saved to '{}'", args.out.display()));

    Ok(())
}

/// 打印选中谱线的强度分配表
fn print_line_table(selected: &[SelectedLine], total_counts: f64) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct LineRow {
        #[tabled(rename = "Line")]
        label: String,
        #[tabled(rename = "E (keV)")]
        energy: String,
        #[tabled(rename = "Fraction")]
        fraction: String,
        #[tabled(rename = "Counts")]
        counts: String,
    }

    let rows: Vec<LineRow> = selected
        .iter()
        .map(|line| LineRow {
            label: line.label.clone(),
            energy: format!("{:.4}", line.energy_kev),
            fraction: format!("{:.4}", line.fraction),
            counts: format!("{:.1}", total_counts * line.fraction),
        })
        .collect();

    output::print_header(&format!("Selected {} Emission Lines", rows.len()));
    let table = Table::new(&rows);
    println!("{}", table);
}
