//! # 能谱构建器
//!
//! 将高层谱形请求离散化为有序的能量 bin 序列，
//! 供下游蒙特卡罗模拟的初级粒子发生器抽样使用。
//!
//! ## 算法概述
//! 1. 校验请求参数（任何 bin 产生之前）
//! 2. uniform: 等宽剖分 [e_min, e_max]
//! 3. mono: 单一窄 bin（宽度 1e-3 keV）
//! 4. lines: 选线 → 跨元素归一化 → 逐线离散化（delta 或高斯）
//! 5. 整个序列从 1 重新连续编号
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `spectrum/library.rs` 查询发射线
//! - 使用 `models/spectrum.rs` 的 BinRecord

use crate::error::{Result, SpecgenError};
use crate::models::BinRecord;
use crate::spectrum::library;

use std::f64::consts::PI;

/// FWHM 与高斯 σ 的换算常数 2√(2 ln 2)
pub const FWHM_TO_SIGMA: f64 = 2.354820045;

/// delta 型谱线的 bin 宽度 (keV)，约 1 eV
/// 避免下游把 bin 宽当作真实区间时出现零宽退化
pub const DELTA_WIDTH_KEV: f64 = 1e-3;

/// 高斯离散化窗口半宽（σ 的倍数）
const WINDOW_HALF_SIGMAS: f64 = 4.0;

/// 谱形请求
///
/// 三种谱形互斥，构建时穷举匹配。
#[derive(Debug, Clone)]
pub enum SpectrumRequest {
    /// 能量区间内的均匀谱
    Uniform {
        e_min_kev: f64,
        e_max_kev: f64,
        n_bins: usize,
        counts_per_bin: f64,
        polarization: f64,
        polarization_error: f64,
    },
    /// 单色谱线
    Monochromatic {
        energy_kev: f64,
        counts: f64,
        polarization: f64,
        polarization_error: f64,
    },
    /// 特征发射线组合谱
    Lines {
        elements: Vec<String>,
        total_counts: f64,
        include_kalpha2: bool,
        include_kbeta: bool,
        fwhm_kev: f64,
        step_kev: f64,
        polarization: f64,
        polarization_error: f64,
    },
}

/// 归一化后的选中谱线
#[derive(Debug, Clone)]
pub struct SelectedLine {
    /// 谱线标签（如 "Cu Kα1"）
    pub label: String,
    /// 谱线能量 (keV)
    pub energy_kev: f64,
    /// 归一化强度份额，所有选中线之和为 1
    pub fraction: f64,
}

impl SpectrumRequest {
    /// 构建 bin 序列
    ///
    /// 先完成全部校验再产生 bin，失败时不留下任何输出。
    pub fn build(&self) -> Result<Vec<BinRecord>> {
        self.validate()?;

        match self {
            SpectrumRequest::Uniform {
                e_min_kev,
                e_max_kev,
                n_bins,
                counts_per_bin,
                polarization,
                polarization_error,
            } => Ok(build_uniform(
                *e_min_kev,
                *e_max_kev,
                *n_bins,
                *counts_per_bin,
                *polarization,
                *polarization_error,
            )),
            SpectrumRequest::Monochromatic {
                energy_kev,
                counts,
                polarization,
                polarization_error,
            } => Ok(build_monochromatic(
                *energy_kev,
                *counts,
                *polarization,
                *polarization_error,
            )),
            SpectrumRequest::Lines {
                elements,
                total_counts,
                include_kalpha2,
                include_kbeta,
                fwhm_kev,
                step_kev,
                polarization,
                polarization_error,
            } => build_lines(
                elements,
                *total_counts,
                *include_kalpha2,
                *include_kbeta,
                *fwhm_kev,
                *step_kev,
                *polarization,
                *polarization_error,
            ),
        }
    }

    /// 校验请求参数
    pub fn validate(&self) -> Result<()> {
        match self {
            SpectrumRequest::Uniform {
                e_min_kev,
                e_max_kev,
                n_bins,
                counts_per_bin,
                ..
            } => {
                if e_max_kev <= e_min_kev {
                    return Err(SpecgenError::InvalidRange(format!(
                        "e_max ({}) must be greater than e_min ({})",
                        e_max_kev, e_min_kev
                    )));
                }
                if *n_bins == 0 {
                    return Err(SpecgenError::InvalidRange(
                        "n_bins must be a positive integer".to_string(),
                    ));
                }
                if *counts_per_bin < 0.0 {
                    return Err(SpecgenError::InvalidParameter(format!(
                        "counts per bin must be non-negative, got {}",
                        counts_per_bin
                    )));
                }
                Ok(())
            }
            SpectrumRequest::Monochromatic { counts, .. } => {
                if *counts < 0.0 {
                    return Err(SpecgenError::InvalidParameter(format!(
                        "counts must be non-negative, got {}",
                        counts
                    )));
                }
                Ok(())
            }
            SpectrumRequest::Lines {
                total_counts,
                fwhm_kev,
                step_kev,
                ..
            } => {
                if *total_counts < 0.0 {
                    return Err(SpecgenError::InvalidParameter(format!(
                        "total counts must be non-negative, got {}",
                        total_counts
                    )));
                }
                if *fwhm_kev < 0.0 {
                    return Err(SpecgenError::InvalidParameter(format!(
                        "fwhm must be non-negative, got {} keV",
                        fwhm_kev
                    )));
                }
                if *step_kev <= 0.0 {
                    return Err(SpecgenError::InvalidParameter(format!(
                        "step must be positive, got {} keV",
                        step_kev
                    )));
                }
                Ok(())
            }
        }
    }
}

/// 按请求筛选发射线并做跨元素归一化
///
/// 归一化对所有选中线求和，隐含各元素等权重的假设。
pub fn select_lines(
    elements: &[String],
    include_kalpha2: bool,
    include_kbeta: bool,
) -> Result<Vec<SelectedLine>> {
    let mut selected: Vec<(String, f64, f64)> = Vec::new();

    for element in elements {
        for line in library::lines_for(element)? {
            // 按标签子串匹配卫星线族
            if !include_kalpha2 && line.label.contains("α2") {
                continue;
            }
            if !include_kbeta && line.label.contains("β") {
                continue;
            }
            selected.push((
                format!("{} {}", element, line.label),
                line.energy_kev,
                line.relative_intensity,
            ));
        }
    }

    if selected.is_empty() {
        return Err(SpecgenError::EmptySelection);
    }

    let rel_sum: f64 = selected.iter().map(|(_, _, rel)| rel).sum();

    Ok(selected
        .into_iter()
        .map(|(label, energy_kev, rel)| SelectedLine {
            label,
            energy_kev,
            fraction: rel / rel_sum,
        })
        .collect())
}

/// 构建均匀谱
fn build_uniform(
    e_min_kev: f64,
    e_max_kev: f64,
    n_bins: usize,
    counts_per_bin: f64,
    polarization: f64,
    polarization_error: f64,
) -> Vec<BinRecord> {
    // 所有边界用同一插值公式，保证相邻 bin 的边界逐位相等，
    // 且首尾边界严格落在 e_min / e_max 上
    let edge = |i: usize| e_min_kev + (e_max_kev - e_min_kev) * (i as f64 / n_bins as f64);

    (0..n_bins)
        .map(|i| {
            let low = edge(i);
            let high = edge(i + 1);
            BinRecord {
                index: i + 1,
                low_kev: low,
                center_kev: 0.5 * (low + high),
                high_kev: high,
                counts: counts_per_bin,
                count_error: 0.0,
                polarization,
                polarization_error,
            }
        })
        .collect()
}

/// 构建单色谱
fn build_monochromatic(
    energy_kev: f64,
    counts: f64,
    polarization: f64,
    polarization_error: f64,
) -> Vec<BinRecord> {
    vec![narrow_bin(
        1,
        energy_kev,
        counts,
        polarization,
        polarization_error,
    )]
}

/// 构建特征发射线组合谱
fn build_lines(
    elements: &[String],
    total_counts: f64,
    include_kalpha2: bool,
    include_kbeta: bool,
    fwhm_kev: f64,
    step_kev: f64,
    polarization: f64,
    polarization_error: f64,
) -> Result<Vec<BinRecord>> {
    let selected = select_lines(elements, include_kalpha2, include_kbeta)?;

    let mut bins = Vec::new();
    for line in &selected {
        let area = total_counts * line.fraction;

        if fwhm_kev <= 0.0 {
            // delta 近似，整条线的面积落进一个窄 bin
            bins.push(narrow_bin(
                0,
                line.energy_kev,
                area,
                polarization,
                polarization_error,
            ));
        } else {
            let sigma = fwhm_kev / FWHM_TO_SIGMA;
            discretize_gaussian(
                &mut bins,
                line.energy_kev,
                sigma,
                area,
                step_kev,
                polarization,
                polarization_error,
            );
        }
    }

    // 拼接后对整个序列重新连续编号
    for (i, bin) in bins.iter_mut().enumerate() {
        bin.index = i + 1;
    }

    Ok(bins)
}

/// 以给定能量为中心的窄 bin
fn narrow_bin(
    index: usize,
    energy_kev: f64,
    counts: f64,
    polarization: f64,
    polarization_error: f64,
) -> BinRecord {
    let half = 0.5 * DELTA_WIDTH_KEV;
    BinRecord {
        index,
        low_kev: energy_kev - half,
        center_kev: energy_kev,
        high_kev: energy_kev + half,
        counts,
        count_error: 0.0,
        polarization,
        polarization_error,
    }
}

/// 把单条高斯谱线剖分为宽度 step 的连续子 bin
///
/// 窗口为 [E-4σ, E+4σ]，子 bin 数预先算定为 ceil(8σ/step)，
/// 末尾子 bin 在窗口上边界处截断（可能窄于 step）。
/// 每个子 bin 的计数取中点密度乘宽度的中点近似。
fn discretize_gaussian(
    bins: &mut Vec<BinRecord>,
    mu_kev: f64,
    sigma_kev: f64,
    area: f64,
    step_kev: f64,
    polarization: f64,
    polarization_error: f64,
) {
    let x_min = mu_kev - WINDOW_HALF_SIGMAS * sigma_kev;
    let x_max = mu_kev + WINDOW_HALF_SIGMAS * sigma_kev;
    let n_sub = ((x_max - x_min) / step_kev).ceil() as usize;

    for i in 0..n_sub {
        let low = x_min + i as f64 * step_kev;
        if low >= x_max {
            break;
        }
        let high = (low + step_kev).min(x_max);
        let center = 0.5 * (low + high);
        let counts = area * gaussian_density(center, mu_kev, sigma_kev) * (high - low);

        bins.push(BinRecord {
            index: 0,
            low_kev: low,
            center_kev: center,
            high_kev: high,
            counts,
            count_error: 0.0,
            polarization,
            polarization_error,
        });
    }
}

/// 高斯密度，标准正态按 1/σ 缩放
fn gaussian_density(x: f64, mu: f64, sigma: f64) -> f64 {
    let z = (x - mu) / sigma;
    (-0.5 * z * z).exp() / ((2.0 * PI).sqrt() * sigma)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_request(
        elements: &[&str],
        include_kalpha2: bool,
        include_kbeta: bool,
        fwhm_kev: f64,
        step_kev: f64,
    ) -> SpectrumRequest {
        SpectrumRequest::Lines {
            elements: elements.iter().map(|s| s.to_string()).collect(),
            total_counts: 1e5,
            include_kalpha2,
            include_kbeta,
            fwhm_kev,
            step_kev,
            polarization: 0.0,
            polarization_error: 0.0,
        }
    }

    #[test]
    fn test_uniform_bins() {
        let request = SpectrumRequest::Uniform {
            e_min_kev: 1.0,
            e_max_kev: 2.0,
            n_bins: 10,
            counts_per_bin: 5.0,
            polarization: 0.3,
            polarization_error: 0.05,
        };
        let bins = request.build().unwrap();

        assert_eq!(bins.len(), 10);
        assert_eq!(bins[0].low_kev, 1.0, "first edge should be exactly e_min");
        assert_eq!(bins[9].high_kev, 2.0, "last edge should be exactly e_max");

        // 相邻 bin 边界逐位相等
        for pair in bins.windows(2) {
            assert_eq!(pair[0].high_kev, pair[1].low_kev);
        }

        let total: f64 = bins.iter().map(|b| b.counts).sum();
        assert!((total - 50.0).abs() < 1e-9, "total should be nbins * counts");

        for (i, bin) in bins.iter().enumerate() {
            assert_eq!(bin.index, i + 1);
            assert!(bin.low_kev < bin.high_kev);
            assert_eq!(bin.counts, 5.0);
            assert_eq!(bin.count_error, 0.0);
            assert_eq!(bin.polarization, 0.3);
            assert_eq!(bin.polarization_error, 0.05);
            assert!(
                (bin.center_kev - 0.5 * (bin.low_kev + bin.high_kev)).abs() < 1e-12,
                "center should be the bin midpoint"
            );
        }
    }

    #[test]
    fn test_uniform_rejects_inverted_range() {
        let request = SpectrumRequest::Uniform {
            e_min_kev: 2.0,
            e_max_kev: 1.0,
            n_bins: 10,
            counts_per_bin: 1.0,
            polarization: 0.0,
            polarization_error: 0.0,
        };
        assert!(matches!(
            request.build(),
            Err(SpecgenError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_uniform_rejects_zero_bins() {
        let request = SpectrumRequest::Uniform {
            e_min_kev: 1.0,
            e_max_kev: 2.0,
            n_bins: 0,
            counts_per_bin: 1.0,
            polarization: 0.0,
            polarization_error: 0.0,
        };
        assert!(matches!(
            request.build(),
            Err(SpecgenError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_mono_single_narrow_bin() {
        let request = SpectrumRequest::Monochromatic {
            energy_kev: 10.0,
            counts: 50.0,
            polarization: 0.0,
            polarization_error: 0.0,
        };
        let bins = request.build().unwrap();

        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].index, 1);
        assert_eq!(bins[0].center_kev, 10.0);
        assert_eq!(bins[0].counts, 50.0);
        assert_eq!(bins[0].count_error, 0.0);
        assert!(
            (bins[0].width_kev() - DELTA_WIDTH_KEV).abs() < 1e-12,
            "mono bin width should be {} keV, got {}",
            DELTA_WIDTH_KEV,
            bins[0].width_kev()
        );
    }

    #[test]
    fn test_lines_cu_primary_only() {
        let bins = lines_request(&["Cu"], false, false, 0.0, 0.001)
            .build()
            .unwrap();

        assert_eq!(bins.len(), 1, "only Kα1 should survive the filters");
        assert!((bins[0].center_kev - 8.0478).abs() < 1e-9);
        assert!(
            (bins[0].counts - 1e5).abs() < 1e-9,
            "single line should carry the whole budget"
        );
    }

    #[test]
    fn test_lines_delta_sum_matches_total() {
        let bins = lines_request(&["Cu", "Mn"], true, true, 0.0, 0.001)
            .build()
            .unwrap();

        assert_eq!(bins.len(), 6, "3 lines per element for Cu and Mn");
        let total: f64 = bins.iter().map(|b| b.counts).sum();
        assert!(
            (total - 1e5).abs() < 1e-3,
            "normalization should preserve the total, got {}",
            total
        );
    }

    #[test]
    fn test_lines_gaussian_area_converges() {
        // 单条线，整个预算归它；步长远小于 σ 时
        // 中点近似收敛到截断高斯的解析面积 erf(4/√2) ≈ 0.9999367
        let bins = lines_request(&["Cu"], false, false, 0.1, 1e-4)
            .build()
            .unwrap();

        let total: f64 = bins.iter().map(|b| b.counts).sum();
        assert!(
            (total - 1e5).abs() / 1e5 < 1e-4,
            "discretized area should approach the budget, got {}",
            total
        );
    }

    #[test]
    fn test_gaussian_finer_step_is_closer() {
        let coarse = lines_request(&["Cu"], false, false, 0.1, 0.02)
            .build()
            .unwrap();
        let fine = lines_request(&["Cu"], false, false, 0.1, 1e-4)
            .build()
            .unwrap();

        let sum = |bins: &[BinRecord]| bins.iter().map(|b| b.counts).sum::<f64>();
        let truncated_area = 1e5 * 0.999_936_657_5;
        assert!(
            (sum(&fine) - truncated_area).abs() < (sum(&coarse) - truncated_area).abs(),
            "smaller step should reduce the discretization error"
        );
    }

    #[test]
    fn test_gaussian_window_clipped() {
        // step 不整除 8σ，末尾子 bin 应在 E+4σ 处截断
        let fwhm = 0.1;
        let sigma = fwhm / FWHM_TO_SIGMA;
        let bins = lines_request(&["Cu"], false, false, fwhm, 0.01)
            .build()
            .unwrap();

        let last = bins.last().unwrap();
        assert_eq!(
            last.high_kev,
            8.0478 + 4.0 * sigma,
            "last sub-bin must end exactly at the window edge"
        );
        assert!(
            last.width_kev() < 0.01,
            "clipped sub-bin should be narrower than step"
        );

        // 子 bin 彼此衔接，无缝隙
        for pair in bins.windows(2) {
            assert!((pair[0].high_kev - pair[1].low_kev).abs() < 1e-12);
        }
    }

    #[test]
    fn test_indices_contiguous_across_lines() {
        let bins = lines_request(&["Cu", "Mn"], true, true, 0.05, 0.005)
            .build()
            .unwrap();

        assert!(bins.len() > 6);
        for (i, bin) in bins.iter().enumerate() {
            assert_eq!(bin.index, i + 1, "indices must be contiguous from 1");
        }
    }

    #[test]
    fn test_selection_order_is_stable() {
        let selected = select_lines(
            &["Mo".to_string(), "Cu".to_string()],
            true,
            true,
        )
        .unwrap();

        // 按请求顺序拼接，不按能量重排
        assert_eq!(selected[0].label, "Mo Kα1");
        assert_eq!(selected[3].label, "Cu Kα1");

        let fraction_sum: f64 = selected.iter().map(|l| l.fraction).sum();
        assert!((fraction_sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_build_is_idempotent() {
        let request = lines_request(&["Cu", "Mn"], true, true, 0.05, 0.002);
        let first = request.build().unwrap();
        let second = request.build().unwrap();
        assert_eq!(first, second, "identical requests must build identical bins");
    }

    #[test]
    fn test_unknown_element() {
        let err = lines_request(&["Xx"], true, true, 0.0, 0.001)
            .build()
            .unwrap_err();
        assert!(matches!(err, SpecgenError::UnknownElement { .. }));
    }

    #[test]
    fn test_empty_selection() {
        let err = lines_request(&[], true, true, 0.0, 0.001)
            .build()
            .unwrap_err();
        assert!(matches!(err, SpecgenError::EmptySelection));
    }

    #[test]
    fn test_rejects_bad_step_and_fwhm() {
        let err = lines_request(&["Cu"], true, true, 0.1, 0.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, SpecgenError::InvalidParameter(_)));

        let err = lines_request(&["Cu"], true, true, -0.1, 0.001)
            .build()
            .unwrap_err();
        assert!(matches!(err, SpecgenError::InvalidParameter(_)));
    }

    #[test]
    fn test_rejects_negative_counts() {
        let request = SpectrumRequest::Monochromatic {
            energy_kev: 10.0,
            counts: -1.0,
            polarization: 0.0,
            polarization_error: 0.0,
        };
        assert!(matches!(
            request.build(),
            Err(SpecgenError::InvalidParameter(_))
        ));
    }
}
