//! # 特征 X 射线发射线数据库
//!
//! 提供各元素 K 系特征发射线的参考能量和相对强度。
//!
//! ## 数据约定
//! 每个元素有且仅有一条 Kα1（强度基准 1.00），
//! 可选一条 Kα2（约 0.50）和一条 Kβ1（约 0.15-0.17）。
//! 相对强度为经验常数，仅在同一次选线归一化后有跨元素意义。
//!
//! ## 数据来源
//! X-ray Data Booklet (LBNL), Section 1.2, Table 1-2
//! https://xdb.lbl.gov/
//!
//! ## 依赖关系
//! - 被 `spectrum/builder.rs` 调用查询发射线
//! - 纯静态数据，无外部依赖

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{Result, SpecgenError};
use crate::models::EmissionLine;

/// 发射线数据库
/// 能量单位 keV，相对强度以各元素的 Kα1 为基准
pub static XRAY_LINES: LazyLock<HashMap<&'static str, Vec<EmissionLine>>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // 铜 (Cu)
    m.insert(
        "Cu",
        vec![
            EmissionLine::new("Kα1", 8.0478, 1.00),
            EmissionLine::new("Kα2", 8.0278, 0.50),
            EmissionLine::new("Kβ1", 8.9053, 0.17),
        ],
    );

    // 锰 (Mn)
    m.insert(
        "Mn",
        vec![
            EmissionLine::new("Kα1", 5.8988, 1.00),
            EmissionLine::new("Kα2", 5.8877, 0.50),
            EmissionLine::new("Kβ1", 6.4904, 0.16),
        ],
    );

    // 铷 (Rb)
    m.insert(
        "Rb",
        vec![
            EmissionLine::new("Kα1", 13.395, 1.00),
            EmissionLine::new("Kα2", 13.373, 0.50),
            EmissionLine::new("Kβ1", 14.961, 0.15),
        ],
    );

    // 钼 (Mo)
    m.insert(
        "Mo",
        vec![
            EmissionLine::new("Kα1", 17.479, 1.00),
            EmissionLine::new("Kα2", 17.374, 0.50),
            EmissionLine::new("Kβ1", 19.608, 0.16),
        ],
    );

    // 银 (Ag)
    m.insert(
        "Ag",
        vec![
            EmissionLine::new("Kα1", 22.163, 1.00),
            EmissionLine::new("Kα2", 21.990, 0.50),
            EmissionLine::new("Kβ1", 24.942, 0.15),
        ],
    );

    m
});

/// 查询元素的发射线列表
/// element: 元素符号（如 "Cu"）
pub fn lines_for(element: &str) -> Result<&'static [EmissionLine]> {
    XRAY_LINES
        .get(element)
        .map(|lines| lines.as_slice())
        .ok_or_else(|| SpecgenError::UnknownElement {
            symbol: element.to_string(),
            known: known_elements().join(", "),
        })
}

/// 已收录的元素符号（按字母排序）
pub fn known_elements() -> Vec<&'static str> {
    let mut symbols: Vec<&'static str> = XRAY_LINES.keys().copied().collect();
    symbols.sort_unstable();
    symbols
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cu_kalpha1_energy() {
        let lines = lines_for("Cu").unwrap();
        assert_eq!(lines.len(), 3, "Cu should have Kα1, Kα2, Kβ1");

        let kalpha1 = &lines[0];
        assert_eq!(kalpha1.label, "Kα1");
        assert!(
            (kalpha1.energy_kev - 8.0478).abs() < 1e-9,
            "Cu Kα1 should be at 8.0478 keV, got {}",
            kalpha1.energy_kev
        );
        assert_eq!(kalpha1.relative_intensity, 1.00);
    }

    #[test]
    fn test_every_element_anchored_on_kalpha1() {
        for symbol in known_elements() {
            let lines = lines_for(symbol).unwrap();
            assert_eq!(lines[0].label, "Kα1", "{} first line should be Kα1", symbol);
            assert_eq!(
                lines[0].relative_intensity, 1.00,
                "{} Kα1 should anchor the intensity scale",
                symbol
            );
        }
    }

    #[test]
    fn test_unknown_element() {
        let err = lines_for("Xx").unwrap_err();
        match err {
            SpecgenError::UnknownElement { symbol, known } => {
                assert_eq!(symbol, "Xx");
                assert!(known.contains("Cu"), "error should list known symbols");
            }
            other => panic!("expected UnknownElement, got {:?}", other),
        }
    }

    #[test]
    fn test_known_elements_sorted() {
        assert_eq!(known_elements(), vec!["Ag", "Cu", "Mn", "Mo", "Rb"]);
    }
}
