//! # 能谱数据模型
//!
//! 定义特征发射线和能谱 bin 记录的统一表示。
//!
//! ## 依赖关系
//! - 被 `spectrum/` 和 `commands/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 特征 X 射线发射线
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmissionLine {
    /// 谱线名称（如 "Kα1"）
    pub label: String,
    /// 谱线能量 (keV)
    pub energy_kev: f64,
    /// 相对强度，以本元素的 Kα1 为基准 (1.00)
    pub relative_intensity: f64,
}

impl EmissionLine {
    /// 创建发射线
    pub fn new(label: &str, energy_kev: f64, relative_intensity: f64) -> Self {
        EmissionLine {
            label: label.to_string(),
            energy_kev,
            relative_intensity,
        }
    }
}

/// 能谱 bin 记录，输出表的一行
///
/// 半开能量区间 [low, high)，序号在整个序列内从 1 连续编号。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinRecord {
    /// bin 序号（从 1 开始）
    pub index: usize,
    /// bin 下边界 (keV)
    pub low_kev: f64,
    /// bin 中心 (keV)
    pub center_kev: f64,
    /// bin 上边界 (keV)
    pub high_kev: f64,
    /// 计数
    pub counts: f64,
    /// 计数误差
    pub count_error: f64,
    /// 偏振度 (0..1)
    pub polarization: f64,
    /// 偏振度误差
    pub polarization_error: f64,
}

impl BinRecord {
    /// bin 宽度 (keV)
    pub fn width_kev(&self) -> f64 {
        self.high_kev - self.low_kev
    }
}
