//! # 单位换算
//!
//! 扩散系数在 Å² meV 与 cm² s⁻¹ 之间的换算。
//!
//! ## 换算系数
//! 1 meV / ħ ≈ 1.519 × 10¹² s⁻¹，1 Å² = 10⁻¹⁶ cm²
//! 因此 1 Å² meV ≈ 1.519 × 10⁻⁴ cm² s⁻¹
//!
//! ## 依赖关系
//! - 无外部模块依赖

/// Å² meV → cm² s⁻¹ 换算系数
pub const ANGSTROM2_MEV_TO_CM2_PER_S: f64 = 1.519e-4;

/// 扩散系数从 Å² meV 换算为 cm² s⁻¹
pub fn unit_conv(d: f64) -> f64 {
    d * ANGSTROM2_MEV_TO_CM2_PER_S
}

/// 扩散系数从 cm² s⁻¹ 换算为 Å² meV
pub fn cm2_per_s_to_angstrom2_mev(d: f64) -> f64 {
    d / ANGSTROM2_MEV_TO_CM2_PER_S
}
