//! # Lorentzian 线型
//!
//! 描述结构因子 S 随能量转移 ω 的变化。
//!
//! ## 公式
//! S(ω) = A / (π γ (1 + ((ω - ω₀) / γ)²))
//! 其中 γ 为半高半宽 (HWHM)，ω₀ 为峰位
//!
//! 在 (-∞, ∞) 上积分等于 A。
//!
//! ## 依赖关系
//! - 被 `models/mod.rs` 导出
//! - 使用 `error.rs` 进行参数检查

use crate::error::{ensure_finite, ensure_nonzero, Result};

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Lorentzian 线型参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LorentzianParams {
    /// 无量纲缩放因子 A
    pub amplitude: f64,
    /// 线宽 γ（meV），不能为 0
    pub gamma: f64,
    /// 峰位 ω₀（meV）
    pub omega_0: f64,
}

impl LorentzianParams {
    pub fn new(amplitude: f64, gamma: f64, omega_0: f64) -> Self {
        Self {
            amplitude,
            gamma,
            omega_0,
        }
    }

    /// 检查参数：γ 非零，所有参数有限
    pub fn validate(&self) -> Result<()> {
        ensure_finite("A", self.amplitude)?;
        ensure_nonzero("gamma", self.gamma)?;
        ensure_finite("omega_0", self.omega_0)
    }

    /// 计算单点 S(ω)，不做参数检查
    pub fn evaluate(&self, omega: f64) -> f64 {
        let x = (omega - self.omega_0) / self.gamma;
        self.amplitude / (PI * self.gamma * (1.0 + x * x))
    }

    /// 计算整条谱线
    pub fn spectrum(&self, omega: &[f64]) -> Result<Vec<f64>> {
        self.validate()?;
        Ok(omega.iter().map(|&w| self.evaluate(w)).collect())
    }

    /// 峰高 A / (π γ)
    pub fn peak_height(&self) -> f64 {
        self.amplitude / (PI * self.gamma)
    }

    /// 半高全宽 2|γ|
    pub fn fwhm(&self) -> f64 {
        2.0 * self.gamma.abs()
    }
}

/// 计算 Lorentzian 结构因子 S(ω)
///
/// - `omega`: 能量转移（meV）
/// - `amplitude`: 无量纲缩放因子 A
/// - `gamma`: 线宽（meV），为 0 时返回 `InvalidParameter`
/// - `omega_0`: 峰位（meV）
pub fn lorentzian(omega: &[f64], amplitude: f64, gamma: f64, omega_0: f64) -> Result<Vec<f64>> {
    LorentzianParams::new(amplitude, gamma, omega_0).spectrum(omega)
}
