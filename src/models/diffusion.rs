//! # 扩散模型
//!
//! 描述 QENS 线宽 γ 随散射波矢 q 的变化，用于拟合扩散系数 D 和跳跃步长 l。
//!
//! ## 公式
//! - Chudley-Elliott: γ(q) = (6D / l²) (1 - sin(ql) / (ql))
//! - Random-Jump:     γ(q) = 6D q² / (1 + l² q²)
//!
//! 两个模型在 q → ∞ 时的平台值均为 6D / l²。
//!
//! ## q = 0 处理
//! Chudley-Elliott 在 ql = 0 处为 0/0 不定式，按极限 sin(x)/x → 1 处理，
//! 即 γ(0) = 0。|x| 很小时使用 Taylor 展开避免相消误差。
//!
//! ## 依赖关系
//! - 被 `models/mod.rs` 导出
//! - 使用 `error.rs` 进行参数检查

use crate::error::{ensure_finite, ensure_nonzero, Result};

use serde::{Deserialize, Serialize};

/// sinc 改用 Taylor 展开的阈值
const SINC_SERIES_THRESHOLD: f64 = 1e-4;

/// 扩散模型参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiffusionParams {
    /// 扩散系数 D（Å² meV）
    pub d: f64,
    /// 跳跃步长 l（Å）
    pub l: f64,
}

impl DiffusionParams {
    pub fn new(d: f64, l: f64) -> Self {
        Self { d, l }
    }

    /// 检查参数：D、l 有限，l 非零，且 6D/l² 不溢出
    pub fn validate(&self) -> Result<()> {
        self.prefactor().map(|_| ())
    }

    /// 高 q 平台值 6D / l²，l = 0 时返回 `InvalidParameter`
    pub fn high_q_limit(&self) -> Result<f64> {
        self.prefactor()
    }

    fn prefactor(&self) -> Result<f64> {
        ensure_finite("D", self.d)?;
        ensure_nonzero("l", self.l)?;

        let prefactor = 6.0 * self.d / (self.l * self.l);
        ensure_finite("6D/l²", prefactor)?;
        Ok(prefactor)
    }
}

/// 扩散模型类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffusionModel {
    /// Chudley-Elliott 跳跃扩散
    ChudleyElliott,
    /// 连续随机跳跃扩散
    RandomJump,
}

impl std::fmt::Display for DiffusionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiffusionModel::ChudleyElliott => write!(f, "chudley-elliott"),
            DiffusionModel::RandomJump => write!(f, "random-jump"),
        }
    }
}

impl DiffusionModel {
    /// 计算线宽 γ(q)（meV）
    ///
    /// Chudley-Elliott 要求 `params.validate()` 通过；随机跳跃模型允许 l = 0。
    pub fn linewidth(&self, q: &[f64], params: &DiffusionParams) -> Result<Vec<f64>> {
        match self {
            DiffusionModel::ChudleyElliott => chudley_elliott(q, params.d, params.l),
            DiffusionModel::RandomJump => random_jump(q, params.d, params.l),
        }
    }
}

/// 1 - sin(x) / x，x = 0 处按 sin(x)/x → 1 取极限
fn one_minus_sinc(x: f64) -> f64 {
    if x.abs() < SINC_SERIES_THRESHOLD {
        let x2 = x * x;
        x2 / 6.0 - x2 * x2 / 120.0
    } else {
        1.0 - x.sin() / x
    }
}

/// Chudley-Elliott 跳跃扩散模型
///
/// - `q`: 测量波矢（Å⁻¹）
/// - `d`: 扩散系数（Å² meV）
/// - `l`: 跳跃步长（Å），为 0 或过小导致 6D/l² 溢出时返回 `InvalidParameter`
///
/// 返回线宽 γ(q)（meV）。q = 0 处取极限值 0。
pub fn chudley_elliott(q: &[f64], d: f64, l: f64) -> Result<Vec<f64>> {
    let prefactor = DiffusionParams::new(d, l).prefactor()?;
    Ok(q.iter().map(|&qi| prefactor * one_minus_sinc(qi * l)).collect())
}

/// 随机跳跃扩散模型
///
/// 分母 1 + l²q² ≥ 1，因此 l = 0 合法（退化为 Fick 扩散 6Dq²）。
pub fn random_jump(q: &[f64], d: f64, l: f64) -> Result<Vec<f64>> {
    ensure_finite("D", d)?;
    ensure_finite("l", l)?;

    let l2 = l * l;
    Ok(q
        .iter()
        .map(|&qi| {
            let q2 = qi * qi;
            6.0 * d * q2 / (1.0 + l2 * q2)
        })
        .collect())
}
