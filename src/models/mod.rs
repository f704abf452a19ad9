//! # 物理模型模块
//!
//! 提供解释 QENS 谱的闭式物理模型，全部为无状态的逐元素纯函数。
//!
//! ## 依赖关系
//! - 被 `lib.rs` 导出
//! - 使用 `error.rs` 进行参数检查
//! - 子模块: lorentzian, diffusion

pub mod diffusion;
pub mod lorentzian;

pub use diffusion::{chudley_elliott, random_jump, DiffusionModel, DiffusionParams};
pub use lorentzian::{lorentzian, LorentzianParams};
