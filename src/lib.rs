//! # qens - 准弹性中子散射 (QENS) 模型库
//!
//! 提供解释 QENS 谱的闭式物理模型以及测量数据的显式加载。
//!
//! ## 功能
//! - `models::lorentzian` - Lorentzian 线型 S(ω)
//! - `models::diffusion` - Chudley-Elliott / 随机跳跃扩散模型 γ(q)
//! - `units` - 扩散系数单位换算 (Å² meV → cm² s⁻¹)
//! - `data` - 各波矢测量文件 (`q_*.txt`) 的解析与加载
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── models/   (物理模型，纯函数)
//!   ├── units.rs  (单位换算)
//!   ├── data/     (数据加载)
//!   │     ├── parser.rs    (数值表格解析)
//!   │     ├── collector.rs (文件收集)
//!   │     └── dataset.rs   (数据集与加载器)
//!   ├── utils/    (工具函数)
//!   └── error.rs  (错误处理)
//! ```
//!
//! ## 示例
//! ```
//! use qens::models::{chudley_elliott, lorentzian, random_jump};
//! use qens::units::unit_conv;
//!
//! let s = lorentzian(&[0.0], 1.0, 1.0, 0.0).unwrap();
//! assert!((s[0] - 1.0 / std::f64::consts::PI).abs() < 1e-12);
//!
//! let q = [0.2, 0.6, 1.0];
//! let ce = chudley_elliott(&q, 1.0, 1.0).unwrap();
//! let rj = random_jump(&q, 1.0, 1.0).unwrap();
//! assert_eq!(ce.len(), rj.len());
//!
//! assert!((unit_conv(1000.0) - 0.1519).abs() < 1e-12);
//! ```

pub mod data;
pub mod error;
pub mod models;
pub mod units;
mod utils;

pub use error::{QensError, Result};
pub use models::{
    chudley_elliott, lorentzian, random_jump, DiffusionModel, DiffusionParams, LorentzianParams,
};
pub use units::unit_conv;
