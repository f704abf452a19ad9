//! # 工具函数模块
//!
//! 提供美化输出工具。
//!
//! ## 依赖关系
//! - 被 `data/dataset.rs` 使用（verbose 模式）
//! - 子模块: output

pub mod output;
