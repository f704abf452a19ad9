//! # 数据加载模块
//!
//! 显式、按需加载各波矢下的 QENS 测量文件。
//!
//! ## 依赖关系
//! - 被 `lib.rs` 导出
//! - 子模块: parser, collector, dataset

pub mod collector;
pub mod dataset;
pub mod parser;

pub use collector::SpectrumCollector;
pub use dataset::{
    load_spectrum, q_from_file_name, standard_file_name, DatasetLoader, QensDataset,
    QensSpectrum, STANDARD_Q_VALUES,
};
pub use parser::{parse_table, parse_table_file};
