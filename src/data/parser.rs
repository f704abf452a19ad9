//! # 数值表格解析器
//!
//! 解析以空白分隔的 QENS 测量数据文本文件。
//!
//! ## 格式说明
//! ```text
//! # energy_transfer  structure_factor  error
//! -0.50   0.0123   0.0011
//! -0.49   0.0131   0.0012
//! ...
//! ```
//! - 空行跳过，`#` 之后为注释
//! - 每行列数必须一致
//! - 解析结果按列存储（每列一个数组）
//!
//! ## 依赖关系
//! - 被 `data/dataset.rs` 使用

use crate::error::{QensError, Result};
use std::fs;
use std::path::Path;

/// 解析数据文件，返回按列存储的数组
pub fn parse_table_file(path: &Path) -> Result<Vec<Vec<f64>>> {
    let content = fs::read_to_string(path).map_err(|e| QensError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_table(&content).map_err(|e| e.with_path(&path.display().to_string()))
}

/// 从字符串内容解析表格
pub fn parse_table(content: &str) -> Result<Vec<Vec<f64>>> {
    let mut columns: Vec<Vec<f64>> = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;

        // 去掉注释
        let line = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        if columns.is_empty() {
            columns = vec![Vec::new(); parts.len()];
        } else if parts.len() != columns.len() {
            return Err(QensError::ParseError {
                path: String::new(),
                line: line_no,
                reason: format!(
                    "expected {} columns, found {}",
                    columns.len(),
                    parts.len()
                ),
            });
        }

        for (column, token) in columns.iter_mut().zip(parts.iter()) {
            let value: f64 = token.parse().map_err(|_| QensError::ParseError {
                path: String::new(),
                line: line_no,
                reason: format!("invalid number '{}'", token),
            })?;
            column.push(value);
        }
    }

    if columns.is_empty() {
        return Err(QensError::ParseError {
            path: String::new(),
            line: 0,
            reason: "no data rows".to_string(),
        });
    }

    Ok(columns)
}
