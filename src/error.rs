//! # 统一错误处理模块
//!
//! 定义 qens 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// qens 统一错误类型
#[derive(Error, Debug)]
pub enum QensError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse data file: {path} (line {line})\nReason: {reason}")]
    ParseError {
        path: String,
        line: usize,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 模型参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("No matching files found with pattern: {pattern}")]
    NoFilesFound { pattern: String },

    #[error("{count} files matched in {dir}, but none is named q_<value>.<ext>")]
    NoWavevectorInNames { count: usize, dir: String },
}

impl QensError {
    /// 为解析错误补充文件路径（解析内容时路径未知）
    pub(crate) fn with_path(self, path: &str) -> Self {
        match self {
            QensError::ParseError { line, reason, .. } => QensError::ParseError {
                path: path.to_string(),
                line,
                reason,
            },
            other => other,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, QensError>;

/// 检查参数为有限值
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(QensError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        })
    }
}

/// 检查参数为有限且非零的值（用作分母）
pub(crate) fn ensure_nonzero(name: &'static str, value: f64) -> Result<()> {
    ensure_finite(name, value)?;
    if value == 0.0 {
        return Err(QensError::InvalidParameter {
            name,
            value,
            reason: "must be nonzero",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_nonzero() {
        assert!(ensure_nonzero("gamma", 0.5).is_ok());
        assert!(matches!(
            ensure_nonzero("gamma", 0.0),
            Err(QensError::InvalidParameter { name: "gamma", .. })
        ));
        assert!(matches!(
            ensure_nonzero("l", f64::NAN),
            Err(QensError::InvalidParameter { name: "l", .. })
        ));
    }

    #[test]
    fn test_parse_error_message() {
        let err = QensError::ParseError {
            path: String::new(),
            line: 3,
            reason: "bad token".to_string(),
        }
        .with_path("q_0.2.txt");
        let msg = err.to_string();
        assert!(msg.contains("q_0.2.txt"), "message should name the file: {}", msg);
        assert!(msg.contains("line 3"), "message should name the line: {}", msg);
    }
}
