//! # 数据文件收集器
//!
//! 在目录中收集匹配的 QENS 测量数据文件。
//!
//! ## 功能
//! - glob 模式匹配（逗号分隔多模式）
//! - 可选递归目录搜索
//! - 结果按路径排序，保证确定性
//!
//! ## 依赖关系
//! - 被 `data/dataset.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{QensError, Result};

use std::path::PathBuf;
use walkdir::WalkDir;

/// 默认文件名模式
pub const DEFAULT_PATTERN: &str = "q_*.txt";

/// 数据文件收集器
pub struct SpectrumCollector {
    /// 数据目录
    dir: PathBuf,
    /// 匹配模式列表
    patterns: Vec<String>,
    /// 是否递归
    recursive: bool,
}

impl SpectrumCollector {
    /// 创建新的文件收集器
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            patterns: vec![DEFAULT_PATTERN.to_string()],
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.patterns = pattern
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if self.patterns.is_empty() {
            self.patterns = vec![DEFAULT_PATTERN.to_string()];
        }
        self
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 当前模式（逗号连接）
    pub fn pattern(&self) -> String {
        self.patterns.join(",")
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            return Err(QensError::DirectoryNotFound {
                path: self.dir.display().to_string(),
            });
        }

        let globs = self
            .patterns
            .iter()
            .map(|p| {
                glob::Pattern::new(p).map_err(|e| {
                    QensError::InvalidArgument(format!("Invalid pattern '{}': {}", p, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let walker = if self.recursive {
            WalkDir::new(&self.dir)
        } else {
            WalkDir::new(&self.dir).max_depth(1)
        };

        let mut files: Vec<PathBuf> = walker
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .map(|name| globs.iter().any(|g| g.matches(name)))
                    .unwrap_or(false)
            })
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        Ok(files)
    }
}
