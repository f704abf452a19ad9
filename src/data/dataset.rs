//! # QENS 数据集
//!
//! 每个波矢 q 对应一个测量文件（如 `q_0.2.txt`），文件中各列依次为
//! 能量转移 ω、结构因子 S 以及可选的误差列。
//!
//! 数据不在模块初始化时加载，调用方通过 `DatasetLoader` 显式指定目录或路径。
//!
//! ## 依赖关系
//! - 使用 `data/parser.rs` 解析文件
//! - 使用 `data/collector.rs` 收集文件
//! - 使用 `utils/output.rs` 输出加载信息（verbose 模式）
//! - 使用 `rayon` 并行解析，`regex` 从文件名提取 q

use crate::data::collector::SpectrumCollector;
use crate::data::parser;
use crate::error::{QensError, Result};
use crate::utils::output;

use rayon::prelude::*;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// 标准测量波矢（Å⁻¹）
pub const STANDARD_Q_VALUES: [f64; 8] = [0.2, 0.6, 1.0, 1.4, 1.8, 2.2, 2.6, 3.0];

/// 按 q 查找谱时的容差（Å⁻¹）
const Q_TOLERANCE: f64 = 1e-6;

static Q_FILE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^q_(\d+(?:\.\d+)?)\.[A-Za-z]\w*$").expect("static regex is valid")
});

/// 标准文件名，如 `q_0.2.txt`
pub fn standard_file_name(q: f64) -> String {
    format!("q_{:.1}.txt", q)
}

/// 从文件名提取波矢 q，如 `q_0.2.txt`、`q_1.4.dat`（扩展名不限，但须以字母开头）
pub fn q_from_file_name(path: &Path) -> Option<f64> {
    let name = path.file_name()?.to_str()?;
    let caps = Q_FILE_NAME.captures(name)?;
    caps.get(1)?.as_str().parse().ok()
}

/// 单个波矢下的测量谱
#[derive(Debug, Clone)]
pub struct QensSpectrum {
    /// 波矢 q（Å⁻¹）
    pub q: f64,
    /// 来源文件
    pub source: PathBuf,
    /// 按列存储的数据
    pub columns: Vec<Vec<f64>>,
}

impl QensSpectrum {
    /// 能量转移 ω（meV），第 1 列
    pub fn energy_transfer(&self) -> &[f64] {
        self.column(0).unwrap_or(&[])
    }

    /// 结构因子 S，第 2 列
    pub fn structure_factor(&self) -> Option<&[f64]> {
        self.column(1)
    }

    /// 误差，第 3 列
    pub fn uncertainty(&self) -> Option<&[f64]> {
        self.column(2)
    }

    pub fn column(&self, index: usize) -> Option<&[f64]> {
        self.columns.get(index).map(|c| c.as_slice())
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn n_points(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }
}

/// 读取单个测量文件
pub fn load_spectrum(path: &Path, q: f64) -> Result<QensSpectrum> {
    if !path.is_file() {
        return Err(QensError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let columns = parser::parse_table_file(path)?;
    Ok(QensSpectrum {
        q,
        source: path.to_path_buf(),
        columns,
    })
}

/// 按 q 升序排列的测量谱集合
#[derive(Debug, Clone, Default)]
pub struct QensDataset {
    spectra: Vec<QensSpectrum>,
}

impl QensDataset {
    pub fn new(mut spectra: Vec<QensSpectrum>) -> Self {
        spectra.sort_by(|a, b| a.q.total_cmp(&b.q));
        Self { spectra }
    }

    /// 所有波矢，可直接传入扩散模型
    pub fn q_values(&self) -> Vec<f64> {
        self.spectra.iter().map(|s| s.q).collect()
    }

    /// 按 q 查找
    pub fn get(&self, q: f64) -> Option<&QensSpectrum> {
        self.spectra.iter().find(|s| (s.q - q).abs() < Q_TOLERANCE)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QensSpectrum> {
        self.spectra.iter()
    }

    pub fn len(&self) -> usize {
        self.spectra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spectra.is_empty()
    }
}

impl<'a> IntoIterator for &'a QensDataset {
    type Item = &'a QensSpectrum;
    type IntoIter = std::slice::Iter<'a, QensSpectrum>;

    fn into_iter(self) -> Self::IntoIter {
        self.spectra.iter()
    }
}

/// 数据集加载器
pub struct DatasetLoader {
    /// 数据目录
    dir: PathBuf,
    /// 并行作业数（0 = 自动）
    jobs: usize,
    /// 是否输出加载信息
    verbose: bool,
}

impl DatasetLoader {
    /// 创建新的加载器
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            jobs: 0,
            verbose: false,
        }
    }

    /// 设置并行作业数（0 = CPU 核数）
    pub fn jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// 设置是否输出加载信息
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// 加载 8 个标准波矢文件，任一缺失或格式错误均返回错误
    pub fn load_standard(&self) -> Result<QensDataset> {
        if !self.dir.is_dir() {
            return Err(QensError::DirectoryNotFound {
                path: self.dir.display().to_string(),
            });
        }

        let entries: Vec<(PathBuf, f64)> = STANDARD_Q_VALUES
            .iter()
            .map(|&q| (self.dir.join(standard_file_name(q)), q))
            .collect();

        self.load_entries(entries)
    }

    /// 加载目录中所有匹配 `pattern` 的文件，文件名中无法提取 q 的文件跳过
    ///
    /// 匹配到文件但全部无法提取 q 时返回 `NoWavevectorInNames`
    pub fn load_matching(&self, pattern: &str) -> Result<QensDataset> {
        let collector = SpectrumCollector::new(&self.dir).with_pattern(pattern);
        let files = collector.collect()?;
        self.load_paths(&files)
            .map_err(|e| match e {
                QensError::NoFilesFound { .. } => QensError::NoFilesFound {
                    pattern: collector.pattern(),
                },
                other => other,
            })
    }

    /// 加载显式给定的文件列表，q 从文件名提取
    pub fn load_paths(&self, paths: &[PathBuf]) -> Result<QensDataset> {
        let mut entries = Vec::with_capacity(paths.len());
        for path in paths {
            match q_from_file_name(path) {
                Some(q) => entries.push((path.clone(), q)),
                None => {
                    if self.verbose {
                        output::print_skip(&format!(
                            "Cannot determine q from file name: {}",
                            path.display()
                        ));
                    }
                }
            }
        }

        if paths.is_empty() {
            return Err(QensError::NoFilesFound {
                pattern: self.dir.join("q_*").display().to_string(),
            });
        }
        if entries.is_empty() {
            return Err(QensError::NoWavevectorInNames {
                count: paths.len(),
                dir: self.dir.display().to_string(),
            });
        }

        self.load_entries(entries)
    }

    /// 并行读取 (路径, q) 列表
    fn load_entries(&self, entries: Vec<(PathBuf, f64)>) -> Result<QensDataset> {
        let jobs = if self.jobs == 0 {
            num_cpus::get()
        } else {
            self.jobs
        };

        if self.verbose {
            output::print_info(&format!(
                "Loading {} spectra from '{}' ({} jobs)",
                entries.len(),
                self.dir.display(),
                jobs
            ));
        }

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .map_err(|e| QensError::InvalidArgument(format!("Thread pool: {}", e)))?;

        let spectra = pool.install(|| {
            entries
                .par_iter()
                .map(|(path, q)| load_spectrum(path, *q))
                .collect::<Result<Vec<_>>>()
        })?;

        if self.verbose {
            for s in &spectra {
                output::print_success(&format!(
                    "q = {:.2} Å⁻¹: {} points x {} columns",
                    s.q,
                    s.n_points(),
                    s.n_columns()
                ));
            }
            let short = spectra.iter().filter(|s| s.n_columns() < 2).count();
            if short > 0 {
                output::print_warning(&format!(
                    "{} spectra have no structure factor column",
                    short
                ));
            }
        }

        Ok(QensDataset::new(spectra))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{random_jump, LorentzianParams};
    use std::fs;

    fn write_spectrum(dir: &Path, q: f64) {
        let params = LorentzianParams::new(1.0, 0.1 + q, 0.0);
        let mut content = String::from("# omega S err\n");
        for i in -5..=5 {
            let w = i as f64 * 0.1;
            content.push_str(&format!("{:.3} {:.6} 0.01\n", w, params.evaluate(w)));
        }
        fs::write(dir.join(standard_file_name(q)), content).unwrap();
    }

    #[test]
    fn test_q_from_file_name() {
        assert_eq!(q_from_file_name(Path::new("data/q_0.2.txt")), Some(0.2));
        assert_eq!(q_from_file_name(Path::new("q_3.txt")), Some(3.0));
        assert_eq!(q_from_file_name(Path::new("q_1.0.dat")), Some(1.0));
        assert_eq!(q_from_file_name(Path::new("q_2.6.xye")), Some(2.6));
        assert_eq!(q_from_file_name(Path::new("sample.txt")), None);
        // 无扩展名时不能把小数部分当作扩展名
        assert_eq!(q_from_file_name(Path::new("q_1.0")), None);
    }

    #[test]
    fn test_standard_file_name() {
        assert_eq!(standard_file_name(0.2), "q_0.2.txt");
        assert_eq!(standard_file_name(3.0), "q_3.0.txt");
    }

    #[test]
    fn test_load_standard() {
        let dir = tempfile::tempdir().unwrap();
        for &q in STANDARD_Q_VALUES.iter().rev() {
            write_spectrum(dir.path(), q);
        }

        let dataset = DatasetLoader::new(dir.path()).jobs(2).load_standard().unwrap();
        assert_eq!(dataset.len(), 8);
        assert_eq!(dataset.q_values(), STANDARD_Q_VALUES.to_vec());

        let s = dataset.get(1.4).unwrap();
        assert_eq!(s.n_columns(), 3);
        assert_eq!(s.n_points(), 11);
        assert_eq!(s.energy_transfer().len(), 11);
        assert!(s.uncertainty().is_some());

        // 中心点为峰值 1/(πγ)
        let peak = s.structure_factor().unwrap()[5];
        assert!((peak - 1.0 / (std::f64::consts::PI * 1.5)).abs() < 1e-5);

        // q 数组可直接传入扩散模型
        let widths = random_jump(&dataset.q_values(), 1.0, 1.0).unwrap();
        assert_eq!(widths.len(), 8);
    }

    #[test]
    fn test_load_standard_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        for &q in &STANDARD_Q_VALUES[..7] {
            write_spectrum(dir.path(), q);
        }

        let err = DatasetLoader::new(dir.path()).load_standard().unwrap_err();
        match err {
            QensError::FileNotFound { path } => assert!(path.ends_with("q_3.0.txt"), "{}", path),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_standard_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        for &q in STANDARD_Q_VALUES.iter() {
            write_spectrum(dir.path(), q);
        }
        fs::write(dir.path().join("q_1.8.txt"), "0.0 1.0\n0.1 oops\n").unwrap();

        let err = DatasetLoader::new(dir.path()).load_standard().unwrap_err();
        match err {
            QensError::ParseError { path, line, .. } => {
                assert!(path.ends_with("q_1.8.txt"), "{}", path);
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_matching_skips_unnamed() {
        let dir = tempfile::tempdir().unwrap();
        write_spectrum(dir.path(), 0.6);
        write_spectrum(dir.path(), 2.2);
        fs::write(dir.path().join("q_extra.txt"), "1 2\n").unwrap();

        let dataset = DatasetLoader::new(dir.path())
            .load_matching("q_*.txt")
            .unwrap();
        assert_eq!(dataset.q_values(), vec![0.6, 2.2]);
        assert!(dataset.get(0.2).is_none());
    }

    #[test]
    fn test_load_matching_other_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("q_0.2.dat"), "0.0 1.0\n0.1 0.5\n").unwrap();
        fs::write(dir.path().join("q_0.6.dat"), "0.0 2.0\n0.1 1.0\n").unwrap();

        let dataset = DatasetLoader::new(dir.path())
            .load_matching("q_*.dat")
            .unwrap();
        assert_eq!(dataset.q_values(), vec![0.2, 0.6]);
        assert_eq!(dataset.get(0.6).unwrap().structure_factor().unwrap(), &[2.0, 1.0]);
    }

    #[test]
    fn test_load_matching_names_without_q() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("run_a.txt"), "0 1\n").unwrap();
        fs::write(dir.path().join("run_b.txt"), "0 1\n").unwrap();

        let err = DatasetLoader::new(dir.path())
            .load_matching("run_*.txt")
            .unwrap_err();
        match err {
            QensError::NoWavevectorInNames { count, .. } => assert_eq!(count, 2),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_matching_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let err = DatasetLoader::new(dir.path())
            .load_matching("q_*.txt")
            .unwrap_err();
        assert!(matches!(err, QensError::NoFilesFound { .. }));
    }

    #[test]
    fn test_load_paths_explicit() {
        let dir = tempfile::tempdir().unwrap();
        write_spectrum(dir.path(), 1.0);
        let paths = vec![dir.path().join("q_1.0.txt"), dir.path().join("notes.txt")];
        let dataset = DatasetLoader::new(dir.path())
            .verbose(true)
            .load_paths(&paths)
            .unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.iter().next().unwrap().q, 1.0);
    }
}
