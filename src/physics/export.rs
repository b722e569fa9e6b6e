//! # 能谱数据导出
//!
//! 导出扫描结果和守恒律统计到 CSV。
//!
//! ## 支持格式
//! - 能谱 CSV: `E,R,T` 表头，每个能量点一行
//! - 统计 CSV: `metric,value` 两列
//!
//! ## 依赖关系
//! - 被 `commands/sweep.rs` 调用
//! - 使用 `models/spectrum.rs` 的 Spectrum, ConservationMetrics
//! - 使用 `csv` + `serde` 写入 CSV 文件

use crate::error::{KgError, Result};
use crate::models::{ConservationMetrics, Spectrum};

use std::fs;
use std::path::Path;

/// 确保输出文件的父目录存在
pub fn ensure_parent_dir(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| KgError::FileWriteError {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
    }
    Ok(())
}

/// 导出能谱为 CSV
pub fn spectrum_to_csv(spectrum: &Spectrum, output_path: &Path) -> Result<()> {
    ensure_parent_dir(output_path)?;

    let mut wtr = csv::Writer::from_path(output_path)?;
    for row in spectrum.rows() {
        wtr.serialize(row)?;
    }

    // 空能谱时 serialize 不会写表头
    if spectrum.is_empty() {
        wtr.write_record(["E", "R", "T"])?;
    }

    wtr.flush().map_err(|e| KgError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出守恒律统计为 CSV
pub fn metrics_to_csv(metrics: &ConservationMetrics, output_path: &Path) -> Result<()> {
    ensure_parent_dir(output_path)?;

    let mut wtr = csv::Writer::from_path(output_path)?;
    wtr.write_record(["metric", "value"])?;

    for (name, value) in metrics.entries() {
        wtr.write_record([name, value.as_str()])?;
    }

    wtr.flush().map_err(|e| KgError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::diagnostics::spectrum_metrics;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("kgsolver_export_test_{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_spectrum_to_csv() {
        let s = Spectrum::new(vec![1.0, 2.0], vec![0.25, 1.0], vec![0.75, 0.0]).unwrap();
        let path = temp_path("RT.csv");
        spectrum_to_csv(&s, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "E,R,T");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "1.0,0.25,0.75");
        assert_eq!(lines[2], "2.0,1.0,0.0");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_metrics_to_csv() {
        let s = Spectrum::new(vec![1.0, 2.0], vec![0.3, 0.3], vec![0.7, 0.7]).unwrap();
        let metrics = spectrum_metrics(&s).unwrap();
        let path = temp_path("metrics.csv");
        metrics_to_csv(&metrics, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("metric,value"));
        assert!(content.contains("count_R_gt_1,0"));
        assert!(content.contains("N,2"));

        fs::remove_file(&path).ok();
    }
}
