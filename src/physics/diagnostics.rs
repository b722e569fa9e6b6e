//! # 能谱守恒律诊断
//!
//! 对扫描结果计算 R+T 守恒统计，只做汇报，不修改数据。
//! 非有限值（NaN / ±inf）在所有统计中被跳过。
//!
//! ## 依赖关系
//! - 被 `commands/sweep.rs` 调用
//! - 使用 `models/spectrum.rs` 的 ConservationMetrics

use crate::error::Result;
use crate::models::spectrum::check_length;
use crate::models::{ConservationMetrics, Spectrum};

/// R 的默认上限容差
pub const DEFAULT_TOL_R_GT_1: f64 = 1.01;

/// T 的默认下限容差
pub const DEFAULT_TOL_T_LT_0: f64 = -0.01;

/// 计算守恒律统计量
pub fn conservation_metrics(
    e_vals: &[f64],
    r_vals: &[f64],
    t_vals: &[f64],
    tol_r_gt_1: f64,
    tol_t_lt_0: f64,
) -> Result<ConservationMetrics> {
    check_length("R", e_vals.len(), r_vals.len())?;
    check_length("T", e_vals.len(), t_vals.len())?;

    let rt: Vec<f64> = r_vals
        .iter()
        .zip(t_vals)
        .map(|(r, t)| r + t)
        .filter(|v| v.is_finite())
        .collect();

    let (avg, std) = mean_std(&rt);
    let max_dev = max_finite(rt.iter().map(|v| (v - 1.0).abs()));

    let count_r_gt_1 = r_vals
        .iter()
        .filter(|r| r.is_finite() && **r > tol_r_gt_1)
        .count();
    let count_t_lt_0 = t_vals
        .iter()
        .filter(|t| t.is_finite() && **t < tol_t_lt_0)
        .count();

    Ok(ConservationMetrics {
        avg_r_plus_t: avg,
        std_r_plus_t: std,
        max_abs_r_plus_t_minus_1: max_dev,
        count_r_gt_1,
        max_r: max_finite(r_vals.iter().copied()),
        count_t_lt_0,
        min_t: min_finite(t_vals.iter().copied()),
        n: e_vals.len(),
        e_min: min_finite(e_vals.iter().copied()),
        e_max: max_finite(e_vals.iter().copied()),
    })
}

/// 使用默认容差计算能谱的守恒律统计量
pub fn spectrum_metrics(spectrum: &Spectrum) -> Result<ConservationMetrics> {
    conservation_metrics(
        spectrum.energies(),
        spectrum.reflection(),
        spectrum.transmission(),
        DEFAULT_TOL_R_GT_1,
        DEFAULT_TOL_T_LT_0,
    )
}

/// 均值与总体标准差（两遍算法）
fn mean_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (f64::NAN, f64::NAN);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

fn max_finite(values: impl Iterator<Item = f64>) -> f64 {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
        .unwrap_or(f64::NAN)
}

fn min_finite(values: impl Iterator<Item = f64>) -> f64 {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.min(v))))
        .unwrap_or(f64::NAN)
}
