//! # 能谱扫描结果数据模型
//!
//! 存储一次能量扫描得到的 E / R / T 三列数据，以及由其计算出的守恒律统计量。
//!
//! ## 依赖关系
//! - 由 `physics/riccati.rs` 生成 `Spectrum`
//! - 由 `physics/diagnostics.rs` 生成 `ConservationMetrics`
//! - 被 `physics/export.rs`, `physics/plot.rs`, `commands/` 使用

use crate::error::{KgError, Result};

use serde::Serialize;

/// 能谱扫描结果
///
/// 三列等长、按下标一一对应，创建后不可修改。
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    energies: Vec<f64>,
    reflection: Vec<f64>,
    transmission: Vec<f64>,
}

/// CSV 导出用的单行记录
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpectrumRow {
    #[serde(rename = "E")]
    pub energy: f64,
    #[serde(rename = "R")]
    pub reflection: f64,
    #[serde(rename = "T")]
    pub transmission: f64,
}

impl Spectrum {
    /// 由三列数据构造，长度必须一致
    pub fn new(energies: Vec<f64>, reflection: Vec<f64>, transmission: Vec<f64>) -> Result<Self> {
        check_length("R", energies.len(), reflection.len())?;
        check_length("T", energies.len(), transmission.len())?;
        Ok(Self {
            energies,
            reflection,
            transmission,
        })
    }

    /// 由 (R, T) 对构造
    pub(crate) fn from_pairs(energies: Vec<f64>, pairs: Vec<(f64, f64)>) -> Result<Self> {
        let (reflection, transmission) = pairs.into_iter().unzip();
        Self::new(energies, reflection, transmission)
    }

    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    pub fn reflection(&self) -> &[f64] {
        &self.reflection
    }

    pub fn transmission(&self) -> &[f64] {
        &self.transmission
    }

    /// 采样点数
    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    /// 逐行迭代 (E, R, T)
    pub fn rows(&self) -> impl Iterator<Item = SpectrumRow> + '_ {
        self.energies
            .iter()
            .zip(&self.reflection)
            .zip(&self.transmission)
            .map(|((&energy, &reflection), &transmission)| SpectrumRow {
                energy,
                reflection,
                transmission,
            })
    }

    /// 预览：前 `n` 行与后 `n` 行
    ///
    /// 样本数不超过 `2n` 时返回全部行，第二项为空。
    pub fn preview(&self, n: usize) -> (Vec<SpectrumRow>, Vec<SpectrumRow>) {
        let len = self.len();
        if len <= 2 * n {
            return (self.rows().collect(), Vec::new());
        }
        let head = self.rows().take(n).collect();
        let tail = self.rows().skip(len - n).collect();
        (head, tail)
    }
}

pub(crate) fn check_length(name: &str, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(KgError::LengthMismatch {
            name: name.to_string(),
            expected,
            found,
        })
    }
}

/// 守恒律诊断统计量
///
/// 统计时跳过非有限值；没有可用样本时相应统计量为 NaN。
/// 字段名与导出名的对应见 [`ConservationMetrics::entries`]。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConservationMetrics {
    /// R+T 的平均值
    pub avg_r_plus_t: f64,
    /// R+T 的标准差（总体）
    pub std_r_plus_t: f64,
    /// max |R+T-1|
    pub max_abs_r_plus_t_minus_1: f64,
    /// R 超过容差的样本数
    pub count_r_gt_1: usize,
    pub max_r: f64,
    /// T 低于容差的样本数
    pub count_t_lt_0: usize,
    pub min_t: f64,
    /// 样本总数
    pub n: usize,
    pub e_min: f64,
    pub e_max: f64,
}

impl ConservationMetrics {
    /// 按固定顺序给出 (名称, 数值) 对，用于表格与导出
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("avg_R_plus_T", format_value(self.avg_r_plus_t)),
            ("std_R_plus_T", format_value(self.std_r_plus_t)),
            (
                "max_abs_R_plus_T_minus_1",
                format_value(self.max_abs_r_plus_t_minus_1),
            ),
            ("count_R_gt_1", self.count_r_gt_1.to_string()),
            ("max_R", format_value(self.max_r)),
            ("count_T_lt_0", self.count_t_lt_0.to_string()),
            ("min_T", format_value(self.min_t)),
            ("N", self.n.to_string()),
            ("E_min", format_value(self.e_min)),
            ("E_max", format_value(self.e_max)),
        ]
    }
}

fn format_value(v: f64) -> String {
    format!("{:.10e}", v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spectrum_rejects_length_mismatch() {
        let err = Spectrum::new(vec![1.0, 2.0], vec![0.1], vec![0.9, 0.8]).unwrap_err();
        match err {
            KgError::LengthMismatch {
                expected, found, ..
            } => {
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_spectrum_rows() {
        let s = Spectrum::from_pairs(vec![1.0, 2.0], vec![(0.25, 0.75), (1.0, 0.0)]).unwrap();
        assert_eq!(s.len(), 2);
        let rows: Vec<SpectrumRow> = s.rows().collect();
        assert_eq!(rows[1].energy, 2.0);
        assert_eq!(rows[1].reflection, 1.0);
        assert_eq!(rows[1].transmission, 0.0);
        assert_eq!(s.reflection(), &[0.25, 1.0]);
        assert_eq!(s.transmission(), &[0.75, 0.0]);
    }

    #[test]
    fn test_from_pairs_rejects_missing_samples() {
        assert!(Spectrum::from_pairs(vec![1.0, 2.0, 3.0], vec![(0.5, 0.5)]).is_err());
    }

    #[test]
    fn test_spectrum_preview() {
        let energies: Vec<f64> = (0..12).map(|i| i as f64).collect();
        let pairs = vec![(0.1, 0.9); 12];
        let s = Spectrum::from_pairs(energies, pairs).unwrap();

        let (head, tail) = s.preview(5);
        assert_eq!(head.len(), 5);
        assert_eq!(tail.len(), 5);
        assert_eq!(head[0].energy, 0.0);
        assert_eq!(head[4].energy, 4.0);
        assert_eq!(tail[0].energy, 7.0);
        assert_eq!(tail[4].energy, 11.0);

        // 短能谱整体返回
        let (head, tail) = s.preview(6);
        assert_eq!(head.len(), 12);
        assert!(tail.is_empty());
    }

    #[test]
    fn test_metrics_entries_order() {
        let m = ConservationMetrics {
            avg_r_plus_t: 1.0,
            std_r_plus_t: 0.0,
            max_abs_r_plus_t_minus_1: 0.0,
            count_r_gt_1: 0,
            max_r: 0.5,
            count_t_lt_0: 0,
            min_t: 0.5,
            n: 3,
            e_min: 1.0,
            e_max: 2.0,
        };
        let names: Vec<&str> = m.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(names.first(), Some(&"avg_R_plus_T"));
        assert_eq!(names.last(), Some(&"E_max"));
        assert_eq!(names.len(), 10);
    }
}
