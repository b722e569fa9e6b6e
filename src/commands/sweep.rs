//! # sweep 子命令实现
//!
//! 在能量区间上扫描 R(E), T(E)。
//!
//! ## 功能
//! - 顺序或并行（rayon）扫描
//! - 导出 `E,R,T` CSV
//! - 能谱预览表格与守恒律诊断表格（可选导出）
//! - 可选绘制势能与能谱图 (PNG/SVG)
//!
//! ## 依赖关系
//! - 使用 `cli/sweep.rs` 定义的 SweepArgs
//! - 使用 `batch/` 模块进行并行计算
//! - 使用 `physics/` 模块进行计算、诊断、导出与绘图

use crate::batch::BatchRunner;
use crate::cli::sweep::SweepArgs;
use crate::error::Result;
use crate::models::{ConservationMetrics, Spectrum, SpectrumRow};
use crate::physics::diagnostics::spectrum_metrics;
use crate::physics::export;
use crate::physics::plot::{self, FigureSize};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 势能曲线采样点数
const POTENTIAL_SAMPLES: usize = 600;

/// 预览表格首尾各显示的行数
const PREVIEW_ROWS: usize = 5;

/// 执行能量扫描
pub fn execute(args: SweepArgs) -> Result<()> {
    output::print_header("Klein-Gordon Scattering: Energy Sweep");

    let model = super::build_model(&args.potential, &args.grid)?;
    output::print_info(&format!("Shape: {}", args.potential.potential));
    super::print_model_summary(&model);

    output::print_info(&format!(
        "Sweeping {} energies in [{}, {}]",
        args.n_e, args.e_min, args.e_max
    ));

    let spectrum = if args.jobs == 1 {
        model.compute_rt_spectrum(args.e_min, args.e_max, args.n_e)?
    } else {
        let runner = BatchRunner::new(args.jobs).with_progress("Sweeping");
        output::print_info(&format!("Using {} parallel jobs", runner.jobs()));
        model.compute_rt_spectrum_parallel(args.e_min, args.e_max, args.n_e, &runner)?
    };

    output::print_success(&format!("Computed {} samples", spectrum.len()));

    let csv_path = args.out.join("RT.csv");
    export::spectrum_to_csv(&spectrum, &csv_path)?;
    output::print_success(&format!("Saved: {}", csv_path.display()));

    let metrics = spectrum_metrics(&spectrum)?;
    print_metrics_table(&metrics);
    print_spectrum_preview(&spectrum);

    if metrics.count_r_gt_1 > 0 || metrics.count_t_lt_0 > 0 {
        output::print_warning(&format!(
            "Unitarity violations: {} samples with R > 1, {} samples with T < 0",
            metrics.count_r_gt_1, metrics.count_t_lt_0
        ));
    }

    if args.save_metrics {
        let metrics_path = args.out.join("metrics.csv");
        export::metrics_to_csv(&metrics, &metrics_path)?;
        output::print_success(&format!("Saved: {}", metrics_path.display()));
    }

    output::print_info(&format!(
        "Theoretical window: E_sr={:.8}, E_prop={:.8}",
        model.e_sr(),
        model.e_prop()
    ));

    if args.plot {
        let ext = args.plot_format.extension();
        let size = FigureSize {
            width: args.width,
            height: args.height,
        };
        let potential_path = args.out.join(format!("potential.{}", ext));
        let rt_path = args.out.join(format!("RT.{}", ext));

        plot::plot_potential(&model, POTENTIAL_SAMPLES, &potential_path, size)?;
        plot::plot_rt(
            &spectrum,
            &rt_path,
            &format!("{} (R,T)", args.potential.potential),
            size,
        )?;

        output::print_success(&format!(
            "Saved plots: {} , {}",
            potential_path.display(),
            rt_path.display()
        ));
    }

    Ok(())
}

/// 打印守恒律统计表格
fn print_metrics_table(metrics: &ConservationMetrics) {
    #[derive(Tabled)]
    struct MetricRow {
        #[tabled(rename = "Metric")]
        name: &'static str,
        #[tabled(rename = "Value")]
        value: String,
    }

    let rows: Vec<MetricRow> = metrics
        .entries()
        .into_iter()
        .map(|(name, value)| MetricRow { name, value })
        .collect();

    output::print_header("Conservation metrics");
    println!("{}", Table::new(&rows));
}

#[derive(Tabled)]
struct PreviewRow {
    #[tabled(rename = "E")]
    energy: String,
    #[tabled(rename = "R")]
    reflection: String,
    #[tabled(rename = "T")]
    transmission: String,
}

impl From<SpectrumRow> for PreviewRow {
    fn from(row: SpectrumRow) -> Self {
        Self {
            energy: format!("{:.6}", row.energy),
            reflection: format!("{:.6e}", row.reflection),
            transmission: format!("{:.6e}", row.transmission),
        }
    }
}

/// 首尾若干行组成的预览，中间以省略行分隔
fn preview_rows(spectrum: &Spectrum, n: usize) -> Vec<PreviewRow> {
    let (head, tail) = spectrum.preview(n);
    let mut rows: Vec<PreviewRow> = head.into_iter().map(PreviewRow::from).collect();
    if !tail.is_empty() {
        rows.push(PreviewRow {
            energy: "...".to_string(),
            reflection: "...".to_string(),
            transmission: "...".to_string(),
        });
        rows.extend(tail.into_iter().map(PreviewRow::from));
    }
    rows
}

/// 打印能谱预览表格
fn print_spectrum_preview(spectrum: &Spectrum) {
    output::print_header("Spectrum preview");
    println!("{}", Table::new(preview_rows(spectrum, PREVIEW_ROWS)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_rows_elides_middle() {
        let energies: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let spectrum = Spectrum::from_pairs(energies, vec![(0.25, 0.75); 20]).unwrap();

        let rows = preview_rows(&spectrum, 3);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].energy, "0.000000");
        assert_eq!(rows[3].energy, "...");
        assert_eq!(rows[6].energy, "19.000000");
        assert_eq!(rows[6].reflection, "2.500000e-1");
    }

    #[test]
    fn test_preview_rows_short_spectrum() {
        let spectrum = Spectrum::from_pairs(vec![1.0, 2.0], vec![(1.0, 0.0); 2]).unwrap();
        let rows = preview_rows(&spectrum, PREVIEW_ROWS);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.energy != "..."));
    }
}
