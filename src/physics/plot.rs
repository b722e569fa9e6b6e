//! # 图表生成
//!
//! 使用 `plotters` 库绘制势能曲线和 R(E) / T(E) 能谱。
//!
//! ## 功能
//! - 势能 V(x) 曲线（标题为势能标签）
//! - R(E)、T(E) 曲线及图例
//! - 按扩展名选择 PNG 或 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/sweep.rs` 调用
//! - 使用 `physics/riccati.rs` 的 RiccatiModel
//! - 使用 `models/spectrum.rs` 的 Spectrum
//! - 使用 `plotters` 渲染图表

use crate::error::{KgError, Result};
use crate::models::Spectrum;
use crate::physics::export::ensure_parent_dir;
use crate::physics::riccati::RiccatiModel;

use plotters::prelude::*;
use std::path::Path;

/// 图像尺寸
#[derive(Debug, Clone, Copy)]
pub struct FigureSize {
    pub width: u32,
    pub height: u32,
}

impl Default for FigureSize {
    fn default() -> Self {
        Self {
            width: 1120,
            height: 640,
        }
    }
}

fn plot_err<E: std::fmt::Debug>(e: E) -> KgError {
    KgError::PlotError(format!("{:?}", e))
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|s| s.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

/// 含两端点的均匀采样
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![start];
    }
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}

/// 数据范围，留出 5% 边距
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() {
        return (0.0, 1.0);
    }
    let margin = if hi > lo { 0.05 * (hi - lo) } else { 0.5 };
    (lo - margin, hi + margin)
}

/// 绘制势能曲线
pub fn plot_potential(
    model: &RiccatiModel,
    num_points: usize,
    output_path: &Path,
    size: FigureSize,
) -> Result<()> {
    let config = model.config();
    let xs = linspace(config.xmin, config.xmax, num_points);
    let vs = model.sample_potential(&xs);
    let data: Vec<(f64, f64)> = xs.into_iter().zip(vs).collect();

    ensure_parent_dir(output_path)?;

    if is_svg(output_path) {
        let root = SVGBackend::new(output_path, (size.width, size.height)).into_drawing_area();
        draw_potential_chart(&root, &data, model.label(), (config.xmin, config.xmax))?;
        root.present().map_err(plot_err)?;
    } else {
        let root = BitMapBackend::new(output_path, (size.width, size.height)).into_drawing_area();
        draw_potential_chart(&root, &data, model.label(), (config.xmin, config.xmax))?;
        root.present().map_err(plot_err)?;
    }
    Ok(())
}

fn draw_potential_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    data: &[(f64, f64)],
    title: &str,
    x_range: (f64, f64),
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let (y_min, y_max) = padded_range(data.iter().map(|(_, y)| *y));

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 26).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.0..x_range.1, y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("V(x)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(plot_err)?;

    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(
            data.iter().map(|(x, y)| (*x, *y)),
            line_color.stroke_width(2),
        ))
        .map_err(plot_err)?;

    Ok(())
}

/// 绘制 R(E), T(E) 曲线
pub fn plot_rt(
    spectrum: &Spectrum,
    output_path: &Path,
    title: &str,
    size: FigureSize,
) -> Result<()> {
    if spectrum.is_empty() {
        return Err(KgError::PlotError("No data to plot".to_string()));
    }

    ensure_parent_dir(output_path)?;

    if is_svg(output_path) {
        let root = SVGBackend::new(output_path, (size.width, size.height)).into_drawing_area();
        draw_rt_chart(&root, spectrum, title)?;
        root.present().map_err(plot_err)?;
    } else {
        let root = BitMapBackend::new(output_path, (size.width, size.height)).into_drawing_area();
        draw_rt_chart(&root, spectrum, title)?;
        root.present().map_err(plot_err)?;
    }
    Ok(())
}

fn draw_rt_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    spectrum: &Spectrum,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let energies = spectrum.energies();
    let x_min = energies.first().copied().unwrap_or(0.0);
    let x_max = energies.last().copied().unwrap_or(1.0);

    let (y_lo, y_hi) = padded_range(
        spectrum
            .reflection()
            .iter()
            .chain(spectrum.transmission())
            .copied(),
    );
    let y_min = y_lo.min(-0.05);
    let y_max = y_hi.max(1.05);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 26).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("E")
        .y_desc("Coefficient")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(plot_err)?;

    let r_color = RGBColor(0, 102, 204);
    let t_color = RGBColor(204, 51, 0);

    chart
        .draw_series(LineSeries::new(
            spectrum
                .rows()
                .filter(|row| row.reflection.is_finite())
                .map(|row| (row.energy, row.reflection)),
            r_color.stroke_width(2),
        ))
        .map_err(plot_err)?
        .label("R")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], r_color.stroke_width(2)));

    chart
        .draw_series(LineSeries::new(
            spectrum
                .rows()
                .filter(|row| row.transmission.is_finite())
                .map(|row| (row.energy, row.transmission)),
            t_color.stroke_width(2),
        ))
        .map_err(plot_err)?
        .label("T")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], t_color.stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_err)?;

    Ok(())
}
