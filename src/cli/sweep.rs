//! # sweep 子命令 CLI 定义
//!
//! 在能量区间上扫描 R(E), T(E)，导出 CSV 并可选绘图
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/sweep.rs`

use super::model::{GridArgs, PotentialArgs};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 图像输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum PlotFormat {
    /// PNG image
    #[default]
    Png,
    /// SVG vector image
    Svg,
}

impl PlotFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            PlotFormat::Png => "png",
            PlotFormat::Svg => "svg",
        }
    }
}

/// sweep 子命令参数
#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub potential: PotentialArgs,

    /// Lower end of the energy range
    #[arg(long = "Emin", allow_negative_numbers = true)]
    pub e_min: f64,

    /// Upper end of the energy range
    #[arg(long = "Emax", allow_negative_numbers = true)]
    pub e_max: f64,

    /// Number of energy samples (both endpoints included)
    #[arg(long = "nE", default_value_t = 400)]
    pub n_e: usize,

    #[command(flatten)]
    pub grid: GridArgs,

    /// Output directory
    #[arg(long, default_value = "results")]
    pub out: PathBuf,

    /// Also write conservation metrics to <out>/metrics.csv
    #[arg(long, default_value_t = false)]
    pub save_metrics: bool,

    /// Render potential and R/T plots into the output directory
    #[arg(long, default_value_t = false)]
    pub plot: bool,

    /// Plot image format
    #[arg(long, value_enum, default_value = "png")]
    pub plot_format: PlotFormat,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1120)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 640)]
    pub height: u32,

    /// Number of parallel jobs (0 = auto, 1 = sequential)
    #[arg(short, long, env = "KG_JOBS", default_value_t = 1)]
    pub jobs: usize,
}
