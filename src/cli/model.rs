//! # 模型公共参数 CLI 定义
//!
//! `run` 与 `sweep` 共用的势能参数和数值积分参数。
//!
//! ## 依赖关系
//! - 被 `cli/run.rs`, `cli/sweep.rs` 使用
//! - 转换为 `physics/` 的 ShapeParams, ModelConfig

use crate::physics::{ModelConfig, PotentialShape, ShapeParams};

use clap::{Args, ValueEnum};

/// 势形选择
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PotentialKind {
    /// Smoothed step V0 / (1 + exp(-(x - x0)/a))
    WoodsSaxon,
    /// a·tanh(b·x)
    Tanh,
    /// a·exp(b·tanh(c·x))
    ExpTanh,
    /// Constant potential V0 (no barrier)
    Flat,
}

impl From<PotentialKind> for PotentialShape {
    fn from(kind: PotentialKind) -> Self {
        match kind {
            PotentialKind::WoodsSaxon => PotentialShape::WoodsSaxon,
            PotentialKind::Tanh => PotentialShape::Tanh,
            PotentialKind::ExpTanh => PotentialShape::ExpTanh,
            PotentialKind::Flat => PotentialShape::Flat,
        }
    }
}

impl std::fmt::Display for PotentialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", PotentialShape::from(*self))
    }
}

/// 势能参数
#[derive(Args, Debug, Clone)]
pub struct PotentialArgs {
    /// Potential shape
    #[arg(long, value_enum)]
    pub potential: PotentialKind,

    /// Particle rest mass
    #[arg(long = "m", allow_negative_numbers = true)]
    pub mass: f64,

    /// Step height (woods-saxon) or constant value (flat)
    #[arg(long = "V0", default_value_t = 1.0, allow_negative_numbers = true)]
    pub v0: f64,

    /// First shape parameter (amplitude for tanh/exp-tanh, diffuseness for woods-saxon)
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub a: f64,

    /// Second shape parameter (for tanh/exp-tanh)
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub b: f64,

    /// Third shape parameter (for exp-tanh)
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub c: f64,

    /// Step center (for woods-saxon)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub x0: f64,
}

impl PotentialArgs {
    pub fn shape_params(&self) -> ShapeParams {
        ShapeParams {
            v0: self.v0,
            a: self.a,
            b: self.b,
            c: self.c,
            x0: self.x0,
        }
    }
}

/// 数值积分参数
#[derive(Args, Debug, Clone)]
pub struct GridArgs {
    /// Left bound of the integration domain
    #[arg(long, env = "KG_XMIN", default_value_t = -10.0, allow_negative_numbers = true)]
    pub xmin: f64,

    /// Right bound of the integration domain
    #[arg(long, env = "KG_XMAX", default_value_t = 10.0, allow_negative_numbers = true)]
    pub xmax: f64,

    /// Number of fixed RK4 steps
    #[arg(long, env = "KG_NSTEPS", default_value_t = 6000)]
    pub nsteps: usize,

    /// Magnitude ceiling for the Riccati variable
    #[arg(long, default_value_t = 1e6)]
    pub y_max: f64,

    /// Regularization floor for the matching denominator
    #[arg(long, default_value_t = 1e-12)]
    pub eps_denom: f64,
}

impl GridArgs {
    pub fn model_config(&self) -> ModelConfig {
        ModelConfig {
            xmin: self.xmin,
            xmax: self.xmax,
            n_steps: self.nsteps,
            y_max: self.y_max,
            eps_denom: self.eps_denom,
        }
    }
}
