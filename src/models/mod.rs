//! # 数据模型模块
//!
//! 定义能谱扫描结果和守恒律诊断的数据模型。
//!
//! ## 依赖关系
//! - 被 `physics/` 和 `commands/` 使用
//! - 子模块: spectrum

pub mod spectrum;

pub use spectrum::{ConservationMetrics, Spectrum, SpectrumRow};
