//! # 批量计算模块
//!
//! 提供统一的并行批量计算能力。
//!
//! ## 功能
//! - 并行处理独立任务
//! - 进度反馈
//!
//! ## 依赖关系
//! - 被 `physics/riccati.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod runner;

pub use runner::BatchRunner;
