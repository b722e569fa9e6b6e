//! # Klein–Gordon 散射计算模块
//!
//! 提供一维 Klein–Gordon 粒子势垒散射的反射/透射系数计算。
//!
//! ## 子模块
//! - `potential`: 势能函数及常用势形
//! - `riccati`: Riccati 积分与渐近匹配
//! - `diagnostics`: 能谱守恒律统计
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/spectrum.rs`

pub mod diagnostics;
pub mod export;
pub mod plot;
pub mod potential;
pub mod riccati;

pub use potential::{build_potential, PotentialShape, ShapeParams};
pub use riccati::{ModelConfig, RiccatiModel};
