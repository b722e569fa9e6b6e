//! # run 子命令 CLI 定义
//!
//! 计算单个能量下的 R, T
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/run.rs`

use super::model::{GridArgs, PotentialArgs};
use clap::Args;

/// run 子命令参数
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub potential: PotentialArgs,

    /// Total energy E
    #[arg(long = "E", allow_negative_numbers = true)]
    pub energy: f64,

    #[command(flatten)]
    pub grid: GridArgs,
}
