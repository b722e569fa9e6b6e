//! # kgsolver - Klein–Gordon 一维散射求解器
//!
//! 通过 Riccati 方程数值积分与渐近匹配，计算相对论性粒子
//! 在一维势垒上的反射/透射系数。
//!
//! ## 子命令
//! - `run`   - 单个能量的 R, T
//! - `sweep` - 能量扫描 R(E), T(E)，导出 CSV、守恒律诊断和图表
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── physics/  (势能、Riccati 积分、诊断、导出、绘图)
//!   │     ├── batch/    (并行扫描)
//!   │     └── models/   (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod physics;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
