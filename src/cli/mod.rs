//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `run`: 单个能量的 R, T
//! - `sweep`: 能量扫描 R(E), T(E)
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: model, run, sweep

pub mod model;
pub mod run;
pub mod sweep;

use clap::{Parser, Subcommand};

/// kgsolver - Klein–Gordon 一维散射求解器
#[derive(Parser)]
#[command(name = "kgsolver")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "KG 1D scattering (Riccati)", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute R,T for a single energy E
    Run(run::RunArgs),

    /// Compute spectrum R(E), T(E)
    Sweep(sweep::SweepArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_with_negative_values() {
        let cli = Cli::try_parse_from([
            "kgsolver",
            "run",
            "--potential",
            "tanh",
            "--m",
            "1",
            "--E",
            "-3.5",
            "--a",
            "2",
            "--xmin",
            "-12",
        ])
        .unwrap();

        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.energy, -3.5);
                assert_eq!(args.grid.xmin, -12.0);
                assert_eq!(args.grid.nsteps, 6000);
                assert_eq!(args.potential.potential, model::PotentialKind::Tanh);
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_parse_sweep_defaults() {
        let cli = Cli::try_parse_from([
            "kgsolver",
            "sweep",
            "--potential",
            "exp-tanh",
            "--m",
            "0.5",
            "--Emin",
            "0",
            "--Emax",
            "15",
        ])
        .unwrap();

        match cli.command {
            Commands::Sweep(args) => {
                assert_eq!(args.n_e, 400);
                assert_eq!(args.out, std::path::PathBuf::from("results"));
                assert!(!args.plot);
                assert_eq!(args.plot_format, sweep::PlotFormat::Png);
            }
            _ => panic!("expected sweep command"),
        }
    }
}
