//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `physics/`, `models/`, `utils/`
//! - 子模块: run, sweep

pub mod run;
pub mod sweep;

use crate::cli::model::{GridArgs, PotentialArgs};
use crate::cli::Commands;
use crate::error::Result;
use crate::physics::{build_potential, RiccatiModel};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Run(args) => run::execute(args),
        Commands::Sweep(args) => sweep::execute(args),
    }
}

/// 由命令行参数构造散射模型
pub(crate) fn build_model(potential: &PotentialArgs, grid: &GridArgs) -> Result<RiccatiModel> {
    let shape = potential.potential.into();
    let v = build_potential(shape, &potential.shape_params())?;
    RiccatiModel::new(potential.mass, v, grid.model_config())
}

/// 阈值表格行
#[derive(Debug, Clone, Tabled)]
struct ThresholdRow {
    #[tabled(rename = "Threshold")]
    name: &'static str,
    #[tabled(rename = "Definition")]
    definition: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// 打印模型概要与能量阈值
pub(crate) fn print_model_summary(model: &RiccatiModel) {
    let config = model.config();
    output::print_info(&format!("Potential: {}", model.label()));
    output::print_kv("m", &format!("{}", model.mass()));
    output::print_kv("V_L, V_R", &format!("{:.8}, {:.8}", model.v_l(), model.v_r()));
    output::print_kv(
        "domain",
        &format!("[{}, {}] in {} RK4 steps", config.xmin, config.xmax, config.n_steps),
    );

    let rows = vec![
        ThresholdRow {
            name: "E_sl",
            definition: "V_L - m",
            value: format!("{:.8}", model.e_sl()),
        },
        ThresholdRow {
            name: "E_pml",
            definition: "V_L + m",
            value: format!("{:.8}", model.e_pml()),
        },
        ThresholdRow {
            name: "E_sr",
            definition: "V_R - m",
            value: format!("{:.8}", model.e_sr()),
        },
        ThresholdRow {
            name: "E_prop",
            definition: "V_R + m",
            value: format!("{:.8}", model.e_prop()),
        },
    ];

    println!("{}", Table::new(&rows));
}
