//! # run 子命令实现
//!
//! 计算单个能量下的反射/透射系数并打印。
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的 RunArgs
//! - 使用 `physics/riccati.rs` 进行计算

use crate::cli::run::RunArgs;
use crate::error::{KgError, Result};
use crate::utils::output;

/// 执行单点计算
pub fn execute(args: RunArgs) -> Result<()> {
    output::print_header("Klein-Gordon Scattering: Single Energy");

    KgError::check_finite("E", args.energy)?;
    let model = super::build_model(&args.potential, &args.grid)?;

    output::print_info(&format!("Shape: {}", args.potential.potential));
    super::print_model_summary(&model);

    let (r, t) = model.scattering_coeffs(args.energy);

    output::print_separator();
    output::print_kv("E", &format!("{:.8}", args.energy));
    output::print_kv("R", &format!("{:.10}", r));
    output::print_kv("T", &format!("{:.10}", t));
    output::print_kv("R+T", &format!("{:.10}", r + t));
    output::print_separator();

    let zl = (args.energy - model.v_l()).powi(2) - model.mass().powi(2);
    let zr = (args.energy - model.v_r()).powi(2) - model.mass().powi(2);
    if zl <= 0.0 {
        output::print_warning("No propagating channel on the left: (R, T) = (0, 0) is a sentinel");
    } else if zr <= 0.0 {
        output::print_warning("Right side is evanescent: total reflection");
    } else {
        output::print_success("Both asymptotic regions are propagating");
    }

    output::print_info(&format!(
        "E_sr={:.8}   E_prop={:.8}",
        model.e_sr(),
        model.e_prop()
    ));

    Ok(())
}
