//! # Riccati 散射模型
//!
//! 实现一维 Klein–Gordon 散射的 R / T 系数计算核心算法。
//!
//! ## 算法概述
//! 1. 代换 y = (d/dx) ln ψ，将波动方程化为一阶非线性方程
//!    dy/dx = -y² - k(x)²，其中 k(x)² = (E - V(x))² - m²
//! 2. 右边界取纯出射波 y = i·k_R，固定步长 RK4 从 XMAX 积分到 XMIN
//! 3. 每步后若 |y| > Y_MAX，保持相位将模长缩放到 Y_MAX
//! 4. 在左边界与平面波 e^{ikx} + r·e^{-ikx} 匹配得到 r，R = |r|²
//! 5. T 由幺正性给出：T = 1 - R
//!
//! 左侧无传播通道时返回 (0, 0)，右侧为倏逝区时返回 (1, 0)。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs`, `commands/sweep.rs` 调用
//! - 使用 `physics/potential.rs` 的 Potential
//! - 使用 `batch/runner.rs` 进行并行扫描
//! - 使用 `num-complex` 进行复数运算

use crate::batch::BatchRunner;
use crate::error::{KgError, Result};
use crate::models::Spectrum;
use crate::physics::potential::Potential;

use num_complex::Complex64;

/// 判定渐近动量为实数的虚部阈值
const REAL_BRANCH_TOL: f64 = 1e-14;

/// 数值积分配置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelConfig {
    /// 积分区间左端
    pub xmin: f64,
    /// 积分区间右端
    pub xmax: f64,
    /// RK4 步数
    pub n_steps: usize,
    /// Riccati 变量模长上限
    pub y_max: f64,
    /// 匹配分母的正则化下限
    pub eps_denom: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            xmin: -10.0,
            xmax: 10.0,
            n_steps: 6000,
            y_max: 1e6,
            eps_denom: 1e-12,
        }
    }
}

impl ModelConfig {
    fn validate(&self) -> Result<()> {
        KgError::check_finite("XMIN", self.xmin)?;
        KgError::check_finite("XMAX", self.xmax)?;
        if self.xmin >= self.xmax {
            return Err(KgError::InvalidParameter(format!(
                "XMIN must be less than XMAX; got XMIN = {}, XMAX = {}",
                self.xmin, self.xmax
            )));
        }
        if self.n_steps == 0 {
            return Err(KgError::InvalidParameter(
                "N_STEPS must be greater than 0".to_string(),
            ));
        }
        KgError::check_positive("Y_MAX", self.y_max)?;
        KgError::check_positive("EPS_DENOM", self.eps_denom)?;
        Ok(())
    }
}

/// Riccati 散射模型
///
/// 构造后不可变；能量阈值按需计算，不缓存。
pub struct RiccatiModel {
    m: f64,
    potential: Box<dyn Potential>,
    v_l: f64,
    v_r: f64,
    label: String,
    config: ModelConfig,
}

impl std::fmt::Debug for RiccatiModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiccatiModel")
            .field("m", &self.m)
            .field("v_l", &self.v_l)
            .field("v_r", &self.v_r)
            .field("label", &self.label)
            .field("config", &self.config)
            .finish()
    }
}

impl RiccatiModel {
    /// 创建模型并校验全部参数
    pub fn new(m: f64, potential: Box<dyn Potential>, config: ModelConfig) -> Result<Self> {
        KgError::check_positive("m", m)?;
        config.validate()?;

        let v_l = potential.left_limit();
        let v_r = potential.right_limit();
        KgError::check_finite("V_L", v_l)?;
        KgError::check_finite("V_R", v_r)?;

        let label = potential.label();

        Ok(Self {
            m,
            potential,
            v_l,
            v_r,
            label,
            config,
        })
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// V(x)
    pub fn v_of_x(&self, x: f64) -> f64 {
        self.potential.value(x)
    }

    /// 对一组坐标批量求 V(x)
    pub fn sample_potential(&self, xs: &[f64]) -> Vec<f64> {
        self.potential.sample(xs)
    }

    /// 左侧渐近势 V_L
    pub fn v_l(&self) -> f64 {
        self.v_l
    }

    /// 右侧渐近势 V_R
    pub fn v_r(&self) -> f64 {
        self.v_r
    }

    /// E_sr = V_R - m
    pub fn e_sr(&self) -> f64 {
        self.v_r - self.m
    }

    /// E_sl = V_L - m
    pub fn e_sl(&self) -> f64 {
        self.v_l - self.m
    }

    /// E_prop = V_R + m
    pub fn e_prop(&self) -> f64 {
        self.v_r + self.m
    }

    /// E_pml = V_L + m
    pub fn e_pml(&self) -> f64 {
        self.v_l + self.m
    }

    /// (E - V)² - m²
    fn radicand(&self, e: f64, v: f64) -> f64 {
        (e - v).powi(2) - self.m * self.m
    }

    /// 局域动量 k(x) = sqrt((E - V(x))² - m²)，负根号内取纯虚数
    pub fn local_k(&self, e: f64, x: f64) -> Complex64 {
        let z = self.radicand(e, self.v_of_x(x));
        Complex64::new(z, 0.0).sqrt()
    }

    /// 渐近动量
    ///
    /// 实数时符号与 (E - V_asym) 一致，保证出射/入射方向约定；
    /// 复数时保持主值分支。
    pub fn asymptotic_k(&self, e: f64, v_asym: f64) -> Complex64 {
        let z = self.radicand(e, v_asym);
        let k = Complex64::new(z, 0.0).sqrt();
        if k.im.abs() < REAL_BRANCH_TOL {
            let sgn = if e - v_asym >= 0.0 { 1.0 } else { -1.0 };
            return Complex64::new(sgn * k.re.abs(), 0.0);
        }
        k
    }

    /// Riccati 方程右端 dy/dx = -y² - k(x)²
    pub fn riccati_rhs(&self, x: f64, y: Complex64, e: f64) -> Complex64 {
        let k = self.local_k(e, x);
        -y * y - k * k
    }

    /// 从 XMAX 向 XMIN 积分 Riccati 方程，返回 y(XMIN)
    pub fn integrate_riccati(&self, e: f64) -> Complex64 {
        let ModelConfig {
            xmin,
            xmax,
            n_steps,
            y_max,
            ..
        } = self.config;

        // 负步长
        let h = (xmin - xmax) / n_steps as f64;
        let k_r = self.asymptotic_k(e, self.v_r);
        let mut y = Complex64::i() * k_r;
        let mut x = xmax;

        for _ in 0..n_steps {
            // 中间级输入同样限幅，否则 y² 在大 Y_MAX 下溢出
            let k1 = self.riccati_rhs(x, y, e);
            let y2 = clamp_magnitude(y + 0.5 * h * k1, y, y_max);
            let k2 = self.riccati_rhs(x + 0.5 * h, y2, e);
            let y3 = clamp_magnitude(y + 0.5 * h * k2, y, y_max);
            let k3 = self.riccati_rhs(x + 0.5 * h, y3, e);
            let y4 = clamp_magnitude(y + h * k3, y, y_max);
            let k4 = self.riccati_rhs(x + h, y4, e);
            let next = y + (h / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4);
            y = clamp_magnitude(next, y, y_max);
            x += h;
        }

        y
    }

    /// 计算单个能量下的 (R, T)
    pub fn scattering_coeffs(&self, e: f64) -> (f64, f64) {
        // 左侧必须有传播通道，才有从左入射的波
        if self.radicand(e, self.v_l) <= 0.0 {
            return (0.0, 0.0);
        }

        let y_l = self.integrate_riccati(e);
        let k_l = self.asymptotic_k(e, self.v_l);
        let r_prob = reflection_probability(y_l, k_l, self.config.xmin, self.config.eps_denom);

        // 右侧倏逝：全反射
        if self.radicand(e, self.v_r) <= 0.0 {
            return (1.0, 0.0);
        }

        (r_prob, 1.0 - r_prob)
    }

    /// 在 [e_min, e_max] 上均匀取 n_e 个能量点计算 R(E), T(E)
    pub fn compute_rt_spectrum(&self, e_min: f64, e_max: f64, n_e: usize) -> Result<Spectrum> {
        let energies = energy_grid(e_min, e_max, n_e)?;
        let pairs = energies.iter().map(|&e| self.scattering_coeffs(e)).collect();
        Spectrum::from_pairs(energies, pairs)
    }

    /// 与 [`Self::compute_rt_spectrum`] 相同，但各能量点并行计算
    pub fn compute_rt_spectrum_parallel(
        &self,
        e_min: f64,
        e_max: f64,
        n_e: usize,
        runner: &BatchRunner,
    ) -> Result<Spectrum> {
        let energies = energy_grid(e_min, e_max, n_e)?;
        let pairs = runner.run(&energies, |&e| self.scattering_coeffs(e))?;
        Spectrum::from_pairs(energies, pairs)
    }
}

/// 将 y 的模长限制在 Y_MAX 以内并保持相位
///
/// 非有限值沿 `fallback` 的方向取模长 Y_MAX。
fn clamp_magnitude(y: Complex64, fallback: Complex64, y_max: f64) -> Complex64 {
    let mag = y.norm();
    if mag.is_finite() {
        if mag > y_max {
            y * (y_max / mag)
        } else {
            y
        }
    } else {
        let fallback_mag = fallback.norm();
        if fallback_mag.is_finite() && fallback_mag > 0.0 {
            fallback * (y_max / fallback_mag)
        } else {
            Complex64::new(y_max, 0.0)
        }
    }
}

/// 左边界匹配：r = e^{2ik_L·XMIN}(ik_L - y_L)/(y_L + ik_L)，返回 |r|²
///
/// 分母模长小于 `eps_denom` 时加上 `eps_denom`。
fn reflection_probability(y_l: Complex64, k_l: Complex64, xmin: f64, eps_denom: f64) -> f64 {
    let ik_l = Complex64::i() * k_l;
    let phase = (2.0 * ik_l * xmin).exp();
    let mut denom = y_l + ik_l;
    if denom.norm() < eps_denom {
        denom += eps_denom;
    }
    // 按模长相除，|y_L| 接近 f64 上限时不溢出
    let ratio = (ik_l - y_l).norm() / denom.norm();
    (phase.norm() * ratio).powi(2)
}

/// 含两端点的均匀能量网格
pub fn energy_grid(e_min: f64, e_max: f64, n_e: usize) -> Result<Vec<f64>> {
    KgError::check_finite("E_min", e_min)?;
    KgError::check_finite("E_max", e_max)?;
    if e_min >= e_max {
        return Err(KgError::InvalidParameter(format!(
            "E_min must be less than E_max; got E_min = {}, E_max = {}",
            e_min, e_max
        )));
    }
    if n_e < 2 {
        return Err(KgError::InvalidParameter(format!(
            "nE must be at least 2; got {}",
            n_e
        )));
    }

    let span = e_max - e_min;
    let last = n_e - 1;
    let grid = (0..n_e)
        .map(|i| {
            if i == last {
                e_max
            } else {
                e_min + span * i as f64 / last as f64
            }
        })
        .collect();

    Ok(grid)
}
