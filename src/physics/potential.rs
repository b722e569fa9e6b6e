//! # 一维势垒函数
//!
//! 提供散射计算所需的势能 V(x)、两侧渐近极限 V_L / V_R 以及显示标签。
//!
//! ## 支持的势形
//! - `woods-saxon`: 平滑台阶 V0 / (1 + exp(-(x - x0)/a))
//! - `tanh`: a·tanh(b·x)
//! - `exp-tanh`: a·exp(b·tanh(c·x))
//! - `flat`: 常数势 V0（无势垒，用于校验）
//!
//! 任何满足 [`Potential`] 约定的类型都可以交给 `RiccatiModel` 使用，
//! 但 `left_limit` / `right_limit` 必须与 `value` 的真实渐近行为一致。
//!
//! ## 依赖关系
//! - 被 `physics/riccati.rs` 使用
//! - 被 `commands/` 通过 `build_potential` 构造

use crate::error::{KgError, Result};

/// 势能函数约定
pub trait Potential: Send + Sync {
    /// V(x)
    fn value(&self, x: f64) -> f64;

    /// x → -∞ 的极限 V_L
    fn left_limit(&self) -> f64;

    /// x → +∞ 的极限 V_R
    fn right_limit(&self) -> f64;

    /// 显示标签（不参与计算）
    fn label(&self) -> String;

    /// 对一组坐标批量求值
    fn sample(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.value(x)).collect()
    }
}

/// tanh 势：V(x) = a·tanh(b·x)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TanhPotential {
    /// 幅度
    pub a: f64,
    /// 陡度
    pub b: f64,
}

impl Potential for TanhPotential {
    fn value(&self, x: f64) -> f64 {
        self.a * (self.b * x).tanh()
    }

    fn left_limit(&self) -> f64 {
        -self.a
    }

    fn right_limit(&self) -> f64 {
        self.a
    }

    fn label(&self) -> String {
        format!("V(x) = {} tanh({} x)", self.a, self.b)
    }
}

/// 指数-tanh 势：V(x) = a·exp(b·tanh(c·x))
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpTanhPotential {
    /// 幅度
    pub a: f64,
    /// 指数强度
    pub b: f64,
    /// 陡度
    pub c: f64,
}

impl Potential for ExpTanhPotential {
    fn value(&self, x: f64) -> f64 {
        self.a * (self.b * (self.c * x).tanh()).exp()
    }

    fn left_limit(&self) -> f64 {
        self.a * (-self.b).exp()
    }

    fn right_limit(&self) -> f64 {
        self.a * self.b.exp()
    }

    fn label(&self) -> String {
        format!("V(x) = {} exp({} tanh({} x))", self.a, self.b, self.c)
    }
}

/// Woods–Saxon 平滑台阶：V(x) = V0 / (1 + exp(-(x - x0)/a))
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WoodsSaxonPotential {
    /// 台阶高度
    pub v0: f64,
    /// 弥散宽度
    pub a: f64,
    /// 台阶中心
    pub x0: f64,
}

impl Potential for WoodsSaxonPotential {
    fn value(&self, x: f64) -> f64 {
        self.v0 / (1.0 + (-(x - self.x0) / self.a).exp())
    }

    fn left_limit(&self) -> f64 {
        0.0
    }

    fn right_limit(&self) -> f64 {
        self.v0
    }

    fn label(&self) -> String {
        format!("V(x) = {} / (1 + exp(-(x - {}) / {}))", self.v0, self.x0, self.a)
    }
}

/// 常数势：V(x) = V0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantPotential {
    pub v0: f64,
}

impl Potential for ConstantPotential {
    fn value(&self, _x: f64) -> f64 {
        self.v0
    }

    fn left_limit(&self) -> f64 {
        self.v0
    }

    fn right_limit(&self) -> f64 {
        self.v0
    }

    fn label(&self) -> String {
        format!("V(x) = {}", self.v0)
    }
}

/// 势形参数（来自命令行）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParams {
    pub v0: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub x0: f64,
}

/// 势形名称
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PotentialShape {
    WoodsSaxon,
    Tanh,
    ExpTanh,
    Flat,
}

impl std::fmt::Display for PotentialShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PotentialShape::WoodsSaxon => write!(f, "woods-saxon"),
            PotentialShape::Tanh => write!(f, "tanh"),
            PotentialShape::ExpTanh => write!(f, "exp-tanh"),
            PotentialShape::Flat => write!(f, "flat"),
        }
    }
}

/// 根据势形与参数构造势能函数
pub fn build_potential(shape: PotentialShape, p: &ShapeParams) -> Result<Box<dyn Potential>> {
    let potential: Box<dyn Potential> = match shape {
        PotentialShape::WoodsSaxon => {
            KgError::check_finite("V0", p.v0)?;
            KgError::check_finite("x0", p.x0)?;
            // 弥散宽度为零时台阶退化为不连续阶跃
            KgError::check_positive("a (diffuseness)", p.a)?;
            Box::new(WoodsSaxonPotential {
                v0: p.v0,
                a: p.a,
                x0: p.x0,
            })
        }
        PotentialShape::Tanh => {
            KgError::check_finite("a", p.a)?;
            KgError::check_finite("b", p.b)?;
            Box::new(TanhPotential { a: p.a, b: p.b })
        }
        PotentialShape::ExpTanh => {
            KgError::check_finite("a", p.a)?;
            KgError::check_finite("b", p.b)?;
            KgError::check_finite("c", p.c)?;
            Box::new(ExpTanhPotential {
                a: p.a,
                b: p.b,
                c: p.c,
            })
        }
        PotentialShape::Flat => {
            KgError::check_finite("V0", p.v0)?;
            Box::new(ConstantPotential { v0: p.v0 })
        }
    };

    Ok(potential)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ShapeParams {
        ShapeParams {
            v0: 3.0,
            a: 2.0,
            b: 1.5,
            c: 0.5,
            x0: 0.0,
        }
    }

    #[test]
    fn test_tanh_limits() {
        let v = TanhPotential { a: 2.0, b: 1.0 };
        assert!((v.value(0.0)).abs() < 1e-12);
        assert!((v.value(-50.0) - v.left_limit()).abs() < 1e-9);
        assert!((v.value(50.0) - v.right_limit()).abs() < 1e-9);
    }

    #[test]
    fn test_exp_tanh_limits() {
        let v = ExpTanhPotential {
            a: 1.0,
            b: 0.5,
            c: 2.0,
        };
        assert!((v.value(0.0) - 1.0).abs() < 1e-12);
        assert!((v.value(-50.0) - v.left_limit()).abs() < 1e-9);
        assert!((v.value(50.0) - v.right_limit()).abs() < 1e-9);
    }

    #[test]
    fn test_woods_saxon_limits() {
        let v = WoodsSaxonPotential {
            v0: 5.0,
            a: 0.3,
            x0: 1.0,
        };
        assert!((v.value(1.0) - 2.5).abs() < 1e-12);
        assert!((v.value(-50.0) - v.left_limit()).abs() < 1e-9);
        assert!((v.value(50.0) - v.right_limit()).abs() < 1e-9);
    }

    #[test]
    fn test_sample_matches_value() {
        let v = TanhPotential { a: 1.0, b: 2.0 };
        let xs = [-1.0, 0.0, 0.5];
        let vs = v.sample(&xs);
        assert_eq!(vs.len(), 3);
        for (x, vx) in xs.iter().zip(&vs) {
            assert_eq!(*vx, v.value(*x));
        }
    }

    #[test]
    fn test_build_potential_labels() {
        let p = params();
        let tanh = build_potential(PotentialShape::Tanh, &p).unwrap();
        assert!(tanh.label().contains("tanh"));
        assert_eq!(tanh.right_limit(), 2.0);

        let flat = build_potential(PotentialShape::Flat, &p).unwrap();
        assert_eq!(flat.left_limit(), 3.0);
        assert_eq!(flat.right_limit(), 3.0);
    }

    #[test]
    fn test_build_woods_saxon_rejects_zero_width() {
        let mut p = params();
        p.a = 0.0;
        assert!(build_potential(PotentialShape::WoodsSaxon, &p).is_err());
    }
}
