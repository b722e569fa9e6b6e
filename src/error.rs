//! # 统一错误处理模块
//!
//! 定义 kgsolver 的所有错误类型，使用 `thiserror` 派生。
//!
//! 散射系数计算本身从不报错（奇点正则化、哨兵值返回），
//! 这里的错误只来自参数校验和输出适配层。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// kgsolver 统一错误类型
#[derive(Error, Debug)]
pub enum KgError {
    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Sequence length mismatch: {name} has {found} samples, expected {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 绘图错误
    // ─────────────────────────────────────────────────────────────
    #[error("Plot rendering failed: {0}")]
    PlotError(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl KgError {
    /// 校验有限正数
    pub(crate) fn check_positive(name: &str, value: f64) -> Result<()> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(KgError::InvalidParameter(format!(
                "{} must be a finite positive number; got {}",
                name, value
            )))
        }
    }

    /// 校验有限数
    pub(crate) fn check_finite(name: &str, value: f64) -> Result<()> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(KgError::InvalidParameter(format!(
                "{} must be finite; got {}",
                name, value
            )))
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, KgError>;
