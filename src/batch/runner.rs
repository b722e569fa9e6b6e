//! # 并行执行器
//!
//! 并行执行互相独立的计算任务（如逐能量点的散射系数）。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代，结果顺序与输入顺序一致
//! - 可选进度条显示
//!
//! ## 依赖关系
//! - 被 `physics/riccati.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{KgError, Result};
use crate::utils::progress;

use rayon::prelude::*;

/// 并行执行器
#[derive(Debug, Clone)]
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
    /// 进度条标签（None 时不显示）
    progress: Option<String>,
}

impl BatchRunner {
    /// 创建新的执行器，`jobs == 0` 时使用全部 CPU
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self {
            jobs,
            progress: None,
        }
    }

    /// 显示进度条
    pub fn with_progress(mut self, message: &str) -> Self {
        self.progress = Some(message.to_string());
        self
    }

    /// 实际使用的线程数
    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理输入列表，按输入顺序返回结果
    pub fn run<T, R, F>(&self, inputs: &[T], processor: F) -> Result<Vec<R>>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        let pb = self
            .progress
            .as_deref()
            .map(|msg| progress::create_progress_bar(inputs.len() as u64, msg));

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| KgError::Other(format!("Failed to build thread pool: {}", e)))?;

        let results: Vec<R> = pool.install(|| {
            inputs
                .par_iter()
                .map(|input| {
                    let result = processor(input);
                    if let Some(pb) = &pb {
                        pb.inc(1);
                    }
                    result
                })
                .collect()
        });

        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_preserves_order() {
        let inputs: Vec<u64> = (0..1000).collect();
        let runner = BatchRunner::new(4);
        let out = runner.run(&inputs, |x| x * x).unwrap();
        assert_eq!(out.len(), inputs.len());
        for (i, v) in out.iter().enumerate() {
            assert_eq!(*v, (i as u64) * (i as u64));
        }
    }

    #[test]
    fn test_auto_jobs() {
        let runner = BatchRunner::new(0);
        assert!(runner.jobs() >= 1);
    }
}
