use crate::config::config_keys;
use std::cell::Cell;
use std::time::Instant;

thread_local! {
    static PERF_DEPTH: Cell<u32> = Cell::new(0);
    static EVAL_COUNT: Cell<u64> = Cell::new(0);
}

/// 记录一次区间评估（由 PeriodEvaluator 调用）
pub fn record_evaluation() {
    let active = PERF_DEPTH.with(|d| d.get() > 0);
    if !active {
        return;
    }
    EVAL_COUNT.with(|c| c.set(c.get().saturating_add(1)));
}

/// 慢扫描阈值（毫秒）
///
/// - `VACATION_OPTIMIZER_SLOW_SCAN_MS=100` 显式配置
/// - 未配置时 Debug 50ms / Release 200ms
fn slow_scan_threshold_ms() -> u64 {
    std::env::var(config_keys::ENV_SLOW_SCAN_MS)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(if cfg!(debug_assertions) { 50 } else { 200 })
}

/// 性能统计 Guard：记录 elapsed_ms + 区间评估次数
///
/// 使用方式：
/// ```ignore
/// let _perf = vacation_optimizer::perf::PerfGuard::new("fraction.scan_year");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
    eval_start: u64,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        PERF_DEPTH.with(|d| d.set(d.get().saturating_add(1)));
        let eval_start = EVAL_COUNT.with(|c| c.get());
        Self {
            op,
            start: Instant::now(),
            eval_start,
        }
    }

    /// 当前 Guard 存活期间的评估次数
    pub fn evaluations(&self) -> u64 {
        EVAL_COUNT.with(|c| c.get()).saturating_sub(self.eval_start)
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_millis() as u64;
        let evaluations = self.evaluations();

        tracing::info!(
            target: "perf",
            op = self.op,
            elapsed_ms,
            evaluations,
            "done"
        );

        let threshold = slow_scan_threshold_ms();
        if threshold > 0 && elapsed_ms >= threshold {
            tracing::warn!(
                target: "slow_scan",
                op = self.op,
                elapsed_ms,
                evaluations,
                "slow scan"
            );
        }

        PERF_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_only_inside_guard() {
        record_evaluation();
        let guard = PerfGuard::new("test.scan");
        record_evaluation();
        record_evaluation();
        assert_eq!(guard.evaluations(), 2);
    }

    #[test]
    fn test_nested_guards() {
        let outer = PerfGuard::new("test.outer");
        record_evaluation();
        {
            let inner = PerfGuard::new("test.inner");
            record_evaluation();
            assert_eq!(inner.evaluations(), 1);
        }
        assert_eq!(outer.evaluations(), 2);
    }
}
