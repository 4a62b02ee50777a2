// ==========================================
// 司法休假优化系统 - 效率评分策略
// ==========================================
// 线性公式 1 - 工作日/总天数 为默认策略,接入建议引擎
// 指数惩罚 / 混合惩罚 为可选策略,由配置选择
// ==========================================
// 所有策略输出夹到 [0, 1]; 工作日为 0 时效率为 0
// ==========================================

use crate::domain::DayBreakdown;
use crate::engine::strategy::ScoringPolicyKind;
use chrono::{Datelike, NaiveDate, Weekday};
use std::sync::Arc;

/// 效率评分策略
pub trait EfficiencyPolicy: Send + Sync {
    fn kind(&self) -> ScoringPolicyKind;

    /// 计算效率
    ///
    /// # 参数
    /// - breakdown: 区间日构成
    /// - start/end: 区间首尾（用于位置加成）
    fn efficiency(&self, breakdown: &DayBreakdown, start: NaiveDate, end: NaiveDate) -> f64;
}

/// 按配置选择策略
pub fn policy_for(kind: ScoringPolicyKind) -> Arc<dyn EfficiencyPolicy> {
    match kind {
        ScoringPolicyKind::Linear => Arc::new(LinearPolicy),
        ScoringPolicyKind::ExponentialPenalty => Arc::new(ExponentialPenaltyPolicy),
        ScoringPolicyKind::HybridPenalty => Arc::new(HybridPenaltyPolicy),
    }
}

// ==========================================
// LinearPolicy - 线性效率
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearPolicy;

impl EfficiencyPolicy for LinearPolicy {
    fn kind(&self) -> ScoringPolicyKind {
        ScoringPolicyKind::Linear
    }

    fn efficiency(&self, breakdown: &DayBreakdown, _start: NaiveDate, _end: NaiveDate) -> f64 {
        if breakdown.work_days <= 0 || breakdown.total_days <= 0 {
            return 0.0;
        }
        (1.0 - breakdown.work_days as f64 / breakdown.total_days as f64).clamp(0.0, 1.0)
    }
}

// ==========================================
// 惩罚类策略公共部分
// ==========================================
// r = 1 + (工作日节假日 + 位置价值 + 周末激活 - 惩罚(n)) / 工作日
// n = 区间内被消耗的周末天数
// 映射: efficiency = 1 - 1/r（r ≤ 1 时为 0）

const FIRST_DAY_PENALTY: f64 = 0.35;
const PENALTY_GROWTH: f64 = 1.8;

fn positional_value(start: NaiveDate, end: NaiveDate) -> f64 {
    let starts_monday = start.weekday() == Weekday::Mon;
    let ends_friday = end.weekday() == Weekday::Fri;

    let mut strategic = 0.0;
    let mut activation = 0.0;
    if starts_monday {
        strategic += 0.3;
        activation += 0.6;
    }
    if ends_friday {
        strategic += 0.3;
        activation += 0.6;
    }
    if starts_monday && ends_friday {
        strategic += 0.3;
    }
    strategic + activation
}

fn penalized_efficiency(
    breakdown: &DayBreakdown,
    start: NaiveDate,
    end: NaiveDate,
    penalty: f64,
) -> f64 {
    if breakdown.work_days <= 0 {
        return 0.0;
    }
    let gain = breakdown.holidays_on_weekdays as f64 + positional_value(start, end) - penalty;
    let ratio = 1.0 + gain / breakdown.work_days as f64;
    if ratio <= 1.0 {
        return 0.0;
    }
    (1.0 - 1.0 / ratio).clamp(0.0, 1.0)
}

/// 纯指数惩罚: 0.35 × 1.8^(n-1)
pub fn exponential_penalty(wasted_days: i64) -> f64 {
    if wasted_days <= 0 {
        return 0.0;
    }
    FIRST_DAY_PENALTY * PENALTY_GROWTH.powi((wasted_days - 1) as i32)
}

/// 混合惩罚: 首日 0.35,后续每日按 1.8 倍递增累加
pub fn hybrid_penalty(wasted_days: i64) -> f64 {
    if wasted_days <= 0 {
        return 0.0;
    }
    let additional: f64 = (0..wasted_days - 1)
        .map(|i| FIRST_DAY_PENALTY * PENALTY_GROWTH.powi(i as i32))
        .sum();
    FIRST_DAY_PENALTY + additional
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialPenaltyPolicy;

impl EfficiencyPolicy for ExponentialPenaltyPolicy {
    fn kind(&self) -> ScoringPolicyKind {
        ScoringPolicyKind::ExponentialPenalty
    }

    fn efficiency(&self, breakdown: &DayBreakdown, start: NaiveDate, end: NaiveDate) -> f64 {
        let penalty = exponential_penalty(breakdown.weekend_days);
        penalized_efficiency(breakdown, start, end, penalty)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HybridPenaltyPolicy;

impl EfficiencyPolicy for HybridPenaltyPolicy {
    fn kind(&self) -> ScoringPolicyKind {
        ScoringPolicyKind::HybridPenalty
    }

    fn efficiency(&self, breakdown: &DayBreakdown, start: NaiveDate, end: NaiveDate) -> f64 {
        let penalty = hybrid_penalty(breakdown.weekend_days);
        penalized_efficiency(breakdown, start, end, penalty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn breakdown(total: i64, work: i64, weekend: i64, holiday: i64) -> DayBreakdown {
        DayBreakdown {
            total_days: total,
            work_days: work,
            weekend_days: weekend,
            holiday_days: holiday,
            holidays_on_weekdays: 0,
        }
    }

    #[test]
    fn test_linear() {
        let b = breakdown(14, 10, 4, 0);
        let e = LinearPolicy.efficiency(&b, d(2024, 7, 1), d(2024, 7, 14));
        assert!((e - 4.0 / 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_zero_work_days_is_zero() {
        let b = breakdown(2, 0, 2, 0);
        assert_eq!(LinearPolicy.efficiency(&b, d(2024, 7, 6), d(2024, 7, 7)), 0.0);
    }

    #[test]
    fn test_penalty_curves() {
        assert_eq!(exponential_penalty(0), 0.0);
        assert!((exponential_penalty(1) - 0.35).abs() < 1e-9);
        assert!((exponential_penalty(3) - 0.35 * 1.8 * 1.8).abs() < 1e-9);
        assert!((hybrid_penalty(1) - 0.35).abs() < 1e-9);
        // 0.35 + 0.35 + 0.35*1.8
        assert!((hybrid_penalty(3) - (0.35 + 0.35 + 0.63)).abs() < 1e-9);
    }

    #[test]
    fn test_penalty_policies_stay_in_unit_interval() {
        // 周一到周五,无周末
        let monday_to_friday = breakdown(5, 5, 0, 0);
        for kind in [ScoringPolicyKind::ExponentialPenalty, ScoringPolicyKind::HybridPenalty] {
            let policy = policy_for(kind);
            let e = policy.efficiency(&monday_to_friday, d(2024, 7, 1), d(2024, 7, 5));
            assert!(e > 0.0 && e <= 1.0, "{:?} -> {}", kind, e);

            // 大量周末消耗 → 惩罚压到 0
            let wasteful = breakdown(9, 5, 4, 0);
            let e = policy.efficiency(&wasteful, d(2024, 7, 3), d(2024, 7, 11));
            assert_eq!(e, 0.0);
        }
    }

    #[test]
    fn test_policy_for_kind() {
        assert_eq!(policy_for(ScoringPolicyKind::Linear).kind(), ScoringPolicyKind::Linear);
        assert_eq!(
            policy_for(ScoringPolicyKind::HybridPenalty).kind(),
            ScoringPolicyKind::HybridPenalty
        );
    }
}
