// ==========================================
// 司法休假优化系统 - 区间评估器
// ==========================================
// 职责: 计算任意日期区间的日构成与效率
// 输入: [start, end]
// 输出: VacationPeriod
// ==========================================
// 红线: 纯函数,无副作用,结果确定
// 红线: 既是节假日又是周末的日期计为 holiday
// ==========================================

use crate::calendar::HolidayCalendar;
use crate::config::OptimizerConfig;
use crate::domain::{DateRange, DayBreakdown, VacationPeriod};
use crate::engine::scoring::{policy_for, EfficiencyPolicy};
use crate::perf;
use chrono::NaiveDate;
use std::sync::Arc;

// ==========================================
// PeriodEvaluator - 区间评估器
// ==========================================
pub struct PeriodEvaluator<C>
where
    C: HolidayCalendar,
{
    calendar: Arc<C>,
    policy: Arc<dyn EfficiencyPolicy>,
    min_period_days: i64,
}

impl<C> Clone for PeriodEvaluator<C>
where
    C: HolidayCalendar,
{
    fn clone(&self) -> Self {
        Self {
            calendar: self.calendar.clone(),
            policy: self.policy.clone(),
            min_period_days: self.min_period_days,
        }
    }
}

impl<C> PeriodEvaluator<C>
where
    C: HolidayCalendar,
{
    /// 创建评估器
    ///
    /// # 参数
    /// - calendar: 只读日历
    /// - config: 引擎配置（评分策略 + 最短天数）
    pub fn new(calendar: Arc<C>, config: &OptimizerConfig) -> Self {
        Self {
            calendar,
            policy: policy_for(config.scoring_policy),
            min_period_days: config.min_period_days,
        }
    }

    /// 使用指定评分策略创建评估器
    pub fn with_policy(
        calendar: Arc<C>,
        policy: Arc<dyn EfficiencyPolicy>,
        min_period_days: i64,
    ) -> Self {
        Self {
            calendar,
            policy,
            min_period_days,
        }
    }

    pub fn calendar(&self) -> &Arc<C> {
        &self.calendar
    }

    pub fn min_period_days(&self) -> i64 {
        self.min_period_days
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 统计区间日构成
    ///
    /// 逐日分类: 节假日优先,其次周末,其余为工作日
    pub fn breakdown(&self, start: NaiveDate, end: NaiveDate) -> DayBreakdown {
        let mut breakdown = DayBreakdown::default();

        for date in DateRange::new_unchecked(start, end).iter_days() {
            breakdown.total_days += 1;
            if self.calendar.is_holiday(date).is_some() {
                breakdown.holiday_days += 1;
                if !self.calendar.is_weekend(date) {
                    breakdown.holidays_on_weekdays += 1;
                }
            } else if self.calendar.is_weekend(date) {
                breakdown.weekend_days += 1;
            } else {
                breakdown.work_days += 1;
            }
        }

        breakdown
    }

    /// 评估区间
    ///
    /// # 参数
    /// - start/end: 区间首尾（调用方应保证 start ≤ end）
    ///
    /// # 返回
    /// - 正常区间: 完整的 VacationPeriod
    /// - 倒置区间: 标记对象（计数为 0,无效,原因 inverted）
    pub fn evaluate(&self, start: NaiveDate, end: NaiveDate) -> VacationPeriod {
        perf::record_evaluation();

        if start > end {
            return VacationPeriod::inverted(start, end);
        }

        let breakdown = self.breakdown(start, end);
        let efficiency = self.policy.efficiency(&breakdown, start, end);
        VacationPeriod::from_breakdown(start, end, breakdown, efficiency, self.min_period_days)
    }

    /// 评估区间（DateRange 版本）
    pub fn evaluate_range(&self, range: &DateRange) -> VacationPeriod {
        self.evaluate(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::InMemoryCalendar;
    use crate::domain::{EfficiencyRating, Holiday};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn evaluator(holidays: Vec<Holiday>) -> PeriodEvaluator<InMemoryCalendar> {
        PeriodEvaluator::new(
            Arc::new(InMemoryCalendar::from_holidays(holidays)),
            &OptimizerConfig::default(),
        )
    }

    #[test]
    fn test_labour_day_week() {
        // 2024-05-01 周三 劳动节 .. 2024-05-05 周日
        let ev = evaluator(vec![Holiday::national(d(2024, 5, 1), "Dia do Trabalho")]);
        let p = ev.evaluate(d(2024, 5, 1), d(2024, 5, 5));

        assert_eq!(p.total_days, 5);
        assert_eq!(p.work_days, 2);
        assert_eq!(p.weekend_days, 2);
        assert_eq!(p.holiday_days, 1);
        assert!((p.efficiency - 0.6).abs() < 1e-9);
        assert_eq!(p.rating, EfficiencyRating::High);
        assert!(p.is_valid);
        assert!(p.invalid_reason.is_none());
    }

    #[test]
    fn test_two_plain_weeks() {
        // 2024-07-01 周一 .. 2024-07-14 周日
        let ev = evaluator(vec![]);
        let p = ev.evaluate(d(2024, 7, 1), d(2024, 7, 14));

        assert_eq!(p.work_days, 10);
        assert_eq!(p.weekend_days, 4);
        assert_eq!(p.holiday_days, 0);
        assert!((p.efficiency - 0.2857).abs() < 1e-4);
        assert_eq!(p.rating, EfficiencyRating::Low);
    }

    #[test]
    fn test_weekend_holiday_counts_as_holiday() {
        // 2024-04-21 周日 Tiradentes
        let ev = evaluator(vec![Holiday::national(d(2024, 4, 21), "Tiradentes")]);
        let p = ev.evaluate(d(2024, 4, 20), d(2024, 4, 21));
        assert_eq!(p.holiday_days, 1);
        assert_eq!(p.weekend_days, 1);
        assert_eq!(p.work_days, 0);

        let b = ev.breakdown(d(2024, 4, 20), d(2024, 4, 21));
        assert_eq!(b.holidays_on_weekdays, 0);
    }

    #[test]
    fn test_single_day_is_invalid_but_well_formed() {
        let ev = evaluator(vec![]);
        let p = ev.evaluate(d(2024, 7, 3), d(2024, 7, 3));
        assert_eq!(p.total_days, 1);
        assert!(!p.is_valid);
        assert_eq!(p.invalid_reason.as_deref(), Some("too_short"));
        assert_eq!(p.total_days, p.work_days + p.weekend_days + p.holiday_days);
    }

    #[test]
    fn test_zero_work_days_has_zero_efficiency() {
        let ev = evaluator(vec![]);
        let p = ev.evaluate(d(2024, 7, 6), d(2024, 7, 7));
        assert_eq!(p.work_days, 0);
        assert_eq!(p.efficiency, 0.0);
    }

    #[test]
    fn test_inverted_range_marker() {
        let ev = evaluator(vec![]);
        let p = ev.evaluate(d(2024, 5, 10), d(2024, 5, 5));
        assert!(p.is_inverted());
        assert!(!p.is_valid);
        assert_eq!(p.total_days, 0);
        assert_eq!(p.invalid_reason.as_deref(), Some("inverted"));
    }

    #[test]
    fn test_deterministic() {
        let ev = evaluator(vec![Holiday::national(d(2024, 5, 30), "Corpus Christi")]);
        let a = ev.evaluate(d(2024, 5, 27), d(2024, 6, 2));
        let b = ev.evaluate(d(2024, 5, 27), d(2024, 6, 2));
        assert_eq!(a, b);
    }
}
