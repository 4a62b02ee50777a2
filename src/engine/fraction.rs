// ==========================================
// 司法休假优化系统 - 全年分段优化器
// ==========================================
// 职责: 在全年挑选若干个互不重叠的定长高效率窗口
// 输入: 年份 + 段数 + 每段长度
// 输出: Option<FractionedSelection>
// ==========================================
// 流程:
//   1) 枚举全年所有定长窗口,丢弃无工作日的窗口
//   2) 位置调整后降序排序（稳定排序）
//   3) 优先子集（非工作日 ≥ 2）足够大时使用优先子集
//   4) 贪心挑选不重叠窗口,不足 count 个时按实际返回
//   5) 与 6 月 1 日起的等长连续参照区间比较
// 注: 配置了休庭期时,与其相交的窗口不参与枚举
// ==========================================

use crate::calendar::HolidayCalendar;
use crate::domain::{DateRange, FractionedSelection, VacationPeriod};
use crate::engine::blackout::RecessBlackout;
use crate::engine::evaluator::PeriodEvaluator;
use crate::perf::PerfGuard;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::{debug, info, instrument};

const START_ON_WEEKEND: f64 = -0.10;
const START_MONDAY: f64 = 0.05;
const END_FRIDAY: f64 = 0.05;

/// 进入优先子集所需的最少非工作日
const PRIORITY_MIN_NON_WORK: i64 = 2;

/// 参照区间起点（当年 6 月 1 日）
const REFERENCE_MONTH: u32 = 6;
const REFERENCE_DAY: u32 = 1;

// ==========================================
// FractionCandidate - 带调整分的候选窗口
// ==========================================
#[derive(Debug, Clone)]
struct FractionCandidate {
    period: VacationPeriod,
    adjusted_efficiency: f64,
}

/// 分段候选的位置调整
fn fraction_positional_bonus(period: &VacationPeriod) -> f64 {
    let mut bonus = 0.0;
    match period.start.weekday() {
        Weekday::Sat | Weekday::Sun => bonus += START_ON_WEEKEND,
        Weekday::Mon => bonus += START_MONDAY,
        _ => {}
    }
    if period.end.weekday() == Weekday::Fri {
        bonus += END_FRIDAY;
    }
    bonus
}

// ==========================================
// FractionOptimizer - 全年分段优化器
// ==========================================
pub struct FractionOptimizer<C>
where
    C: HolidayCalendar,
{
    evaluator: PeriodEvaluator<C>,
    blackout: Option<RecessBlackout>,
}

impl<C> FractionOptimizer<C>
where
    C: HolidayCalendar,
{
    pub fn new(evaluator: PeriodEvaluator<C>) -> Self {
        Self {
            evaluator,
            blackout: None,
        }
    }

    /// 枚举窗口时跳过休庭期
    pub fn with_blackout(evaluator: PeriodEvaluator<C>, blackout: RecessBlackout) -> Self {
        Self {
            evaluator,
            blackout: Some(blackout),
        }
    }

    /// 挑选全年最优分段组合
    ///
    /// # 参数
    /// - year: 年份
    /// - count: 目标段数
    /// - length: 每段天数
    ///
    /// # 返回
    /// - Some: 至少选中一段（可能少于 count）
    /// - None: 没有任何可用窗口
    #[instrument(skip(self))]
    pub fn optimize(&self, year: i32, count: usize, length: i64) -> Option<FractionedSelection> {
        let _perf = PerfGuard::new("fraction.optimize");

        if count == 0 || length <= 0 {
            return None;
        }

        let mut candidates: Vec<FractionCandidate> = self
            .windows(year, length)
            .into_iter()
            .filter(|p| p.work_days > 0)
            .map(|period| FractionCandidate {
                adjusted_efficiency: period.efficiency + fraction_positional_bonus(&period),
                period,
            })
            .collect();

        // sort_by 为稳定排序: 同分时保持日期先后
        candidates.sort_by(|a, b| b.adjusted_efficiency.total_cmp(&a.adjusted_efficiency));

        let priority: Vec<&FractionCandidate> = candidates
            .iter()
            .filter(|c| c.period.non_work_days() >= PRIORITY_MIN_NON_WORK)
            .collect();
        let pool: Vec<&FractionCandidate> = if priority.len() >= count * 2 {
            priority
        } else {
            candidates.iter().collect()
        };

        let mut selected: Vec<VacationPeriod> = Vec::with_capacity(count);
        for candidate in pool {
            if selected.len() >= count {
                break;
            }
            if selected.iter().any(|s| s.overlaps(&candidate.period)) {
                continue;
            }
            selected.push(candidate.period.clone());
        }

        if selected.is_empty() {
            debug!(year, count, length, "没有可用的分段窗口");
            return None;
        }

        selected.sort_by_key(|p| p.start);

        let total_days: i64 = selected.iter().map(|p| p.total_days).sum();
        let total_work: i64 = selected.iter().map(|p| p.work_days).sum();
        let combined_efficiency = if total_days > 0 {
            1.0 - total_work as f64 / total_days as f64
        } else {
            0.0
        };

        let reference_period = self.reference_period(year, total_days);
        let efficiency_gain = combined_efficiency - reference_period.efficiency;

        info!(
            year,
            requested = count,
            selected = selected.len(),
            combined_efficiency,
            efficiency_gain,
            "全年分段选择完成"
        );

        Some(FractionedSelection {
            periods: selected,
            combined_efficiency,
            efficiency_gain,
            reference_period,
            theoretical_max: Self::theoretical_max_efficiency(total_days),
        })
    }

    /// 全年同长度效率最高的若干区间
    ///
    /// # 参数
    /// - year: 年份
    /// - length: 区间天数
    /// - count: 最多返回条数
    ///
    /// # 返回
    /// - 仅合法区间,按效率降序（同分保持日期先后）
    #[instrument(skip(self))]
    pub fn find_optimal_periods(&self, year: i32, length: i64, count: usize) -> Vec<VacationPeriod> {
        let _perf = PerfGuard::new("fraction.find_optimal_periods");

        let mut periods: Vec<VacationPeriod> = self
            .windows(year, length)
            .into_iter()
            .filter(|p| p.is_valid)
            .collect();
        periods.sort_by(|a, b| b.efficiency.total_cmp(&a.efficiency));
        periods.truncate(count);
        periods
    }

    /// 理论效率上限
    ///
    /// 周末 floor(t·2/7) + 节假日 floor(t·12/365)
    pub fn theoretical_max_efficiency(total_days: i64) -> f64 {
        if total_days <= 0 {
            return 0.0;
        }
        let weekend_days = total_days * 2 / 7;
        let holidays = total_days * 12 / 365;
        ((weekend_days + holidays) as f64 / total_days as f64).clamp(0.0, 1.0)
    }

    /// 全年所有起点在 [1/1, 12/31 - length + 1] 的定长窗口
    fn windows(&self, year: i32, length: i64) -> Vec<VacationPeriod> {
        let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        ) else {
            return Vec::new();
        };
        if length <= 0 {
            return Vec::new();
        }

        let span = Duration::days(length - 1);
        let last_start = last - span;
        let mut windows = Vec::new();
        let mut start = first;
        while start <= last_start {
            let range = DateRange::new_unchecked(start, start + span);
            let blocked = self
                .blackout
                .as_ref()
                .is_some_and(|b| b.intersects(&range));
            if !blocked {
                windows.push(self.evaluator.evaluate_range(&range));
            }
            start += Duration::days(1);
        }
        windows
    }

    fn reference_period(&self, year: i32, total_days: i64) -> VacationPeriod {
        let start = NaiveDate::from_ymd_opt(year, REFERENCE_MONTH, REFERENCE_DAY)
            .unwrap_or(NaiveDate::MIN);
        let end = start + Duration::days((total_days - 1).max(0));
        self.evaluator.evaluate(start, end)
    }
}
