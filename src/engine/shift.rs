// ==========================================
// 司法休假优化系统 - 平移优化器
// ==========================================
// 职责: 在 ±window 天内整体平移区间,寻找加权收益最大的位置
// 输入: VacationPeriod + 窗口
// 输出: Option<ShiftResult>
// ==========================================
// 位置加成:
//   起点 周五 -0.05 / 周六日 -0.08 / 周一 +0.04
//   终点 周六日 -0.07 / 周五 +0.05
// 平局: 先出现者胜（严格大于才替换）
// ==========================================

use crate::calendar::HolidayCalendar;
use crate::domain::VacationPeriod;
use crate::engine::evaluator::PeriodEvaluator;
use chrono::{Datelike, Duration, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

// ==========================================
// ShiftResult - 平移结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftResult {
    /// 平移天数（负数为提前）
    pub shift_days: i64,
    pub period: VacationPeriod,
    /// 含位置加成的效率
    pub adjusted_efficiency: f64,
    /// adjusted_efficiency - 原区间效率
    pub gain: f64,
}

impl ShiftResult {
    pub fn is_forward(&self) -> bool {
        self.shift_days > 0
    }
}

/// 平移位置加成
pub fn shift_positional_bonus(period: &VacationPeriod) -> f64 {
    let start_bonus = match period.start.weekday() {
        Weekday::Fri => -0.05,
        Weekday::Sat | Weekday::Sun => -0.08,
        Weekday::Mon => 0.04,
        _ => 0.0,
    };
    let end_bonus = match period.end.weekday() {
        Weekday::Sat | Weekday::Sun => -0.07,
        Weekday::Fri => 0.05,
        _ => 0.0,
    };
    start_bonus + end_bonus
}

// ==========================================
// ShiftOptimizer - 平移优化器
// ==========================================
pub struct ShiftOptimizer<C>
where
    C: HolidayCalendar,
{
    evaluator: PeriodEvaluator<C>,
    min_gain: f64,
}

impl<C> ShiftOptimizer<C>
where
    C: HolidayCalendar,
{
    /// # 参数
    /// - evaluator: 区间评估器
    /// - min_gain: 最低收益阈值（严格大于才返回）
    pub fn new(evaluator: PeriodEvaluator<C>, min_gain: f64) -> Self {
        Self { evaluator, min_gain }
    }

    /// 搜索最佳平移
    #[instrument(skip(self, period), fields(start = %period.start, end = %period.end))]
    pub fn optimize(&self, period: &VacationPeriod, window: i64) -> Option<ShiftResult> {
        if period.is_inverted() {
            return None;
        }

        let mut best: Option<ShiftResult> = None;

        for shift in -window..=window {
            if shift == 0 {
                continue;
            }

            let delta = Duration::days(shift);
            let (Some(start), Some(end)) = (
                period.start.checked_add_signed(delta),
                period.end.checked_add_signed(delta),
            ) else {
                continue;
            };
            let candidate = self.evaluator.evaluate(start, end);
            if candidate.work_days == 0 {
                continue;
            }

            let adjusted = candidate.efficiency + shift_positional_bonus(&candidate);
            let gain = adjusted - period.efficiency;

            let better = best.as_ref().map_or(true, |b| gain > b.gain);
            if better {
                best = Some(ShiftResult {
                    shift_days: shift,
                    period: candidate,
                    adjusted_efficiency: adjusted,
                    gain,
                });
            }
        }

        let result = best.filter(|b| b.gain > self.min_gain);
        debug!(
            found = result.is_some(),
            shift_days = result.as_ref().map(|r| r.shift_days),
            "平移搜索完成"
        );
        result
    }
}
