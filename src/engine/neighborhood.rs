// ==========================================
// 司法休假优化系统 - 邻域扫描器
// ==========================================
// 职责: 检查区间首尾外侧的相邻日期,寻找延长机会
// 输入: VacationPeriod + 扫描窗口
// 输出: NeighborhoodScan（前/后候选日期 + 工作日成本 + 是否值得延长）
// ==========================================
// 规则: 非工作日直接纳入; 工作日仅当其外侧紧邻非工作日时纳入（桥接成本日）
// 规则: 候选列表最外侧必须是非工作日
// ==========================================

use crate::calendar::HolidayCalendar;
use crate::domain::VacationPeriod;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

// ==========================================
// NeighborhoodScan - 扫描结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NeighborhoodScan {
    /// 区间前的候选日期（按日期升序）
    pub before: Vec<NaiveDate>,
    /// 区间后的候选日期（按日期升序）
    pub after: Vec<NaiveDate>,
    pub work_days_before: i64,
    pub work_days_after: i64,
    /// 区间已从周一开始时为 false
    pub practical_before: bool,
    /// 区间已在周五结束,或次日即为周末时为 false
    pub practical_after: bool,
}

impl NeighborhoodScan {
    /// 向前延长后的新起点
    pub fn extended_start(&self) -> Option<NaiveDate> {
        self.before.first().copied()
    }

    /// 向后延长后的新终点
    pub fn extended_end(&self) -> Option<NaiveDate> {
        self.after.last().copied()
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Backward,
    Forward,
}

impl Direction {
    /// 相邻日期（越过 chrono 可表示范围时为 None）
    fn step(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Direction::Backward => date.pred_opt(),
            Direction::Forward => date.succ_opt(),
        }
    }
}

// ==========================================
// NeighborhoodScanner - 邻域扫描器
// ==========================================
pub struct NeighborhoodScanner<C>
where
    C: HolidayCalendar,
{
    calendar: Arc<C>,
}

impl<C> NeighborhoodScanner<C>
where
    C: HolidayCalendar,
{
    pub fn new(calendar: Arc<C>) -> Self {
        Self { calendar }
    }

    /// 扫描区间两侧
    ///
    /// # 参数
    /// - period: 输入区间
    /// - window: 每侧最多检查的天数
    pub fn scan(&self, period: &VacationPeriod, window: i64) -> NeighborhoodScan {
        if period.is_inverted() || window <= 0 {
            return NeighborhoodScan::default();
        }

        let (mut before, work_days_before) =
            self.walk(period.start, window, Direction::Backward);
        before.reverse();
        let (after, work_days_after) = self.walk(period.end, window, Direction::Forward);

        let practical_before = period.start.weekday() != Weekday::Mon;
        let next_is_weekend = period
            .end
            .succ_opt()
            .is_some_and(|next| matches!(next.weekday(), Weekday::Sat | Weekday::Sun));
        let practical_after = period.end.weekday() != Weekday::Fri && !next_is_weekend;

        debug!(
            start = %period.start,
            end = %period.end,
            before = before.len(),
            after = after.len(),
            work_days_before,
            work_days_after,
            "邻域扫描完成"
        );

        NeighborhoodScan {
            before,
            after,
            work_days_before,
            work_days_after,
            practical_before,
            practical_after,
        }
    }

    /// 从边界向外逐日扫描
    ///
    /// # 返回
    /// - (按扫描顺序的日期列表, 其中工作日数)
    fn walk(&self, boundary: NaiveDate, window: i64, direction: Direction) -> (Vec<NaiveDate>, i64) {
        let mut days = Vec::new();
        let mut current = boundary;

        for _ in 0..window {
            let Some(next) = direction.step(current) else {
                break;
            };
            current = next;
            if self.calendar.is_non_work_day(current) {
                days.push(current);
                continue;
            }

            // 工作日: 外侧紧邻非工作日才值得作为桥接成本
            let outward_non_work = direction
                .step(current)
                .is_some_and(|outward| self.calendar.is_non_work_day(outward));
            if outward_non_work {
                days.push(current);
            } else {
                break;
            }
        }

        // 最外侧的工作日不带来任何收益
        while let Some(&last) = days.last() {
            if self.calendar.is_non_work_day(last) {
                break;
            }
            days.pop();
        }

        let work_days = days
            .iter()
            .filter(|d| !self.calendar.is_non_work_day(**d))
            .count() as i64;

        (days, work_days)
    }
}
