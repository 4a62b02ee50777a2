// ==========================================
// 司法休假优化系统 - 搭桥查找器
// ==========================================
// 职责: 在全年非工作日序列中寻找短的工作日缺口（桥）
// 输入: 年份 + 最大缺口天数
// 输出: Vec<Bridge>（按起点升序）
// ==========================================
// 复杂度: 非工作日列表有序扫描,每个 i 遇到首个合格缺口或缺口超限即停止
// ==========================================

use crate::calendar::HolidayCalendar;
use crate::domain::date_range::days_between;
use crate::domain::DateRange;
use crate::perf::PerfGuard;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

/// 普通周五→周一的周末之间的缺口长度
const PLAIN_WEEKEND_GAP: i64 = 5;

// ==========================================
// Bridge - 桥接候选
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bridge {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// 桥内实际工作日数（> 0）
    pub work_days: i64,
}

impl Bridge {
    pub fn range(&self) -> DateRange {
        DateRange::new_unchecked(self.start, self.end)
    }
}

// ==========================================
// BridgeFinder - 搭桥查找器
// ==========================================
pub struct BridgeFinder<C>
where
    C: HolidayCalendar,
{
    calendar: Arc<C>,
}

impl<C> BridgeFinder<C>
where
    C: HolidayCalendar,
{
    pub fn new(calendar: Arc<C>) -> Self {
        Self { calendar }
    }

    /// 查找全年的桥
    ///
    /// # 参数
    /// - year: 年份
    /// - max_gap: 允许的最大缺口天数
    #[instrument(skip(self))]
    pub fn find(&self, year: i32, max_gap: i64) -> Vec<Bridge> {
        let _perf = PerfGuard::new("bridge.find");

        let non_work = self.non_work_dates(year);
        let mut bridges = Vec::new();

        for (idx, &left) in non_work.iter().enumerate() {
            for &right in &non_work[idx + 1..] {
                let gap = days_between(left, right) - 1;
                if gap == 0 {
                    continue;
                }
                if gap > max_gap {
                    break;
                }

                // 首个合格缺口: 接受或拒绝后都不再向前扫描
                if !self.is_plain_weekend_gap(left, right, gap) {
                    let start = left + Duration::days(1);
                    let end = right - Duration::days(1);
                    let work_days = self.count_work_days(start, end);
                    if work_days > 0 {
                        bridges.push(Bridge {
                            start,
                            end,
                            work_days,
                        });
                    }
                }
                break;
            }
        }

        debug!(year, max_gap, found = bridges.len(), "搭桥扫描完成");
        bridges
    }

    /// 全年非工作日（升序）
    fn non_work_dates(&self, year: i32) -> Vec<NaiveDate> {
        let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        ) else {
            return Vec::new();
        };

        DateRange::new_unchecked(first, last)
            .iter_days()
            .filter(|d| self.calendar.is_non_work_day(*d))
            .collect()
    }

    /// 两端都是普通周末日且缺口恰为一周工作日
    fn is_plain_weekend_gap(&self, left: NaiveDate, right: NaiveDate, gap: i64) -> bool {
        gap == PLAIN_WEEKEND_GAP
            && self.is_plain_weekend(left)
            && self.is_plain_weekend(right)
    }

    fn is_plain_weekend(&self, date: NaiveDate) -> bool {
        self.calendar.is_weekend(date) && self.calendar.is_holiday(date).is_none()
    }

    fn count_work_days(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        DateRange::new_unchecked(start, end)
            .iter_days()
            .filter(|d| !self.calendar.is_non_work_day(*d))
            .count() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::InMemoryCalendar;
    use crate::domain::Holiday;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn finder(holidays: Vec<Holiday>) -> BridgeFinder<InMemoryCalendar> {
        BridgeFinder::new(Arc::new(InMemoryCalendar::from_holidays(holidays)))
    }

    #[test]
    fn test_no_holidays_no_bridges() {
        assert!(finder(vec![]).find(2024, 3).is_empty());
    }

    #[test]
    fn test_thursday_holiday_bridges_friday() {
        // 2024-05-30 周四 Corpus Christi
        let bridges = finder(vec![Holiday::national(d(2024, 5, 30), "Corpus Christi")])
            .find(2024, 3);
        assert!(bridges.contains(&Bridge {
            start: d(2024, 5, 31),
            end: d(2024, 5, 31),
            work_days: 1,
        }));
        assert!(bridges.iter().all(|b| b.work_days > 0 && b.start <= b.end));
    }

    #[test]
    fn test_tuesday_holiday_bridges_monday() {
        // 2024-02-13 周二 Carnaval
        let bridges = finder(vec![Holiday::national(d(2024, 2, 13), "Carnaval")]).find(2024, 3);
        assert!(bridges.iter().any(|b| b.start == d(2024, 2, 12) && b.end == d(2024, 2, 12)));
    }

    #[test]
    fn test_plain_weekend_gap_rejected() {
        // 缺口上限放宽到 5 时,普通周末之间的一周也不得算作桥
        let bridges = finder(vec![]).find(2024, 5);
        assert!(bridges.is_empty());
    }

    #[test]
    fn test_gap_limit_respected() {
        // 2024-10-09 周三: 周日→周三 缺口 2（周一、周二）
        let holidays = vec![Holiday::national(d(2024, 10, 9), "Teste")];
        let tight = finder(holidays.clone()).find(2024, 1);
        assert!(tight.iter().all(|b| b.range().days() <= 1));

        let loose = finder(holidays).find(2024, 3);
        assert!(loose.iter().any(|b| b.start == d(2024, 10, 7) && b.end == d(2024, 10, 8)));
    }
}
