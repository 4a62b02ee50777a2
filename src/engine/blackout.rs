// ==========================================
// 司法休假优化系统 - 休庭期黑名单
// ==========================================
// 职责: 剔除与司法休庭期（默认 12/20 → 次年 1/06）相交的建议
// 红线: 任意年份的休庭窗口都生效
// 红线: 分段建议只要有一个子区间相交即整体剔除
// ==========================================

use crate::config::RecessWindowConfig;
use crate::domain::{DateRange, Recommendation};
use chrono::{Datelike, NaiveDate};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecessBlackout {
    window: RecessWindowConfig,
}

impl Default for RecessBlackout {
    fn default() -> Self {
        Self::new(RecessWindowConfig::default())
    }
}

impl RecessBlackout {
    pub fn new(window: RecessWindowConfig) -> Self {
        Self { window }
    }

    /// 起点落在 year 年的休庭窗口
    ///
    /// 起点月日晚于终点月日时跨年（终点在 year + 1）
    pub fn window_starting_in(&self, year: i32) -> Option<DateRange> {
        let w = &self.window;
        let crosses_year = (w.start_month, w.start_day) > (w.end_month, w.end_day);
        let end_year = if crosses_year { year + 1 } else { year };

        let start = NaiveDate::from_ymd_opt(year, w.start_month, w.start_day)?;
        let end = NaiveDate::from_ymd_opt(end_year, w.end_month, w.end_day)?;
        DateRange::new(start, end)
    }

    /// 区间是否与任一年份的休庭窗口相交
    pub fn intersects(&self, range: &DateRange) -> bool {
        if range.is_inverted() {
            return false;
        }
        (range.start.year() - 1..=range.end.year())
            .filter_map(|year| self.window_starting_in(year))
            .any(|window| window.overlaps(range))
    }

    /// 建议是否落入休庭期
    pub fn blocks(&self, recommendation: &Recommendation) -> bool {
        recommendation
            .covered_ranges()
            .iter()
            .any(|range| self.intersects(range))
    }

    /// 过滤建议列表
    pub fn filter(&self, recommendations: Vec<Recommendation>) -> Vec<Recommendation> {
        let before = recommendations.len();
        let kept: Vec<Recommendation> = recommendations
            .into_iter()
            .filter(|r| !self.blocks(r))
            .collect();

        if kept.len() < before {
            debug!(dropped = before - kept.len(), "休庭期建议已剔除");
        }
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn range(a: NaiveDate, b: NaiveDate) -> DateRange {
        DateRange::new(a, b).unwrap()
    }

    #[test]
    fn test_default_window_crosses_year() {
        let window = RecessBlackout::default().window_starting_in(2024).unwrap();
        assert_eq!(window.start, d(2024, 12, 20));
        assert_eq!(window.end, d(2025, 1, 6));
    }

    #[test]
    fn test_intersections() {
        let blackout = RecessBlackout::default();
        assert!(blackout.intersects(&range(d(2024, 12, 16), d(2024, 12, 20))));
        assert!(blackout.intersects(&range(d(2025, 1, 6), d(2025, 1, 10))));
        // 上一年的休庭窗口延伸到本年 1 月
        assert!(blackout.intersects(&range(d(2024, 1, 2), d(2024, 1, 8))));
        assert!(!blackout.intersects(&range(d(2024, 12, 14), d(2024, 12, 19))));
        assert!(!blackout.intersects(&range(d(2024, 1, 7), d(2024, 1, 12))));
    }

    #[test]
    fn test_non_crossing_window() {
        let blackout = RecessBlackout::new(RecessWindowConfig {
            start_month: 7,
            start_day: 1,
            end_month: 7,
            end_day: 31,
        });
        assert!(blackout.intersects(&range(d(2024, 6, 28), d(2024, 7, 2))));
        assert!(!blackout.intersects(&range(d(2024, 8, 1), d(2024, 8, 5))));
    }
}
