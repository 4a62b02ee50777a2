// ==========================================
// 司法休假优化系统 - 内存日历
// ==========================================
// 存储: BTreeMap<NaiveDate, Holiday>（按日期有序,区间查询走 range）
// 加载: 代码构造 / JSON 字符串 / JSON 文件
// ==========================================

use super::error::{CalendarError, CalendarResult};
use super::HolidayCalendar;
use crate::domain::{Holiday, HolidayCategory};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::{debug, info};

/// JSON 原始记录（先按字符串读入,便于给出带序号的错误信息）
#[derive(Debug, Deserialize)]
struct RawHolidayRecord {
    date: String,
    name: String,
    #[serde(default = "default_category", alias = "type")]
    category: String,
}

fn default_category() -> String {
    "national".to_string()
}

// ==========================================
// InMemoryCalendar - 内存日历
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct InMemoryCalendar {
    holidays: BTreeMap<NaiveDate, Holiday>,
}

impl InMemoryCalendar {
    /// 创建空日历（只有周末是非工作日）
    pub fn new() -> Self {
        Self::default()
    }

    /// 从节假日列表构造
    ///
    /// 同一日期出现多次时保留第一条（例如圣诞节同时是全国节日与休庭期）
    pub fn from_holidays<I>(holidays: I) -> Self
    where
        I: IntoIterator<Item = Holiday>,
    {
        let mut calendar = Self::new();
        for holiday in holidays {
            calendar.insert(holiday);
        }
        calendar
    }

    /// 插入节假日
    ///
    /// # 返回
    /// - true: 新插入
    /// - false: 日期已存在,保留原记录
    pub fn insert(&mut self, holiday: Holiday) -> bool {
        if let Some(existing) = self.holidays.get(&holiday.date) {
            debug!(
                date = %holiday.date,
                kept = %existing.name,
                dropped = %holiday.name,
                "重复节假日日期,保留首条"
            );
            return false;
        }
        self.holidays.insert(holiday.date, holiday);
        true
    }

    /// 替换某一年的节假日
    pub fn load(&mut self, year: i32, holidays: Vec<Holiday>) {
        self.holidays.retain(|date, _| date.year() != year);
        let mut count = 0;
        for holiday in holidays.into_iter().filter(|h| h.date.year() == year) {
            if self.insert(holiday) {
                count += 1;
            }
        }
        info!(year, count, "节假日加载完成");
    }

    /// 从 JSON 字符串加载
    ///
    /// 格式: `[{"date": "2024-05-01", "name": "Dia do Trabalho", "category": "national"}]`
    pub fn from_json_str(json: &str) -> CalendarResult<Self> {
        let records: Vec<RawHolidayRecord> = serde_json::from_str(json)?;
        let mut calendar = Self::new();

        for (index, record) in records.into_iter().enumerate() {
            let date = NaiveDate::parse_from_str(record.date.trim(), "%Y-%m-%d").map_err(|_| {
                CalendarError::InvalidDate {
                    index,
                    value: record.date.clone(),
                }
            })?;
            let category: HolidayCategory = record
                .category
                .parse()
                .map_err(|message| CalendarError::InvalidCategory { index, message })?;
            calendar.insert(Holiday::new(date, record.name, category));
        }

        debug!(count = calendar.len(), "日历 JSON 加载完成");
        Ok(calendar)
    }

    /// 从 JSON 文件加载
    pub fn from_json_file(path: impl AsRef<Path>) -> CalendarResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CalendarError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// 已加载的年份
    pub fn years(&self) -> Vec<i32> {
        self.holidays
            .keys()
            .map(|d| d.year())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

impl HolidayCalendar for InMemoryCalendar {
    fn is_holiday(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.get(&date)
    }

    fn holidays_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Holiday> {
        if start > end {
            return Vec::new();
        }
        self.holidays.range(start..=end).map(|(_, h)| h).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_first_entry_wins_on_duplicate_date() {
        let calendar = InMemoryCalendar::from_holidays(vec![
            Holiday::national(d(2024, 12, 25), "Natal"),
            Holiday::recess(d(2024, 12, 25)),
        ]);
        assert_eq!(calendar.len(), 1);
        let holiday = calendar.is_holiday(d(2024, 12, 25)).unwrap();
        assert_eq!(holiday.category, HolidayCategory::National);
    }

    #[test]
    fn test_holidays_in_range_inclusive_and_sorted() {
        let calendar = InMemoryCalendar::from_holidays(vec![
            Holiday::national(d(2024, 5, 30), "Corpus Christi"),
            Holiday::national(d(2024, 5, 1), "Dia do Trabalho"),
            Holiday::national(d(2024, 4, 21), "Tiradentes"),
        ]);
        let found = calendar.holidays_in_range(d(2024, 5, 1), d(2024, 5, 30));
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].date, d(2024, 5, 1));
        assert_eq!(found[1].date, d(2024, 5, 30));
        assert!(calendar.holidays_in_range(d(2024, 6, 1), d(2024, 5, 1)).is_empty());
    }

    #[test]
    fn test_non_work_day() {
        let calendar =
            InMemoryCalendar::from_holidays(vec![Holiday::national(d(2024, 5, 1), "Dia do Trabalho")]);
        assert!(calendar.is_non_work_day(d(2024, 5, 1))); // 周三节日
        assert!(calendar.is_non_work_day(d(2024, 5, 4))); // 周六
        assert!(!calendar.is_non_work_day(d(2024, 5, 2)));
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {"date": "2024-05-01", "name": "Dia do Trabalho", "category": "national"},
            {"date": "2024-08-11", "name": "Dia do Advogado", "type": "judicial"},
            {"date": "2024-11-15", "name": "Proclamação da República"}
        ]"#;
        let calendar = InMemoryCalendar::from_json_str(json).unwrap();
        assert_eq!(calendar.len(), 3);
        assert_eq!(
            calendar.is_holiday(d(2024, 8, 11)).unwrap().category,
            HolidayCategory::Judicial
        );
        assert_eq!(calendar.years(), vec![2024]);
    }

    #[test]
    fn test_from_json_str_invalid_date() {
        let json = r#"[{"date": "01/05/2024", "name": "Dia do Trabalho"}]"#;
        let err = InMemoryCalendar::from_json_str(json).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidDate { index: 0, .. }));
    }

    #[test]
    fn test_load_replaces_year() {
        let mut calendar = InMemoryCalendar::from_holidays(vec![
            Holiday::national(d(2024, 5, 1), "Dia do Trabalho"),
            Holiday::national(d(2025, 5, 1), "Dia do Trabalho"),
        ]);
        calendar.load(2024, vec![Holiday::national(d(2024, 9, 7), "Independência")]);
        assert!(calendar.is_holiday(d(2024, 5, 1)).is_none());
        assert!(calendar.is_holiday(d(2024, 9, 7)).is_some());
        assert!(calendar.is_holiday(d(2025, 5, 1)).is_some());
    }
}
