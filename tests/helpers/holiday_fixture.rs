// ==========================================
// 节假日测试夹具
// ==========================================
// - brazil_2024: 固定的巴西 2024 日历（含休庭期）
// - SyntheticHolidayBuilder: 可复现的合成节假日（固定种子）
// ==========================================
// 注: 随机性只存在于测试夹具,不进入 src/
// ==========================================

use chrono::{Datelike, Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use vacation_optimizer::calendar::InMemoryCalendar;
use vacation_optimizer::domain::{Holiday, HolidayCategory};

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// 休庭期: Y-1 年 12/20..12/31 + Y 年 1/01..1/06
pub fn recess_days(year: i32) -> Vec<Holiday> {
    let mut days: Vec<Holiday> = (20..=31).map(|day| Holiday::recess(d(year - 1, 12, day))).collect();
    days.extend((1..=6).map(|day| Holiday::recess(d(year, 1, day))));
    days
}

// ==========================================
// 巴西 2024 日历
// ==========================================

pub fn brazil_2024() -> Vec<Holiday> {
    let mut holidays = vec![
        Holiday::national(d(2024, 1, 1), "Confraternização Universal"),
        Holiday::national(d(2024, 2, 12), "Carnaval"),
        Holiday::national(d(2024, 2, 13), "Carnaval"),
        Holiday::judicial(d(2024, 2, 14), "Quarta-feira de Cinzas"),
        Holiday::judicial(d(2024, 3, 27), "Semana Santa"),
        Holiday::judicial(d(2024, 3, 28), "Semana Santa"),
        Holiday::national(d(2024, 3, 29), "Sexta-feira Santa"),
        Holiday::national(d(2024, 4, 21), "Tiradentes"),
        Holiday::national(d(2024, 5, 1), "Dia do Trabalho"),
        Holiday::national(d(2024, 5, 30), "Corpus Christi"),
        Holiday::judicial(d(2024, 8, 11), "Dia do Advogado"),
        Holiday::national(d(2024, 9, 7), "Independência do Brasil"),
        Holiday::national(d(2024, 10, 12), "Nossa Senhora Aparecida"),
        Holiday::judicial(d(2024, 11, 1), "Dia de Todos os Santos"),
        Holiday::national(d(2024, 11, 2), "Finados"),
        Holiday::national(d(2024, 11, 15), "Proclamação da República"),
        Holiday::national(d(2024, 11, 20), "Dia da Consciência Negra"),
        Holiday::judicial(d(2024, 12, 8), "Dia da Justiça"),
        Holiday::national(d(2024, 12, 25), "Natal"),
    ];
    // 全国节日在前,重复日期保留首条
    holidays.extend(recess_days(2024));
    holidays.extend(recess_days(2025));
    holidays
}

pub fn brazil_2024_calendar() -> Arc<InMemoryCalendar> {
    Arc::new(InMemoryCalendar::from_holidays(brazil_2024()))
}

// ==========================================
// SyntheticHolidayBuilder - 合成节假日构建器
// ==========================================

pub struct SyntheticHolidayBuilder {
    rng: StdRng,
    year: i32,
    count: usize,
    include_recess: bool,
}

impl SyntheticHolidayBuilder {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            year: 2024,
            count: 12,
            include_recess: false,
        }
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_recess(mut self) -> Self {
        self.include_recess = true;
        self
    }

    pub fn build(mut self) -> Vec<Holiday> {
        let first = d(self.year, 1, 1);
        let days_in_year = if d(self.year, 12, 31).ordinal() == 366 { 366 } else { 365 };

        let mut holidays = Vec::with_capacity(self.count);
        for i in 0..self.count {
            let offset = self.rng.random_range(0..days_in_year);
            let category = if self.rng.random_bool(0.25) {
                HolidayCategory::Judicial
            } else {
                HolidayCategory::National
            };
            holidays.push(Holiday::new(
                first + Duration::days(offset),
                format!("Feriado sintético {}", i + 1),
                category,
            ));
        }
        if self.include_recess {
            holidays.extend(recess_days(self.year));
            holidays.extend(recess_days(self.year + 1));
        }
        holidays
    }

    pub fn build_calendar(self) -> Arc<InMemoryCalendar> {
        Arc::new(InMemoryCalendar::from_holidays(self.build()))
    }

    /// 生成 [year-01-01, year-12-31] 内的随机区间（长度 1..=max_len）
    pub fn random_range(rng: &mut StdRng, year: i32, max_len: i64) -> (NaiveDate, NaiveDate) {
        let start = d(year, 1, 1) + Duration::days(rng.random_range(0..365));
        let len = rng.random_range(1..=max_len);
        (start, start + Duration::days(len - 1))
    }
}
