// ==========================================
// 司法休假优化系统 - iCalendar 导出
// ==========================================
// 格式: RFC 5545,全天事件
// DTEND 为不含当日的结束日期（end + 1）
// 行分隔符 CRLF
// ==========================================

use crate::domain::VacationPeriod;
use crate::i18n::{t, t_with_args};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

const PRODID: &str = "-//Judicial Vacation Optimizer//PT-BR";
const CRLF: &str = "\r\n";

fn ics_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// 转义 TEXT 值中的特殊字符
fn escape_text(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

fn push_event(lines: &mut Vec<String>, period: &VacationPeriod, exclusive_end: NaiveDate, stamp: &str) {
    let description = t_with_args(
        "export.ics.description",
        &[
            ("efficiency", &format!("{:.2}", period.efficiency * 100.0)),
            ("total", &period.total_days.to_string()),
            ("work", &period.work_days.to_string()),
            ("weekend", &period.weekend_days.to_string()),
            ("holiday", &period.holiday_days.to_string()),
        ],
    );

    lines.push("BEGIN:VEVENT".to_string());
    lines.push(format!("UID:{}@vacation-optimizer", Uuid::new_v4()));
    lines.push(format!("DTSTAMP:{}", stamp));
    lines.push(format!("SUMMARY:{}", escape_text(&t("export.ics.summary"))));
    lines.push(format!("DESCRIPTION:{}", escape_text(&description)));
    lines.push(format!("DTSTART;VALUE=DATE:{}", ics_date(period.start)));
    lines.push(format!(
        "DTEND;VALUE=DATE:{}",
        ics_date(exclusive_end)
    ));
    lines.push("STATUS:CONFIRMED".to_string());
    lines.push("TRANSP:TRANSPARENT".to_string());
    lines.push("END:VEVENT".to_string());
}

/// 导出多个区间（每个区间一个 VEVENT）
///
/// 倒置区间、以及结束日已是最大可表示日期的区间跳过
pub fn render_calendar(periods: &[VacationPeriod]) -> String {
    let stamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();

    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PRODID),
        "CALSCALE:GREGORIAN".to_string(),
    ];
    for period in periods.iter().filter(|p| !p.is_inverted()) {
        if let Some(exclusive_end) = period.end.succ_opt() {
            push_event(&mut lines, period, exclusive_end, &stamp);
        }
    }
    lines.push("END:VCALENDAR".to_string());

    let mut out = lines.join(CRLF);
    out.push_str(CRLF);
    out
}

/// 导出单个区间
pub fn render_period(period: &VacationPeriod) -> String {
    render_calendar(std::slice::from_ref(period))
}
