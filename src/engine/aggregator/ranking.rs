// ==========================================
// 建议评分与排序
// ==========================================
// 评分: efficiency_gain + 首尾星期加成
//   起点 周一 +0.08 / 周二~四 +0.02 / 周五 -0.07 / 周六 -0.12 / 周日 -0.10
//   终点 周五 +0.08 / 周二~四 +0.02 / 周日 -0.12 / 周六 -0.10 / 周一 -0.07
//   周一开始且周五结束 额外 +0.05
// 分段建议不加成; 倒置区间 -100
// 排序: 分段建议在前（稳定）,其余按得分降序（稳定）
// ==========================================

use crate::domain::{Recommendation, RecommendationType};
use chrono::{Datelike, Weekday};

const INVERTED_RANGE_SCORE: f64 = -100.0;
const MONDAY_TO_FRIDAY_BONUS: f64 = 0.05;

fn start_bonus(weekday: Weekday) -> f64 {
    match weekday {
        Weekday::Mon => 0.08,
        Weekday::Tue | Weekday::Wed | Weekday::Thu => 0.02,
        Weekday::Fri => -0.07,
        Weekday::Sat => -0.12,
        Weekday::Sun => -0.10,
    }
}

fn end_bonus(weekday: Weekday) -> f64 {
    match weekday {
        Weekday::Fri => 0.08,
        Weekday::Tue | Weekday::Wed | Weekday::Thu => 0.02,
        Weekday::Sun => -0.12,
        Weekday::Sat => -0.10,
        Weekday::Mon => -0.07,
    }
}

/// 计算单条建议的战略得分
pub fn strategic_score(recommendation: &Recommendation) -> f64 {
    let range = &recommendation.suggested_date_range;
    if range.is_inverted() {
        return INVERTED_RANGE_SCORE;
    }

    let mut score = recommendation.efficiency_gain;
    if recommendation.kind == RecommendationType::OptimalFraction {
        return score;
    }

    let start = range.start.weekday();
    let end = range.end.weekday();
    score += start_bonus(start) + end_bonus(end);
    if start == Weekday::Mon && end == Weekday::Fri {
        score += MONDAY_TO_FRIDAY_BONUS;
    }
    score
}

/// 评分并排序
pub fn score_and_sort(mut recommendations: Vec<Recommendation>) -> Vec<Recommendation> {
    for rec in recommendations.iter_mut() {
        rec.strategic_score = strategic_score(rec);
    }

    let (mut ordered, mut rest): (Vec<_>, Vec<_>) = recommendations
        .into_iter()
        .partition(|r| r.kind == RecommendationType::OptimalFraction);
    rest.sort_by(|a, b| b.strategic_score.total_cmp(&a.strategic_score));
    ordered.append(&mut rest);
    ordered
}
