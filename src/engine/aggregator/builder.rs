// ==========================================
// 建议对象构造
// ==========================================
// 标题与描述全部取自 locales/*.yml,日期格式 dd/mm/YYYY
// strategic_score 在排序阶段统一计算,此处置 0
// ==========================================

use crate::domain::{
    DateRange, FractionedSelection, Recommendation, RecommendationType, VacationPeriod,
};
use crate::engine::bridge::Bridge;
use crate::engine::shift::ShiftResult;
use crate::engine::split::SplitResult;
use crate::i18n::{t, t_with_args};
use chrono::NaiveDate;
use uuid::Uuid;

/// 建议延长的一侧
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtendSide {
    Before,
    After,
}

pub(crate) fn fmt_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn pct(value: f64) -> String {
    format!("{:.1}", value * 100.0)
}

fn new_recommendation(
    kind: RecommendationType,
    title: String,
    description: String,
    suggested_date_range: DateRange,
    efficiency_gain: f64,
    days_changed: i64,
) -> Recommendation {
    Recommendation {
        id: Uuid::new_v4().to_string(),
        kind,
        title,
        description,
        suggested_date_range,
        efficiency_gain,
        days_changed,
        fractioned_periods: None,
        strategic_score: 0.0,
    }
}

/// 倒置区间的纠正建议（建议区间为交换后的首尾）
pub fn inverted_range(period: &VacationPeriod) -> Recommendation {
    let fixed = period.range().swapped();
    let description = t_with_args(
        "recommendation.error.description",
        &[
            ("start", &fmt_date(period.start)),
            ("end", &fmt_date(period.end)),
            ("fixed_start", &fmt_date(fixed.start)),
            ("fixed_end", &fmt_date(fixed.end)),
        ],
    );
    new_recommendation(
        RecommendationType::Error,
        t("recommendation.error.title"),
        description,
        fixed,
        0.0,
        0,
    )
}

/// 全年分段建议
pub fn optimal_fraction(selection: &FractionedSelection, length: i64) -> Option<Recommendation> {
    let span = selection.span()?;
    let count = selection.periods.len().to_string();
    let description = t_with_args(
        "recommendation.fraction.description",
        &[
            ("count", &count),
            ("length", &length.to_string()),
            ("combined", &pct(selection.combined_efficiency)),
            ("gain", &pct(selection.efficiency_gain)),
        ],
    );

    let mut rec = new_recommendation(
        RecommendationType::OptimalFraction,
        t("recommendation.fraction.title"),
        description,
        span,
        selection.efficiency_gain,
        0,
    );
    rec.fractioned_periods = Some(selection.periods.clone());
    Some(rec)
}

/// 单侧延长建议
pub fn extend(
    side: ExtendSide,
    original: &VacationPeriod,
    extended: &VacationPeriod,
) -> Recommendation {
    let (title_key, description_key, boundary) = match side {
        ExtendSide::Before => (
            "recommendation.extend_before.title",
            "recommendation.extend_before.description",
            extended.start,
        ),
        ExtendSide::After => (
            "recommendation.extend_after.title",
            "recommendation.extend_after.description",
            extended.end,
        ),
    };

    let cost = (extended.work_days - original.work_days).to_string();
    let gained = (extended.non_work_days() - original.non_work_days()).to_string();
    let description = t_with_args(
        description_key,
        &[
            ("date", &fmt_date(boundary)),
            ("gained", &gained),
            ("cost", &cost),
        ],
    );

    new_recommendation(
        RecommendationType::Extend,
        t(title_key),
        description,
        extended.range(),
        extended.efficiency - original.efficiency,
        extended.total_days - original.total_days,
    )
}

/// 两侧同时延长
pub fn hybrid(original: &VacationPeriod, extended: &VacationPeriod) -> Recommendation {
    let description = t_with_args(
        "recommendation.hybrid.description",
        &[
            ("start", &fmt_date(extended.start)),
            ("end", &fmt_date(extended.end)),
            ("efficiency", &pct(extended.efficiency)),
        ],
    );
    new_recommendation(
        RecommendationType::Hybrid,
        t("recommendation.hybrid.title"),
        description,
        extended.range(),
        extended.efficiency - original.efficiency,
        extended.total_days - original.total_days,
    )
}

/// 平移建议（标题区分提前/推后）
pub fn shift(result: &ShiftResult) -> Recommendation {
    let (title_key, description_key) = if result.is_forward() {
        (
            "recommendation.shift_forward.title",
            "recommendation.shift_forward.description",
        )
    } else {
        (
            "recommendation.shift_backward.title",
            "recommendation.shift_backward.description",
        )
    };

    let description = t_with_args(
        description_key,
        &[
            ("days", &result.shift_days.abs().to_string()),
            ("start", &fmt_date(result.period.start)),
            ("end", &fmt_date(result.period.end)),
            ("efficiency", &pct(result.period.efficiency)),
        ],
    );

    new_recommendation(
        RecommendationType::Shift,
        t(title_key),
        description,
        result.period.range(),
        result.gain,
        result.shift_days,
    )
}

/// 拆分建议
pub fn split(result: &SplitResult, efficiency_gain: f64) -> Recommendation {
    let description = t_with_args(
        "recommendation.split.description",
        &[
            ("first_start", &fmt_date(result.first.start)),
            ("first_end", &fmt_date(result.first.end)),
            ("second_start", &fmt_date(result.second.start)),
            ("second_end", &fmt_date(result.second.end)),
        ],
    );

    let mut rec = new_recommendation(
        RecommendationType::Split,
        t("recommendation.split.title"),
        description,
        DateRange::new_unchecked(result.first.start, result.second.end),
        efficiency_gain,
        0,
    );
    rec.fractioned_periods = Some(result.periods());
    rec
}

/// 搭桥建议
pub fn bridge(original: &VacationPeriod, bridge: &Bridge, evaluated: &VacationPeriod) -> Recommendation {
    let description = t_with_args(
        "recommendation.bridge.description",
        &[
            ("start", &fmt_date(bridge.start)),
            ("end", &fmt_date(bridge.end)),
            ("work_days", &bridge.work_days.to_string()),
        ],
    );
    new_recommendation(
        RecommendationType::Bridge,
        t("recommendation.bridge.title"),
        description,
        bridge.range(),
        evaluated.efficiency - original.efficiency,
        evaluated.total_days - original.total_days,
    )
}

/// 全年同长度更优区间
pub fn optimize(original: &VacationPeriod, candidate: &VacationPeriod) -> Recommendation {
    let gain = candidate.efficiency - original.efficiency;
    let description = t_with_args(
        "recommendation.optimize.description",
        &[
            ("start", &fmt_date(candidate.start)),
            ("end", &fmt_date(candidate.end)),
            ("efficiency", &pct(candidate.efficiency)),
            ("gain", &pct(gain)),
        ],
    );
    new_recommendation(
        RecommendationType::Optimize,
        t("recommendation.optimize.title"),
        description,
        candidate.range(),
        gain,
        (candidate.start - original.start).num_days(),
    )
}
