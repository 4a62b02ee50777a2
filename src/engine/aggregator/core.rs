// ==========================================
// 司法休假优化系统 - 建议聚合器
// ==========================================
// 职责: 对单个输入区间编排全部策略,过滤休庭期,评分并排序
// 输入: VacationPeriod
// 输出: Vec<Recommendation>
// ==========================================
// 流程:
//   1) 倒置区间 → 单条 error 建议
//   2) 不合法区间 → 空列表
//   3) 全年分段  4) 延长/双侧延长  5) 平移  6) 拆分
//   7) 搭桥（短区间）  8) 全年同长度搜索（长区间）
//   9) 休庭期过滤  10) 评分  11) 排序
// ==========================================
// 红线: 引擎无状态,可对独立区间并发调用
// ==========================================

use crate::calendar::HolidayCalendar;
use crate::config::OptimizerConfig;
use crate::domain::{Recommendation, VacationPeriod};
use crate::engine::blackout::RecessBlackout;
use crate::engine::bridge::BridgeFinder;
use crate::engine::evaluator::PeriodEvaluator;
use crate::engine::fraction::FractionOptimizer;
use crate::engine::neighborhood::{NeighborhoodScan, NeighborhoodScanner};
use crate::engine::shift::ShiftOptimizer;
use crate::engine::split::SplitOptimizer;
use crate::perf::PerfGuard;
use chrono::{Datelike, Weekday};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::builder::{self, ExtendSide};
use super::ranking;

/// 拆分建议的最低增益
const SPLIT_MIN_GAIN: f64 = 0.01;

/// "特殊"延长: 至多 1 个工作日换取至少 2 个非工作日
const EXCEPTIONAL_MAX_COST: i64 = 1;
const EXCEPTIONAL_MIN_GAINED: i64 = 2;

// ==========================================
// RecommendationAggregator - 建议聚合器
// ==========================================
pub struct RecommendationAggregator<C>
where
    C: HolidayCalendar,
{
    config: Arc<OptimizerConfig>,
    evaluator: PeriodEvaluator<C>,
    scanner: NeighborhoodScanner<C>,
    bridge_finder: BridgeFinder<C>,
    shift_optimizer: ShiftOptimizer<C>,
    split_optimizer: SplitOptimizer<C>,
    fraction_optimizer: FractionOptimizer<C>,
    blackout: RecessBlackout,
}

impl<C> RecommendationAggregator<C>
where
    C: HolidayCalendar,
{
    /// 创建聚合器
    ///
    /// # 参数
    /// - calendar: 只读日历（所有子引擎共享）
    /// - config: 引擎配置
    pub fn new(calendar: Arc<C>, config: Arc<OptimizerConfig>) -> Self {
        let evaluator = PeriodEvaluator::new(calendar.clone(), &config);
        let blackout = RecessBlackout::new(config.recess_blackout);
        let fraction_optimizer = if config.fraction_skip_blackout {
            FractionOptimizer::with_blackout(evaluator.clone(), blackout.clone())
        } else {
            FractionOptimizer::new(evaluator.clone())
        };
        Self {
            scanner: NeighborhoodScanner::new(calendar.clone()),
            bridge_finder: BridgeFinder::new(calendar),
            shift_optimizer: ShiftOptimizer::new(evaluator.clone(), config.shift_min_gain),
            split_optimizer: SplitOptimizer::new(
                evaluator.clone(),
                config.split_min_days,
                config.split_min_distribution,
            ),
            fraction_optimizer,
            blackout,
            evaluator,
            config,
        }
    }

    pub fn evaluator(&self) -> &PeriodEvaluator<C> {
        &self.evaluator
    }

    pub fn fraction_optimizer(&self) -> &FractionOptimizer<C> {
        &self.fraction_optimizer
    }

    // ==========================================
    // 主入口
    // ==========================================

    /// 生成建议
    #[instrument(skip(self, period), fields(start = %period.start, end = %period.end, total = period.total_days))]
    pub fn generate(&self, period: &VacationPeriod) -> Vec<Recommendation> {
        let _perf = PerfGuard::new("aggregator.generate");

        if period.is_inverted() {
            info!("区间首尾倒置,返回纠正建议");
            return vec![builder::inverted_range(period)];
        }
        if !period.is_valid {
            debug!(reason = ?period.invalid_reason, "区间不合法,不生成建议");
            return Vec::new();
        }

        let mut candidates = Vec::new();
        candidates.extend(self.fraction_candidate(period));
        candidates.extend(self.extend_candidates(period));
        candidates.extend(self.shift_candidate(period));
        candidates.extend(self.split_candidate(period));
        candidates.extend(self.bridge_candidates(period));
        candidates.extend(self.optimize_candidates(period));

        let generated = candidates.len();
        let kept = self.blackout.filter(candidates);
        let ranked = ranking::score_and_sort(kept);

        info!(
            generated,
            returned = ranked.len(),
            "建议生成完成"
        );
        ranked
    }

    // ==========================================
    // 各策略
    // ==========================================

    fn fraction_candidate(&self, period: &VacationPeriod) -> Option<Recommendation> {
        let selection = self.fraction_optimizer.optimize(
            period.start.year(),
            self.config.fraction_count,
            self.config.fraction_length,
        )?;

        if selection.efficiency_gain <= self.config.fraction_min_gain {
            return None;
        }
        if selection.periods.iter().any(|p| p.work_days == 0) {
            return None;
        }
        builder::optimal_fraction(&selection, self.config.fraction_length)
    }

    fn extend_candidates(&self, period: &VacationPeriod) -> Vec<Recommendation> {
        let scan = self.scanner.scan(period, self.config.neighborhood_window);

        let before = self.extend_before(period, &scan);
        let after = self.extend_after(period, &scan);

        let mut out = Vec::new();
        if let (Some(b), Some(a)) = (&before, &after) {
            let both = self.evaluator.evaluate(b.start, a.end);
            out.push(builder::hybrid(period, &both));
        }
        if let Some(b) = before {
            out.push(builder::extend(ExtendSide::Before, period, &b));
        }
        if let Some(a) = after {
            out.push(builder::extend(ExtendSide::After, period, &a));
        }
        out
    }

    /// 向前延长的候选区间（不满足条件时 None）
    fn extend_before(&self, period: &VacationPeriod, scan: &NeighborhoodScan) -> Option<VacationPeriod> {
        let new_start = scan.extended_start()?;
        let extended = self.evaluator.evaluate(new_start, period.end);
        let (cost, exceptional) = self.extension_cost(period, &extended);

        if !self.cost_in_range(cost) {
            return None;
        }
        let weekend_start = matches!(new_start.weekday(), Weekday::Sat | Weekday::Sun);
        if weekend_start && !exceptional {
            return None;
        }
        if !scan.practical_before && !exceptional {
            return None;
        }
        Some(extended)
    }

    /// 向后延长的候选区间（不满足条件时 None）
    fn extend_after(&self, period: &VacationPeriod, scan: &NeighborhoodScan) -> Option<VacationPeriod> {
        let new_end = scan.extended_end()?;
        let extended = self.evaluator.evaluate(period.start, new_end);
        let (cost, exceptional) = self.extension_cost(period, &extended);

        if !self.cost_in_range(cost) {
            return None;
        }
        let awkward_end = matches!(new_end.weekday(), Weekday::Sat | Weekday::Sun | Weekday::Mon);
        if awkward_end && !exceptional {
            return None;
        }
        if !scan.practical_after && !exceptional {
            return None;
        }
        Some(extended)
    }

    fn extension_cost(&self, original: &VacationPeriod, extended: &VacationPeriod) -> (i64, bool) {
        let cost = extended.work_days - original.work_days;
        let gained = extended.non_work_days() - original.non_work_days();
        let exceptional = gained >= EXCEPTIONAL_MIN_GAINED && cost <= EXCEPTIONAL_MAX_COST;
        (cost, exceptional)
    }

    fn cost_in_range(&self, cost: i64) -> bool {
        cost >= self.config.extend_min_cost && cost <= self.config.extend_max_cost
    }

    fn shift_candidate(&self, period: &VacationPeriod) -> Option<Recommendation> {
        self.shift_optimizer
            .optimize(period, self.config.shift_window)
            .map(|result| builder::shift(&result))
    }

    fn split_candidate(&self, period: &VacationPeriod) -> Option<Recommendation> {
        let result = self.split_optimizer.optimize(period)?;

        let worthwhile = result.distribution_score > self.config.split_min_distribution
            || result.combined_efficiency > period.efficiency;
        if !worthwhile || result.first.work_days == 0 || result.second.work_days == 0 {
            return None;
        }

        let gain = (result.combined_efficiency - period.efficiency).max(SPLIT_MIN_GAIN);
        Some(builder::split(&result, gain))
    }

    fn bridge_candidates(&self, period: &VacationPeriod) -> Vec<Recommendation> {
        if period.total_days > self.config.bridge_trigger_max_days {
            return Vec::new();
        }

        let input = period.range();
        let mut evaluated: Vec<_> = self
            .bridge_finder
            .find(period.start.year(), self.config.bridge_max_gap)
            .into_iter()
            .filter(|b| !b.range().overlaps(&input))
            .map(|b| {
                let p = self.evaluator.evaluate(b.start, b.end);
                (b, p)
            })
            .collect();

        evaluated.sort_by(|a, b| b.1.efficiency.total_cmp(&a.1.efficiency));
        evaluated
            .iter()
            .take(self.config.bridge_top_n)
            .map(|(b, p)| builder::bridge(period, b, p))
            .collect()
    }

    fn optimize_candidates(&self, period: &VacationPeriod) -> Vec<Recommendation> {
        if period.total_days < self.config.optimize_trigger_min_days {
            return Vec::new();
        }

        let input_month = period.start.month();
        self.fraction_optimizer
            .find_optimal_periods(
                period.start.year(),
                period.total_days,
                self.config.optimize_top_n,
            )
            .iter()
            .filter(|c| {
                let diff = c.start.month().abs_diff(input_month);
                diff <= self.config.optimize_near_months || diff >= self.config.optimize_far_months
            })
            .filter(|c| c.efficiency - period.efficiency > self.config.optimize_min_gain)
            .filter(|c| c.work_days > 0)
            .map(|c| builder::optimize(period, c))
            .collect()
    }
}
