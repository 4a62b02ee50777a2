// ==========================================
// 司法休假优化系统 - 优化 API
// ==========================================
// 职责: 对展示/报表协作方暴露评估与建议接口,负责输入校验
// 红线: 引擎内部不做参数防护,全部在此处拦截
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::calendar::HolidayCalendar;
use crate::config::{ConfigManager, OptimizerConfig};
use crate::domain::{FractionedSelection, Recommendation, VacationPeriod};
use crate::engine::RecommendationAggregator;
use crate::export::ics;
use chrono::{Datelike, NaiveDate};
use std::sync::Arc;
use tracing::{debug, instrument};

/// 支持的年份范围（保证 1/1 与次年 1/6 都可表示）
const MIN_YEAR: i64 = 1;
const MAX_YEAR: i64 = 9998;

// ==========================================
// OptimizerApi - 优化 API
// ==========================================
pub struct OptimizerApi<C>
where
    C: HolidayCalendar,
{
    config: Arc<OptimizerConfig>,
    aggregator: RecommendationAggregator<C>,
}

impl<C> OptimizerApi<C>
where
    C: HolidayCalendar,
{
    /// 创建 API 实例
    ///
    /// # 参数
    /// - calendar: 已加载完成的只读日历
    /// - config: 引擎配置（会先做校验）
    pub fn new(calendar: Arc<C>, config: Arc<OptimizerConfig>) -> ApiResult<Self> {
        config.validate()?;
        Ok(Self {
            aggregator: RecommendationAggregator::new(calendar, config.clone()),
            config,
        })
    }

    /// 使用配置管理器中的配置创建
    pub fn from_config_manager(calendar: Arc<C>, manager: &ConfigManager) -> ApiResult<Self> {
        Self::new(calendar, manager.config())
    }

    /// 使用默认配置创建
    pub fn with_defaults(calendar: Arc<C>) -> Self {
        let config = Arc::new(OptimizerConfig::default());
        Self {
            aggregator: RecommendationAggregator::new(calendar, config.clone()),
            config,
        }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    // ==========================================
    // 区间评估
    // ==========================================

    /// 评估区间（校验版）
    ///
    /// # 返回
    /// - Err(InvertedRange): start > end
    /// - Err(OutOfBounds): 区间长度超过 max_scan_length,或年份超出支持范围
    pub fn evaluate_period(&self, start: NaiveDate, end: NaiveDate) -> ApiResult<VacationPeriod> {
        if start > end {
            return Err(ApiError::InvertedRange { start, end });
        }
        check_years(start, end)?;
        self.check_span(start, end)?;
        Ok(self.aggregator.evaluator().evaluate(start, end))
    }

    /// 评估区间（不校验首尾顺序）
    ///
    /// 倒置区间返回标记对象,交给 generate_recommendations 生成纠正建议
    pub fn evaluate_range(&self, start: NaiveDate, end: NaiveDate) -> VacationPeriod {
        self.aggregator.evaluator().evaluate(start, end)
    }

    // ==========================================
    // 建议
    // ==========================================

    /// 生成调整建议
    ///
    /// # 返回
    /// - Err(OutOfBounds): 首尾年份超出支持范围,或区间长度超过 max_scan_length
    #[instrument(skip(self, period), fields(start = %period.start, end = %period.end))]
    pub fn generate_recommendations(&self, period: &VacationPeriod) -> ApiResult<Vec<Recommendation>> {
        check_years(period.start, period.end)?;
        if !period.is_inverted() {
            self.check_span(period.start, period.end)?;
        }
        Ok(self.aggregator.generate(period))
    }

    /// 全年同长度效率最高的区间
    pub fn find_optimal_periods(
        &self,
        year: i32,
        length: i64,
        count: usize,
    ) -> ApiResult<Vec<VacationPeriod>> {
        check_bounds("year", year as i64, MIN_YEAR, MAX_YEAR)?;
        check_bounds("length", length, 1, self.config.max_scan_length)?;
        check_bounds(
            "count",
            count as i64,
            1,
            self.config.max_fraction_count as i64,
        )?;

        Ok(self
            .aggregator
            .fraction_optimizer()
            .find_optimal_periods(year, length, count))
    }

    /// 全年最优分段组合
    pub fn find_optimal_fractioned_periods(
        &self,
        year: i32,
        count: usize,
        length: i64,
    ) -> ApiResult<Option<FractionedSelection>> {
        check_bounds("year", year as i64, MIN_YEAR, MAX_YEAR)?;
        check_bounds(
            "count",
            count as i64,
            1,
            self.config.max_fraction_count as i64,
        )?;
        check_bounds("length", length, 1, self.config.max_scan_length)?;

        Ok(self
            .aggregator
            .fraction_optimizer()
            .optimize(year, count, length))
    }

    // ==========================================
    // 导出
    // ==========================================

    /// 评估区间并导出为 iCalendar 文本
    pub fn export_period_ics(&self, start: NaiveDate, end: NaiveDate) -> ApiResult<String> {
        let period = self.evaluate_period(start, end)?;
        Ok(ics::render_period(&period))
    }

    fn check_span(&self, start: NaiveDate, end: NaiveDate) -> ApiResult<()> {
        let days = (end - start).num_days() + 1;
        debug!(days, "区间长度校验");
        check_bounds("total_days", days, 1, self.config.max_scan_length)
    }
}

fn check_years(start: NaiveDate, end: NaiveDate) -> ApiResult<()> {
    check_bounds("start_year", start.year() as i64, MIN_YEAR, MAX_YEAR)?;
    check_bounds("end_year", end.year() as i64, MIN_YEAR, MAX_YEAR)
}

fn check_bounds(field: &'static str, value: i64, min: i64, max: i64) -> ApiResult<()> {
    if value < min || value > max {
        return Err(ApiError::OutOfBounds {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
