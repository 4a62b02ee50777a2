use crate::config::error::{ConfigError, ConfigResult};
use crate::engine::strategy::ScoringPolicyKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 休庭期黑名单窗口（跨年: 起点在 Y 年,终点在 Y+1 年）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecessWindowConfig {
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
}

impl Default for RecessWindowConfig {
    fn default() -> Self {
        Self {
            start_month: 12,
            start_day: 20,
            end_month: 1,
            end_day: 6,
        }
    }
}

/// 优化引擎参数（全部可缺省,缺省即默认值）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// 最短合法休假天数
    pub min_period_days: i64,

    // ===== 邻域扫描 =====
    pub neighborhood_window: i64,
    /// 延长建议允许的工作日成本区间 [min, max]
    pub extend_min_cost: i64,
    pub extend_max_cost: i64,

    // ===== 平移 =====
    pub shift_window: i64,
    pub shift_min_gain: f64,

    // ===== 拆分 =====
    pub split_min_days: i64,
    pub split_min_distribution: f64,

    // ===== 搭桥 =====
    pub bridge_max_gap: i64,
    /// 输入天数 ≤ 该值时才给出搭桥建议
    pub bridge_trigger_max_days: i64,
    pub bridge_top_n: usize,

    // ===== 全年分段 =====
    pub fraction_count: usize,
    pub fraction_length: i64,
    pub fraction_min_gain: f64,

    // ===== 同长度全年搜索 =====
    /// 输入天数 ≥ 该值时才做全年搜索
    pub optimize_trigger_min_days: i64,
    pub optimize_top_n: usize,
    pub optimize_min_gain: f64,
    /// 月份差 ≤ near 或 ≥ far 才保留
    pub optimize_near_months: u32,
    pub optimize_far_months: u32,

    // ===== 休庭期黑名单 =====
    pub recess_blackout: RecessWindowConfig,
    /// 全年扫描（分段/同长度搜索）是否预先跳过休庭期窗口
    ///
    /// 关闭时按常规流程: 先选窗口,再由休庭期过滤整体剔除
    pub fraction_skip_blackout: bool,

    // ===== 评分策略 =====
    pub scoring_policy: ScoringPolicyKind,

    // ===== 防护上限 =====
    pub max_scan_length: i64,
    pub max_window: i64,
    pub max_fraction_count: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            min_period_days: 5,
            neighborhood_window: 5,
            extend_min_cost: 1,
            extend_max_cost: 3,
            shift_window: 7,
            shift_min_gain: 0.05,
            split_min_days: 10,
            split_min_distribution: 0.5,
            bridge_max_gap: 3,
            bridge_trigger_max_days: 7,
            bridge_top_n: 2,
            fraction_count: 6,
            fraction_length: 5,
            fraction_min_gain: 0.10,
            optimize_trigger_min_days: 14,
            optimize_top_n: 5,
            optimize_min_gain: 0.05,
            optimize_near_months: 4,
            optimize_far_months: 8,
            recess_blackout: RecessWindowConfig::default(),
            fraction_skip_blackout: false,
            scoring_policy: ScoringPolicyKind::Linear,
            max_scan_length: 366,
            max_window: 31,
            max_fraction_count: 52,
        }
    }
}

impl OptimizerConfig {
    /// 校验全部参数
    ///
    /// # 返回
    /// - Ok(()): 校验通过
    /// - Err(ConfigError): 第一个违规项
    pub fn validate(&self) -> ConfigResult<()> {
        check_range("max_scan_length", self.max_scan_length, 1, 366)?;
        check_range("max_window", self.max_window, 1, 366)?;
        check_range(
            "max_fraction_count",
            self.max_fraction_count as i64,
            1,
            183,
        )?;

        check_range("min_period_days", self.min_period_days, 1, self.max_scan_length)?;
        check_range("neighborhood_window", self.neighborhood_window, 1, self.max_window)?;
        check_range("extend_min_cost", self.extend_min_cost, 0, self.neighborhood_window)?;
        check_range(
            "extend_max_cost",
            self.extend_max_cost,
            self.extend_min_cost,
            self.neighborhood_window,
        )?;
        check_range("shift_window", self.shift_window, 1, self.max_window)?;
        check_range("split_min_days", self.split_min_days, 2, self.max_scan_length)?;
        check_range("bridge_max_gap", self.bridge_max_gap, 1, self.max_window)?;
        check_range(
            "fraction_length",
            self.fraction_length,
            1,
            self.max_scan_length,
        )?;
        check_range(
            "fraction_count",
            self.fraction_count as i64,
            1,
            self.max_fraction_count as i64,
        )?;
        check_range(
            "optimize_near_months",
            self.optimize_near_months as i64,
            0,
            11,
        )?;
        check_range(
            "optimize_far_months",
            self.optimize_far_months as i64,
            self.optimize_near_months as i64,
            12,
        )?;

        check_threshold("shift_min_gain", self.shift_min_gain)?;
        check_threshold("split_min_distribution", self.split_min_distribution)?;
        check_threshold("fraction_min_gain", self.fraction_min_gain)?;
        check_threshold("optimize_min_gain", self.optimize_min_gain)?;

        let recess = &self.recess_blackout;
        check_month_day("recess_blackout.start", recess.start_month, recess.start_day)?;
        check_month_day("recess_blackout.end", recess.end_month, recess.end_day)?;

        Ok(())
    }
}

fn check_range(key: &'static str, value: i64, min: i64, max: i64) -> ConfigResult<()> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            key,
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn check_threshold(key: &'static str, value: f64) -> ConfigResult<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::InvalidThreshold { key, value });
    }
    Ok(())
}

fn check_month_day(key: &'static str, month: u32, day: u32) -> ConfigResult<()> {
    // 2024 为闰年,允许 2 月 29 日
    if NaiveDate::from_ymd_opt(2024, month, day).is_none() {
        return Err(ConfigError::InvalidRecessBound { key, month, day });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(OptimizerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: OptimizerConfig =
            serde_json::from_str(r#"{"shift_window": 3, "scoring_policy": "hybrid_penalty"}"#)
                .unwrap();
        assert_eq!(config.shift_window, 3);
        assert_eq!(config.scoring_policy, ScoringPolicyKind::HybridPenalty);
        assert_eq!(config.fraction_count, 6);
        assert_eq!(config.recess_blackout, RecessWindowConfig::default());
        assert!(!config.fraction_skip_blackout);
    }

    #[test]
    fn test_unbounded_window_rejected() {
        let config = OptimizerConfig {
            shift_window: 10_000,
            ..OptimizerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { key: "shift_window", .. })
        ));
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let config = OptimizerConfig {
            fraction_min_gain: 1.5,
            ..OptimizerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThreshold { key: "fraction_min_gain", .. })
        ));
    }

    #[test]
    fn test_invalid_recess_bound_rejected() {
        let mut config = OptimizerConfig::default();
        config.recess_blackout.start_day = 32;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRecessBound { .. })
        ));
    }
}
