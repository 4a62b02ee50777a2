// ==========================================
// 司法休假优化系统 - 领域类型定义
// ==========================================
// 依据: 数据模型 - Holiday / VacationPeriod / Recommendation
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 节假日类别 (Holiday Category)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayCategory {
    National, // 全国性节日
    Judicial, // 司法系统节日
    Recess,   // 司法休庭期
}

impl fmt::Display for HolidayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HolidayCategory::National => write!(f, "national"),
            HolidayCategory::Judicial => write!(f, "judicial"),
            HolidayCategory::Recess => write!(f, "recess"),
        }
    }
}

impl std::str::FromStr for HolidayCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "national" => Ok(HolidayCategory::National),
            "judicial" => Ok(HolidayCategory::Judicial),
            "recess" => Ok(HolidayCategory::Recess),
            other => Err(format!("未知节假日类别: {}", other)),
        }
    }
}

// ==========================================
// 效率等级 (Efficiency Rating)
// ==========================================
// 阈值: high ≥ 0.60, medium ≥ 0.40, 其余 low
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyRating {
    Low,
    Medium,
    High,
}

impl EfficiencyRating {
    pub const HIGH_THRESHOLD: f64 = 0.60;
    pub const MEDIUM_THRESHOLD: f64 = 0.40;

    /// 由效率值判定等级
    pub fn from_efficiency(efficiency: f64) -> Self {
        if efficiency >= Self::HIGH_THRESHOLD {
            EfficiencyRating::High
        } else if efficiency >= Self::MEDIUM_THRESHOLD {
            EfficiencyRating::Medium
        } else {
            EfficiencyRating::Low
        }
    }
}

impl fmt::Display for EfficiencyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EfficiencyRating::Low => write!(f, "low"),
            EfficiencyRating::Medium => write!(f, "medium"),
            EfficiencyRating::High => write!(f, "high"),
        }
    }
}

// ==========================================
// 建议类型 (Recommendation Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    Extend,          // 向前/向后延长
    Shift,           // 整体平移
    Split,           // 一拆二
    OptimalFraction, // 全年分段
    Bridge,          // 搭桥
    Optimize,        // 同长度全年最优
    Error,           // 日期倒置纠正
    Hybrid,          // 两端同时延长
}

impl RecommendationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationType::Extend => "extend",
            RecommendationType::Shift => "shift",
            RecommendationType::Split => "split",
            RecommendationType::OptimalFraction => "optimal_fraction",
            RecommendationType::Bridge => "bridge",
            RecommendationType::Optimize => "optimize",
            RecommendationType::Error => "error",
            RecommendationType::Hybrid => "hybrid",
        }
    }

    /// 是否携带分段明细（split / optimal_fraction）
    pub fn carries_fractions(&self) -> bool {
        matches!(
            self,
            RecommendationType::Split | RecommendationType::OptimalFraction
        )
    }
}

impl fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(EfficiencyRating::from_efficiency(0.6), EfficiencyRating::High);
        assert_eq!(EfficiencyRating::from_efficiency(0.59), EfficiencyRating::Medium);
        assert_eq!(EfficiencyRating::from_efficiency(0.4), EfficiencyRating::Medium);
        assert_eq!(EfficiencyRating::from_efficiency(0.0), EfficiencyRating::Low);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("Recess".parse::<HolidayCategory>(), Ok(HolidayCategory::Recess));
        assert!("municipal".parse::<HolidayCategory>().is_err());
    }

    #[test]
    fn test_recommendation_type_serde_tag() {
        let json = serde_json::to_string(&RecommendationType::OptimalFraction).unwrap();
        assert_eq!(json, "\"optimal_fraction\"");
        assert!(RecommendationType::Split.carries_fractions());
        assert!(!RecommendationType::Bridge.carries_fractions());
    }
}
