// ==========================================
// 司法休假优化系统 - 效率评分策略选择
// ==========================================
// 用途：
// - 配置中选择效率公式（线性为默认且接入建议引擎）；
// - 指数惩罚/混合惩罚为可选策略,不是并行副本。

use serde::{Deserialize, Serialize};

/// 效率评分策略类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicyKind {
    Linear,
    ExponentialPenalty,
    HybridPenalty,
}

impl ScoringPolicyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringPolicyKind::Linear => "linear",
            ScoringPolicyKind::ExponentialPenalty => "exponential_penalty",
            ScoringPolicyKind::HybridPenalty => "hybrid_penalty",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ScoringPolicyKind::Linear => "线性效率 (1 - 工作日/总天数)",
            ScoringPolicyKind::ExponentialPenalty => "指数惩罚",
            ScoringPolicyKind::HybridPenalty => "混合惩罚",
        }
    }
}

impl Default for ScoringPolicyKind {
    fn default() -> Self {
        ScoringPolicyKind::Linear
    }
}

impl std::str::FromStr for ScoringPolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(ScoringPolicyKind::Linear),
            "exponential_penalty" | "exponential-penalty" | "exponential" => {
                Ok(ScoringPolicyKind::ExponentialPenalty)
            }
            "hybrid_penalty" | "hybrid-penalty" | "hybrid" => Ok(ScoringPolicyKind::HybridPenalty),
            other => Err(format!("未知评分策略: {}", other)),
        }
    }
}
