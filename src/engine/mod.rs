// ==========================================
// 司法休假优化系统 - 引擎层
// ==========================================
// 职责: 区间评估与各类调整策略,聚合输出建议
// 依赖顺序: evaluator → neighborhood / bridge / shift / split / fraction → aggregator
// ==========================================
// 红线: 引擎不返回 Err,所有失败以数据形式表达
// 红线: 日历以不可变值注入,引擎不持有可变全局状态
// ==========================================

pub mod aggregator;
pub mod blackout;
pub mod bridge;
pub mod evaluator;
pub mod fraction;
pub mod neighborhood;
pub mod scoring;
pub mod shift;
pub mod split;
pub mod strategy;

// 重导出核心引擎
pub use aggregator::RecommendationAggregator;
pub use blackout::RecessBlackout;
pub use bridge::{Bridge, BridgeFinder};
pub use evaluator::PeriodEvaluator;
pub use fraction::FractionOptimizer;
pub use neighborhood::{NeighborhoodScan, NeighborhoodScanner};
pub use scoring::{
    policy_for, EfficiencyPolicy, ExponentialPenaltyPolicy, HybridPenaltyPolicy, LinearPolicy,
};
pub use shift::{ShiftOptimizer, ShiftResult};
pub use split::{SplitOptimizer, SplitResult};
pub use strategy::ScoringPolicyKind;
