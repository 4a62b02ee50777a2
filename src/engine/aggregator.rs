// ==========================================
// 司法休假优化系统 - 建议聚合器
// ==========================================
// 职责: 编排各策略,输出过滤、评分、排序后的建议列表
// 红线: 任何建议区间不得与休庭期相交
// 红线: 倒置区间只返回一条 error 建议
// ==========================================

mod builder;
mod core;
mod ranking;


pub use self::core::RecommendationAggregator;
pub use builder::ExtendSide;
pub use ranking::{score_and_sort, strategic_score};
