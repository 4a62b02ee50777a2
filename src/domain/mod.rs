// ==========================================
// 司法休假优化系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、日期区间工具
// 红线: 不含日历数据加载,不含引擎逻辑
// ==========================================

pub mod date_range;
pub mod holiday;
pub mod period;
pub mod recommendation;
pub mod types;

// 重导出核心类型
pub use date_range::DateRange;
pub use holiday::Holiday;
pub use period::{DayBreakdown, VacationPeriod};
pub use recommendation::{FractionedSelection, Recommendation};
pub use types::{EfficiencyRating, HolidayCategory, RecommendationType};
