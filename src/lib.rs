// ==========================================
// 司法休假优化系统 - 核心库
// ==========================================
// 职责: 评估休假区间,给出延长/平移/拆分/分段/搭桥建议
// 系统定位: 决策支持 (最终选择由用户做出)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "pt-BR");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 日历协作方接口
pub mod calendar;

// 引擎层 - 评估与策略
pub mod engine;

// 配置层 - 引擎参数
pub mod config;

// API 层 - 对外接口
pub mod api;

// 导出层 - iCalendar
pub mod export;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// 性能统计
pub mod perf;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    DateRange, DayBreakdown, EfficiencyRating, FractionedSelection, Holiday, HolidayCategory,
    Recommendation, RecommendationType, VacationPeriod,
};

// 日历
pub use calendar::{CalendarError, HolidayCalendar, InMemoryCalendar};

// 引擎
pub use engine::{
    BridgeFinder, FractionOptimizer, NeighborhoodScanner, PeriodEvaluator,
    RecommendationAggregator, ScoringPolicyKind, ShiftOptimizer, SplitOptimizer,
};

// 配置
pub use config::{ConfigError, ConfigManager, OptimizerConfig};

// API
pub use api::{ApiError, ApiResult, OptimizerApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "司法休假优化系统";
