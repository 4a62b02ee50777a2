// ==========================================
// 司法休假优化系统 - 导出层
// ==========================================
// 职责: 把评估结果转换为外部日历可导入的格式
// ==========================================

pub mod ics;

pub use ics::{render_calendar, render_period};
