// models.rs - 作为模块目录入口文件（Rust 2018+ 风格）
// 导出所有子模块
pub mod config;
pub mod metrics;

// 重新导出常用类型，保持API一致性
pub use config::{ChartConfig, Config, GeneralConfig, SourceConfig, StyleConfig};
pub use metrics::{DisplayColumn, DisplayTable, MetricRecord, ResultsTable};
