// src/metrics_table.rs
use std::collections::HashMap;
use anyhow::{Context, Result};
use crate::file_utils::{check_metrics_file, resolve_results_path};
use crate::json_parser::parse_metrics_file;
use crate::models::{Config, DisplayColumn, DisplayTable, MetricRecord, ResultsTable};

/// 按配置声明顺序读取各模型的metrics.json，创建MetricRecord列表
/// 任一文件缺失或解析失败都直接中止，不做降级处理
pub fn create_metric_records(config: &Config) -> Result<Vec<MetricRecord>> {
    let mut records = Vec::new();

    for source in &config.sources {
        let file_path = resolve_results_path(&config.general.results_root, &source.path);
        check_metrics_file(&file_path)?;

        let values = parse_metrics_file(&file_path)
            .with_context(|| format!("Failed to load metrics for model '{}'", source.model))?;

        records.push(MetricRecord {
            model: source.model.clone(),
            values,
        });
    }

    Ok(records)
}

/// 将记录列表组装为结果表格
// ————————————————————————————————————————————————————————————————————————
// 行顺序固定为配置中来源的声明顺序，与records的排列无关
// 同名模型后写覆盖先写；未声明的模型直接丢弃
// ————————————————————————————————————————————————————————————————————————
pub fn build_results_table(config: &Config, records: Vec<MetricRecord>) -> ResultsTable {
    let model_order: Vec<String> = config.sources.iter().map(|s| s.model.clone()).collect();

    // 按模型名索引，后写覆盖先写
    let mut by_model: HashMap<String, MetricRecord> = HashMap::new();
    for record in records {
        by_model.insert(record.model.clone(), record);
    }

    // 按声明顺序物化行
    let rows: Vec<MetricRecord> = model_order
        .iter()
        .filter_map(|model| by_model.remove(model))
        .collect();

    ResultsTable { model_order, rows }
}

/// 从结果表格派生展示表格
/// 分数型指标（名称以fraction_prefix开头）换算为百分比，其余原样复制；
/// 行标签从模型短名换成多行显示名，行顺序和行数不变
pub fn build_display_table(config: &Config, table: &ResultsTable) -> DisplayTable {
    // 行标签重命名：短名 → 显示名（找不到声明时退回短名，当前配置下不可达）
    let display_names: HashMap<&str, &str> = config
        .sources
        .iter()
        .map(|s| (s.model.as_str(), s.display_name.as_str()))
        .collect();

    let labels: Vec<String> = table
        .rows
        .iter()
        .map(|row| {
            display_names
                .get(row.model.as_str())
                .map(|name| name.to_string())
                .unwrap_or_else(|| row.model.clone())
        })
        .collect();

    let columns: Vec<DisplayColumn> = config
        .charts
        .iter()
        .map(|chart| {
            let is_percentage = chart.metric.starts_with(&config.general.fraction_prefix);
            // 来源列缺失时单元格为None，不报错
            let cells: Vec<Option<f64>> = table
                .rows
                .iter()
                .map(|row| {
                    row.values
                        .get(&chart.metric)
                        .map(|v| if is_percentage { 100.0 * v } else { *v })
                })
                .collect();

            DisplayColumn {
                metric: chart.metric.clone(),
                display_name: chart.display_name.clone(),
                is_percentage,
                cells,
            }
        })
        .collect();

    DisplayTable { labels, columns }
}
