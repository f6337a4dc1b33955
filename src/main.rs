// src/main.rs
mod models;
mod config;
mod file_utils;
mod json_parser;
mod metrics_table;
mod chart_renderer;

use anyhow::Result;
use config::load_config;
use chart_renderer::render_charts;
use metrics_table::{build_display_table, build_results_table, create_metric_records};

fn main() -> Result<()> {
    // 加载配置文件
    let config = load_config("metrics_plotter.toml")?;
    println!("Configuration loaded successfully!");
    println!("Results root: {}", config.general.results_root);

    // 读取各模型的metrics.json文件
    let records = create_metric_records(&config)?;
    println!("Loaded metrics for {} models", records.len());

    // 组装结果表格（行顺序固定为声明顺序）
    let table = build_results_table(&config, records);
    println!(
        "Results table: {} rows, {} metric columns",
        table.rows.len(),
        table.metric_names().len()
    );

    // 派生展示表格：百分比换算 + 行标签改为显示名
    let display = build_display_table(&config, &table);

    // 逐个绘制柱状图并保存PNG
    render_charts(&config, &display)?;
    println!("Saved {} charts", config.charts.len());

    Ok(())
}
