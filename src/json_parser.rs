// src/json_parser.rs
use std::collections::HashMap;
use std::path::Path;
use anyhow::{Context, Result};
use serde_json::Value;

/// 解析单个metrics.json文件到HashMap<String, f64>
// ————————————————————————————————————————————————————————————————————————
// 核心解析函数
// 文件形如 { "<metric>": {"value": <number>, ...其余字段忽略...}, ... }
// ————————————————————————————————————————————————————————————————————————
pub fn parse_metrics_file(file_path: &Path) -> Result<HashMap<String, f64>> {
    let contents = std::fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read metrics file: {}", file_path.display()))?;

    let json_value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse JSON from file: {}", file_path.display()))?;

    let Value::Object(map) = json_value else {
        anyhow::bail!(
            "Top-level JSON in {} is not an object",
            file_path.display()
        );
    };

    let mut result = HashMap::new();
    for (metric_name, entry) in map {
        let value = extract_metric_value(&metric_name, &entry)
            .with_context(|| format!("In metrics file: {}", file_path.display()))?;
        result.insert(metric_name, value);
    }
    Ok(result)
}

// ————————————————————————————————————————————————————————————————————————
// 从指标条目中取出"value"字段
// 条目必须是对象且包含数值型"value"，其余字段一律忽略
// ————————————————————————————————————————————————————————————————————————
fn extract_metric_value(metric_name: &str, entry: &Value) -> Result<f64> {
    let Value::Object(fields) = entry else {
        anyhow::bail!("Metric entry '{}' is not an object", metric_name);
    };

    let value = fields
        .get("value")
        .ok_or_else(|| anyhow::anyhow!("Metric entry '{}' has no \"value\" key", metric_name))?;

    value.as_f64().ok_or_else(|| {
        anyhow::anyhow!(
            "Metric entry '{}' has a non-numeric \"value\": {:?}",
            metric_name,
            value
        )
    })
}
