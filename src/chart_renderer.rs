// src/chart_renderer.rs
use std::path::Path;
use anyhow::{Context, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::file_utils::resolve_results_path;
use crate::models::{Config, DisplayColumn, DisplayTable, StyleConfig};

// ————————————————————————————————————————————————————————————————————————
// 每个柱子一种颜色，按行序循环取色（seaborn deep色板）
// ————————————————————————————————————————————————————————————————————————
const BAR_PALETTE: [RGBColor; 6] = [
    RGBColor(76, 114, 176),
    RGBColor(221, 132, 82),
    RGBColor(85, 168, 104),
    RGBColor(196, 78, 82),
    RGBColor(129, 114, 179),
    RGBColor(147, 120, 96),
];

/// 按声明顺序渲染配置中的全部图表
/// 输出路径相对results_root解析；输出目录缺失时保存失败直接中止
pub fn render_charts(config: &Config, display: &DisplayTable) -> Result<()> {
    for chart in &config.charts {
        let column = display.column(&chart.metric).ok_or_else(|| {
            anyhow::anyhow!("No display column found for metric '{}'", chart.metric)
        })?;

        let out_path = resolve_results_path(&config.general.results_root, &chart.output);
        render_bar_chart(&out_path, &display.labels, column, &config.style)
            .with_context(|| format!("Failed to render chart '{}'", chart.metric))?;
        println!("Saved chart to {}", out_path.display());
    }

    Ok(())
}

/// 绘制单张柱状图并保存为PNG
pub fn render_bar_chart(
    out_path: &Path,
    labels: &[String],
    column: &DisplayColumn,
    style: &StyleConfig,
) -> Result<()> {
    let n_models = labels.len();

    let root = BitMapBackend::new(out_path, (style.figure_width, style.figure_height))
        .into_drawing_area();
    root.fill(&WHITE)?;

    // 显示名可能多行，x轴标签区按最大行数预留高度
    let max_label_lines = labels
        .iter()
        .map(|l| l.lines().count())
        .max()
        .unwrap_or(1);
    let line_height = style.label_font_size as i32 + 3;
    let x_label_area = 10 + max_label_lines as i32 * line_height;

    // 百分比图固定0~100每10一格，其余固定[0, 1]
    let y_max = if column.is_percentage { 100.0 } else { 1.0 };

    // x轴范围[-1, n]，左右留出呼吸空间
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(x_label_area)
        .y_label_area_size(55)
        .build_cartesian_2d(-1.0f64..n_models as f64, 0.0f64..y_max)?;

    let blank_label = |_: &f64| String::new();
    let percent_label = |v: &f64| format!("{:.0}", v);

    let mut mesh = chart.configure_mesh();
    mesh.disable_x_mesh()
        .disable_y_mesh()
        // 自动生成的x刻度标签全部隐藏，稍后手动重绘
        .x_label_formatter(&blank_label)
        .y_desc(&column.display_name)
        .axis_style(BLACK.stroke_width(1))
        .label_style(("sans-serif", style.axis_font_size as i32));
    if column.is_percentage {
        mesh.y_labels(11).y_label_formatter(&percent_label);
    }
    mesh.draw()?;

    // 每行一个柱子，居中于行下标；单元格为None时不画柱
    let half_width = style.bar_width / 2.0;
    chart.draw_series(column.cells.iter().enumerate().filter_map(|(i, cell)| {
        cell.map(|value| {
            let color = BAR_PALETTE[i % BAR_PALETTE.len()];
            Rectangle::new(
                [(i as f64 - half_width, 0.0), (i as f64 + half_width, value)],
                color.filled(),
            )
        })
    }))?;

    // ————————————————————————————————————————————————————————————————————————
    // 手动重绘x刻度标签：逐行画出多行显示名，可加横向偏移微调
    // 位图后端的文本只支持90度整数倍旋转，标签按水平排版
    // ————————————————————————————————————————————————————————————————————————
    let text_style = ("sans-serif", style.label_font_size as i32)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));

    for (i, label) in labels.iter().enumerate() {
        let anchor_x = i as f64 + style.label_x_offset;
        let (px, py) = chart.backend_coord(&(anchor_x, 0.0));
        for (line_idx, line) in label.lines().enumerate() {
            let pos = (px, py + 6 + line_idx as i32 * line_height);
            root.draw_text(line, &text_style, pos)?;
        }
    }

    root.present()
        .with_context(|| format!("Failed to save chart to {}", out_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use crate::metrics_table::{build_display_table, build_results_table, create_metric_records};
    use std::fs;
    use tempfile::tempdir;

    const METRICS_JSON: &str = r#"{
        "frac_stable_structures": {"value": 0.5},
        "frac_novel_unique_stable_structures": {"value": 0.25},
        "avg_rmsd_from_relaxation": {"value": 0.1}
    }"#;

    /// 在临时目录下铺好默认配置对应的四个metrics.json和plots目录
    fn setup_results_root(root: &Path) {
        for sub in [
            "unconditional_01_13",
            "bulk_modulus_01_13/003_liquid",
            "bulk_modulus_01_13/160_steel",
            "bulk_modulus_01_13/440_diamond",
        ] {
            let dir = root.join(sub);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("metrics.json"), METRICS_JSON).unwrap();
        }
        fs::create_dir(root.join("plots")).unwrap();
    }

    fn default_config_with_root(root: &Path) -> crate::models::Config {
        let config_path = root.join("metrics_plotter.toml");
        let mut config = load_config(config_path.to_str().unwrap()).unwrap();
        config.general.results_root = root.to_str().unwrap().to_string();
        config
    }

    #[test]
    fn test_end_to_end_writes_three_pngs() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        setup_results_root(root);

        let config = default_config_with_root(root);

        // 完整流水线：加载 → 组表 → 派生 → 渲染
        let records = create_metric_records(&config).unwrap();
        let table = build_results_table(&config, records);
        let display = build_display_table(&config, &table);
        render_charts(&config, &display).unwrap();

        // 恰好三个PNG，路径与配置一致，内容非空
        for name in ["metrics_sun.png", "metrics_stable.png", "metrics_rmsd.png"] {
            let path = root.join("plots").join(name);
            assert!(path.exists(), "missing output {}", path.display());
            assert!(fs::metadata(&path).unwrap().len() > 0);
        }
        let png_count = fs::read_dir(root.join("plots")).unwrap().count();
        assert_eq!(png_count, 3);
    }

    #[test]
    fn test_end_to_end_idempotent_rerun() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        setup_results_root(root);

        let config = default_config_with_root(root);

        let records = create_metric_records(&config).unwrap();
        let table = build_results_table(&config, records);
        let display = build_display_table(&config, &table);

        render_charts(&config, &display).unwrap();
        let first = fs::read(root.join("plots/metrics_stable.png")).unwrap();

        // 输入不变时重跑应覆盖写出同样的内容
        render_charts(&config, &display).unwrap();
        let second = fs::read(root.join("plots/metrics_stable.png")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_end_to_end_missing_input_writes_nothing() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        setup_results_root(root);

        // 删掉一个输入文件
        fs::remove_file(root.join("bulk_modulus_01_13/160_steel/metrics.json")).unwrap();

        let config = default_config_with_root(root);

        // 加载阶段即失败，不应产出任何PNG
        let result = create_metric_records(&config);
        assert!(result.is_err());
        let png_count = fs::read_dir(root.join("plots")).unwrap().count();
        assert_eq!(png_count, 0);
    }

    #[test]
    fn test_render_missing_output_dir_fails() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        setup_results_root(root);

        // 删掉输出目录，保存时应失败而不是自动创建
        fs::remove_dir(root.join("plots")).unwrap();

        let config = default_config_with_root(root);
        let records = create_metric_records(&config).unwrap();
        let table = build_results_table(&config, records);
        let display = build_display_table(&config, &table);

        let result = render_charts(&config, &display);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_skips_missing_cells() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("plots")).unwrap();

        // 单元格为None时不画柱，但图仍应正常保存
        let column = DisplayColumn {
            metric: "frac_stable_structures".to_string(),
            display_name: "% Stable Structures".to_string(),
            is_percentage: true,
            cells: vec![Some(50.0), None],
        };
        let labels = vec!["Model A".to_string(), "Model B\n(variant)".to_string()];

        let out_path = root.join("plots/partial.png");
        render_bar_chart(&out_path, &labels, &column, &StyleConfig::default()).unwrap();
        assert!(out_path.exists());
    }
}
