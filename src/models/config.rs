use serde::Deserialize;

/// 应用程序配置结构
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    pub general: GeneralConfig,
    pub sources: Vec<SourceConfig>,
    pub charts: Vec<ChartConfig>,
    pub style: StyleConfig,
}

/// 通用配置
#[derive(Debug, Deserialize, Default)]
pub struct GeneralConfig {
    pub results_root: String,
    pub fraction_prefix: String,
}

/// 指标来源配置，数组顺序即表格行的声明顺序
#[derive(Debug, Deserialize, Default)]
pub struct SourceConfig {
    pub model: String,         // 模型短名
    pub path: String,          // metrics.json相对results_root的路径
    pub display_name: String,  // 绘图用多行显示名
}

/// 图表配置，每个条目产出一张PNG
#[derive(Debug, Deserialize, Default)]
pub struct ChartConfig {
    pub metric: String,        // 来源指标名
    pub display_name: String,  // y轴标签兼派生列名
    pub output: String,        // 输出PNG路径
}

/// 绘图样式配置
#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    pub figure_width: u32,
    pub figure_height: u32,
    pub bar_width: f64,       // 柱宽（坐标轴单位）
    // ————————————————————————————————————————————————————————————————————————
    // 手动重绘刻度标签时的横向偏移（坐标轴单位）
    // 纯视觉修正量，依赖具体字体和图尺寸，可按需调整
    // ————————————————————————————————————————————————————————————————————————
    pub label_x_offset: f64,
    pub label_font_size: u32,
    pub axis_font_size: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            figure_width: 800,
            figure_height: 400,
            bar_width: 0.8,
            label_x_offset: 0.2,
            label_font_size: 13,
            axis_font_size: 12,
        }
    }
}
