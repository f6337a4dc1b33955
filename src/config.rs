use crate::models::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn load_config(config_path: &str) -> Result<Config> {
    // 检查配置文件是否存在，如果不存在则创建默认配置
    if !Path::new(config_path).exists() {
        create_default_config(config_path)?;
        println!("Created default config file at {}", config_path);
    }

    // 读取配置文件内容
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path))?;

    // 解析TOML配置
    let config: Config = toml::from_str(&config_content)
        .with_context(|| format!("Failed to parse config file: {}", config_path))?;

    Ok(config)
}

fn create_default_config(config_path: &str) -> Result<()> {
    // 默认配置即固定的四个评估运行和三张图表
    let default_config = r#"[general]
results_root = "."
fraction_prefix = "frac"

[[sources]]
model = "Unconditional"
path = "unconditional_01_13/metrics.json"
display_name = "Unconditional Generation"

[[sources]]
model = "Bulk-Mod-Liquid"
path = "bulk_modulus_01_13/003_liquid/metrics.json"
display_name = "Property Conditioned Bulk Modulus\n(Liquid, 3GPa)"

[[sources]]
model = "Bulk-Mod-Steel"
path = "bulk_modulus_01_13/160_steel/metrics.json"
display_name = "Property Conditioned Bulk Modulus\n(Steel, 160GPa)"

[[sources]]
model = "Bulk-Mod-Diamonds"
path = "bulk_modulus_01_13/440_diamond/metrics.json"
display_name = "Property Conditioned Bulk Modulus\n(Diamond, 440GPa)"

[[charts]]
metric = "frac_novel_unique_stable_structures"
display_name = "% S.U.N. Structures (MatterSim)"
output = "plots/metrics_sun.png"

[[charts]]
metric = "frac_stable_structures"
display_name = "% Stable Structures"
output = "plots/metrics_stable.png"

[[charts]]
metric = "avg_rmsd_from_relaxation"
display_name = "Avg. RMSD During Relaxation"
output = "plots/metrics_rmsd.png"

[style]
figure_width = 800
figure_height = 400
bar_width = 0.8
label_x_offset = 0.2
label_font_size = 13
axis_font_size = 12
"#;

    fs::write(config_path, default_config)
        .with_context(|| format!("Failed to create default config file: {}", config_path))?;

    Ok(())
}
