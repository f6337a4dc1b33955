use std::path::{Path, PathBuf};
use anyhow::Result;

/// 将配置中的相对路径（输入或输出）解析为results_root下的完整路径
/// 允许路径带前导"/"（按相对路径处理，与声明时的书写习惯兼容）
pub fn resolve_results_path(results_root: &str, relative_path: &str) -> PathBuf {
    Path::new(results_root).join(relative_path.trim_start_matches('/'))
}

/// 检查metrics文件是否存在且为普通文件
pub fn check_metrics_file(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Metrics file '{}' does not exist", path.display());
    }

    if !path.is_file() {
        anyhow::bail!("'{}' is not a file", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_results_path() {
        // 普通相对路径
        let path = resolve_results_path("results", "unconditional_01_13/metrics.json");
        assert_eq!(
            path,
            PathBuf::from("results/unconditional_01_13/metrics.json")
        );

        // 带前导斜杠的路径应去掉前导斜杠后拼接
        let path = resolve_results_path("results", "/unconditional_01_13/metrics.json");
        assert_eq!(
            path,
            PathBuf::from("results/unconditional_01_13/metrics.json")
        );

        // results_root为"."时
        let path = resolve_results_path(".", "a/metrics.json");
        assert_eq!(path, PathBuf::from("./a/metrics.json"));
    }

    #[test]
    fn test_check_metrics_file() {
        let temp_dir = tempdir().unwrap();
        let temp_path = temp_dir.path();

        // 存在的普通文件
        let file_path = temp_path.join("metrics.json");
        fs::write(&file_path, "{}").unwrap();
        assert!(check_metrics_file(&file_path).is_ok());

        // 不存在的文件
        let missing = temp_path.join("missing.json");
        assert!(check_metrics_file(&missing).is_err());

        // 目录而不是文件
        let dir_path = temp_path.join("a_dir");
        fs::create_dir(&dir_path).unwrap();
        assert!(check_metrics_file(&dir_path).is_err());
    }
}
