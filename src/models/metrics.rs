use std::collections::HashMap;

/// 指标记录结构，对应单个模型评估运行的metrics.json
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    pub model: String,  // 模型短名，来自配置中声明的key
    // ————————————————————————————————————————————————————————————————————————
    // 指标集合，键为指标名，值为JSON中"value"字段的标量
    // 加载时创建一次，之后不再修改
    // ————————————————————————————————————————————————————————————————————————
    pub values: HashMap<String, f64>,
}

/// 结果表格结构，每个声明的模型恰好一行
/// 行顺序固定为配置中的声明顺序，与记录插入顺序无关
#[derive(Debug, PartialEq)]
pub struct ResultsTable {
    pub model_order: Vec<String>,  // 声明顺序，即有序分类维度的类别顺序
    // ————————————————————————————————————————————————————————————————————————
    // 行数据，与model_order同序
    // ————————————————————————————————————————————————————————————————————————
    pub rows: Vec<MetricRecord>,
}

impl ResultsTable {
    /// 按模型名和指标名查找单元格值，缺失的列返回None
    pub fn value(&self, model: &str, metric: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.model == model)
            .and_then(|row| row.values.get(metric).copied())
    }

    /// 所有出现过的指标名（各行的并集），排序后返回
    pub fn metric_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .rows
            .iter()
            .flat_map(|row| row.values.keys().cloned())
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();
        names.sort();
        names
    }
}

/// 展示列结构，对应一张图表的派生数据
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayColumn {
    pub metric: String,        // 来源指标名
    pub display_name: String,  // 人类可读的显示名（y轴标签）
    pub is_percentage: bool,   // 是否为百分比换算后的分数型指标
    // ————————————————————————————————————————————————————————————————————————
    // 每行一个单元格，与行标签同序；来源列缺失时为None
    // ————————————————————————————————————————————————————————————————————————
    pub cells: Vec<Option<f64>>,
}

/// 展示表格结构，仅供渲染器消费
#[derive(Debug, PartialEq)]
pub struct DisplayTable {
    pub labels: Vec<String>,  // 多行显示名，与结果表格行同序
    pub columns: Vec<DisplayColumn>,
}

impl DisplayTable {
    pub fn column(&self, metric: &str) -> Option<&DisplayColumn> {
        self.columns.iter().find(|c| c.metric == metric)
    }
}
