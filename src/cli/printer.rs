//! 结果打印器
//!
//! 提供文本、表格和 JSON 三种最短路结果输出

use crate::algorithm::DistanceVector;
use crate::error::Result;
use crate::graph::WeightMatrix;
use colored::Colorize;
use prettytable::{format, row, Cell, Row, Table};
use serde::{Deserialize, Serialize};

/// 输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// 逐行文本 (`1 ---> 2 : route length = 5`)
    #[default]
    Text,
    /// 表格
    Table,
    /// JSON
    Json,
}

/// JSON 输出结构，起点使用 1 起始编号
#[derive(Serialize)]
struct JsonReport<'a> {
    source: usize,
    distances: &'a [Option<u64>],
    reachable: usize,
}

/// 结果打印器
pub struct Printer {
    format: OutputFormat,
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(OutputFormat::Text)
    }
}

impl Printer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// 渲染一次运行的结果
    pub fn render(&self, result: &DistanceVector) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.format_text(result)),
            OutputFormat::Table => Ok(self.format_table(result)),
            OutputFormat::Json => self.format_json(result),
        }
    }

    fn format_text(&self, result: &DistanceVector) -> String {
        let source = result.source();
        let mut output = format!("\nAll routes for vertex #{} :\n", source);

        for (vertex, distance) in result.iter().filter(|(v, _)| *v != source) {
            let line = match distance {
                Some(d) => format!("{} ---> {} : route length = {}", source, vertex, d),
                None => format!("{} ---> {} : route is unavailable", source, vertex),
            };
            if self.color && distance.is_none() {
                output.push_str(&line.dimmed().to_string());
            } else {
                output.push_str(&line);
            }
            output.push('\n');
        }

        output.push('\n');
        output
    }

    fn format_table(&self, result: &DistanceVector) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["From", "To", "Length"]);

        let source = result.source();
        for (vertex, distance) in result.iter().filter(|(v, _)| *v != source) {
            let length = distance.map_or_else(|| "unreachable".to_string(), |d| d.to_string());
            table.add_row(row![source, vertex, length]);
        }

        table.to_string()
    }

    fn format_json(&self, result: &DistanceVector) -> Result<String> {
        let report = JsonReport {
            source: result.source().one_based(),
            distances: result.as_slice(),
            reachable: result.reachable_count(),
        };
        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        Ok(json)
    }

    /// 权重矩阵表格，无边显示为 `-`
    pub fn render_matrix(matrix: &WeightMatrix) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let mut header = vec![Cell::new("")];
        header.extend(matrix.vertices().map(|v| Cell::new(&v.to_string())));
        table.set_titles(Row::new(header));

        for (from, row) in matrix.vertices().zip(matrix.rows()) {
            let mut cells = vec![Cell::new(&from.to_string())];
            cells.extend(row.iter().enumerate().map(|(to, w)| {
                let text = match w {
                    Some(w) => w.to_string(),
                    None if to == from.index() => "0".to_string(),
                    None => "-".to_string(),
                };
                Cell::new(&text)
            }));
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 一行运行摘要
    pub fn summary(result: &DistanceVector) -> String {
        let stats = result.stats();
        format!(
            "{} of {} vertices reachable ({} selections, {} relaxations)",
            result.reachable_count(),
            result.len(),
            stats.selections,
            stats.relaxations
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::compute_distances;
    use crate::graph::{VertexIndex, WeightMatrix, ZeroWeight};

    fn sample() -> DistanceVector {
        // 0 -> 1 (5)，2 不可达
        let rows = vec![
            vec![Some(0), Some(5), Some(0)],
            vec![Some(5), Some(0), Some(0)],
            vec![Some(0), Some(0), Some(0)],
        ];
        let m = WeightMatrix::from_rows(&rows, ZeroWeight::NoEdge).unwrap();
        compute_distances(&m, VertexIndex::new(0)).unwrap()
    }

    #[test]
    fn test_text_format() {
        let text = Printer::new(OutputFormat::Text).render(&sample()).unwrap();
        assert_eq!(
            text,
            "\nAll routes for vertex #1 :\n\
             1 ---> 2 : route length = 5\n\
             1 ---> 3 : route is unavailable\n\n"
        );
    }

    #[test]
    fn test_table_format() {
        let table = Printer::new(OutputFormat::Table).render(&sample()).unwrap();
        assert!(table.contains("Length"));
        assert!(table.contains("unreachable"));
        assert!(table.contains('5'));
    }

    #[test]
    fn test_json_format() {
        let json = Printer::new(OutputFormat::Json).render(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["source"], 1);
        assert_eq!(value["distances"], serde_json::json!([0, 5, null]));
        assert_eq!(value["reachable"], 2);
    }

    #[test]
    fn test_render_matrix() {
        let rows = vec![vec![Some(0), Some(7)], vec![Some(0), Some(0)]];
        let m = WeightMatrix::from_rows(&rows, ZeroWeight::NoEdge).unwrap();
        let table = Printer::render_matrix(&m);
        assert!(table.contains('7'));
        assert!(table.contains('-'));
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            Printer::summary(&sample()),
            "2 of 3 vertices reachable (2 selections, 1 relaxations)"
        );
    }
}
