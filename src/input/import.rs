//! 矩阵文件导入
//!
//! 按扩展名选择格式：`.json`、`.csv`，其余按空白分隔的文本处理。
//! 文件导入没有重试，任何校验错误都直接返回。

use super::row::{parse_count, parse_row, parse_tokens};
use crate::config::ParseOptions;
use crate::error::{Error, Result};
use crate::graph::{RawWeight, WeightMatrix};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// 矩阵文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixFormat {
    Text,
    Csv,
    Json,
}

impl MatrixFormat {
    /// 根据扩展名判断格式
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => MatrixFormat::Json,
            Some("csv") => MatrixFormat::Csv,
            _ => MatrixFormat::Text,
        }
    }
}

/// JSON 矩阵文件：`{"rows": [...]}` 或直接一个二维数组，`null` 表示无边
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonMatrix {
    Wrapped { rows: Vec<Vec<RawWeight>> },
    Bare(Vec<Vec<RawWeight>>),
}

/// 从文件读取权重矩阵
pub fn load_matrix<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<WeightMatrix> {
    let path = path.as_ref();
    let format = MatrixFormat::from_path(path);
    debug!(path = %path.display(), ?format, "loading matrix");

    let rows = match format {
        MatrixFormat::Json => read_json_rows(path)?,
        MatrixFormat::Csv => read_csv_rows(path, options)?,
        MatrixFormat::Text => read_text_rows(BufReader::new(File::open(path)?), options)?,
    };

    let matrix = WeightMatrix::from_rows(&rows, options.zero_weight)?;
    info!(
        path = %path.display(),
        vertices = matrix.vertex_count(),
        edges = matrix.edge_count(),
        "matrix loaded"
    );
    Ok(matrix)
}

fn read_json_rows(path: &Path) -> Result<Vec<Vec<RawWeight>>> {
    let reader = BufReader::new(File::open(path)?);
    let parsed: JsonMatrix = serde_json::from_reader(reader)?;
    let rows = match parsed {
        JsonMatrix::Wrapped { rows } => rows,
        JsonMatrix::Bare(rows) => rows,
    };
    Ok(rows)
}

fn read_csv_rows(path: &Path, options: &ParseOptions) -> Result<Vec<Vec<RawWeight>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_path(path)?;

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        records.push(record);
    }

    let expected = records.len();
    records
        .iter()
        .enumerate()
        .map(|(row, record)| {
            let tokens: Vec<&str> = record.iter().collect();
            parse_tokens(&tokens, row, expected, options)
        })
        .collect()
}

/// 读取文本矩阵。可选的首行单个数字声明顶点数，`#` 之后为注释
pub fn read_text_rows<R: BufRead>(reader: R, options: &ParseOptions) -> Result<Vec<Vec<RawWeight>>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let content = line.split('#').next().unwrap_or("").trim().to_string();
        if !content.is_empty() {
            lines.push(content);
        }
    }

    // 矩阵至少两列，单个记号的首行只可能是顶点数声明
    let declared = match lines.first() {
        Some(first) if first.split_whitespace().count() == 1 => Some(parse_count(first)?),
        _ => None,
    };
    if declared.is_some() {
        lines.remove(0);
    }

    let expected = declared.unwrap_or(lines.len());
    if lines.len() != expected {
        return Err(Error::MalformedCount(format!(
            "声明 {} 个顶点, 实际 {} 行",
            expected,
            lines.len()
        )));
    }

    lines
        .iter()
        .enumerate()
        .map(|(row, line)| parse_row(line, row, expected, options))
        .collect()
}
