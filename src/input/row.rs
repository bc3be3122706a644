//! 输入记号解析
//!
//! 宽松模式下整数按 `atoi` 规则解析：可选符号加前导数字，其余部分忽略，
//! 完全不是数字的记号读作 0。

use crate::config::ParseOptions;
use crate::error::{Error, Result};
use crate::graph::{check_vertex_count, RawWeight, VertexIndex, MIN_VERTICES};

/// 显式表示“无边”的记号（不区分大小写）
const NO_EDGE_TOKENS: &[&str] = &["-", "x", "inf"];

/// 按 `atoi` 规则解析整数，溢出时饱和
pub fn parse_int_lenient(token: &str) -> i64 {
    let token = token.trim_start();
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
    }
    if negative {
        -value
    } else {
        value
    }
}

pub fn is_no_edge_token(token: &str) -> bool {
    NO_EDGE_TOKENS
        .iter()
        .any(|marker| marker.eq_ignore_ascii_case(token))
}

/// 解析单个权重记号；`Err` 携带原因描述
fn parse_weight(token: &str, strict: bool) -> std::result::Result<RawWeight, String> {
    if is_no_edge_token(token) {
        return Ok(None);
    }
    if strict {
        token
            .parse::<i64>()
            .map(Some)
            .map_err(|_| format!("非数字记号: {:?}", token))
    } else {
        Ok(Some(parse_int_lenient(token)))
    }
}

/// 解析矩阵的一行。`row` 为 0 起始行号，只用于错误信息
pub fn parse_row(line: &str, row: usize, expected: usize, options: &ParseOptions) -> Result<Vec<RawWeight>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    parse_tokens(&tokens, row, expected, options)
}

/// 解析已切分好的一行记号（CSV 导入等场景）
pub fn parse_tokens(tokens: &[&str], row: usize, expected: usize, options: &ParseOptions) -> Result<Vec<RawWeight>> {
    if tokens.len() != expected {
        return Err(Error::MalformedRow {
            row: row + 1,
            reason: format!("期望 {} 个值, 实际 {} 个", expected, tokens.len()),
        });
    }

    tokens
        .iter()
        .map(|token| {
            parse_weight(token, options.strict_tokens)
                .map_err(|reason| Error::MalformedRow { row: row + 1, reason })
        })
        .collect()
}

/// 解析顶点数量（取第一个记号）
pub fn parse_count(line: &str) -> Result<usize> {
    let token = line.split_whitespace().next().unwrap_or("");
    let value = parse_int_lenient(token);
    if value < MIN_VERTICES as i64 {
        return Err(Error::MalformedCount(format!(
            "{:?} (至少需要 {} 个顶点)",
            token, MIN_VERTICES
        )));
    }
    let count = usize::try_from(value).map_err(|_| Error::MalformedCount(format!("{:?} 过大", token)))?;
    check_vertex_count(count)?;
    Ok(count)
}

/// 解析用户输入的 1 起始起点编号
pub fn parse_source(line: &str, vertex_count: usize) -> Result<VertexIndex> {
    let token = line.split_whitespace().next().unwrap_or("");
    VertexIndex::from_one_based(parse_int_lenient(token), vertex_count)
}
