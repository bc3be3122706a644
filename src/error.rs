//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点数量无效: {0}")]
    MalformedCount(String),

    #[error("矩阵第 {row} 行格式错误: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("顶点 {vertex} 的自环权重必须为 0, 实际为 {weight}")]
    InvalidSelfWeight { vertex: usize, weight: i64 },

    #[error("矩阵第 {row} 行第 {column} 列为负权重: {value}")]
    NegativeWeight { row: usize, column: usize, value: i64 },

    #[error("起点超出范围: {given} (有效范围 1 - {max})")]
    OutOfRangeSource { given: i64, max: usize },

    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("输入意外结束")]
    UnexpectedEof,

    #[error("行编辑器错误: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV 错误: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// 是否为可通过重新输入恢复的校验错误
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::MalformedCount(_)
                | Error::MalformedRow { .. }
                | Error::InvalidSelfWeight { .. }
                | Error::NegativeWeight { .. }
                | Error::OutOfRangeSource { .. }
        )
    }
}
