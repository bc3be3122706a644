//! 交互式输入会话
//!
//! 依次询问顶点数量、矩阵各行和起点。校验失败时提示用户并重新询问同一项，
//! 校验错误从不终止会话。

use super::row::{parse_count, parse_row, parse_source};
use super::source::LineSource;
use crate::cli::is_console_command;
use crate::config::ParseOptions;
use crate::error::{Error, Result};
use crate::graph::{MatrixBuilder, VertexIndex, WeightMatrix};
use std::io::Write;
use tracing::debug;

/// 退出起点询问的命令
const QUIT_COMMANDS: &[&str] = &["q", "quit", "exit"];

/// 起点提示符下的一次输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRequest {
    Vertex(VertexIndex),
    /// `:` 开头的控制台命令
    Command(String),
    /// 退出命令或输入结束
    Quit,
}

pub struct InputSession<S, W> {
    source: S,
    out: W,
    options: ParseOptions,
}

impl<S: LineSource, W: Write> InputSession<S, W> {
    pub fn new(source: S, out: W, options: ParseOptions) -> Self {
        Self { source, out, options }
    }

    /// 询问顶点数量（至少 2）
    pub fn read_vertex_count(&mut self) -> Result<usize> {
        loop {
            let line = self.require_line("Vertex amount (2 or more) : ")?;
            match parse_count(&line) {
                Ok(count) => {
                    writeln!(self.out)?;
                    return Ok(count);
                }
                Err(e) => self.reject(&e, "Bad vertex amount.")?,
            }
        }
    }

    /// 逐行询问 n×n 矩阵，出错的行重新输入
    pub fn read_matrix(&mut self, vertex_count: usize) -> Result<WeightMatrix> {
        let mut builder = MatrixBuilder::new(vertex_count, self.options.zero_weight)?;
        while !builder.is_complete() {
            let row = builder.rows_filled();
            let line = self.require_line(&format!("Matrix row #{} : ", row + 1))?;
            let pushed = parse_row(&line, row, vertex_count, &self.options)
                .and_then(|raw| builder.push_row(&raw));
            if let Err(e) = pushed {
                let message = match e {
                    Error::InvalidSelfWeight { .. } => {
                        "No loops in Dijkstra Algorithm. (self-route should be equal zero)"
                    }
                    Error::NegativeWeight { .. } => "Negative weights are not supported.",
                    _ => "Bad matrix row.",
                };
                self.reject(&e, message)?;
            }
        }
        writeln!(self.out)?;
        builder.build()
    }

    /// 询问起点；输入结束或退出命令时返回 `None`
    pub fn read_source(&mut self, vertex_count: usize) -> Result<Option<VertexIndex>> {
        loop {
            match self.read_request(vertex_count)? {
                SourceRequest::Vertex(vertex) => return Ok(Some(vertex)),
                SourceRequest::Quit => return Ok(None),
                SourceRequest::Command(_) => {
                    writeln!(self.out, "Console commands are not available here.")?;
                }
            }
        }
    }

    /// 询问起点，允许 `:` 开头的控制台命令
    pub fn read_request(&mut self, vertex_count: usize) -> Result<SourceRequest> {
        let prompt = format!("All routes for vertex (1 - {}) : ", vertex_count);
        loop {
            let Some(line) = self.source.next_line(&prompt)? else {
                return Ok(SourceRequest::Quit);
            };
            let trimmed = line.trim();
            if QUIT_COMMANDS.iter().any(|c| c.eq_ignore_ascii_case(trimmed)) {
                return Ok(SourceRequest::Quit);
            }
            if is_console_command(trimmed) {
                return Ok(SourceRequest::Command(trimmed.to_string()));
            }
            match parse_source(trimmed, vertex_count) {
                Ok(vertex) => return Ok(SourceRequest::Vertex(vertex)),
                Err(e) => self.reject(&e, "Bad vertex chosen.")?,
            }
        }
    }

    /// 输出流（用于打印结果）
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// 读取完整的图：顶点数量与矩阵
    pub fn read_graph(&mut self) -> Result<WeightMatrix> {
        let count = self.read_vertex_count()?;
        self.read_matrix(count)
    }

    fn require_line(&mut self, prompt: &str) -> Result<String> {
        self.source.next_line(prompt)?.ok_or(Error::UnexpectedEof)
    }

    fn reject(&mut self, error: &Error, message: &str) -> Result<()> {
        debug!(%error, "input rejected");
        writeln!(self.out, "{}", message)?;
        Ok(())
    }
}
