//! 起点查询循环
//!
//! 矩阵就绪后询问起点并输出结果；重复模式下持续询问，并允许 `:` 控制台命令

use super::commands::{execute_console_command, CommandResult, ConsoleState};
use super::printer::Printer;
use crate::algorithm::compute_distances_with;
use crate::error::Result;
use crate::graph::{VertexIndex, WeightMatrix};
use crate::input::{InputSession, LineSource, SourceRequest};
use std::io::Write;
use tracing::debug;

/// 清屏并把光标移到左上角
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// 对同一个矩阵反复执行起点查询
pub struct QueryRunner<'a> {
    matrix: &'a WeightMatrix,
    console: ConsoleState,
    repeat: bool,
}

impl<'a> QueryRunner<'a> {
    pub fn new(matrix: &'a WeightMatrix, console: ConsoleState, repeat: bool) -> Self {
        Self {
            matrix,
            console,
            repeat,
        }
    }

    pub fn console(&self) -> &ConsoleState {
        &self.console
    }

    /// 运行查询循环。`initial_source` 为命令行直接给出的 1 起始起点，越界时报错返回
    pub fn run<S: LineSource, W: Write>(
        &mut self,
        session: &mut InputSession<S, W>,
        initial_source: Option<i64>,
    ) -> Result<()> {
        let count = self.matrix.vertex_count();

        if let Some(number) = initial_source {
            let vertex = VertexIndex::from_one_based(number, count)?;
            self.report(vertex, session.out())?;
            if !self.repeat {
                return Ok(());
            }
        }

        loop {
            let request = if self.repeat {
                session.read_request(count)?
            } else {
                session
                    .read_source(count)?
                    .map_or(SourceRequest::Quit, SourceRequest::Vertex)
            };

            match request {
                SourceRequest::Vertex(vertex) => {
                    self.report(vertex, session.out())?;
                    if !self.repeat {
                        break;
                    }
                }
                SourceRequest::Command(command) => {
                    match execute_console_command(&command, &mut self.console, self.matrix) {
                        CommandResult::Exit => break,
                        CommandResult::ClearScreen => {
                            let out = session.out();
                            out.write_all(CLEAR_SCREEN.as_bytes())?;
                            out.flush()?;
                        }
                        CommandResult::Message(message) => {
                            self.console
                                .write_output(session.out(), &format!("{}\n", message))?;
                        }
                        CommandResult::Error(message) => writeln!(session.out(), "{}", message)?,
                    }
                }
                SourceRequest::Quit => break,
            }
        }

        Ok(())
    }

    /// 计算一个起点的结果并按当前格式输出
    pub fn report<W: Write>(&mut self, vertex: VertexIndex, out: &mut W) -> Result<()> {
        let result = compute_distances_with(self.matrix, vertex, self.console.tie_break)?;
        let rendered = self.console.printer().render(&result)?;
        self.console.write_output(out, &rendered)?;
        debug!(summary = %Printer::summary(&result), "route report");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::TieBreak;
    use crate::cli::OutputFormat;
    use crate::config::ParseOptions;
    use crate::error::Error;
    use crate::graph::ZeroWeight;
    use crate::input::ReaderSource;
    use std::io::{self, Cursor};

    type TestSession = InputSession<ReaderSource<Cursor<String>, io::Sink>, Vec<u8>>;

    fn triangle() -> WeightMatrix {
        let rows = vec![
            vec![Some(0), Some(10), Some(1)],
            vec![Some(10), Some(0), Some(1)],
            vec![Some(1), Some(1), Some(0)],
        ];
        WeightMatrix::from_rows(&rows, ZeroWeight::NoEdge).unwrap()
    }

    fn session(input: &str) -> TestSession {
        let source = ReaderSource::new(Cursor::new(input.to_string()), io::sink());
        InputSession::new(source, Vec::new(), ParseOptions::default())
    }

    fn runner(matrix: &WeightMatrix, repeat: bool) -> QueryRunner<'_> {
        let console = ConsoleState::new(OutputFormat::Text, TieBreak::LowestIndex, false);
        QueryRunner::new(matrix, console, repeat)
    }

    fn output(mut session: TestSession) -> String {
        String::from_utf8(std::mem::take(session.out())).unwrap()
    }

    #[test]
    fn test_single_query() {
        let m = triangle();
        let mut s = session("2\n3\n");
        runner(&m, false).run(&mut s, None).unwrap();

        let out = output(s);
        assert!(out.contains("All routes for vertex #2 :"));
        assert!(!out.contains("All routes for vertex #3 :"));
    }

    #[test]
    fn test_repeat_with_console_commands() {
        let m = triangle();
        let mut s = session(":format json\n2\n:tb highest\n1\nq\n");
        let mut r = runner(&m, true);
        r.run(&mut s, None).unwrap();
        assert_eq!(r.console().format, OutputFormat::Json);
        assert_eq!(r.console().tie_break, TieBreak::HighestIndex);

        let out = output(s);
        assert!(out.contains("Output format set to Json"));
        assert_eq!(out.matches("\"source\"").count(), 2);
        assert!(out.contains("\"distances\": [\n    2,\n    0,\n    1\n  ]"));
        assert!(!out.contains("All routes for vertex"));
    }

    #[test]
    fn test_initial_source() {
        let m = triangle();
        let mut s = session("");
        runner(&m, false).run(&mut s, Some(1)).unwrap();
        assert!(output(s).contains("1 ---> 2 : route length = 2"));

        let mut s = session("");
        assert!(matches!(
            runner(&m, false).run(&mut s, Some(4)),
            Err(Error::OutOfRangeSource { given: 4, max: 3 })
        ));
    }

    #[test]
    fn test_initial_source_then_repeat() {
        let m = triangle();
        let mut s = session("3\n:quit\n2\n");
        runner(&m, true).run(&mut s, Some(1)).unwrap();
        let out = output(s);
        assert!(out.contains("All routes for vertex #1 :"));
        assert!(out.contains("All routes for vertex #3 :"));
        assert!(!out.contains("All routes for vertex #2 :"));
    }

    #[test]
    fn test_clear_and_bad_command() {
        let m = triangle();
        let mut s = session(":clear\n:bogus\n");
        runner(&m, true).run(&mut s, None).unwrap();
        let out = output(s);
        assert!(out.starts_with(CLEAR_SCREEN));
        assert!(out.contains("Unknown command"));
    }
}
