//! 控制台命令处理
//!
//! 起点提示符下以 : 开头的输入为控制台命令

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use super::printer::{OutputFormat, Printer};
use crate::algorithm::TieBreak;
use crate::graph::WeightMatrix;

/// 控制台命令执行结果
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// 退出程序
    Exit,
    /// 清屏
    ClearScreen,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 控制台状态
pub struct ConsoleState {
    /// 输出格式
    pub format: OutputFormat,
    /// 同距离选择策略
    pub tie_break: TieBreak,
    /// 彩色输出
    pub color: bool,
    /// 输出到文件
    pub tee_file: Option<File>,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            tie_break: TieBreak::default(),
            color: false,
            tee_file: None,
        }
    }
}

impl ConsoleState {
    pub fn new(format: OutputFormat, tie_break: TieBreak, color: bool) -> Self {
        Self {
            format,
            tie_break,
            color,
            tee_file: None,
        }
    }

    /// 按当前设置构造打印器
    pub fn printer(&self) -> Printer {
        Printer::new(self.format).with_color(self.color)
    }

    /// 写入输出（同时写入 out 和 tee 文件）
    pub fn write_output<W: Write>(&mut self, out: &mut W, content: &str) -> std::io::Result<()> {
        out.write_all(content.as_bytes())?;
        out.flush()?;
        if let Some(ref mut file) = self.tee_file {
            file.write_all(content.as_bytes())?;
        }
        Ok(())
    }
}

/// 解析并执行控制台命令
pub fn execute_console_command(input: &str, state: &mut ConsoleState, matrix: &WeightMatrix) -> CommandResult {
    let input = input.trim();
    let cmd_line = input.strip_prefix(':').unwrap_or(input);

    let parts: Vec<&str> = cmd_line.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let args = parts.get(1).copied().unwrap_or("").trim();

    match cmd.as_str() {
        "help" | "h" => CommandResult::Message(get_help_text()),

        "quit" | "q" | "exit" | "e" => CommandResult::Exit,

        "format" | "f" => match args.to_lowercase().as_str() {
            "text" => set_format(state, OutputFormat::Text),
            "table" => set_format(state, OutputFormat::Table),
            "json" => set_format(state, OutputFormat::Json),
            "" => CommandResult::Message(format!("Output format: {:?}", state.format)),
            _ => CommandResult::Error("Usage: :format <text|table|json>".to_string()),
        },

        "tiebreak" | "tb" => match args.to_lowercase().as_str() {
            "lowest" => set_tie_break(state, TieBreak::LowestIndex),
            "highest" => set_tie_break(state, TieBreak::HighestIndex),
            "" => CommandResult::Message(format!("Tie-break: {:?}", state.tie_break)),
            _ => CommandResult::Error("Usage: :tiebreak <lowest|highest>".to_string()),
        },

        "matrix" | "m" => CommandResult::Message(Printer::render_matrix(matrix)),

        "tee" => {
            let args_parts: Vec<&str> = args.split_whitespace().collect();
            let (overwrite, filename) = if args_parts.first() == Some(&"-o") {
                (true, args_parts.get(1).copied())
            } else {
                (false, args_parts.first().copied())
            };

            if let Some(filename) = filename {
                let path = PathBuf::from(filename);
                let file = if overwrite {
                    File::create(&path)
                } else {
                    File::options().create(true).append(true).open(&path)
                };

                match file {
                    Ok(f) => {
                        state.tee_file = Some(f);
                        CommandResult::Message(format!("Logging to {}", filename))
                    }
                    Err(e) => CommandResult::Error(format!("Cannot open file: {}", e)),
                }
            } else {
                CommandResult::Error("Usage: :tee [-o] <filename>".to_string())
            }
        }

        "notee" => {
            if state.tee_file.take().is_some() {
                CommandResult::Message("Stopped logging".to_string())
            } else {
                CommandResult::Message("No active logging".to_string())
            }
        }

        "clear" => CommandResult::ClearScreen,

        _ => CommandResult::Error(format!("Unknown command: {}. Type :help for help.", cmd)),
    }
}

fn set_format(state: &mut ConsoleState, format: OutputFormat) -> CommandResult {
    state.format = format;
    CommandResult::Message(format!("Output format set to {:?}", format))
}

fn set_tie_break(state: &mut ConsoleState, tie_break: TieBreak) -> CommandResult {
    state.tie_break = tie_break;
    CommandResult::Message(format!("Tie-break set to {:?}", tie_break))
}

/// 检查输入是否是控制台命令
pub fn is_console_command(input: &str) -> bool {
    input.trim().starts_with(':')
}

fn get_help_text() -> String {
    r#"
╔═══════════════════════════════════════════════════════════════╗
║                    Console Commands                           ║
╠═══════════════════════════════════════════════════════════════╣
║ <N>                        Show all routes from vertex N      ║
║ :help, :h                  Show this help                     ║
║ :quit, :q, :exit, :e       Exit the program                   ║
║ :format, :f <fmt>          Output format: text, table, json   ║
║ :tiebreak, :tb <policy>    Tie-break: lowest, highest         ║
║ :matrix, :m                Show the weight matrix             ║
║ :tee [-o] <filename>       Log output to file (-o: overwrite) ║
║ :notee                     Stop logging to file               ║
║ :clear                     Clear the screen                   ║
╚═══════════════════════════════════════════════════════════════╝
"#
    .to_string()
}
