//! 命令行界面组件
//!
//! 结果打印、控制台命令、Tab 补全与起点查询循环

mod commands;
mod completer;
mod printer;
mod runner;

pub use commands::{execute_console_command, is_console_command, CommandResult, ConsoleState};
pub use completer::CommandCompleter;
pub use printer::{OutputFormat, Printer};
pub use runner::QueryRunner;
