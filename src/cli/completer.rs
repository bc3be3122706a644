//! 控制台命令补全器
//!
//! 基于 rustyline 实现 Tab 补全功能

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 控制台命令列表
const CONSOLE_COMMANDS: &[&str] = &[
    ":help", ":h",
    ":quit", ":q",
    ":exit", ":e",
    ":format", ":f",
    ":tiebreak", ":tb",
    ":matrix", ":m",
    ":tee",
    ":notee",
    ":clear",
];

/// 命令参数
fn get_arguments(command: &str) -> Option<&'static [&'static str]> {
    match command {
        ":format" | ":f" => Some(&["text", "table", "json"]),
        ":tiebreak" | ":tb" => Some(&["lowest", "highest"]),
        ":tee" => Some(&["-o"]),
        _ => None,
    }
}

fn pairs<'a>(candidates: impl Iterator<Item = &'a &'a str>) -> Vec<Pair> {
    candidates
        .map(|c| Pair {
            display: c.to_string(),
            replacement: c.to_string(),
        })
        .collect()
}

/// 起点提示符补全器
#[derive(Default)]
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_cursor = &line[..pos];
        if !line_to_cursor.starts_with(':') {
            return Ok((pos, vec![]));
        }

        let words: Vec<&str> = line_to_cursor.split_whitespace().collect();
        let at_word_end = !line_to_cursor.ends_with(' ');

        match (words.as_slice(), at_word_end) {
            // 补全命令本身
            ([command], true) => Ok((
                0,
                pairs(CONSOLE_COMMANDS.iter().filter(|c| c.starts_with(command))),
            )),
            // 命令后的空格，列出全部参数
            ([command], false) => {
                let args = get_arguments(command).unwrap_or(&[]);
                Ok((pos, pairs(args.iter())))
            }
            // 补全参数
            ([command, current], true) => {
                let args = get_arguments(command).unwrap_or(&[]);
                let lower = current.to_lowercase();
                Ok((
                    pos - current.len(),
                    pairs(args.iter().filter(|a| a.starts_with(&lower))),
                ))
            }
            _ => Ok((pos, vec![])),
        }
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}
