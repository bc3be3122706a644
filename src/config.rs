//! 运行配置
//!
//! 命令行参数与可选的 JSON 配置文件最终都汇总为 `RunConfig`

use crate::algorithm::TieBreak;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::graph::ZeroWeight;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 默认配置文件名（位于用户主目录）
pub const DEFAULT_CONFIG_FILE: &str = ".densegraph.json";

/// 矩阵行解析选项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// 非对角线上 0 的含义
    pub zero_weight: ZeroWeight,
    /// 严格模式下非数字记号报错，否则按 0 处理
    pub strict_tokens: bool,
}

/// 一次运行的完整配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub parse: ParseOptions,
    pub tie_break: TieBreak,
    pub output: OutputFormat,
    /// 输出结果后继续询问新的起点
    pub repeat: bool,
    pub color: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            parse: ParseOptions::default(),
            tie_break: TieBreak::default(),
            output: OutputFormat::default(),
            repeat: false,
            color: true,
        }
    }
}

impl RunConfig {
    /// 从 JSON 文件读取，缺省字段取默认值
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: RunConfig = serde_json::from_str(&content)?;
        debug!(path = %path.as_ref().display(), "loaded config file");
        Ok(config)
    }

    /// 用户主目录下的默认配置文件路径
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_CONFIG_FILE))
    }

    /// 显式指定的文件必须存在；未指定时若默认文件存在则读取，否则使用默认配置
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }
}
