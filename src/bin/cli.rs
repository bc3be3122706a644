//! DenseGraph CLI 工具
//!
//! 交互式输入权重矩阵（或从文件导入），输出指定起点到其余各顶点的最短路长度

use anyhow::Context;
use clap::{Parser, ValueEnum};
use densegraph::algorithm::TieBreak;
use densegraph::cli::{ConsoleState, OutputFormat, QueryRunner};
use densegraph::graph::ZeroWeight;
use densegraph::input::{load_matrix, EditorSource, InputSession, LineSource, ReaderSource};
use densegraph::RunConfig;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Table,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TieBreakArg {
    Lowest,
    Highest,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::Lowest => TieBreak::LowestIndex,
            TieBreakArg::Highest => TieBreak::HighestIndex,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "densegraph")]
#[command(about = "稠密有向图单源最短路 (Dijkstra)")]
#[command(version)]
struct Args {
    /// 从文件读取矩阵（.txt / .csv / .json），不再交互输入
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 起点（1 起始），指定后跳过起点询问
    #[arg(short, long)]
    source: Option<i64>,

    /// 输出格式
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// 同距离顶点的选择策略
    #[arg(long, value_enum)]
    tie_break: Option<TieBreakArg>,

    /// 非对角线上的 0 视为零代价边而不是无边
    #[arg(long)]
    zero_edges: bool,

    /// 非数字记号报错，而不是按 0 读入
    #[arg(long)]
    strict: bool,

    /// 输出结果后继续询问新的起点
    #[arg(long)]
    repeat: bool,

    /// JSON 配置文件（默认 ~/.densegraph.json）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,

    /// 禁用彩色输出
    #[arg(long)]
    no_color: bool,
}

impl Args {
    /// 命令行参数覆盖配置文件
    fn apply(&self, config: &mut RunConfig) {
        if let Some(format) = self.format {
            config.output = format.into();
        }
        if let Some(tie_break) = self.tie_break {
            config.tie_break = tie_break.into();
        }
        if self.zero_edges {
            config.parse.zero_weight = ZeroWeight::FreeEdge;
        }
        if self.strict {
            config.parse.strict_tokens = true;
        }
        if self.repeat {
            config.repeat = true;
        }
        if self.no_color {
            config.color = false;
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "densegraph=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = RunConfig::load(args.config.as_deref()).context("无法读取配置文件")?;
    args.apply(&mut config);
    if !config.color {
        colored::control::set_override(false);
    }
    debug!(?config, "configuration");

    if io::stdin().is_terminal() {
        run(EditorSource::new()?, &args, &config)
    } else {
        run(ReaderSource::new(io::stdin().lock(), io::stdout()), &args, &config)
    }
}

fn run<S: LineSource>(source: S, args: &Args, config: &RunConfig) -> anyhow::Result<()> {
    let mut session = InputSession::new(source, io::stdout(), config.parse);

    let matrix = match &args.input {
        Some(path) => load_matrix(path, &config.parse)
            .with_context(|| format!("无法导入矩阵文件 {}", path.display()))?,
        None => session.read_graph()?,
    };
    info!(
        vertices = matrix.vertex_count(),
        edges = matrix.edge_count(),
        symmetric = matrix.is_symmetric(),
        "graph ready"
    );

    let console = ConsoleState::new(config.output, config.tie_break, config.color);
    QueryRunner::new(&matrix, console, config.repeat).run(&mut session, args.source)?;
    Ok(())
}
