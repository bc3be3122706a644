//! DenseGraph - 稠密有向图单源最短路
//!
//! 面向小规模稠密加权有向图：
//! - 基于邻接矩阵的 O(V²) Dijkstra 算法
//! - 显式的“无边”表示，区分零代价边
//! - 交互式矩阵输入（带校验与重试）以及文本 / CSV / JSON 文件导入
//! - 文本、表格、JSON 三种结果输出

pub mod algorithm;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod input;

// 重导出常用类型
pub use algorithm::{compute_distances, compute_distances_with, DistanceVector, TieBreak};
pub use config::{ParseOptions, RunConfig};
pub use error::{Error, Result};
pub use graph::{VertexIndex, WeightMatrix, ZeroWeight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
