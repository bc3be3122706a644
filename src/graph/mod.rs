//! 图核心模块
//!
//! 定义顶点编号与稠密权重矩阵

mod matrix;
mod vertex;

pub use matrix::{
    check_vertex_count, MatrixBuilder, RawWeight, WeightMatrix, ZeroWeight, MAX_VERTICES, MIN_VERTICES,
};
pub use vertex::VertexIndex;
