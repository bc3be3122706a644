//! 图算法模块
//!
//! 稠密图上的单源最短路

mod dijkstra;

pub use dijkstra::{
    compute_distances, compute_distances_with, DenseDijkstra, DistanceVector, RunStats, TieBreak,
};
