//! 稠密图 Dijkstra 单源最短路
//!
//! 基于邻接矩阵的 O(V²) 版本：每轮线性扫描选出未确定顶点中距离最小者，
//! 再用它的整行出边做松弛。适用于顶点数较少、边较稠密的图。

use crate::error::{Error, Result};
use crate::graph::{VertexIndex, WeightMatrix};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// 多个未确定顶点距离相同时的选择策略。只影响确定顺序，不影响最终距离。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// 按下标递增扫描，保留第一个最小值
    #[default]
    LowestIndex,
    /// 按下标递增扫描，保留最后一个最小值（`<=` 比较）
    HighestIndex,
}

/// 单次运行统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// 选择轮数（恒为 n - 1）
    pub selections: usize,
    /// 成功松弛次数
    pub relaxations: usize,
}

/// 单源最短路结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceVector {
    source: VertexIndex,
    /// `None` 表示不可达
    distances: Vec<Option<u64>>,
    /// 顶点被确定的顺序
    #[serde(skip)]
    settled_order: Vec<VertexIndex>,
    #[serde(skip)]
    stats: RunStats,
}

impl DistanceVector {
    pub fn source(&self) -> VertexIndex {
        self.source
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// 到 vertex 的最短距离，不可达或越界时为 `None`
    pub fn get(&self, vertex: VertexIndex) -> Option<u64> {
        self.distances.get(vertex.index()).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: VertexIndex) -> bool {
        self.get(vertex).is_some()
    }

    pub fn as_slice(&self) -> &[Option<u64>] {
        &self.distances
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexIndex, Option<u64>)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .map(|(i, d)| (VertexIndex::new(i), *d))
    }

    /// 可达顶点数（含起点）
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    pub fn settled_order(&self) -> &[VertexIndex] {
        &self.settled_order
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }
}

/// 稠密图最短路求解器
pub struct DenseDijkstra<'a> {
    matrix: &'a WeightMatrix,
    tie_break: TieBreak,
}

impl<'a> DenseDijkstra<'a> {
    pub fn new(matrix: &'a WeightMatrix) -> Self {
        Self {
            matrix,
            tie_break: TieBreak::default(),
        }
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// 计算 source 到所有顶点的最短距离
    pub fn run(&self, source: VertexIndex) -> Result<DistanceVector> {
        let n = self.matrix.vertex_count();
        if source.index() >= n {
            return Err(Error::InvalidInput(format!(
                "起点下标 {} 超出范围 (顶点数 {})",
                source.index(),
                n
            )));
        }

        let mut distances: Vec<Option<u64>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut settled_order = Vec::with_capacity(n);
        let mut stats = RunStats::default();
        distances[source.index()] = Some(0);

        for _ in 0..n - 1 {
            let current = self.select(&distances, &visited);
            visited[current] = true;
            settled_order.push(VertexIndex::new(current));
            stats.selections += 1;

            let Some(base) = distances[current] else {
                trace!(vertex = current, "selected unreachable vertex");
                continue;
            };
            trace!(vertex = current, distance = base, "settled");

            for (next, weight) in self.matrix.row(VertexIndex::new(current))?.iter().enumerate() {
                let Some(weight) = *weight else { continue };
                if visited[next] {
                    continue;
                }
                let candidate = base + u64::from(weight);
                if distances[next].map_or(true, |d| candidate < d) {
                    distances[next] = Some(candidate);
                    stats.relaxations += 1;
                }
            }
        }

        let result = DistanceVector {
            source,
            distances,
            settled_order,
            stats,
        };
        debug!(
            source = source.index(),
            vertices = n,
            reachable = result.reachable_count(),
            relaxations = stats.relaxations,
            "shortest paths computed"
        );
        Ok(result)
    }

    /// 选出未确定顶点中距离最小者；全部不可达时仍返回其中一个
    fn select(&self, distances: &[Option<u64>], visited: &[bool]) -> usize {
        let mut best: Option<(usize, Option<u64>)> = None;
        for (i, d) in distances.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let better = match best {
                None => true,
                Some((_, best_d)) => match self.tie_break {
                    TieBreak::LowestIndex => closer(*d, best_d),
                    TieBreak::HighestIndex => !closer(best_d, *d),
                },
            };
            if better {
                best = Some((i, *d));
            }
        }
        // 循环只执行 n - 1 轮，每轮至少剩一个未确定顶点
        best.map_or(0, |(i, _)| i)
    }
}

/// a 是否严格小于 b，不可达视为无穷大
fn closer(a: Option<u64>, b: Option<u64>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a < b,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// 使用默认选择策略计算单源最短路
pub fn compute_distances(matrix: &WeightMatrix, source: VertexIndex) -> Result<DistanceVector> {
    DenseDijkstra::new(matrix).run(source)
}

/// 指定选择策略计算单源最短路
pub fn compute_distances_with(
    matrix: &WeightMatrix,
    source: VertexIndex,
    tie_break: TieBreak,
) -> Result<DistanceVector> {
    DenseDijkstra::new(matrix).with_tie_break(tie_break).run(source)
}
