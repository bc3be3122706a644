//! 权重矩阵
//!
//! N×N 稠密有向图，按行主序存放在一块连续内存中（步长为 N）。
//! 每个元素为 `Option<u32>`：`None` 表示没有边，`Some(w)` 表示权重为 w 的边。

use super::vertex::VertexIndex;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 最小顶点数
pub const MIN_VERTICES: usize = 2;

/// 最大顶点数。矩阵一次性分配 N² 个元素，超过此值的输入按顶点数错误处理
pub const MAX_VERTICES: usize = 4096;

/// 原始输入中的一个元素：`None` 为显式的“无边”记号
pub type RawWeight = Option<i64>;

/// 非对角线上的 0 如何解释
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroWeight {
    /// 0 表示无边（与经典输入格式保持一致）
    #[default]
    NoEdge,
    /// 0 是一条零代价边
    FreeEdge,
}

/// 权重矩阵
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightMatrix {
    vertex_count: usize,
    weights: Vec<Option<u32>>,
}

impl WeightMatrix {
    /// 创建没有任何边的矩阵
    pub fn with_no_edges(vertex_count: usize) -> Result<Self> {
        Ok(Self {
            vertex_count,
            weights: vec![None; cell_count(vertex_count)?],
        })
    }

    /// 从原始行构造矩阵
    pub fn from_rows(rows: &[Vec<RawWeight>], zero: ZeroWeight) -> Result<Self> {
        let mut builder = MatrixBuilder::new(rows.len(), zero)?;
        for row in rows {
            builder.push_row(row)?;
        }
        builder.build()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    fn offset(&self, from: VertexIndex, to: VertexIndex) -> Result<usize> {
        if from.index() >= self.vertex_count || to.index() >= self.vertex_count {
            return Err(Error::InvalidInput(format!(
                "边 {} -> {} 超出矩阵范围 (顶点数 {})",
                from, to, self.vertex_count
            )));
        }
        Ok(from.index() * self.vertex_count + to.index())
    }

    /// 边 from -> to 的权重，无边时为 `Ok(None)`；顶点越界时报错
    #[inline]
    pub fn weight(&self, from: VertexIndex, to: VertexIndex) -> Result<Option<u32>> {
        let offset = self.offset(from, to)?;
        Ok(self.weights[offset])
    }

    /// from 的整行出边
    pub fn row(&self, from: VertexIndex) -> Result<&[Option<u32>]> {
        let start = self.offset(from, VertexIndex::new(0))?;
        Ok(&self.weights[start..start + self.vertex_count])
    }

    /// 按行遍历
    pub fn rows(&self) -> impl Iterator<Item = &[Option<u32>]> {
        self.weights.chunks_exact(self.vertex_count)
    }

    /// 设置边权重。对角线只允许 `None` 或 `Some(0)`
    pub fn set_edge(&mut self, from: VertexIndex, to: VertexIndex, weight: Option<u32>) -> Result<()> {
        let offset = self.offset(from, to)?;
        if from == to {
            if let Some(w) = weight.filter(|&w| w != 0) {
                return Err(Error::InvalidSelfWeight {
                    vertex: from.one_based(),
                    weight: i64::from(w),
                });
            }
        }
        self.weights[offset] = weight;
        Ok(())
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexIndex> {
        (0..self.vertex_count).map(VertexIndex::new)
    }

    /// 非对角线上的边数
    pub fn edge_count(&self) -> usize {
        self.rows()
            .enumerate()
            .map(|(from, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(to, w)| to != from && w.is_some())
                    .count()
            })
            .sum()
    }

    /// 是否为无向图（矩阵对称）
    pub fn is_symmetric(&self) -> bool {
        let n = self.vertex_count;
        (0..n).all(|i| (i + 1..n).all(|j| self.weights[i * n + j] == self.weights[j * n + i]))
    }
}

/// 逐行构造 `WeightMatrix`，每行单独校验，便于交互式输入时只重新输入出错的那一行
#[derive(Debug)]
pub struct MatrixBuilder {
    vertex_count: usize,
    zero: ZeroWeight,
    weights: Vec<Option<u32>>,
}

impl MatrixBuilder {
    pub fn new(vertex_count: usize, zero: ZeroWeight) -> Result<Self> {
        Ok(Self {
            vertex_count,
            zero,
            weights: Vec::with_capacity(cell_count(vertex_count)?),
        })
    }

    /// 已接受的行数
    pub fn rows_filled(&self) -> usize {
        self.weights.len() / self.vertex_count
    }

    pub fn is_complete(&self) -> bool {
        self.rows_filled() == self.vertex_count
    }

    /// 校验并追加下一行；出错时构造器状态不变
    pub fn push_row(&mut self, raw: &[RawWeight]) -> Result<()> {
        let row = self.rows_filled();
        if row == self.vertex_count {
            return Err(Error::MalformedRow {
                row: row + 1,
                reason: format!("矩阵只有 {} 行", self.vertex_count),
            });
        }
        if raw.len() != self.vertex_count {
            return Err(Error::MalformedRow {
                row: row + 1,
                reason: format!("期望 {} 个值, 实际 {} 个", self.vertex_count, raw.len()),
            });
        }

        // 先检查对角线，与逐行输入时的提示顺序一致
        if let Some(w) = raw[row].filter(|&w| w != 0) {
            return Err(Error::InvalidSelfWeight {
                vertex: row + 1,
                weight: w,
            });
        }

        let mut converted = Vec::with_capacity(self.vertex_count);
        for (column, value) in raw.iter().enumerate() {
            converted.push(self.convert(row, column, *value)?);
        }
        self.weights.extend(converted);
        Ok(())
    }

    fn convert(&self, row: usize, column: usize, value: RawWeight) -> Result<Option<u32>> {
        let Some(value) = value else {
            return Ok(None);
        };
        if value < 0 {
            return Err(Error::NegativeWeight {
                row: row + 1,
                column: column + 1,
                value,
            });
        }
        let weight = u32::try_from(value).map_err(|_| Error::MalformedRow {
            row: row + 1,
            reason: format!("第 {} 列权重过大: {}", column + 1, value),
        })?;

        if row == column {
            return Ok(Some(0));
        }
        match (weight, self.zero) {
            (0, ZeroWeight::NoEdge) => Ok(None),
            _ => Ok(Some(weight)),
        }
    }

    pub fn build(self) -> Result<WeightMatrix> {
        if !self.is_complete() {
            return Err(Error::MalformedCount(format!(
                "期望 {} 行, 实际 {} 行",
                self.vertex_count,
                self.rows_filled()
            )));
        }
        Ok(WeightMatrix {
            vertex_count: self.vertex_count,
            weights: self.weights,
        })
    }
}

/// 顶点数必须在 [MIN_VERTICES, MAX_VERTICES] 内
pub fn check_vertex_count(vertex_count: usize) -> Result<()> {
    if vertex_count < MIN_VERTICES {
        return Err(Error::MalformedCount(format!(
            "至少需要 {} 个顶点, 实际 {}",
            MIN_VERTICES, vertex_count
        )));
    }
    if vertex_count > MAX_VERTICES {
        return Err(Error::MalformedCount(format!(
            "最多支持 {} 个顶点, 实际 {}",
            MAX_VERTICES, vertex_count
        )));
    }
    Ok(())
}

fn cell_count(vertex_count: usize) -> Result<usize> {
    check_vertex_count(vertex_count)?;
    vertex_count
        .checked_mul(vertex_count)
        .ok_or_else(|| Error::MalformedCount(format!("顶点数过大: {}", vertex_count)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(rows: &[&[i64]]) -> Vec<Vec<RawWeight>> {
        rows.iter()
            .map(|r| r.iter().map(|&w| Some(w)).collect())
            .collect()
    }

    #[test]
    fn test_zero_is_no_edge_by_default() {
        let m = WeightMatrix::from_rows(&raw(&[&[0, 5, 0], &[5, 0, 1], &[0, 1, 0]]), ZeroWeight::NoEdge)
            .unwrap();
        assert_eq!(m.vertex_count(), 3);
        assert_eq!(m.weight(VertexIndex(0), VertexIndex(1)).unwrap(), Some(5));
        assert_eq!(m.weight(VertexIndex(0), VertexIndex(2)).unwrap(), None);
        assert_eq!(m.weight(VertexIndex(1), VertexIndex(1)).unwrap(), Some(0));
        assert_eq!(m.edge_count(), 4);
        assert!(m.is_symmetric());
    }

    #[test]
    fn test_zero_as_free_edge() {
        let m = WeightMatrix::from_rows(&raw(&[&[0, 0], &[7, 0]]), ZeroWeight::FreeEdge).unwrap();
        assert_eq!(m.weight(VertexIndex(0), VertexIndex(1)).unwrap(), Some(0));
        assert_eq!(m.weight(VertexIndex(1), VertexIndex(0)).unwrap(), Some(7));
        assert!(!m.is_symmetric());
    }

    #[test]
    fn test_explicit_no_edge_marker() {
        let rows = vec![vec![Some(0), None], vec![Some(3), Some(0)]];
        let m = WeightMatrix::from_rows(&rows, ZeroWeight::FreeEdge).unwrap();
        assert_eq!(m.weight(VertexIndex(0), VertexIndex(1)).unwrap(), None);
        assert_eq!(m.edge_count(), 1);
    }

    #[test]
    fn test_rejects_small_count() {
        assert!(matches!(
            WeightMatrix::with_no_edges(1),
            Err(Error::MalformedCount(_))
        ));
        assert!(matches!(
            WeightMatrix::from_rows(&raw(&[&[0]]), ZeroWeight::NoEdge),
            Err(Error::MalformedCount(_))
        ));
    }

    #[test]
    fn test_rejects_bad_rows() {
        let mut b = MatrixBuilder::new(3, ZeroWeight::NoEdge).unwrap();
        assert!(matches!(
            b.push_row(&[Some(0), Some(1)]),
            Err(Error::MalformedRow { row: 1, .. })
        ));
        assert!(matches!(
            b.push_row(&[Some(4), Some(1), Some(1)]),
            Err(Error::InvalidSelfWeight { vertex: 1, weight: 4 })
        ));
        assert!(matches!(
            b.push_row(&[Some(0), Some(-2), Some(1)]),
            Err(Error::NegativeWeight { row: 1, column: 2, value: -2 })
        ));
        assert!(matches!(
            b.push_row(&[Some(0), Some(i64::from(u32::MAX) + 1), Some(1)]),
            Err(Error::MalformedRow { row: 1, .. })
        ));
        assert_eq!(b.rows_filled(), 0);

        b.push_row(&[Some(0), Some(1), Some(1)]).unwrap();
        assert_eq!(b.rows_filled(), 1);
        assert!(matches!(b.build(), Err(Error::MalformedCount(_))));
    }

    #[test]
    fn test_set_edge() {
        let mut m = WeightMatrix::with_no_edges(3).unwrap();
        m.set_edge(VertexIndex(0), VertexIndex(2), Some(9)).unwrap();
        assert_eq!(m.row(VertexIndex(0)).unwrap(), &[None, None, Some(9)]);
        assert!(matches!(
            m.set_edge(VertexIndex(1), VertexIndex(1), Some(2)),
            Err(Error::InvalidSelfWeight { vertex: 2, weight: 2 })
        ));
        assert!(m.set_edge(VertexIndex(3), VertexIndex(0), Some(1)).is_err());
        m.set_edge(VertexIndex(1), VertexIndex(1), Some(0)).unwrap();
    }

    #[test]
    fn test_out_of_range_lookup() {
        let m = WeightMatrix::with_no_edges(2).unwrap();
        assert!(matches!(
            m.weight(VertexIndex(0), VertexIndex(2)),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(m.row(VertexIndex(2)), Err(Error::InvalidInput(_))));
        assert_eq!(m.rows().count(), 2);
    }

    #[test]
    fn test_vertex_count_bounds() {
        assert!(matches!(
            WeightMatrix::with_no_edges(MAX_VERTICES + 1),
            Err(Error::MalformedCount(_))
        ));
        assert!(matches!(
            MatrixBuilder::new(usize::MAX, ZeroWeight::NoEdge),
            Err(Error::MalformedCount(_))
        ));
    }
}
