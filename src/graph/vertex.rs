//! 顶点编号
//!
//! 内部统一使用 0 起始下标，面向用户的输入输出使用 1 起始编号

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点下标（0 起始）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexIndex(pub usize);

impl VertexIndex {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }

    /// 由用户输入的 1 起始编号构造，超出 [1, n] 时返回 `OutOfRangeSource`
    pub fn from_one_based(number: i64, vertex_count: usize) -> Result<Self> {
        if number < 1 || number as u64 > vertex_count as u64 {
            return Err(Error::OutOfRangeSource {
                given: number,
                max: vertex_count,
            });
        }
        Ok(Self(number as usize - 1))
    }

    /// 面向用户的 1 起始编号
    pub fn one_based(&self) -> usize {
        self.0 + 1
    }
}

impl From<usize> for VertexIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// 以 1 起始编号显示
impl fmt::Display for VertexIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_based_round_trip() {
        let v = VertexIndex::from_one_based(3, 5).unwrap();
        assert_eq!(v.index(), 2);
        assert_eq!(v.one_based(), 3);
        assert_eq!(v.to_string(), "3");
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            VertexIndex::from_one_based(0, 4),
            Err(Error::OutOfRangeSource { given: 0, max: 4 })
        ));
        assert!(matches!(
            VertexIndex::from_one_based(5, 4),
            Err(Error::OutOfRangeSource { given: 5, max: 4 })
        ));
        assert!(VertexIndex::from_one_based(-1, 4).is_err());
    }
}
