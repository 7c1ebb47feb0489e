//! 距离矩阵
//!
//! N×N 稠密矩阵，`None` 表示两站之间不可达（无直连线路或无路径）

use crate::error::{Error, Result};
use crate::graph::station::StationId;
use serde::{Serialize, Serializer};

/// 距离矩阵
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    /// 车站数量
    size: usize,
    /// 按行存储的单元格
    cells: Vec<Option<f64>>,
}

impl DistanceMatrix {
    /// 创建矩阵：对角线为 0，其余不可达
    pub fn new(size: usize) -> Self {
        let mut cells = vec![None; size * size];
        for i in 0..size {
            cells[i * size + i] = Some(0.0);
        }
        Self { size, cells }
    }

    /// 矩阵维度
    pub fn size(&self) -> usize {
        self.size
    }

    /// 查询两站之间的距离
    pub fn get(&self, from: StationId, to: StationId) -> Result<Option<f64>> {
        self.check(from)?;
        self.check(to)?;
        Ok(self.at(from.index(), to.index()))
    }

    /// 获取一整行
    pub fn row(&self, from: StationId) -> Result<&[Option<f64>]> {
        self.check(from)?;
        let start = from.index() * self.size;
        Ok(&self.cells[start..start + self.size])
    }

    /// 逐行迭代
    pub fn rows(&self) -> impl Iterator<Item = &[Option<f64>]> {
        // size 为 0 时 chunks 会 panic
        self.cells.chunks(self.size.max(1)).take(self.size)
    }

    /// 是否对称
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (0..self.size).all(|j| self.at(i, j) == self.at(j, i)))
    }

    /// 对角线是否全为 0
    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.size).all(|i| self.at(i, i) == Some(0.0))
    }

    #[inline]
    pub(crate) fn at(&self, i: usize, j: usize) -> Option<f64> {
        self.cells[i * self.size + j]
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, value: Option<f64>) {
        self.cells[i * self.size + j] = value;
    }

    fn check(&self, station: StationId) -> Result<()> {
        if station.index() >= self.size {
            return Err(Error::InvalidStationIndex {
                index: station.index(),
                count: self.size,
            });
        }
        Ok(())
    }
}

/// 序列化为二维数组，不可达为 `null`
impl Serialize for DistanceMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_new() {
        let m = DistanceMatrix::new(3);

        assert_eq!(m.size(), 3);
        assert!(m.has_zero_diagonal());
        assert!(m.is_symmetric());
        assert_eq!(m.get(StationId::new(0), StationId::new(1)).unwrap(), None);
        assert_eq!(m.get(StationId::new(2), StationId::new(2)).unwrap(), Some(0.0));
    }

    #[test]
    fn test_matrix_bounds() {
        let m = DistanceMatrix::new(2);

        assert!(matches!(
            m.get(StationId::new(0), StationId::new(2)),
            Err(Error::InvalidStationIndex { index: 2, count: 2 })
        ));
        assert!(m.row(StationId::new(5)).is_err());
    }

    #[test]
    fn test_matrix_rows_and_json() {
        let mut m = DistanceMatrix::new(2);
        m.set(0, 1, Some(4.5));
        m.set(1, 0, Some(4.5));

        let rows: Vec<&[Option<f64>]> = m.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[Some(0.0), Some(4.5)]);

        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[0.0,4.5],[4.5,0.0]]");
    }

    #[test]
    fn test_matrix_empty() {
        let m = DistanceMatrix::new(0);
        assert_eq!(m.rows().count(), 0);
        assert!(m.is_symmetric());
    }

    #[test]
    fn test_unreachable_serializes_as_null() {
        let m = DistanceMatrix::new(2);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[0.0,null],[null,0.0]]");
    }
}
