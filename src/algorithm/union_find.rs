//! 并查集
//!
//! 按秩合并 + 路径压缩，Kruskal 算法用它判断加边是否成环

use crate::error::{Error, Result};
use crate::graph::StationId;

/// 并查集（不相交集合）
#[derive(Debug, Clone)]
pub struct UnionFind {
    /// 父节点
    parent: Vec<usize>,
    /// 秩（树高上界）
    rank: Vec<u8>,
    /// 当前集合数
    sets: usize,
}

impl UnionFind {
    /// 创建 `n` 个单元素集合
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// 元素数量
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// 不相交集合数量
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// 查找代表元，沿途把节点直接挂到根上
    pub fn find(&mut self, station: StationId) -> Result<StationId> {
        let mut node = self.check(station)?;

        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        Ok(StationId::new(root))
    }

    /// 合并 `a` 和 `b` 所在集合
    ///
    /// 秩小的根挂到秩大的根下；秩相同时 `a` 的根作为父节点并且秩加一。
    /// 已在同一集合时不做任何修改，返回 `false`。
    pub fn union(&mut self, a: StationId, b: StationId) -> Result<bool> {
        let root_a = self.find(a)?.index();
        let root_b = self.find(b)?.index();
        if root_a == root_b {
            return Ok(false);
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] = self.rank[root_a].saturating_add(1);
            }
        }

        self.sets -= 1;
        Ok(true)
    }

    /// 两个元素是否在同一集合
    pub fn connected(&mut self, a: StationId, b: StationId) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    fn check(&self, station: StationId) -> Result<usize> {
        if station.index() >= self.parent.len() {
            return Err(Error::InvalidStationIndex {
                index: station.index(),
                count: self.parent.len(),
            });
        }
        Ok(station.index())
    }
}
