//! 全源最短路径
//!
//! Floyd-Warshall 算法，在距离矩阵的副本上原地松弛，同时记录下一跳以便还原路线。
//! 只处理非负里程。

use crate::error::Result;
use crate::graph::{DistanceMatrix, RailNetwork, StationId};
use serde::{Deserialize, Serialize};
use tracing::info;

/// 路线
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// 途经车站（含起点和终点）
    pub stations: Vec<StationId>,
    /// 总里程
    pub total_distance_km: f64,
}

impl Route {
    /// 经过的线路段数
    pub fn hops(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }
}

/// 全源最短路径表
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    /// 最短距离
    distances: DistanceMatrix,
    /// `next_hop[i * n + j]`：从 i 去 j 的第一站
    next_hop: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// 车站数量
    pub fn station_count(&self) -> usize {
        self.distances.size()
    }

    /// 最短距离矩阵
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// 两站之间的最短距离，不可达为 `None`
    pub fn distance(&self, from: StationId, to: StationId) -> Result<Option<f64>> {
        self.distances.get(from, to)
    }

    /// 还原两站之间的最短路线，不可达为 `None`
    pub fn route(&self, from: StationId, to: StationId) -> Result<Option<Route>> {
        let Some(total_distance_km) = self.distances.get(from, to)? else {
            return Ok(None);
        };

        let n = self.station_count();
        let target = to.index();
        let mut stations = vec![from];
        let mut current = from.index();

        while current != target {
            match self.next_hop[current * n + target] {
                Some(next) if stations.len() <= n => {
                    stations.push(StationId::new(next));
                    current = next;
                }
                _ => return Ok(None),
            }
        }

        Ok(Some(Route {
            stations,
            total_distance_km,
        }))
    }
}

/// 用 Floyd-Warshall 算法计算全源最短路径
///
/// 复杂度 O(N³)。网络的距离矩阵保持不变。
pub fn compute_shortest_paths(network: &RailNetwork) -> ShortestPaths {
    let mut dist = network.distance_matrix().clone();
    let n = dist.size();

    let mut next_hop = vec![None; n * n];
    for i in 0..n {
        for j in 0..n {
            if dist.at(i, j).is_some() {
                next_hop[i * n + j] = Some(j);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(d_ik) = dist.at(i, k) else {
                continue;
            };
            for j in 0..n {
                let Some(d_kj) = dist.at(k, j) else {
                    continue;
                };
                let via = d_ik + d_kj;
                let shorter = match dist.at(i, j) {
                    Some(d_ij) => via < d_ij,
                    None => true,
                };
                if shorter {
                    dist.set(i, j, Some(via));
                    next_hop[i * n + j] = next_hop[i * n + k];
                }
            }
        }
    }

    let reachable_pairs = (0..n)
        .flat_map(|i| (0..n).map(move |j| (i, j)))
        .filter(|&(i, j)| i != j && dist.at(i, j).is_some())
        .count();
    info!(stations = n, reachable_pairs, "all-pairs shortest paths computed");

    ShortestPaths {
        distances: dist,
        next_hop,
    }
}
