//! 最小生成树
//!
//! Kruskal 算法：按里程升序扫描线路，用并查集跳过会成环的线路。
//! 网络不连通时得到最小生成森林（每个连通分量一棵树）。

use super::union_find::UnionFind;
use crate::error::Result;
use crate::graph::{RailNetwork, RailwayLink};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// 最小生成森林
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanningForest {
    /// 选中的线路（按选中顺序，即里程升序）
    pub links: Vec<RailwayLink>,
    /// 选中线路的总里程
    pub total_distance_km: f64,
    /// 连通分量数
    pub component_count: usize,
}

impl SpanningForest {
    /// 是否为生成树（网络连通）
    pub fn is_spanning_tree(&self) -> bool {
        self.component_count <= 1
    }

    /// 选中的线路数量
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// 用 Kruskal 算法计算最小生成森林
///
/// 排序是稳定的，里程相同的线路保持添加顺序，结果可复现。
/// 网络自身的线路列表不会被重排。
pub fn build_minimum_spanning_forest(network: &RailNetwork) -> Result<SpanningForest> {
    let mut sorted: Vec<RailwayLink> = network.links().to_vec();
    sorted.sort_by(|a, b| a.distance_km().total_cmp(&b.distance_km()));

    let mut sets = UnionFind::new(network.station_count());
    let mut links = Vec::with_capacity(network.station_count().saturating_sub(1));
    let mut total_distance_km = 0.0;

    for link in sorted {
        let (origin, destination) = link.endpoints();
        if sets.find(origin)? == sets.find(destination)? {
            debug!(
                %origin,
                %destination,
                distance_km = link.distance_km(),
                "skip link: would close a cycle"
            );
            continue;
        }

        sets.union(origin, destination)?;
        total_distance_km += link.distance_km();
        debug!(
            %origin,
            %destination,
            distance_km = link.distance_km(),
            "accept link"
        );
        links.push(link);
    }

    info!(
        links = links.len(),
        components = sets.set_count(),
        total_distance_km,
        "minimum spanning forest built"
    );

    Ok(SpanningForest {
        links,
        total_distance_km,
        component_count: sets.set_count(),
    })
}
