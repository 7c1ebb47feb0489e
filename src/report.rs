//! 分析报告
//!
//! 一次性计算最小生成树和全源最短路径，并导出为 JSON

use crate::algorithm::{
    build_minimum_spanning_forest, compute_shortest_paths, ShortestPaths, SpanningForest,
};
use crate::error::Result;
use crate::graph::{DistanceMatrix, RailNetwork, Station};
use serde::Serialize;

/// 网络分析结果
#[derive(Debug, Clone)]
pub struct NetworkAnalysis {
    /// 最小生成森林
    pub spanning_forest: SpanningForest,
    /// 全源最短路径
    pub shortest_paths: ShortestPaths,
}

impl NetworkAnalysis {
    /// 依次运行 Kruskal 和 Floyd-Warshall，两者互不依赖
    pub fn run(network: &RailNetwork) -> Result<Self> {
        let spanning_forest = build_minimum_spanning_forest(network)?;
        let shortest_paths = compute_shortest_paths(network);
        Ok(Self {
            spanning_forest,
            shortest_paths,
        })
    }

    /// 生成可序列化的报告
    pub fn report<'a>(&'a self, network: &'a RailNetwork) -> NetworkReport<'a> {
        NetworkReport {
            stations: network.stations(),
            minimum_spanning_tree: &self.spanning_forest,
            shortest_distances: self.shortest_paths.matrix(),
        }
    }
}

/// 可导出的报告快照
#[derive(Debug, Serialize)]
pub struct NetworkReport<'a> {
    pub stations: &'a [Station],
    pub minimum_spanning_tree: &'a SpanningForest,
    /// 不可达为 `null`
    pub shortest_distances: &'a DistanceMatrix,
}

impl NetworkReport<'_> {
    /// 导出为格式化 JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
