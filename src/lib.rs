//! RailNet - 铁路网络优化工具
//!
//! 针对车站图计算：
//! - 最小生成树（Kruskal + 并查集），求连通全部车站所需的最短轨道总长
//! - 全源最短路径（Floyd-Warshall），求任意两站间的最短里程和路线
//! - 定宽文本、表格和 JSON 三种结果输出

pub mod algorithm;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod report;

// 重导出常用类型
pub use algorithm::{
    build_minimum_spanning_forest, compute_shortest_paths, Route, ShortestPaths, SpanningForest,
    UnionFind,
};
pub use error::{Error, Result};
pub use graph::{DistanceMatrix, RailNetwork, RailwayLink, Station, StationId};
pub use report::{NetworkAnalysis, NetworkReport};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
