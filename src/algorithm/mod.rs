//! 图算法模块
//!
//! 包含并查集、最小生成树（Kruskal）和全源最短路径（Floyd-Warshall）

mod mst;
mod shortest_path;
mod union_find;

pub use mst::{build_minimum_spanning_forest, SpanningForest};
pub use shortest_path::{compute_shortest_paths, Route, ShortestPaths};
pub use union_find::UnionFind;
