//! 图核心模块
//!
//! 定义车站、线路、距离矩阵和铁路网络

mod link;
mod matrix;
mod network;
mod station;

pub use link::RailwayLink;
pub use matrix::DistanceMatrix;
pub use network::RailNetwork;
pub use station::{Station, StationId};
