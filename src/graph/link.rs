//! 铁路线路定义
//!
//! 线路是两个车站之间的无向连接，权重为轨道里程（公里）

use crate::graph::station::StationId;
use serde::{Deserialize, Serialize};

/// 铁路线路（无向边）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RailwayLink {
    /// 起点车站
    origin: StationId,
    /// 终点车站
    destination: StationId,
    /// 轨道里程（公里，非负）
    distance_km: f64,
}

impl RailwayLink {
    /// 创建线路，调用方负责校验编号与里程
    pub fn new(origin: StationId, destination: StationId, distance_km: f64) -> Self {
        Self {
            origin,
            destination,
            distance_km,
        }
    }

    /// 获取起点车站
    pub fn origin(&self) -> StationId {
        self.origin
    }

    /// 获取终点车站
    pub fn destination(&self) -> StationId {
        self.destination
    }

    /// 获取轨道里程
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// 线路两端
    pub fn endpoints(&self) -> (StationId, StationId) {
        (self.origin, self.destination)
    }

    /// 是否连接给定的两个车站（不区分方向）
    pub fn joins(&self, a: StationId, b: StationId) -> bool {
        (self.origin == a && self.destination == b) || (self.origin == b && self.destination == a)
    }

    /// 是否为自环
    pub fn is_loop(&self) -> bool {
        self.origin == self.destination
    }
}
