//! 车站定义
//!
//! 车站由 `[0, N)` 范围内的顺序编号标识，附带显示名称

use serde::{Deserialize, Serialize};
use std::fmt;

/// 车站 ID（即车站在网络中的下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StationId(pub usize);

impl StationId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for StationId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 车站
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// 车站 ID
    id: StationId,
    /// 显示名称（允许重名）
    name: String,
}

impl Station {
    /// 创建车站
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// 获取车站 ID
    pub fn id(&self) -> StationId {
        self.id
    }

    /// 获取车站名称
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn rename(&mut self, name: String) {
        self.name = name;
    }
}
