//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("车站编号越界: {index} (车站总数 {count})")]
    InvalidStationIndex { index: usize, count: usize },

    #[error("线路距离不能为负: {0}")]
    NegativeWeight(f64),

    #[error("线路距离必须是有限值: {0}")]
    InvalidWeight(f64),

    #[error("车站数量不匹配: 期望 {expected}, 实际 {actual}")]
    StationCountMismatch { expected: usize, actual: usize },

    #[error("序列化错误: {0}")]
    Serialization(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
