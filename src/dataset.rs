//! 内置数据集
//!
//! 尼日利亚西南部铁路网：12 个车站，19 条线路（里程单位：公里）

use crate::error::Result;
use crate::graph::{RailNetwork, StationId};

/// 车站名称，下标即车站编号
pub const SOUTHWEST_NIGERIA_STATIONS: [&str; 12] = [
    "Lagos_Central",
    "Ibadan_Main",
    "Abeokuta_Junction",
    "Ilorin_Terminal",
    "Ogbomoso_Station",
    "Oshogbo_Hub",
    "Akure_Depot",
    "Ado_Ekiti_Stop",
    "Ikeja_Connect",
    "Sagamu_Point",
    "Oyo_Classic",
    "Ile_Ife_Heritage",
];

/// 线路 `(车站, 车站, 里程)`，按铺设顺序排列
pub const SOUTHWEST_NIGERIA_LINKS: [(usize, usize, f64); 19] = [
    // 拉各斯（主枢纽）
    (0, 2, 64.5),
    (0, 8, 23.7),
    (0, 9, 46.2),
    (0, 1, 128.2),
    // 伊巴丹（次枢纽）
    (1, 4, 91.3),
    (1, 10, 54.8),
    (1, 5, 89.7),
    (1, 2, 74.1),
    // 阿贝奥库塔
    (2, 8, 67.4),
    (2, 9, 52.9),
    // 北线
    (4, 3, 83.6),
    (4, 5, 47.8),
    (5, 6, 114.2),
    (5, 11, 76.3),
    // 东线
    (6, 7, 52.1),
    (11, 7, 89.4),
    // 联络线
    (10, 4, 38.5),
    (8, 9, 34.7),
    (3, 5, 97.2),
];

/// 构建内置的尼日利亚西南部铁路网
pub fn southwest_nigeria() -> Result<RailNetwork> {
    let mut network = RailNetwork::new(SOUTHWEST_NIGERIA_STATIONS.len());
    network.set_station_names(SOUTHWEST_NIGERIA_STATIONS)?;

    for (a, b, km) in SOUTHWEST_NIGERIA_LINKS {
        network.connect(StationId::new(a), StationId::new(b), km)?;
    }

    Ok(network)
}
