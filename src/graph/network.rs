//! 铁路网络
//!
//! 持有车站列表、线路列表和距离矩阵。车站数量在构造时确定，
//! 之后只能通过 [`RailNetwork::connect`] 添加线路。

use super::link::RailwayLink;
use super::matrix::DistanceMatrix;
use super::station::{Station, StationId};
use crate::error::{Error, Result};
use tracing::trace;

/// 铁路网络
#[derive(Debug, Clone)]
pub struct RailNetwork {
    /// 车站（下标即车站 ID）
    stations: Vec<Station>,
    /// 全部线路，按添加顺序保存（允许重复）
    links: Vec<RailwayLink>,
    /// 直连距离矩阵
    matrix: DistanceMatrix,
}

impl RailNetwork {
    /// 创建包含 `count` 个车站的网络，车站名为 `Station_<i>`
    pub fn new(count: usize) -> Self {
        Self::with_stations((0..count).map(|i| format!("Station_{}", i)))
    }

    /// 按名称批量创建车站，编号按插入顺序从 0 开始
    pub fn with_stations<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stations: Vec<Station> = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Station::new(StationId::new(i), name))
            .collect();
        let matrix = DistanceMatrix::new(stations.len());

        Self {
            stations,
            links: Vec::new(),
            matrix,
        }
    }

    /// 重新设置全部车站名称，数量必须与车站总数一致
    pub fn set_station_names<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() != self.stations.len() {
            return Err(Error::StationCountMismatch {
                expected: self.stations.len(),
                actual: names.len(),
            });
        }

        for (station, name) in self.stations.iter_mut().zip(names) {
            station.rename(name);
        }
        Ok(())
    }

    // ==================== 线路操作 ====================

    /// 双向连接两个车站
    ///
    /// 线路追加到线路列表，同时写入 `matrix[a][b]` 和 `matrix[b][a]`。
    /// 重复连接同一对车站时，线路列表保留全部记录，矩阵只保留最后一次写入的里程。
    pub fn connect(&mut self, a: StationId, b: StationId, distance_km: f64) -> Result<()> {
        self.check_station(a)?;
        self.check_station(b)?;
        if distance_km.is_nan() || distance_km.is_infinite() {
            return Err(Error::InvalidWeight(distance_km));
        }
        if distance_km < 0.0 {
            return Err(Error::NegativeWeight(distance_km));
        }

        self.links.push(RailwayLink::new(a, b, distance_km));
        // 自环不覆盖对角线
        if a != b {
            self.matrix.set(a.index(), b.index(), Some(distance_km));
            self.matrix.set(b.index(), a.index(), Some(distance_km));
        }

        trace!(origin = %a, destination = %b, distance_km, "connected stations");
        Ok(())
    }

    // ==================== 查询 ====================

    /// 车站数量
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// 线路数量
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// 全部车站
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// 获取车站
    pub fn station(&self, id: StationId) -> Result<&Station> {
        self.check_station(id)?;
        Ok(&self.stations[id.index()])
    }

    /// 获取车站名称
    pub fn station_name(&self, id: StationId) -> Result<&str> {
        self.station(id).map(Station::name)
    }

    /// 按名称查找车站（重名时返回编号最小者）
    pub fn find_station(&self, name: &str) -> Option<StationId> {
        self.stations
            .iter()
            .find(|s| s.name() == name)
            .map(Station::id)
    }

    /// 全部线路（按添加顺序）
    pub fn links(&self) -> &[RailwayLink] {
        &self.links
    }

    /// 直连距离矩阵
    pub fn distance_matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// 两站之间的直连距离
    pub fn direct_distance(&self, a: StationId, b: StationId) -> Result<Option<f64>> {
        self.matrix.get(a, b)
    }

    /// 校验车站编号
    fn check_station(&self, id: StationId) -> Result<()> {
        if id.index() >= self.stations.len() {
            return Err(Error::InvalidStationIndex {
                index: id.index(),
                count: self.stations.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(i: usize) -> StationId {
        StationId::new(i)
    }

    #[test]
    fn test_network_basic() {
        let mut net =
            RailNetwork::with_stations(["Lagos_Central", "Ibadan_Main", "Abeokuta_Junction"]);

        net.connect(s(0), s(2), 64.5).unwrap();
        net.connect(s(1), s(2), 74.1).unwrap();

        assert_eq!(net.station_count(), 3);
        assert_eq!(net.link_count(), 2);
        assert_eq!(net.station_name(s(1)).unwrap(), "Ibadan_Main");
        assert_eq!(net.direct_distance(s(0), s(2)).unwrap(), Some(64.5));
        assert_eq!(net.direct_distance(s(2), s(0)).unwrap(), Some(64.5));
        assert_eq!(net.direct_distance(s(0), s(1)).unwrap(), None);
        assert_eq!(net.find_station("Abeokuta_Junction"), Some(s(2)));
        assert_eq!(net.find_station("Kano"), None);
    }

    #[test]
    fn test_default_names() {
        let net = RailNetwork::new(2);
        assert_eq!(net.station_name(s(0)).unwrap(), "Station_0");
        assert_eq!(net.station_name(s(1)).unwrap(), "Station_1");
    }

    #[test]
    fn test_matrix_stays_symmetric() {
        let mut net = RailNetwork::new(5);
        net.connect(s(0), s(1), 3.0).unwrap();
        net.connect(s(4), s(2), 7.5).unwrap();
        net.connect(s(3), s(1), 0.0).unwrap();

        let m = net.distance_matrix();
        assert!(m.is_symmetric());
        assert!(m.has_zero_diagonal());
    }

    #[test]
    fn test_connect_rejects_bad_input() {
        let mut net = RailNetwork::new(3);

        assert!(matches!(
            net.connect(s(0), s(3), 1.0),
            Err(Error::InvalidStationIndex { index: 3, count: 3 })
        ));
        assert!(matches!(
            net.connect(s(0), s(1), -2.0),
            Err(Error::NegativeWeight(w)) if w == -2.0
        ));
        assert!(matches!(
            net.connect(s(0), s(1), f64::NAN),
            Err(Error::InvalidWeight(_))
        ));
        assert!(matches!(
            net.connect(s(0), s(1), f64::INFINITY),
            Err(Error::InvalidWeight(_))
        ));

        // 失败的连接不改变网络
        assert_eq!(net.link_count(), 0);
        assert_eq!(net.direct_distance(s(0), s(1)).unwrap(), None);
    }

    #[test]
    fn test_duplicate_links_keep_last_matrix_value() {
        let mut net = RailNetwork::new(2);
        net.connect(s(0), s(1), 10.0).unwrap();
        net.connect(s(1), s(0), 4.0).unwrap();

        assert_eq!(net.link_count(), 2);
        assert_eq!(net.direct_distance(s(0), s(1)).unwrap(), Some(4.0));
        assert_eq!(net.direct_distance(s(1), s(0)).unwrap(), Some(4.0));
    }

    #[test]
    fn test_self_loop_keeps_zero_diagonal() {
        let mut net = RailNetwork::new(2);
        net.connect(s(1), s(1), 9.0).unwrap();

        assert_eq!(net.link_count(), 1);
        assert!(net.links()[0].is_loop());
        assert_eq!(net.direct_distance(s(1), s(1)).unwrap(), Some(0.0));
    }

    #[test]
    fn test_set_station_names() {
        let mut net = RailNetwork::new(2);
        net.set_station_names(["Oyo_Classic", "Oyo_Classic"]).unwrap();
        assert_eq!(net.station_name(s(0)).unwrap(), "Oyo_Classic");
        assert_eq!(net.station_name(s(1)).unwrap(), "Oyo_Classic");

        let err = net.set_station_names(["Only_One"]).unwrap_err();
        assert!(matches!(
            err,
            Error::StationCountMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }
}
