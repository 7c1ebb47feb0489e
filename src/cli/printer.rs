//! 结果打印器
//!
//! 提供定宽文本和表格两种输出格式

use crate::algorithm::{ShortestPaths, SpanningForest};
use crate::error::Result;
use crate::graph::RailNetwork;
use prettytable::{format, row, Cell, Row, Table};

/// 不可达标记
pub const UNREACHABLE: &str = "INF";

/// 定宽模式下行首列宽
const ROW_HEADER_WIDTH: usize = 15;
/// 定宽模式下数据列宽
const COLUMN_WIDTH: usize = 12;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 定宽文本
    Plain,
    /// 表格模式
    Table,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Plain)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印车站列表
    pub fn print_stations(&self, network: &RailNetwork) -> String {
        match self.mode {
            PrintMode::Plain => network
                .stations()
                .iter()
                .map(|s| format!("{}: {}\n", s.id(), s.name()))
                .collect(),
            PrintMode::Table => {
                let mut table = Self::new_table();
                table.set_titles(row!["ID", "Station"]);
                for station in network.stations() {
                    table.add_row(row![r->station.id(), station.name()]);
                }
                table.to_string()
            }
        }
    }

    /// 打印最小生成树的线路和总里程
    pub fn print_spanning_forest(
        &self,
        network: &RailNetwork,
        forest: &SpanningForest,
    ) -> Result<String> {
        let mut output = match self.mode {
            PrintMode::Plain => {
                let mut output = String::new();
                for link in &forest.links {
                    output.push_str(&format!(
                        "Railway Track: {} <--> {} | Distance: {:.1} km\n",
                        network.station_name(link.origin())?,
                        network.station_name(link.destination())?,
                        link.distance_km()
                    ));
                }
                output
            }
            PrintMode::Table => {
                let mut table = Self::new_table();
                table.set_titles(row!["#", "From", "To", "Distance (km)"]);
                for (i, link) in forest.links.iter().enumerate() {
                    table.add_row(row![
                        r->i + 1,
                        network.station_name(link.origin())?,
                        network.station_name(link.destination())?,
                        r->format!("{:.1}", link.distance_km())
                    ]);
                }
                table.to_string()
            }
        };

        output.push_str(&format!(
            "\nTotal Railway Network Length: {:.1} km\n",
            forest.total_distance_km
        ));
        if !forest.is_spanning_tree() {
            output.push_str(&format!(
                "Network is disconnected: {} separate components\n",
                forest.component_count
            ));
        }

        Ok(output)
    }

    /// 打印最短距离矩阵，车站同时作为行头和列头
    pub fn print_distance_table(&self, network: &RailNetwork, paths: &ShortestPaths) -> String {
        match self.mode {
            PrintMode::Plain => Self::format_plain_matrix(network, paths),
            PrintMode::Table => Self::format_table_matrix(network, paths),
        }
    }

    fn format_plain_matrix(network: &RailNetwork, paths: &ShortestPaths) -> String {
        let n = network.station_count();
        let mut output = format!("{:>width$}", "FROM \\ TO", width = ROW_HEADER_WIDTH);

        for station in network.stations() {
            output.push_str(&format!(
                "{:>width$}",
                truncate(station.name(), COLUMN_WIDTH - 2),
                width = COLUMN_WIDTH
            ));
        }
        output.push('\n');
        output.push_str(&"-".repeat(ROW_HEADER_WIDTH + COLUMN_WIDTH * n));
        output.push('\n');

        for (station, row) in network.stations().iter().zip(paths.matrix().rows()) {
            output.push_str(&format!(
                "{:>width$}",
                truncate(station.name(), ROW_HEADER_WIDTH - 2),
                width = ROW_HEADER_WIDTH
            ));
            for &cell in row {
                output.push_str(&format!(
                    "{:>width$}",
                    format_distance(cell),
                    width = COLUMN_WIDTH
                ));
            }
            output.push('\n');
        }

        output
    }

    fn format_table_matrix(network: &RailNetwork, paths: &ShortestPaths) -> String {
        let mut table = Self::new_table();

        let mut header = vec![Cell::new("FROM \\ TO")];
        header.extend(network.stations().iter().map(|s| Cell::new(s.name())));
        table.set_titles(Row::new(header));

        for (station, row) in network.stations().iter().zip(paths.matrix().rows()) {
            let mut cells = vec![Cell::new(station.name())];
            cells.extend(
                row.iter()
                    .map(|&cell| Cell::new(&format_distance(cell)).style_spec("r")),
            );
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    fn new_table() -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table
    }
}

/// 格式化距离：保留一位小数，不可达显示为 `INF`
pub fn format_distance(distance: Option<f64>) -> String {
    match distance {
        Some(d) => format!("{:.1}", d),
        None => UNREACHABLE.to_string(),
    }
}

/// 按字符截断名称
fn truncate(name: &str, max_chars: usize) -> String {
    name.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{build_minimum_spanning_forest, compute_shortest_paths};
    use crate::graph::StationId;

    fn scenario() -> RailNetwork {
        let mut net = RailNetwork::with_stations([
            "Lagos_Central",
            "Ibadan_Main",
            "Abeokuta_Junction",
            "Ilorin_Terminal",
        ]);
        net.connect(StationId::new(0), StationId::new(1), 5.0).unwrap();
        net.connect(StationId::new(2), StationId::new(3), 5.0).unwrap();
        net
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(Some(25.0)), "25.0");
        assert_eq!(format_distance(Some(64.46)), "64.5");
        assert_eq!(format_distance(None), "INF");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Abeokuta_Junction", 10), "Abeokuta_J");
        assert_eq!(truncate("Oyo", 10), "Oyo");
    }

    #[test]
    fn test_plain_stations() {
        let out = Printer::default().print_stations(&scenario());
        assert!(out.starts_with("0: Lagos_Central\n1: Ibadan_Main\n"));
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn test_plain_spanning_forest() {
        let net = scenario();
        let forest = build_minimum_spanning_forest(&net).unwrap();
        let out = Printer::default().print_spanning_forest(&net, &forest).unwrap();

        assert!(out.contains("Railway Track: Lagos_Central <--> Ibadan_Main | Distance: 5.0 km\n"));
        assert!(out.contains("Total Railway Network Length: 10.0 km"));
        assert!(out.contains("2 separate components"));
    }

    #[test]
    fn test_plain_distance_table_layout() {
        let net = scenario();
        let paths = compute_shortest_paths(&net);
        let out = Printer::default().print_distance_table(&net, &paths);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 2 + 4);
        assert_eq!(lines[0].len(), 15 + 12 * 4);
        assert!(lines[0].starts_with("      FROM \\ TO"));
        assert!(lines[0].contains("Abeokuta_J"));
        assert!(!lines[0].contains("Abeokuta_Ju"));
        assert_eq!(lines[1], "-".repeat(63));

        let lagos = lines[2];
        assert!(lagos.starts_with("  Lagos_Central"));
        let cells: Vec<&str> = lagos[15..].split_whitespace().collect();
        assert_eq!(cells, vec!["0.0", "5.0", "INF", "INF"]);
    }

    #[test]
    fn test_sentinel_never_leaks() {
        let net = scenario();
        let paths = compute_shortest_paths(&net);

        for mode in [PrintMode::Plain, PrintMode::Table] {
            let out = Printer::new(mode).print_distance_table(&net, &paths);
            assert!(out.contains(UNREACHABLE));
            assert!(!out.contains("inf"));
            assert!(!out.contains("2147483647"));
        }
    }

    #[test]
    fn test_table_mode() {
        let net = scenario();
        let forest = build_minimum_spanning_forest(&net).unwrap();
        let mut printer = Printer::default();
        printer.set_mode(PrintMode::Table);

        let stations = printer.print_stations(&net);
        assert!(stations.contains("Ilorin_Terminal"));
        assert!(stations.contains("│"));

        let mst = printer.print_spanning_forest(&net, &forest).unwrap();
        assert!(mst.contains("Distance (km)"));
        assert!(mst.contains("Total Railway Network Length: 10.0 km"));
    }
}
