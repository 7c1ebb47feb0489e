//! RailNet 命令行工具
//!
//! 对内置的尼日利亚西南部铁路网计算最小生成树和全源最短路径

use clap::{Parser, ValueEnum};
use colored::Colorize;
use railnet::cli::{PrintMode, Printer};
use railnet::dataset;
use railnet::NetworkAnalysis;
use tracing_subscriber::EnvFilter;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// 定宽文本
    Plain,
    /// 表格
    Table,
    /// JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "railnet")]
#[command(about = "Southwest Nigeria railway network optimizer")]
struct Args {
    /// 输出格式
    #[arg(short, long, value_enum, default_value = "plain")]
    format: OutputFormat,

    /// 输出调试日志（也可用 RUST_LOG 控制）
    #[arg(short, long)]
    verbose: bool,
}

const BANNER_RULE: &str = "================================================";

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let network = dataset::southwest_nigeria()?;
    let analysis = NetworkAnalysis::run(&network)?;

    let mode = match args.format {
        OutputFormat::Json => {
            println!("{}", analysis.report(&network).to_json_pretty()?);
            return Ok(());
        }
        OutputFormat::Plain => PrintMode::Plain,
        OutputFormat::Table => PrintMode::Table,
    };
    let printer = Printer::new(mode);

    println!("{}", BANNER_RULE);
    println!("{}", "   SOUTHWEST NIGERIA RAILWAY NETWORK OPTIMIZER  ".bold());
    println!("{}", BANNER_RULE);

    println!("SOUTHWEST NIGERIA RAILWAY STATIONS:");
    print!("{}", printer.print_stations(&network));

    println!("\n{}", "=== BUILDING OPTIMAL RAILWAY NETWORK (MST) ===".cyan());
    print!(
        "{}",
        printer.print_spanning_forest(&network, &analysis.spanning_forest)?
    );

    println!(
        "\n{}",
        "=== CALCULATING SHORTEST ROUTES BETWEEN ALL STATIONS ===".cyan()
    );
    println!("\nSHORTEST DISTANCES BETWEEN NIGERIAN RAILWAY STATIONS:");
    print!(
        "{}",
        printer.print_distance_table(&network, &analysis.shortest_paths)
    );

    println!("\n{}", BANNER_RULE);
    println!("{}", "   RAILWAY NETWORK OPTIMIZATION COMPLETED!      ".green());
    println!("{}", BANNER_RULE);

    Ok(())
}

/// 日志写到 stderr，默认只输出警告
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
