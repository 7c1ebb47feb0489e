//! 命令行输出模块
//!
//! 把计算结果渲染为终端文本

mod printer;

pub use printer::{format_distance, PrintMode, Printer, UNREACHABLE};
