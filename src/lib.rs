//! リモート求人データの解析
//!
//! CSV / スプレッドシートの求人データを読み込み、給与とスキルを正規化して
//! 集計し、テキストレポートとグラフ付きExcelを出力する。

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod pipeline;

pub use remote_jobs_common as common;
