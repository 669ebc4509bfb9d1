//! 功能元件模組
//!
//! 每個子模組實現一個獨立的功能，包含主要邏輯和專用工具

pub mod pair_renamer;

pub use pair_renamer::{PairRenamer, Reporter};
