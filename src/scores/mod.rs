//! Score tables and score resolution

pub mod builtin;
pub mod resolver;
pub mod table;

pub use resolver::{ScoreResolver, DEFAULT_CPU_SCORE, DEFAULT_GPU_SCORE};
pub use table::{ScoreTable, ScoreTables};
