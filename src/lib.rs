//! Hyper Tetris (workspace facade crate).
//!
//! Re-exports the member crates under one name so the binary, tests and benches
//! can write `hyper_tetris::{core,input,term,types}`.

pub use hyper_tetris_core as core;
pub use hyper_tetris_input as input;
pub use hyper_tetris_term as term;
pub use hyper_tetris_types as types;
