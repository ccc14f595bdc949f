//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and provides an
//! edge-triggered filter so each physical press reaches the core once
//! (including on terminals without key-release events).

pub mod edge;
pub mod map;

pub use hyper_tetris_types as types;

pub use edge::{EdgeTrigger, RepeatTiming};
pub use map::{action_for_code, handle_key_event, should_quit};
