//! Shortest word ladders over a dictionary.
//!
//! `dictionary` holds the word set, `ladder` the breadth-first search over it,
//! and `app` the console session built on top of both.

pub mod app;
pub mod dictionary;
pub mod ladder;
