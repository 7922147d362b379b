//! # Play Tracker
//!
//! A local basketball play tracker with scoring analytics.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (plays, outcomes)
//! - **stats**: Scoring averages per action, player, and situation
//! - **storage**: Append-only JSONL play log
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod config;
pub mod models;
pub mod stats;
pub mod storage;

pub use models::*;
