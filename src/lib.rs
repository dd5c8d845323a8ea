//! Symphony seed - populate the Symphony API with synthetic demo data
//!
//! This library generates plausible users, communities, posts, chats, artists,
//! songs and playlists and submits them, one request at a time, to a running
//! Symphony API so its databases have something to show.

/// Client modules for interacting with the Symphony API
pub mod clients;
/// Randomized record generators
pub mod generator;
/// Phase-by-phase population driver
pub mod populator;
/// Word lists used by the generators
pub mod vocabulary;

pub use populator::{Config, ConfigBuilder, Counts, Populator, RunSummary};
