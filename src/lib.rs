//! Training-data harvesting for code models.
//!
//! `collect` walks the GitHub and StackExchange REST APIs and writes flat
//! JSON records, `train` turns those records into JSONL corpora, and `serve`
//! exposes them over a small read-only HTTP API.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod ui;
pub mod workers;
