//! giftrend - A terminal gallery of trending GIFs
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod models;
pub mod state;
pub mod storage;
pub mod terminal;
pub mod traits;
pub mod ui;
