//! ynab-memo: find YNAB transactions by memo and print them as a report.
//!
//! The pipeline is a single pass: one request for the budget's transactions (`api`), a memo
//! filter (`model::MemoFilter`), and projection into a fixed set of columns (`report`).

pub mod api;
pub mod args;
pub mod commands;
mod config;
mod error;
pub mod model;
pub mod report;
mod utils;


pub use api::Mode;
pub use config::Config;
pub use error::{Error, ErrorType, HttpStatus, Result};
