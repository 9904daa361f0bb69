//! Lexical Ethereum address list validator
//!
//! Splits a comma/newline separated list into candidates, checks each one
//! against the `0x` + 40 hex digit format and derives copy-ready views of
//! the valid subset. The terminal form and the headless report are thin
//! layers over [`validation`].

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod ui;
pub mod validation;
