//! Client toolkit for the MIMIC-IV analytics dashboard: typed access to the
//! statistics API, local hierarchy filtering, chart reshaping and hover state.

pub mod api;
pub mod charts;
pub mod cli;
pub mod client;
pub mod config;
pub mod hierarchy;
pub mod logging;
pub mod tooltip;
pub mod view;
