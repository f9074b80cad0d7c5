#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Terminal wizard that collects FTP connection details, connects, and offers
//! an Upload/Download menu.

pub mod config;
pub mod connection;
pub mod logging;
pub mod model;
pub mod tui;
pub mod wizard;
