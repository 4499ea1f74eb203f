//! Next-bus arrival lookup.
//!
//! An interactive tool that answers: "how many minutes until the next bus
//! on this route, in this direction, reaches this stop?"

pub mod catalog;
pub mod config;
pub mod domain;
pub mod estimate;
pub mod nextrip;
pub mod prompt;
pub mod provider;
pub mod resolve;
pub mod session;
