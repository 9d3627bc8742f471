//! martech-hub - A browsable directory of marketing-technology vendors
//!
//! The crate holds the directory's state and query model: a catalog loaded
//! once from a collaborator, a controller owning navigation and filter state,
//! a pure listing query and a submission gateway for new tools.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod http;
pub mod query;
pub mod submission;

pub use error::{HubError, Result};
