//! StratML Insight - Strategic plan and performance report viewer
//!
//! Loads StratML documents (strategic plans, performance plans and
//! performance reports), extracts their goal/objective/indicator hierarchy,
//! computes performance analytics and assembles a render-ready view with
//! charts, exports and a printable report.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
