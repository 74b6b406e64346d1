//! Core types shared across feature-planner.
//!
//! This module contains the error type, the clock used for default
//! timestamps, and configuration.

mod clock;
mod config;
mod error;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, OutputConfig, TemplateConfig};
pub use error::{PlannerError, PlannerResult};
