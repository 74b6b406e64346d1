//! # feature-planner
//!
//! Turn Q&A session records into technical implementation plans.
//!
//! A requirements record (YAML) holds the questions asked while scoping a
//! task, the answers given, and some detected project context. From it,
//! feature-planner derives plan sections and an ordered implementation
//! checklist, then fills a markdown template with them.
//!
//! ## Quick Start
//!
//! ```bash
//! # Render plan.md from a requirements file using the bundled template
//! feature-planner generate implementation-plans/dark-mode-toggle/requirements.yaml
//!
//! # Or with an explicit output and template
//! fplan generate requirements.yaml docs/plan.md templates/TECHNICAL_PLAN.md
//! ```
//!
//! ## Library use
//!
//! ```no_run
//! use feature_planner::plan::{PlanGenerator, TECHNICAL_PLAN_TEMPLATE};
//! use feature_planner::session::load_record;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let record = load_record(std::path::Path::new("requirements.yaml"))?;
//! let plan = PlanGenerator::new().fill(TECHNICAL_PLAN_TEMPLATE, &record);
//! println!("{plan}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::derivable_impls)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::format_push_string)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod core;
pub mod plan;
pub mod session;

// Re-export commonly used types
pub use self::core::{Config, PlannerError, PlannerResult};
pub use plan::PlanGenerator;
pub use session::{QuestionnaireRecord, SessionStore};
