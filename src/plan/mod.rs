//! Implementation plan generation.
//!
//! ## Pipeline
//!
//! - `resolver` - turns stored option ids into display text and tags
//! - `steps` - the ordered implementation checklist
//! - `sections` - one generator per plan section
//! - `render` - single-pass `{{PLACEHOLDER}}` substitution
//! - `PlanGenerator` - ties the above together and writes the plan

mod generator;
mod render;
mod resolver;
pub mod sections;
mod steps;

pub use generator::{load_template, PlanGenerator, TECHNICAL_PLAN_TEMPLATE};
pub use render::{placeholders, render, Placeholder};
pub use resolver::{
    change_types, dependency_needs, resolve, resolve_in, ChangeType, DependencyNeed,
    ResolvedAnswer, CHANGE_TYPE_QUESTION, DEPENDENCY_QUESTION, GOAL_QUESTION,
};
pub use steps::{additional_steps, plan_steps, plan_steps_for, slot, NUMBERED_SLOTS, SLOT_FALLBACKS};
