//! Hierarchy module - Used-by tree resolution
//!
//! Answers: "Which components render this one, directly or transitively?"
//! Unrolls the usage graph from a root component into a tree by depth-first
//! expansion, capping every cyclic path with a terminal circular sentinel,
//! then derives summary statistics in a single walk of the finished tree.

mod resolver;
mod stats;
mod types;

pub use resolver::resolve;
pub use stats::summarize;
pub use types::{HierarchyNode, RenderSite, UsageStats};
