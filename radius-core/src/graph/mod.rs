//! Graph module - The component usage graph
//!
//! Two indexes accumulated from per-file facts: component name -> definition
//! site, and used-component name -> usage edges. The graph is append-only
//! during the scan phase and read-only once resolution starts.

mod types;

pub use types::{Definition, UsageEdge, UsageGraph};
