//! CLI command implementations

pub mod agents;
pub mod brief;
pub mod site;
