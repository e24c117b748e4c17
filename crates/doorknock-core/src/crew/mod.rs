//! Agents, tasks and how they are bound together.
//!
//! A crew is data only. Running the agents against a language model is left
//! to whatever orchestration runtime consumes the exported briefs; the one
//! tool the web agent calls is [`crate::site::render`].

pub mod agents;
pub mod campaign;
pub mod tasks;

pub use agents::{AgentProfile, AgentRole, Tool};
pub use campaign::{CampaignRequest, Crew};
pub use tasks::{TaskBrief, TaskKind};
