//! Crew assembly for a single campaign

use crate::crew::agents::{AgentProfile, AgentRole};
use crate::crew::tasks::{TaskBrief, TaskKind};
use crate::error::{DoorknockError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Who the campaign is for and what is being sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRequest {
    client_name: String,
    product: String,
}

impl CampaignRequest {
    /// Both values are trimmed; blank ones are rejected.
    pub fn new(client_name: impl Into<String>, product: impl Into<String>) -> Result<Self> {
        let client_name = non_blank("client_name", client_name.into())?;
        let product = non_blank("product", product.into())?;
        Ok(Self {
            client_name,
            product,
        })
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn product(&self) -> &str {
        &self.product
    }
}

fn non_blank(field: &'static str, value: String) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DoorknockError::CrewInvalidRequest { field });
    }
    Ok(trimmed.to_string())
}

/// Agents and tasks for one campaign, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crew {
    request: CampaignRequest,
    agents: Vec<AgentProfile>,
    tasks: Vec<TaskBrief>,
}

impl Crew {
    /// Build a crew from parts. Call [`Crew::validate`] before use.
    pub fn new(request: CampaignRequest, agents: Vec<AgentProfile>, tasks: Vec<TaskBrief>) -> Self {
        Self {
            request,
            agents,
            tasks,
        }
    }

    /// The standard crew: marketing, training, then the website.
    pub fn door_knocking(request: &CampaignRequest) -> Result<Self> {
        let agents = AgentRole::ALL
            .into_iter()
            .map(AgentProfile::for_role)
            .collect();
        let tasks = TaskKind::ALL
            .into_iter()
            .map(|kind| TaskBrief::for_kind(kind, request))
            .collect::<Result<Vec<_>>>()?;

        let crew = Self::new(request.clone(), agents, tasks);
        crew.validate()?;
        log::debug!(
            "assembled crew for '{}' ({} agents, {} tasks)",
            request.client_name(),
            crew.agents.len(),
            crew.tasks.len()
        );
        Ok(crew)
    }

    /// Every role appears once and every task has its agent on board.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for agent in &self.agents {
            if !seen.insert(agent.role) {
                return Err(DoorknockError::CrewDuplicateAgent(agent.role));
            }
        }

        for task in &self.tasks {
            if !seen.contains(&task.agent) {
                return Err(DoorknockError::CrewUnassignedTask {
                    task: task.kind,
                    role: task.agent,
                });
            }
        }
        Ok(())
    }

    pub fn agent(&self, role: AgentRole) -> Option<&AgentProfile> {
        self.agents.iter().find(|a| a.role == role)
    }

    pub fn request(&self) -> &CampaignRequest {
        &self.request
    }

    pub fn agents(&self) -> &[AgentProfile] {
        &self.agents
    }

    pub fn tasks(&self) -> &[TaskBrief] {
        &self.tasks
    }
}
