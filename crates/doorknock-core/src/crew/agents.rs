//! Agent profiles: who does what in a campaign

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three roles in a door-knocking crew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentRole {
    Marketing,
    Training,
    Web,
}

impl AgentRole {
    pub const ALL: [AgentRole; 3] = [AgentRole::Marketing, AgentRole::Training, AgentRole::Web];

    pub fn slug(self) -> &'static str {
        match self {
            AgentRole::Marketing => "marketing",
            AgentRole::Training => "training",
            AgentRole::Web => "web",
        }
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Tools an agent may call instead of generating output itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Renders the landing page from marketing copy
    /// (see [`crate::site::render`])
    BuildWebsite,
}

impl Tool {
    pub fn name(self) -> &'static str {
        match self {
            Tool::BuildWebsite => "build_website",
        }
    }
}

/// Role, goal and backstory handed to the language model, plus tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub role: AgentRole,
    pub title: String,
    pub goal: String,
    pub backstory: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

impl AgentProfile {
    pub fn for_role(role: AgentRole) -> Self {
        match role {
            AgentRole::Marketing => Self::marketing(),
            AgentRole::Training => Self::training(),
            AgentRole::Web => Self::web(),
        }
    }

    /// Copywriter for flyers, door hangers, emails and talking points.
    pub fn marketing() -> Self {
        Self {
            role: AgentRole::Marketing,
            title: "Marketing Agent".to_string(),
            goal: "Generate concise, persuasive marketing materials for door-to-door \
                   sales campaigns, including flyers, door hangers, email templates and \
                   talking points tailored to a given product or service."
                .to_string(),
            backstory: "You are a seasoned direct-marketing copywriter with years of \
                        experience crafting messages that grab attention at the doorstep. \
                        You understand the needs of small businesses and can adapt tone \
                        and style to suit different audiences."
                .to_string(),
            tools: Vec::new(),
        }
    }

    /// Sales trainer for scripts, objection handling and role-play.
    pub fn training() -> Self {
        Self {
            role: AgentRole::Training,
            title: "Training Agent".to_string(),
            goal: "Develop comprehensive training materials for door-to-door sales reps, \
                   including role-play dialogues, objection-handling scripts, FAQs and \
                   checklists tailored to the client's product or service."
                .to_string(),
            backstory: "You are an expert sales trainer who has coached hundreds of reps \
                        on how to successfully sell products face-to-face at the doorstep. \
                        You know how to break complex concepts into easy steps and create \
                        engaging exercises that build confidence."
                .to_string(),
            tools: Vec::new(),
        }
    }

    /// Landing page builder. Delegates the HTML to [`Tool::BuildWebsite`].
    pub fn web() -> Self {
        Self {
            role: AgentRole::Web,
            title: "Web Developer Agent".to_string(),
            goal: "Design and assemble simple, responsive websites for door-knocking \
                   clients using predefined templates. Integrate marketing copy and \
                   highlight key benefits to maximise conversions."
                .to_string(),
            backstory: "You are a full-stack web developer who specialises in small \
                        business landing pages. You value clear information architecture, \
                        mobile responsiveness and minimal design."
                .to_string(),
            tools: vec![Tool::BuildWebsite],
        }
    }

    pub fn has_tool(&self, tool: Tool) -> bool {
        self.tools.contains(&tool)
    }
}
