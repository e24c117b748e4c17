//! Task briefs: the prompt text each agent receives

use crate::crew::agents::AgentRole;
use crate::crew::CampaignRequest;
use crate::error::Result;
use crate::template::{TemplateContext, TemplateEngine};
use serde::{Deserialize, Serialize};
use std::fmt;
use toml::Value;

/// The units of work in a campaign, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    MarketingMaterial,
    TrainingMaterial,
    Website,
}

impl TaskKind {
    pub const ALL: [TaskKind; 3] = [
        TaskKind::MarketingMaterial,
        TaskKind::TrainingMaterial,
        TaskKind::Website,
    ];

    /// Role expected to carry out this task
    pub fn agent(self) -> AgentRole {
        match self {
            TaskKind::MarketingMaterial => AgentRole::Marketing,
            TaskKind::TrainingMaterial => AgentRole::Training,
            TaskKind::Website => AgentRole::Web,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            TaskKind::MarketingMaterial => "marketing_material",
            TaskKind::TrainingMaterial => "training_material",
            TaskKind::Website => "website",
        }
    }

    fn description_template(self) -> &'static str {
        match self {
            TaskKind::MarketingMaterial => MARKETING_DESCRIPTION,
            TaskKind::TrainingMaterial => TRAINING_DESCRIPTION,
            TaskKind::Website => WEBSITE_DESCRIPTION,
        }
    }

    fn expected_output(self) -> &'static str {
        match self {
            TaskKind::MarketingMaterial => MARKETING_EXPECTED,
            TaskKind::TrainingMaterial => TRAINING_EXPECTED,
            TaskKind::Website => WEBSITE_EXPECTED,
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

const MARKETING_DESCRIPTION: &str = "\
You are tasked with crafting marketing materials for a door-to-door sales \
campaign. The client is '{{ client_name }}', and the product or service being \
sold is '{{ product }}'. Produce a JSON object with the following keys:
- title: a short, punchy headline for the campaign
- tagline: a one-sentence tagline that hooks customers at the door
- description: a paragraph describing the product and its benefits
- benefits: a list of 3-5 bullet points highlighting key advantages
- flyer_text: a persuasive script suitable for printing on a flyer or door hanger
- email_script: a short email template reps can send to warm leads
Use clear, friendly language that resonates with household decision makers.";

const MARKETING_EXPECTED: &str = "\
A JSON object with the keys 'title', 'tagline', 'description', 'benefits', \
'flyer_text' and 'email_script'. The 'benefits' value must be a list of strings.";

const TRAINING_DESCRIPTION: &str = "\
Develop a comprehensive training module for new door-knocking sales reps of \
'{{ client_name }}'. The reps will be selling '{{ product }}'. The module should include:
- an overview of the product and why it solves the customer's problem
- a step-by-step script for approaching a house, introducing yourself and presenting the offer
- a list of common objections and effective rebuttals
- a role-play exercise that mentors can use to practice with trainees
Write in an encouraging tone and emphasise listening to customer needs.";

const TRAINING_EXPECTED: &str = "\
A structured training guide covering product overview, approach script, \
objections and rebuttals, and a role-play dialogue. Format the output as \
Markdown with clear headings.";

const WEBSITE_DESCRIPTION: &str = "\
Use your website building skills to assemble a simple landing page for \
'{{ client_name }}'. The output of the marketing task is available as \
`marketing_copy`; it contains the keys 'title', 'tagline', 'description' and \
'benefits'. Call your `build_website(client_name, marketing_copy)` tool with \
these values and return the resulting HTML. Do not write the HTML yourself; \
always use the tool.";

const WEBSITE_EXPECTED: &str = "\
A string containing valid HTML for the landing page, returned by the \
`build_website` tool.";

/// A task ready to hand to an orchestration runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskBrief {
    pub kind: TaskKind,
    pub agent: AgentRole,
    pub description: String,
    pub expected_output: String,
}

impl TaskBrief {
    /// Fill in the brief for `kind` with the campaign's client and product.
    pub fn for_kind(kind: TaskKind, request: &CampaignRequest) -> Result<Self> {
        let context = brief_context(request);
        let description = TemplateEngine::new().render(kind.description_template(), &context)?;

        Ok(Self {
            kind,
            agent: kind.agent(),
            description,
            expected_output: kind.expected_output().to_string(),
        })
    }
}

fn brief_context(request: &CampaignRequest) -> TemplateContext {
    let mut table = toml::map::Map::new();
    table.insert(
        "client_name".to_string(),
        Value::String(request.client_name().to_string()),
    );
    table.insert(
        "product".to_string(),
        Value::String(request.product().to_string()),
    );
    TemplateContext::from_table(table)
}
