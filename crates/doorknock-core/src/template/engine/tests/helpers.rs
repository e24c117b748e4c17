//! Shared contexts for template engine tests

use crate::template::engine::TemplateContext;
use toml::{toml, Value};

/// Scalars of every supported kind
pub(super) fn simple_context() -> TemplateContext {
    let data = toml! {
        client_name = "Acme Solar"
        reps = 12
        rebate = 0.3
        financing = true
        launch = 2026-01-15
    };
    TemplateContext::new(Value::Table(data))
}

/// Nested tables and arrays, shaped like a campaign
pub(super) fn campaign_context() -> TemplateContext {
    let data = toml! {
        [campaign]
        client_name = "Acme Solar"
        product = "solar panels"
        region = "North Side"

        [[campaign.routes]]
        street = "Elm Street"
        doors = 40

        [[campaign.routes]]
        street = "Oak Avenue"
        doors = 25
    };
    TemplateContext::new(Value::Table(data))
}
