// Core modules
pub mod config;
pub mod crew;
pub mod error;
pub mod output;
pub mod site;
pub mod template;

// Re-export commonly used types
pub use error::{DoorknockError, Result};
pub use site::{render, Fields, MarketingCopy, SiteError, SiteRenderer};
