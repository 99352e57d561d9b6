//! Weekly brief generation: stats payload, prompt construction, the
//! messages-API client, and a rule-based fallback for keyless deployments.

pub mod client;
pub mod error;
pub mod fallback;
pub mod prompt;
pub mod types;

pub use client::BriefClient;
pub use error::BriefError;
pub use fallback::compose_fallback;
pub use prompt::build_prompt;
pub use types::{creative_gaps, display_label, BriefStats, Gap, LongRunner, Slice};
