// Core algorithm exports
pub mod matcher;
pub mod scoring;
pub mod tables;
pub mod text;

pub use matcher::Matcher;
pub use scoring::{calculate_match_score, days_since_posted};
pub use text::normalized;
