// AI content for the guidance flow. Every operation returns a fixed fallback
// instead of an error. Model calls go through llm_client only.

pub mod handlers;
pub mod profile_options;
pub mod prompts;
pub mod questions;
pub mod recommendations;
