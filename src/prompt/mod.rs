// src/prompt/mod.rs
// Prompt building for the conversational layer

pub mod builder;

pub use builder::{build_system_context, build_system_prompt};
