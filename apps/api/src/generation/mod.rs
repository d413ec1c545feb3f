// Resume generation: prompt construction and the generate trigger.
// All provider calls go through llm_client — nothing here talks HTTP to Gemini.

pub mod handlers;
pub mod prompt_builder;
pub mod prompts;
pub mod trigger;
