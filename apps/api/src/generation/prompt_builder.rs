//! Prompt Builder — turns a draft snapshot into the single generation prompt.
//!
//! Pure and deterministic: the same draft always yields byte-identical output.
//! Nothing is filtered or defaulted; empty fields and empty sequences are
//! embedded as `""` and `[]`.

use crate::generation::prompts::RESUME_PROMPT_TEMPLATE;
use crate::models::resume::ResumeDraft;

/// Builds the prompt: fixed instructions followed by the full draft as JSON.
///
/// Entry ids are included with every entry. They mean nothing to the model
/// but keep the embedded data an exact copy of the draft.
pub fn build_prompt(draft: &ResumeDraft) -> String {
    RESUME_PROMPT_TEMPLATE.replace("{candidate_json}", &candidate_json(draft))
}

fn candidate_json(draft: &ResumeDraft) -> String {
    // Only strings, UUIDs and sequences: serialization cannot fail.
    serde_json::to_string_pretty(draft).unwrap_or_else(|_| "{}".to_string())
}
