// LLM prompt constants for resume generation.

/// Resume generation prompt template. Replace `{candidate_json}` before sending.
///
/// Section order (Summary, Skills, Experience, Education) is fixed: the
/// display pane renders the response verbatim, so the model must emit it.
pub const RESUME_PROMPT_TEMPLATE: &str = r#"You are a world-class professional resume writer. Your task is to generate a clean, professional, and well-formatted resume in Markdown format based on the JSON data provided below.

**Instructions:**
1.  Create a clear, concise, and impactful resume.
2.  Use standard Markdown for formatting (e.g., '#' for name, '##' for sections, '*' for bullet points).
3.  The sections should be, in this exact order: Summary, Skills, Experience, and Education.
4.  For the Experience section, format each job with the title, company, dates, and a bulleted list of responsibilities and achievements from the description.
5.  Ensure the contact information (Email, Phone, LinkedIn) is presented cleanly under the candidate's name.
6.  The final output must be only the resume content in Markdown, with no extra commentary or explanations.

**Candidate Information:**
```json
{candidate_json}
```
"#;
