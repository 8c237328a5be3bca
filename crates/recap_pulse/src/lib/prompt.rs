//! Renders the summarization instruction sent to a provider.
//!
//! Every provider receives the same content: the transcript verbatim, the
//! requested number of points and a fixed set of style requirements. Only the
//! outer wrapper differs, see [`PromptStyle`].

const SUMMARY_TEMPLATE: &str = include_str!("./llm/prompts/summary_0.txt");

/// Syntactic wrapper a provider expects around the instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    /// Plain prose, for chat-style APIs that take a separate system message
    Plain,
    /// `<s>[INST] ... [/INST]` delimiters for instruction-tuned local models
    InstructionTags,
}

/// Builds the prompt for `full_text` asking for `max_points` points.
pub fn build_prompt(style: PromptStyle, full_text: &str, max_points: usize) -> String {
    let body = SUMMARY_TEMPLATE
        .trim_end()
        .replace("{max_points}", &max_points.to_string())
        // transcript goes in last so its own braces are never substituted
        .replacen("{transcript}", full_text, 1);

    match style {
        PromptStyle::Plain => body,
        PromptStyle::InstructionTags => format!("<s>[INST] {body} [/INST]"),
    }
}
