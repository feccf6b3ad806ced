//! LLM prompt for review summarization

/// Fixed system instruction for the summarization call
pub const SUMMARY_SYSTEM_PROMPT: &str = "\
Please generate a summary of the reviews provided by the user. It should mention the positive \
aspects, critical feedback, and a balanced conclusion based on the provided information.

Specifically, you should include the following points:

* The pacing and flow of the story
* Character development and memorable personalities
* Plot structure and storytelling elements
* Any other consistently praised features

Please ensure your analysis reflects the frequency and intensity of specific comments rather \
than just listing individual opinions.
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_required_topics() {
        for topic in [
            "pacing and flow",
            "Character development",
            "Plot structure and storytelling",
            "consistently praised features",
            "frequency and intensity",
        ] {
            assert!(
                SUMMARY_SYSTEM_PROMPT.contains(topic),
                "prompt is missing '{}'",
                topic
            );
        }
    }
}
