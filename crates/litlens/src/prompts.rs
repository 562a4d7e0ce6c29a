//! Prompt builders for analysis, comparison, and chat.
//!
//! Paper text is embedded with a hard character-count cutoff, not
//! sentence-aware: model token limits and latency dominate, so the cheap
//! cutoff is the accepted trade-off.

use crate::config::limits;

/// Truncate a string to at most `max` characters, on a char boundary.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Build the single-paper literature-review instruction.
///
/// Fixed preamble describing the desired structured output, followed by the
/// first [`limits::SINGLE_PAPER_CHARS`] characters of the paper text.
#[must_use]
pub fn analysis_prompt(text: &str) -> String {
    let truncated = truncate_chars(text, limits::SINGLE_PAPER_CHARS);

    format!(
        "You are an expert in summarizing and analyzing research papers. Based on the text \
         extracted from a research paper, generate a detailed and structured literature review. \
         Follow this format:\n\
         \n\
         **Literature Review Structure**\n\
         - **Title of the Paper:** (Extract the title)\n\
         - **Year of the Paper:** (Extract the publication year)\n\
         - **Methodology:** (Summarize the methodology used)\n\
         - **Dataset:** (Describe dataset details including size and source)\n\
         - **Results:** (Highlight key results)\n\
         - **Future Work/Research Gaps:** (Identify proposed future work)\n\
         - **Insights:** (Provide additional observations)\n\
         - **Missing Sections:** (If any sections are missing, state them clearly)\n\
         \n\
         **Paper text (truncated for analysis):**\n\
         {truncated}"
    )
}

/// Build the multi-paper comparison instruction.
///
/// Fixed preamble, one labeled block per document with the first
/// [`limits::COMPARISON_PAPER_CHARS`] characters of its text, then a fixed
/// closing instruction. The caller is responsible for the 2-5 document
/// bound; this builder formats whatever it is given.
#[must_use]
pub fn comparison_prompt(texts: &[String]) -> String {
    let mut prompt = String::from(
        "You are an expert in comparing and analyzing research papers. Given the following \
         texts extracted from research papers, provide a comprehensive comparative analysis. \
         Focus on similarities and differences in their methodology, dataset, results, and \
         future research directions.\n\n",
    );

    for (i, text) in texts.iter().enumerate() {
        let truncated = truncate_chars(text, limits::COMPARISON_PAPER_CHARS);
        prompt.push_str(&format!("Paper {} (truncated):\n{}\n\n", i + 1, truncated));
    }

    prompt.push_str(
        "Provide your analysis in a structured, detailed, and easy-to-understand format.",
    );

    prompt
}

/// Build the follow-up question instruction.
///
/// The previously generated analysis is supplied as context; the model may
/// also draw on broader knowledge.
#[must_use]
pub fn chat_prompt(analysis: &str, question: &str) -> String {
    format!(
        "You are a knowledgeable research assistant with expertise in academic papers. Below \
         is an AI-generated literature review extracted from the paper. Use it as context, but \
         feel free to draw on your broader expertise to provide a comprehensive answer.\n\
         \n\
         Context:\n\
         {analysis}\n\
         \n\
         Question:\n\
         {question}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_than_limit() {
        assert_eq!(truncate_chars("short", 100), "short");
    }

    #[test]
    fn test_truncate_exact_char_count() {
        let text = "a".repeat(50);
        assert_eq!(truncate_chars(&text, 10).chars().count(), 10);
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        // Multi-byte chars must not be split.
        let text = "é".repeat(20);
        let cut = truncate_chars(&text, 5);
        assert_eq!(cut.chars().count(), 5);
        assert_eq!(cut, "ééééé");
    }

    #[test]
    fn test_analysis_prompt_embeds_first_8000_chars() {
        let text: String =
            (0..10_000).map(|i| char::from(b'a' + u8::try_from(i % 26).unwrap())).collect();
        let prompt = analysis_prompt(&text);

        let expected = truncate_chars(&text, 8000);
        assert!(prompt.ends_with(expected));
        // The 8001st character must not appear after the cutoff.
        assert!(!prompt.ends_with(truncate_chars(&text, 8001)));
    }

    #[test]
    fn test_comparison_prompt_labels_each_paper() {
        let texts = vec!["first".to_string(), "second".to_string(), "third".to_string()];
        let prompt = comparison_prompt(&texts);

        assert!(prompt.contains("Paper 1 (truncated):\nfirst"));
        assert!(prompt.contains("Paper 2 (truncated):\nsecond"));
        assert!(prompt.contains("Paper 3 (truncated):\nthird"));
        assert!(!prompt.contains("Paper 4"));
    }

    #[test]
    fn test_comparison_prompt_truncates_to_4000() {
        let long = "x".repeat(9000);
        let prompt = comparison_prompt(&[long]);

        assert!(prompt.contains(&"x".repeat(4000)));
        assert!(!prompt.contains(&"x".repeat(4001)));
    }

    #[test]
    fn test_chat_prompt_contains_context_and_question() {
        let prompt = chat_prompt("the analysis", "what dataset was used?");
        assert!(prompt.contains("Context:\nthe analysis"));
        assert!(prompt.contains("Question:\nwhat dataset was used?"));
    }
}
