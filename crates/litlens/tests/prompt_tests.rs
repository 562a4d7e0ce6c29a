//! Prompt construction properties: truncation bounds and comparison labels.

use litlens::config::limits;
use litlens::prompts::{analysis_prompt, chat_prompt, comparison_prompt, truncate_chars};
use proptest::prelude::*;

// =============================================================================
// Single-Paper Prompt
// =============================================================================

#[test]
fn test_single_prompt_embeds_exactly_first_8000_chars() {
    // Distinct chars around the boundary so the cutoff position is provable.
    let mut text = "a".repeat(limits::SINGLE_PAPER_CHARS - 1);
    text.push('B');
    text.push('C');
    text.push_str(&"d".repeat(100));

    let prompt = analysis_prompt(&text);

    // The 8000th char ('B') is included, the 8001st ('C') is not.
    assert!(prompt.ends_with("aB"));
    let marker = "**Paper text (truncated for analysis):**\n";
    let embedded = &prompt[prompt.find(marker).unwrap() + marker.len()..];
    assert_eq!(embedded.chars().count(), limits::SINGLE_PAPER_CHARS);
    assert!(!embedded.contains('C'));
}

#[test]
fn test_single_prompt_keeps_short_text_whole() {
    let prompt = analysis_prompt("short paper body");
    assert!(prompt.ends_with("short paper body"));
    assert!(prompt.contains("**Literature Review Structure**"));
}

// =============================================================================
// Comparison Prompt
// =============================================================================

#[test]
fn test_comparison_prompt_has_exactly_n_labeled_blocks() {
    for n in limits::MIN_COMPARISON_PAPERS..=limits::MAX_COMPARISON_PAPERS {
        let texts: Vec<String> = (0..n).map(|i| format!("paper body {i}")).collect();
        let prompt = comparison_prompt(&texts);

        for i in 1..=n {
            assert!(prompt.contains(&format!("Paper {i} (truncated):")), "missing Paper {i}");
        }
        assert!(!prompt.contains(&format!("Paper {} (truncated):", n + 1)));
    }
}

#[test]
fn test_comparison_prompt_truncates_each_paper_to_4000() {
    let texts = vec!["x".repeat(10_000), "y".repeat(10_000)];
    let prompt = comparison_prompt(&texts);

    assert!(prompt.contains(&"x".repeat(limits::COMPARISON_PAPER_CHARS)));
    assert!(!prompt.contains(&"x".repeat(limits::COMPARISON_PAPER_CHARS + 1)));
    assert!(prompt.contains(&"y".repeat(limits::COMPARISON_PAPER_CHARS)));
    assert!(!prompt.contains(&"y".repeat(limits::COMPARISON_PAPER_CHARS + 1)));
}

#[test]
fn test_comparison_prompt_preamble_and_closing() {
    let texts = vec!["one".to_string(), "two".to_string()];
    let prompt = comparison_prompt(&texts);

    let preamble = prompt.find("comparative analysis").unwrap();
    let first_paper = prompt.find("Paper 1").unwrap();
    let closing = prompt.find("easy-to-understand format").unwrap();
    assert!(preamble < first_paper);
    assert!(first_paper < closing);
}

// =============================================================================
// Chat Prompt
// =============================================================================

#[test]
fn test_chat_prompt_embeds_analysis_before_question() {
    let prompt = chat_prompt("generated review text", "what is the dataset?");
    let context = prompt.find("generated review text").unwrap();
    let question = prompt.find("what is the dataset?").unwrap();
    assert!(context < question);
}

// =============================================================================
// Truncation Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_truncate_never_exceeds_max(text in ".*", max in 0usize..200) {
        let cut = truncate_chars(&text, max);
        prop_assert!(cut.chars().count() <= max);
    }

    #[test]
    fn prop_truncate_is_a_prefix(text in ".*", max in 0usize..200) {
        let cut = truncate_chars(&text, max);
        prop_assert!(text.starts_with(cut));
    }

    #[test]
    fn prop_truncate_is_identity_when_short(text in ".{0,50}") {
        prop_assert_eq!(truncate_chars(&text, 50), text.as_str());
    }

    #[test]
    fn prop_analysis_prompt_bounded(text in ".{0,1000}") {
        // Prompt size = preamble + at most SINGLE_PAPER_CHARS chars of text.
        let prompt = analysis_prompt(&text);
        let preamble_chars = analysis_prompt("").chars().count();
        prop_assert!(
            prompt.chars().count() <= preamble_chars + limits::SINGLE_PAPER_CHARS
        );
    }
}
