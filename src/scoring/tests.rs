//! Scoring Module Tests
//!
//! Validates the pure scoring pipeline: sentence splitting, the Jaccard-style
//! coefficient with its multiplicity rule, summary extraction, and top-K
//! ranking determinism.

#[cfg(test)]
mod tests {
    use crate::scoring::ranking::select_top;
    use crate::scoring::scorer::score_document;
    use crate::scoring::tokenizer::{split_sentences, tokenize, vocabulary};
    use crate::scoring::types::Query;

    // ============================================================
    // TOKENIZER TESTS - split_sentences
    // ============================================================

    #[test]
    fn test_split_sentences_basic() {
        let sentences = split_sentences("A cat sat. A dog ran.");

        assert_eq!(sentences, vec!["A cat sat", " A dog ran"]);
    }

    #[test]
    fn test_split_sentences_keeps_leading_whitespace() {
        let sentences = split_sentences("First.  Second.");

        // Original sentence text is retained for summary reconstruction
        assert_eq!(sentences[1], "  Second");
    }

    #[test]
    fn test_split_sentences_no_trailing_period() {
        let sentences = split_sentences("No period here");

        assert_eq!(sentences, vec!["No period here"]);
    }

    #[test]
    fn test_split_sentences_empty_text() {
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn test_split_sentences_consecutive_periods() {
        let sentences = split_sentences("One..Two.");

        // The empty segment between the two periods survives; only the
        // trailing empty segment is dropped
        assert_eq!(sentences, vec!["One", "", "Two"]);
    }

    // ============================================================
    // TOKENIZER TESTS - tokenize / vocabulary
    // ============================================================

    #[test]
    fn test_tokenize_keeps_duplicates() {
        let tokens = tokenize("cat dog cat");

        assert_eq!(tokens, vec!["cat", "dog", "cat"]);
    }

    #[test]
    fn test_vocabulary_collapses_duplicates() {
        let vocab = vocabulary("cat dog cat cat");

        assert_eq!(vocab.len(), 2);
        assert!(vocab.contains("cat"));
        assert!(vocab.contains("dog"));
    }

    #[test]
    fn test_vocabulary_is_case_sensitive() {
        let vocab = vocabulary("Cat cat");

        assert_eq!(vocab.len(), 2);
    }

    // ============================================================
    // SCORER TESTS - similarity coefficient
    // ============================================================

    #[test]
    fn test_score_full_match() {
        // intersection = 2 (both query terms in vocabulary {cat, dog}),
        // union = 2 + 2 - 2 = 2
        let result = score_document(&Query::new("cat dog"), "cat dog cat");

        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_score_no_match() {
        // intersection = 0, union = 1 + 2 - 0 = 3
        let result = score_document(&Query::new("cat"), "dog fish");

        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_score_partial_match() {
        // vocabulary {cat, dog, fish}, intersection = 1, union = 1 + 3 - 1 = 3
        let result = score_document(&Query::new("cat"), "cat dog fish");

        assert!((result.score - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_score_repeated_query_terms_count_separately() {
        // The multiplicity rule: both "cat" occurrences in the query match
        // the vocabulary, so intersection = 2 and union = 2 + 2 - 2 = 2.
        // A set intersection would give 1/3 here instead.
        let result = score_document(&Query::new("cat cat"), "cat dog");

        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_score_degenerate_union_is_zero() {
        // Empty query against empty document: union == 0, defined as 0.0
        let result = score_document(&Query::new(""), "");

        assert_eq!(result.score, 0.0);
        assert!(result.summary.is_empty());
    }

    #[test]
    fn test_score_in_unit_interval() {
        let result = score_document(&Query::new("alpha beta gamma"), "alpha delta. beta beta.");

        assert!(result.score >= 0.0);
        assert!(result.score <= 1.0);
    }

    // ============================================================
    // SCORER TESTS - summary extraction
    // ============================================================

    #[test]
    fn test_summary_document_order_each_sentence_once() {
        let result = score_document(
            &Query::new("cat"),
            "A cat sat. A dog ran. A cat and dog played.",
        );

        assert_eq!(result.summary.len(), 2);
        assert_eq!(result.summary[0], "A cat sat");
        assert_eq!(result.summary[1], " A cat and dog played");
    }

    #[test]
    fn test_summary_sentence_with_repeated_terms_included_once() {
        let result = score_document(&Query::new("cat dog"), "cat dog cat dog.");

        // First matching token triggers inclusion; further matches in the
        // same sentence must not duplicate it
        assert_eq!(result.summary.len(), 1);
    }

    #[test]
    fn test_summary_exact_token_match_only() {
        let result = score_document(&Query::new("cat"), "The cats played.");

        // "cats" != "cat": exact whitespace-token match, no substring match
        assert!(result.summary.is_empty());
        assert_eq!(result.score, 0.0);
    }

    // ============================================================
    // RANKING TESTS
    // ============================================================

    #[test]
    fn test_select_top_leftmost_tie_break() {
        let ranked = select_top(&[0.5, 0.9, 0.9, 0.1], 2);

        assert_eq!(ranked, vec![1, 2]);
    }

    #[test]
    fn test_select_top_descending_order() {
        let ranked = select_top(&[0.1, 0.4, 0.3, 0.2], 4);

        assert_eq!(ranked, vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_select_top_clamps_k_to_len() {
        let ranked = select_top(&[0.3, 0.7], 10);

        assert_eq!(ranked, vec![1, 0]);
    }

    #[test]
    fn test_select_top_empty_scores() {
        assert!(select_top(&[], 3).is_empty());
    }

    #[test]
    fn test_select_top_all_equal_scores_rank_in_input_order() {
        let ranked = select_top(&[0.5, 0.5, 0.5], 3);

        assert_eq!(ranked, vec![0, 1, 2]);
    }

    #[test]
    fn test_select_top_failed_sentinel_ranks_last() {
        // Failed units carry a -1.0 ranking score and must sort below every
        // real score, including 0.0
        let ranked = select_top(&[0.0, -1.0, 0.2], 3);

        assert_eq!(ranked, vec![2, 0, 1]);
    }
}
