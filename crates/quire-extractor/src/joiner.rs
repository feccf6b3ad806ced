//! Reduce a review table to the text block sent for summarization

use quire_domain::NormalizedReview;

/// Concatenate review bodies in row order, one newline between entries
///
/// An empty table yields an empty string; the pipeline rejects that case
/// before summarization.
pub fn join_content(rows: &[NormalizedReview]) -> String {
    rows.iter()
        .map(|row| row.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(content: &str) -> NormalizedReview {
        NormalizedReview {
            reviewer_name: "r".to_string(),
            reviews_count: 0,
            followers_count: 0,
            rating: None,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_join_in_order() {
        let rows = vec![row("first"), row("second"), row("third")];
        assert_eq!(join_content(&rows), "first\nsecond\nthird");
    }

    #[test]
    fn test_single_row_has_no_separator() {
        assert_eq!(join_content(&[row("only")]), "only");
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(join_content(&[]), "");
    }

    #[test]
    fn test_multiline_content_is_kept_verbatim() {
        let rows = vec![row("line one\nline two"), row("next")];
        assert_eq!(join_content(&rows), "line one\nline two\nnext");
    }
}
