//! Book module - what one review page yields and what callers get back

use crate::review::ReviewRecord;

/// Everything extracted from a single book's review page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewPage {
    /// Book title, trimmed
    pub title: String,

    /// Book author, trimmed
    pub author: String,

    /// Reviews in document order; `index` runs 1..=len
    pub reviews: Vec<ReviewRecord>,
}

impl ReviewPage {
    /// Number of reviews found on the page
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }
}

/// Final report for one book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDigest {
    /// Book title
    pub title: String,

    /// Book author
    pub author: String,

    /// How many reviews fed the summary
    pub review_count: usize,

    /// Model-written thematic summary
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::ReviewerProfile;

    #[test]
    fn test_review_count() {
        let reviews = (1..=3)
            .map(|i| {
                ReviewRecord::new(
                    i,
                    ReviewerProfile::new(format!("r{}", i), format!("/user/{}", i)),
                    crate::NO_RATING_GIVEN,
                    "text",
                )
            })
            .collect();
        let page = ReviewPage {
            title: "Babel".to_string(),
            author: "R.F. Kuang".to_string(),
            reviews,
        };
        assert_eq!(page.review_count(), 3);
        assert_eq!(page.reviews[2].index, 3);
    }
}
