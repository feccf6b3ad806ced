//! Normalized module - typed rows derived from scraped reviews

/// One review after its string-encoded fields were coerced
///
/// Only the columns the summary stage needs survive normalization: the
/// profile link, list index, book count and author flag are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedReview {
    /// Reviewer display name
    pub reviewer_name: String,

    /// Number of reviews the reviewer has written (0 when unknown)
    pub reviews_count: u32,

    /// Number of followers (0 when unknown)
    pub followers_count: u32,

    /// Star rating in 1..=5, `None` when no rating was given
    pub rating: Option<u8>,

    /// Review body
    pub content: String,
}

/// Ordered collection of normalized rows for one book
///
/// Row order is the document order of the scraped reviews.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewTable {
    /// Book title
    pub title: String,

    /// Book author
    pub author: String,

    /// Rows in document order
    pub rows: Vec<NormalizedReview>,
}

impl ReviewTable {
    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Mean of the ratings that were given, `None` if nobody rated
    ///
    /// # Examples
    ///
    /// ```
    /// use quire_domain::{NormalizedReview, ReviewTable};
    ///
    /// let row = |rating| NormalizedReview {
    ///     reviewer_name: "r".into(),
    ///     reviews_count: 0,
    ///     followers_count: 0,
    ///     rating,
    ///     content: String::new(),
    /// };
    /// let table = ReviewTable {
    ///     title: "T".into(),
    ///     author: "A".into(),
    ///     rows: vec![row(Some(4)), row(None), row(Some(5))],
    /// };
    /// assert_eq!(table.average_rating(), Some(4.5));
    /// ```
    pub fn average_rating(&self) -> Option<f64> {
        let ratings: Vec<f64> = self
            .rows
            .iter()
            .filter_map(|r| r.rating)
            .map(f64::from)
            .collect();
        if ratings.is_empty() {
            return None;
        }
        Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
    }
}
