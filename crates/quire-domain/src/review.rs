//! Review module - reviews as they were scraped, before any coercion

/// Sentinel stored in a count label when the site omitted that metadata span
pub const NOT_FOUND: &str = "Not Found";

/// Sentinel stored in the rating label when the reviewer left no stars
pub const NO_RATING_GIVEN: &str = "No Rating Given";

/// Reviewer metadata attached to a single review
///
/// Every label is kept exactly as the page rendered it. The metadata spans
/// are optional on the site, so absent reviews/followers labels hold
/// [`NOT_FOUND`] and an absent book count is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewerProfile {
    /// Display name (text of the first profile link)
    pub name: String,

    /// Profile link href; informational only, never carried past normalization
    pub profile_url: String,

    /// Text of the "Author" marker span, when present
    pub author_marker: Option<String>,

    /// Book count label, e.g. "12 books"
    pub books_label: Option<String>,

    /// Reviews count label, e.g. "1,024 reviews"
    pub reviews_label: String,

    /// Followers count label, e.g. "1.2k followers"
    pub followers_label: String,
}

impl ReviewerProfile {
    /// Create a profile with every optional field at its default
    ///
    /// # Examples
    ///
    /// ```
    /// use quire_domain::{ReviewerProfile, NOT_FOUND};
    ///
    /// let profile = ReviewerProfile::new("Ada", "/user/show/1-ada");
    /// assert!(!profile.is_author());
    /// assert_eq!(profile.reviews_label, NOT_FOUND);
    /// assert!(profile.books_label.is_none());
    /// ```
    pub fn new(name: impl Into<String>, profile_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            profile_url: profile_url.into(),
            author_marker: None,
            books_label: None,
            reviews_label: NOT_FOUND.to_string(),
            followers_label: NOT_FOUND.to_string(),
        }
    }

    /// Whether the reviewer carries the site's "Author" badge
    pub fn is_author(&self) -> bool {
        self.author_marker.is_some()
    }
}

/// A single scraped review
///
/// Records are created fresh per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRecord {
    /// 1-based position in the review list, in document order
    pub index: usize,

    /// Who wrote the review
    pub reviewer: ReviewerProfile,

    /// Star rating phrase ("Rating 4 out of 5") or [`NO_RATING_GIVEN`]
    pub rating_label: String,

    /// Review body, whitespace-trimmed
    pub content: String,
}

impl ReviewRecord {
    /// Create a new review record
    pub fn new(
        index: usize,
        reviewer: ReviewerProfile,
        rating_label: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            index,
            reviewer,
            rating_label: rating_label.into(),
            content: content.into(),
        }
    }

    /// Whether the reviewer left a star rating at all
    pub fn has_rating(&self) -> bool {
        self.rating_label != NO_RATING_GIVEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_defaults() {
        let profile = ReviewerProfile::new("Ada", "/user/show/1");
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.followers_label, NOT_FOUND);
        assert_eq!(profile.reviews_label, NOT_FOUND);
        assert_eq!(profile.author_marker, None);
        assert!(!profile.is_author());
    }

    #[test]
    fn test_author_marker_implies_author() {
        let mut profile = ReviewerProfile::new("Rebecca", "/user/show/2");
        profile.author_marker = Some("Author".to_string());
        assert!(profile.is_author());
    }

    #[test]
    fn test_rating_presence() {
        let profile = ReviewerProfile::new("Ada", "/user/show/1");
        let rated = ReviewRecord::new(1, profile.clone(), "Rating 4 out of 5", "Loved it");
        let unrated = ReviewRecord::new(2, profile, NO_RATING_GIVEN, "DNF");
        assert!(rated.has_rating());
        assert!(!unrated.has_rating());
    }
}
