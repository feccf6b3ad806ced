//! Coerce string-encoded review fields into typed values
//!
//! Every function here is total: a sentinel, malformed or out-of-range label
//! resolves to a documented default (0 for counts, `None` for ratings)
//! instead of failing the run.

use quire_domain::{NormalizedReview, ReviewPage, ReviewRecord, ReviewTable, NOT_FOUND};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// "1.2k followers", "15K followers"
static ABBREVIATED_FOLLOWERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)(?:\.(\d+))?[kK]\s+followers").expect("invalid regex: abbreviated followers")
});

/// "Rating 4 out of 5"
static RATING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Rating (\d+) out of").expect("invalid regex: rating"));

/// Highest star rating the site renders
pub const MAX_RATING: u8 = 5;

/// Normalize every review on a page, keeping document order
///
/// Profile links, list indices, book counts and author flags are dropped.
pub fn normalize(page: &ReviewPage) -> ReviewTable {
    let rows: Vec<NormalizedReview> = page.reviews.iter().map(normalize_review).collect();
    debug!(rows = rows.len(), "Normalized review table");
    ReviewTable {
        title: page.title.clone(),
        author: page.author.clone(),
        rows,
    }
}

/// Normalize a single review record
pub fn normalize_review(record: &ReviewRecord) -> NormalizedReview {
    let reviews_count = parse_reviews_count(&record.reviewer.reviews_label);
    let followers_count = parse_followers_count(&record.reviewer.followers_label);
    let rating = parse_rating(&record.rating_label);

    if rating.is_none() && record.has_rating() {
        debug!(
            index = record.index,
            label = %record.rating_label,
            "Unrecognized rating label; treating as unrated"
        );
    }

    NormalizedReview {
        reviewer_name: record.reviewer.name.clone(),
        reviews_count,
        followers_count,
        rating,
        content: record.content.clone(),
    }
}

/// "1,024 reviews" → 1024, "1 review" → 1, "Not Found" → 0
pub fn parse_reviews_count(label: &str) -> u32 {
    parse_count(label, &["reviews", "review"])
}

/// "1.2k followers" → 1200, "3 followers" → 3, "Not Found" → 0
///
/// The abbreviated form is read as a decimal and multiplied by 1000 with
/// truncation, so "1.2345k followers" → 1234.
pub fn parse_followers_count(label: &str) -> u32 {
    if let Some(caps) = ABBREVIATED_FOLLOWERS.captures(label) {
        let whole = caps.get(1).map_or("", |m| m.as_str());
        let fraction = caps.get(2).map_or("", |m| m.as_str());
        return thousands(whole, fraction).unwrap_or_else(|| {
            debug!(%label, "Abbreviated follower count out of range");
            0
        });
    }
    parse_count(label, &["followers", "follower"])
}

/// "Rating 4 out of 5" → Some(4); the no-rating sentinel or anything else → None
pub fn parse_rating(label: &str) -> Option<u8> {
    RATING
        .captures(label)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<u8>().ok())
        .filter(|stars| (1..=MAX_RATING).contains(stars))
}

/// Strip unit words, whitespace and thousands separators, then parse
fn parse_count(label: &str, units: &[&str]) -> u32 {
    if label.trim() == NOT_FOUND {
        return 0;
    }

    let mut cleaned = label.to_string();
    for unit in units {
        cleaned = cleaned.replace(unit, "");
    }
    let digits: String = cleaned
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();

    digits.parse::<u32>().unwrap_or_else(|_| {
        debug!(%label, "Unparseable count label; defaulting to 0");
        0
    })
}

/// Exact `whole.fraction × 1000`, truncated; `None` on overflow
fn thousands(whole: &str, fraction: &str) -> Option<u32> {
    let whole: u32 = whole.parse().ok()?;
    let mut milli = 0u32;
    let mut scale = 100u32;
    for digit in fraction.chars().take(3) {
        milli += digit.to_digit(10)? * scale;
        scale /= 10;
    }
    whole.checked_mul(1000)?.checked_add(milli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_domain::{ReviewerProfile, NO_RATING_GIVEN};

    #[test]
    fn test_reviews_count() {
        assert_eq!(parse_reviews_count("1,024 reviews"), 1024);
        assert_eq!(parse_reviews_count("1 review"), 1);
        assert_eq!(parse_reviews_count("87 reviews"), 87);
        assert_eq!(parse_reviews_count("1,234,567 reviews"), 1_234_567);
        assert_eq!(parse_reviews_count(NOT_FOUND), 0);
    }

    #[test]
    fn test_reviews_count_malformed() {
        assert_eq!(parse_reviews_count(""), 0);
        assert_eq!(parse_reviews_count("lots of reviews"), 0);
        assert_eq!(parse_reviews_count("-5 reviews"), 0);
        assert_eq!(parse_reviews_count("99999999999 reviews"), 0);
    }

    #[test]
    fn test_followers_abbreviated() {
        assert_eq!(parse_followers_count("1.2k followers"), 1200);
        assert_eq!(parse_followers_count("15K followers"), 15_000);
        assert_eq!(parse_followers_count("4.1k followers"), 4100);
        assert_eq!(parse_followers_count("1.2345k followers"), 1234);
        assert_eq!(parse_followers_count("0.5k followers"), 500);
    }

    #[test]
    fn test_followers_plain() {
        assert_eq!(parse_followers_count("3 followers"), 3);
        assert_eq!(parse_followers_count("1 follower"), 1);
        assert_eq!(parse_followers_count("2,048 followers"), 2048);
        assert_eq!(parse_followers_count(NOT_FOUND), 0);
    }

    #[test]
    fn test_followers_malformed() {
        assert_eq!(parse_followers_count("many followers"), 0);
        assert_eq!(parse_followers_count("9999999k followers"), 0);
        assert_eq!(parse_followers_count("1.2m followers"), 0);
    }

    #[test]
    fn test_rating() {
        assert_eq!(parse_rating("Rating 4 out of 5"), Some(4));
        assert_eq!(parse_rating("Rating 1 out of 5"), Some(1));
        assert_eq!(parse_rating("Rating 5 out of 5"), Some(5));
        assert_eq!(parse_rating(NO_RATING_GIVEN), None);
    }

    #[test]
    fn test_rating_malformed() {
        assert_eq!(parse_rating("Rating 0 out of 5"), None);
        assert_eq!(parse_rating("Rating 7 out of 5"), None);
        assert_eq!(parse_rating("Rating four out of 5"), None);
        assert_eq!(parse_rating("Rated 4 stars"), None);
        assert_eq!(parse_rating("Rating 300 out of 5"), None);
    }

    #[test]
    fn test_normalize_drops_presentation_columns() {
        let mut reviewer = ReviewerProfile::new("Ada", "/user/show/1");
        reviewer.books_label = Some("12 books".to_string());
        reviewer.author_marker = Some("Author".to_string());
        reviewer.reviews_label = "1,024 reviews".to_string();
        reviewer.followers_label = "1.2k followers".to_string();
        let record = ReviewRecord::new(7, reviewer, "Rating 4 out of 5", "Great.");

        let row = normalize_review(&record);
        assert_eq!(
            row,
            NormalizedReview {
                reviewer_name: "Ada".to_string(),
                reviews_count: 1024,
                followers_count: 1200,
                rating: Some(4),
                content: "Great.".to_string(),
            }
        );
    }

    #[test]
    fn test_normalize_keeps_order_and_count() {
        let reviews = ["a", "b", "c"]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                ReviewRecord::new(
                    i + 1,
                    ReviewerProfile::new(*name, "/u"),
                    NO_RATING_GIVEN,
                    format!("text {}", name),
                )
            })
            .collect();
        let page = ReviewPage {
            title: "T".to_string(),
            author: "A".to_string(),
            reviews,
        };

        let table = normalize(&page);
        assert_eq!(table.title, "T");
        assert_eq!(table.author, "A");
        let names: Vec<&str> = table.rows.iter().map(|r| r.reviewer_name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert!(table.rows.iter().all(|r| r.rating.is_none()));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn reviews_count_is_total(label in ".*") {
                let _ = parse_reviews_count(&label);
            }

            #[test]
            fn followers_count_is_total(label in ".*") {
                let _ = parse_followers_count(&label);
            }

            #[test]
            fn rating_is_in_range_or_absent(label in ".*") {
                if let Some(stars) = parse_rating(&label) {
                    prop_assert!((1..=MAX_RATING).contains(&stars));
                }
            }

            #[test]
            fn formatted_counts_round_trip(n in 0u32..10_000_000) {
                let label = format!("{} reviews", n);
                prop_assert_eq!(parse_reviews_count(&label), n);
                let label = format!("{} followers", n);
                prop_assert_eq!(parse_followers_count(&label), n);
            }

            #[test]
            fn abbreviated_followers_scale(whole in 0u32..1_000, tenths in 0u32..10) {
                let label = format!("{}.{}k followers", whole, tenths);
                prop_assert_eq!(parse_followers_count(&label), whole * 1000 + tenths * 100);
            }

            #[test]
            fn rating_phrase_round_trip(stars in 1u8..=5) {
                let label = format!("Rating {} out of 5", stars);
                prop_assert_eq!(parse_rating(&label), Some(stars));
            }
        }
    }
}
