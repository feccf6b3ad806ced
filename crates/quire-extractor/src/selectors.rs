//! CSS selectors for the book review page.
//!
//! Every site-specific marker lives here; update this file when the page
//! layout changes and add a fixture for the new markup.

use scraper::Selector;
use std::sync::LazyLock;

fn compile(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

/// Book title heading
pub static TITLE: LazyLock<Selector> = LazyLock::new(|| compile(r#"h1[data-testid="bookTitle"]"#));

/// Primary contributor name; the first match is the author
pub static AUTHOR: LazyLock<Selector> =
    LazyLock::new(|| compile(r#"span.ContributorLink__name[data-testid="name"]"#));

/// Review list container (rendered twice: a decoy, then the real list)
pub static REVIEW_LIST: LazyLock<Selector> = LazyLock::new(|| compile("div.ReviewsList"));

/// One review unit
pub static REVIEW_CARD: LazyLock<Selector> = LazyLock::new(|| compile("article.ReviewCard"));

/// Reviewer info block inside a card
pub static REVIEWER_INFO: LazyLock<Selector> =
    LazyLock::new(|| compile("section.ReviewerProfile__info"));

/// Links inside the reviewer block; the first is the profile link
pub static LINK: LazyLock<Selector> = LazyLock::new(|| compile("a"));

/// Reviewer metadata block (books / reviews / followers / Author badge)
pub static REVIEWER_META: LazyLock<Selector> =
    LazyLock::new(|| compile("div.ReviewerProfile__meta"));

/// Individual metadata fragments
pub static META_SPAN: LazyLock<Selector> = LazyLock::new(|| compile("span"));

/// Shelf status block holding the star rating
pub static SHELF_STATUS: LazyLock<Selector> = LazyLock::new(|| compile("div.ShelfStatus"));

/// Star rating widget, labelled "Rating N out of 5"
pub static RATING_STARS: LazyLock<Selector> =
    LazyLock::new(|| compile("span.RatingStars.RatingStars__small"));

/// Formatted review body
pub static CONTENT: LazyLock<Selector> = LazyLock::new(|| compile("span.Formatted"));

/// Attribute carrying the rating phrase
pub const RATING_LABEL_ATTR: &str = "aria-label";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_selectors_compile() {
        for selector in [
            &TITLE,
            &AUTHOR,
            &REVIEW_LIST,
            &REVIEW_CARD,
            &REVIEWER_INFO,
            &LINK,
            &REVIEWER_META,
            &META_SPAN,
            &SHELF_STATUS,
            &RATING_STARS,
            &CONTENT,
        ] {
            LazyLock::force(selector);
        }
    }
}
