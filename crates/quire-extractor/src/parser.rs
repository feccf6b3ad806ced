//! Extract review records from a book review page

use crate::error::ExtractorError;
use crate::selectors;
use quire_domain::{ReviewPage, ReviewRecord, ReviewerProfile, NO_RATING_GIVEN};
use scraper::{ElementRef, Html};
use tracing::{debug, warn};

/// The page renders one decoy review list before the real one.
///
/// The real list is therefore the container at this position, and a page
/// with fewer than `EXPECTED_REVIEW_LISTS` containers does not have the
/// layout this extractor understands.
pub const LEADING_DECOY_LISTS: usize = 1;

/// Minimum number of review list containers on a well-formed page
pub const EXPECTED_REVIEW_LISTS: usize = LEADING_DECOY_LISTS + 1;

/// Build a navigable document from raw page bytes
///
/// Invalid UTF-8 is replaced rather than rejected; markup errors are
/// recovered by the HTML5 parser.
pub fn parse_document(raw: &[u8]) -> Html {
    Html::parse_document(&String::from_utf8_lossy(raw))
}

/// Parse raw page bytes and extract every review on it
pub fn extract_reviews(raw: &[u8]) -> Result<ReviewPage, ExtractorError> {
    let document = parse_document(raw);
    extract(&document)
}

/// Extract title, author and all review records from a parsed page
///
/// # Errors
///
/// Returns `StructureNotFound` when the title, author or review list
/// containers are missing, or when any review lacks its reviewer link or
/// body. A broken review aborts the whole page rather than being skipped,
/// so the review count handed downstream is never silently short.
pub fn extract(document: &Html) -> Result<ReviewPage, ExtractorError> {
    let title = required_text(document.select(&selectors::TITLE).next(), "book title")?;
    let author = required_text(document.select(&selectors::AUTHOR).next(), "book author")?;

    let list = select_review_list(document)?;

    let reviews = list
        .select(&selectors::REVIEW_CARD)
        .enumerate()
        .map(|(position, card)| extract_review(card, position + 1))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(%title, %author, reviews = reviews.len(), "Extracted review page");

    Ok(ReviewPage {
        title,
        author,
        reviews,
    })
}

/// Pick the real review list, skipping the leading decoy
fn select_review_list(document: &Html) -> Result<ElementRef<'_>, ExtractorError> {
    let lists: Vec<ElementRef<'_>> = document.select(&selectors::REVIEW_LIST).collect();

    if lists.len() < EXPECTED_REVIEW_LISTS {
        return Err(ExtractorError::structure(format!(
            "review list container (expected {} on page, found {})",
            EXPECTED_REVIEW_LISTS,
            lists.len()
        )));
    }
    if lists.len() > EXPECTED_REVIEW_LISTS {
        warn!(
            found = lists.len(),
            expected = EXPECTED_REVIEW_LISTS,
            "More review lists than expected; using the one after the decoy"
        );
    }

    Ok(lists[LEADING_DECOY_LISTS])
}

/// Extract one review card
fn extract_review(card: ElementRef<'_>, index: usize) -> Result<ReviewRecord, ExtractorError> {
    let missing = |field: &str| ExtractorError::structure(format!("{} in review {}", field, index));

    let info = card
        .select(&selectors::REVIEWER_INFO)
        .next()
        .ok_or_else(|| missing("reviewer info"))?;

    let link = info
        .select(&selectors::LINK)
        .next()
        .ok_or_else(|| missing("reviewer link"))?;
    let name = element_text(link);
    let profile_url = link
        .value()
        .attr("href")
        .ok_or_else(|| missing("reviewer profile href"))?;

    let mut reviewer = ReviewerProfile::new(name, profile_url);
    if let Some(meta) = info.select(&selectors::REVIEWER_META).next() {
        apply_meta_spans(&mut reviewer, meta);
    }

    let rating_label = rating_label(card);

    let content = card
        .select(&selectors::CONTENT)
        .next()
        .map(element_text)
        .ok_or_else(|| missing("review content"))?;

    Ok(ReviewRecord::new(index, reviewer, rating_label, content))
}

/// Kind of reviewer metadata a span carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaSpan {
    /// "12 books"
    Books,
    /// "1,024 reviews"
    Reviews,
    /// "1.2k followers"
    Followers,
    /// The "Author" badge
    AuthorMarker,
}

impl MetaSpan {
    /// Classify a metadata fragment by substring, first rule wins
    ///
    /// Order matters: a fragment is checked for "books", then "reviews",
    /// then "followers", then "Author". Anything else is not metadata.
    pub fn classify(text: &str) -> Option<Self> {
        if text.contains("books") {
            Some(MetaSpan::Books)
        } else if text.contains("reviews") {
            Some(MetaSpan::Reviews)
        } else if text.contains("followers") {
            Some(MetaSpan::Followers)
        } else if text.contains("Author") {
            Some(MetaSpan::AuthorMarker)
        } else {
            None
        }
    }
}

/// Fold the unordered metadata spans into the profile; later spans win
fn apply_meta_spans(reviewer: &mut ReviewerProfile, meta: ElementRef<'_>) {
    for span in meta.select(&selectors::META_SPAN) {
        let text = element_text(span);
        match MetaSpan::classify(&text) {
            Some(MetaSpan::Books) => reviewer.books_label = Some(text),
            Some(MetaSpan::Reviews) => reviewer.reviews_label = text,
            Some(MetaSpan::Followers) => reviewer.followers_label = text,
            Some(MetaSpan::AuthorMarker) => reviewer.author_marker = Some(text),
            None => {}
        }
    }
}

/// Star rating phrase, or the no-rating sentinel
///
/// A missing rating is common and never an error.
fn rating_label(card: ElementRef<'_>) -> String {
    card.select(&selectors::SHELF_STATUS)
        .next()
        .and_then(|shelf| shelf.select(&selectors::RATING_STARS).next())
        .and_then(|stars| stars.value().attr(selectors::RATING_LABEL_ATTR))
        .map(|label| label.trim().to_string())
        .unwrap_or_else(|| NO_RATING_GIVEN.to_string())
}

fn required_text(element: Option<ElementRef<'_>>, what: &str) -> Result<String, ExtractorError> {
    element
        .map(element_text)
        .ok_or_else(|| ExtractorError::structure(what))
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
