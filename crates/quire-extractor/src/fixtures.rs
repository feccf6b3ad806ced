//! HTML fixtures shaped like a book review page

/// Builder for one `article.ReviewCard`
pub(crate) struct Card {
    name: String,
    link: bool,
    href: Option<String>,
    info_section: bool,
    meta: Option<Vec<String>>,
    shelf_status: bool,
    rating: Option<String>,
    content: Option<String>,
}

impl Card {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            link: true,
            href: Some(format!("https://www.goodreads.com/user/show/{}", name.to_lowercase())),
            info_section: true,
            meta: None,
            shelf_status: true,
            rating: None,
            content: Some(format!("Review by {}", name)),
        }
    }

    pub(crate) fn href(mut self, href: &str) -> Self {
        self.href = Some(href.to_string());
        self
    }

    pub(crate) fn meta(mut self, spans: &[&str]) -> Self {
        self.meta = Some(spans.iter().map(|s| s.to_string()).collect());
        self
    }

    pub(crate) fn rating(mut self, label: &str) -> Self {
        self.rating = Some(label.to_string());
        self
    }

    pub(crate) fn without_shelf_status(mut self) -> Self {
        self.shelf_status = false;
        self
    }

    pub(crate) fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub(crate) fn without_content(mut self) -> Self {
        self.content = None;
        self
    }

    pub(crate) fn without_link(mut self) -> Self {
        self.link = false;
        self
    }

    pub(crate) fn without_href(mut self) -> Self {
        self.href = None;
        self
    }

    pub(crate) fn without_info_section(mut self) -> Self {
        self.info_section = false;
        self
    }

    pub(crate) fn render(&self) -> String {
        let name = match (&self.href, self.link) {
            (_, false) => format!("<span>{}</span>", self.name),
            (Some(href), true) => format!(r#"<span><a href="{}">{}</a></span>"#, href, self.name),
            (None, true) => format!("<span><a>{}</a></span>", self.name),
        };
        let info_class = if self.info_section {
            "ReviewerProfile__info"
        } else {
            "ReviewerProfile__summary"
        };
        let meta = match &self.meta {
            Some(spans) => format!(
                r#"<div class="ReviewerProfile__meta">{}</div>"#,
                spans
                    .iter()
                    .map(|s| format!(r#"<span class="Text Text__body3">{}</span>"#, s))
                    .collect::<String>()
            ),
            None => String::new(),
        };
        let shelf = if self.shelf_status {
            let stars = match &self.rating {
                Some(label) => format!(
                    r#"<span aria-label="{}" role="img" class="RatingStars RatingStars__small"></span>"#,
                    label
                ),
                None => String::new(),
            };
            format!(r#"<div class="ShelfStatus">{}</div>"#, stars)
        } else {
            String::new()
        };
        let content = match &self.content {
            Some(text) => format!(
                r#"<section class="ReviewText"><span class="Formatted">{}</span></section>"#,
                text
            ),
            None => String::new(),
        };

        format!(
            r#"<article class="ReviewCard">
  <div class="ReviewCard__profile">
    <section class="{info_class}">
      <div class="ReviewerProfile__name">{name}</div>
      {meta}
    </section>
  </div>
  <section class="ReviewCard__content">
    {shelf}
    {content}
  </section>
</article>"#
        )
    }
}

/// A page whose review lists hold exactly the given inner HTML, in order
pub(crate) fn page_with_lists(title: &str, author: &str, lists: &[String]) -> String {
    let lists: String = lists
        .iter()
        .map(|inner| format!(r#"<div class="ReviewsList">{}</div>"#, inner))
        .collect();
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>{title} by {author} | Goodreads</title></head>
<body>
  <div class="BookPageTitleSection">
    <h1 class="Text Text__title1" data-testid="bookTitle" aria-label="Book title: {title}">
      {title}
    </h1>
  </div>
  <div class="ContributorLinksList">
    <span tabindex="-1"><a class="ContributorLink" href="https://www.goodreads.com/author/show/1">
      <span class="ContributorLink__name" data-testid="name">{author}</span>
    </a></span>
  </div>
  {lists}
</body>
</html>"#
    )
}

/// A page with one decoy list followed by the real list of `cards`
pub(crate) fn page(title: &str, author: &str, cards: &[String]) -> String {
    let decoy = Card::new("Decoy").rating("Rating 1 out of 5").render();
    page_with_lists(title, author, &[decoy, cards.concat()])
}

/// Three reviews with varying presence of optional fields
pub(crate) fn sample_page() -> String {
    let cards = [
        Card::new("Ada")
            .href("https://www.goodreads.com/user/show/1-ada")
            .meta(&["12 books", "1,024 reviews", "1.2k followers"])
            .rating("Rating 4 out of 5")
            .content("\n      Sharp satire of publishing.  \n")
            .render(),
        Card::new("Rebecca")
            .meta(&["Author", "3 followers"])
            .content("The pacing never lets up.")
            .render(),
        Card::new("Bob")
            .without_shelf_status()
            .content("Couldn't finish it.")
            .render(),
    ];
    page("Yellowface", "R.F. Kuang", &cards)
}
