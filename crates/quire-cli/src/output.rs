//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use quire_domain::{BookDigest, ReviewPage, ReviewTable};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Longest review excerpt shown in table cells
const EXCERPT_CHARS: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a book digest.
    pub fn format_digest(&self, digest: &BookDigest) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "title": digest.title,
                "author": digest.author,
                "review_count": digest.review_count,
                "summary": digest.summary,
            }))?),
            OutputFormat::Table => {
                let heading = format!("{} by {}", digest.title, digest.author);
                Ok(format!(
                    "{}\n{}\n\n{}",
                    self.colorize(&heading, "cyan"),
                    self.info(&format!("Summarized {} review(s)", digest.review_count)),
                    digest.summary.trim()
                ))
            }
            OutputFormat::Quiet => Ok(digest.summary.trim().to_string()),
        }
    }

    /// Format a normalized review table.
    pub fn format_table(&self, table: &ReviewTable) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_table_json(table),
            OutputFormat::Table => Ok(self.format_table_rows(table)),
            OutputFormat::Quiet => Ok(table
                .rows
                .iter()
                .map(|r| r.reviewer_name.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format review records as scraped.
    pub fn format_records(&self, page: &ReviewPage) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let reviews: Vec<serde_json::Value> = page
                    .reviews
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "index": r.index,
                            "reviewer": {
                                "name": r.reviewer.name,
                                "profile_url": r.reviewer.profile_url,
                                "is_author": r.reviewer.is_author(),
                                "books": r.reviewer.books_label,
                                "reviews": r.reviewer.reviews_label,
                                "followers": r.reviewer.followers_label,
                            },
                            "rating": r.rating_label,
                            "content": r.content,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "title": page.title,
                    "author": page.author,
                    "reviews": reviews,
                }))?)
            }
            OutputFormat::Table => {
                if page.reviews.is_empty() {
                    return Ok(self.warning("No reviews found."));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "Reviewer", "Author", "Books", "Reviews", "Followers", "Rating"]);
                for r in &page.reviews {
                    builder.push_record([
                        r.index.to_string(),
                        r.reviewer.name.clone(),
                        if r.reviewer.is_author() { "yes" } else { "" }.to_string(),
                        r.reviewer.books_label.clone().unwrap_or_default(),
                        r.reviewer.reviews_label.clone(),
                        r.reviewer.followers_label.clone(),
                        r.rating_label.clone(),
                    ]);
                }

                let mut rendered = builder.build();
                rendered
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(format!(
                    "{}\n{}",
                    self.colorize(&format!("{} by {}", page.title, page.author), "cyan"),
                    rendered
                ))
            }
            OutputFormat::Quiet => Ok(page
                .reviews
                .iter()
                .map(|r| r.reviewer.name.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_table_json(&self, table: &ReviewTable) -> Result<String> {
        let rows: Vec<serde_json::Value> = table
            .rows
            .iter()
            .map(|r| {
                serde_json::json!({
                    "reviewer_name": r.reviewer_name,
                    "reviews_count": r.reviews_count,
                    "followers_count": r.followers_count,
                    "rating": r.rating,
                    "content": r.content,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&serde_json::json!({
            "title": table.title,
            "author": table.author,
            "average_rating": table.average_rating(),
            "reviews": rows,
        }))?)
    }

    fn format_table_rows(&self, table: &ReviewTable) -> String {
        if table.is_empty() {
            return self.warning("No reviews found.");
        }

        let mut builder = Builder::default();
        builder.push_record(["Reviewer", "Reviews", "Followers", "Rating", "Review"]);

        for row in &table.rows {
            builder.push_record([
                row.reviewer_name.clone(),
                row.reviews_count.to_string(),
                row.followers_count.to_string(),
                row.rating.map(stars).unwrap_or_else(|| "-".to_string()),
                excerpt(&row.content, EXCERPT_CHARS),
            ]);
        }

        let mut rendered = builder.build();
        rendered
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let average = match table.average_rating() {
            Some(avg) => format!("average rating {:.2}", avg),
            None => "no ratings".to_string(),
        };
        format!(
            "{}\n{}\n{}",
            self.colorize(&format!("{} by {}", table.title, table.author), "cyan"),
            rendered,
            self.info(&format!("{} review(s), {}", table.len(), average))
        )
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Render a 1-5 rating as stars.
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(quire_extractor::MAX_RATING));
    let empty = usize::from(quire_extractor::MAX_RATING) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// First `max` characters of the first line, with an ellipsis when cut.
fn excerpt(text: &str, max: usize) -> String {
    let line = text.lines().next().unwrap_or("").trim();
    if line.chars().count() <= max && !text.trim().contains('\n') {
        return line.to_string();
    }
    let cut: String = line.chars().take(max).collect();
    format!("{}…", cut.trim_end())
}
