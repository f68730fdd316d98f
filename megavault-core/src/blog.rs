//! Blog entries shown on the landing page.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Characters of the description kept on a card.
pub const EXCERPT_CHARS: usize = 100;

const SAMPLE_DESCRIPTION: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore Lorem ipsum dolor tur.";
const SAMPLE_IMAGE: &str = "static/images/temp-blog-image.jpg";
const SAMPLE_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub link: String,
    /// Image path relative to the site root.
    pub image: String,
}

impl BlogPost {
    /// First [`EXCERPT_CHARS`] characters followed by an ellipsis.
    #[must_use]
    pub fn excerpt(&self) -> String {
        let cut: String = self.description.chars().take(EXCERPT_CHARS).collect();
        format!("{cut}...")
    }

    /// Zero-padded `YYYY-MM-DD`.
    #[must_use]
    pub fn display_date(&self) -> String {
        format!(
            "{}-{:02}-{:02}",
            self.date.year(),
            self.date.month(),
            self.date.day()
        )
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("blog catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("blog post #{index} has an empty title")]
    EmptyTitle { index: usize },
    #[error("blog title `{0}` appears more than once")]
    DuplicateTitle(String),
}

/// Ordered, immutable list of posts. Order decides pagination order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlogCatalog {
    pub posts: Vec<BlogPost>,
}

impl BlogCatalog {
    /// Parse and check a catalog.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON, empty titles, or repeated titles
    /// (titles key the rendered cards).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.check()?;
        Ok(catalog)
    }

    fn check(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for (index, post) in self.posts.iter().enumerate() {
            if post.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle { index });
            }
            if !seen.insert(post.title.as_str()) {
                return Err(CatalogError::DuplicateTitle(post.title.clone()));
            }
        }
        Ok(())
    }

    /// Placeholder posts dated `today`, used until a real feed exists.
    #[must_use]
    pub fn sample(today: NaiveDate) -> Self {
        let posts = (1..=SAMPLE_COUNT)
            .map(|n| BlogPost {
                title: format!("Lorem ipsum dolor sit amet{n}"),
                description: SAMPLE_DESCRIPTION.to_string(),
                date: today,
                link: "/blog/1".to_string(),
                image: SAMPLE_IMAGE.to_string(),
            })
            .collect();
        Self { posts }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn sample_has_five_distinct_posts() {
        let catalog = BlogCatalog::sample(day(2024, 3, 7));
        assert_eq!(catalog.len(), 5);
        assert!(catalog.check().is_ok());
        assert_eq!(catalog.posts[0].title, "Lorem ipsum dolor sit amet1");
        assert_eq!(catalog.posts[4].title, "Lorem ipsum dolor sit amet5");
    }

    #[test]
    fn dates_are_zero_padded() {
        let post = &BlogCatalog::sample(day(2024, 3, 7)).posts[0];
        assert_eq!(post.display_date(), "2024-03-07");
        let post = &BlogCatalog::sample(day(2024, 11, 23)).posts[0];
        assert_eq!(post.display_date(), "2024-11-23");
    }

    #[test]
    fn excerpt_truncates_by_character() {
        let post = &BlogCatalog::sample(day(2024, 1, 1)).posts[0];
        let excerpt = post.excerpt();
        assert!(excerpt.ends_with("..."));
        assert_eq!(excerpt.chars().count(), EXCERPT_CHARS + 3);

        let short = BlogPost {
            description: "Übersicht".to_string(),
            ..post.clone()
        };
        assert_eq!(short.excerpt(), "Übersicht...");
    }

    #[test]
    fn from_json_round_trips_and_rejects_duplicates() {
        let catalog = BlogCatalog::sample(day(2024, 5, 1));
        let json = serde_json::to_string(&catalog).expect("serialize");
        assert!(json.contains("\"2024-05-01\""));
        assert_eq!(BlogCatalog::from_json(&json).expect("parse"), catalog);

        let mut dup = catalog.clone();
        dup.posts[1].title = dup.posts[0].title.clone();
        let json = serde_json::to_string(&dup).expect("serialize");
        assert!(matches!(
            BlogCatalog::from_json(&json),
            Err(CatalogError::DuplicateTitle(_))
        ));
    }

    #[test]
    fn from_json_reports_bad_input() {
        assert!(matches!(BlogCatalog::from_json("{"), Err(CatalogError::Json(_))));
        let json = r#"{"posts":[{"title":" ","description":"d","date":"2024-01-01","link":"/","image":"i"}]}"#;
        assert!(matches!(
            BlogCatalog::from_json(json),
            Err(CatalogError::EmptyTitle { index: 0 })
        ));
    }
}
