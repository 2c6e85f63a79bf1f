// src/domain/article/validation.rs
use crate::domain::article::{
    entity::NewArticle,
    value_objects::{ArticleAuthor, ArticleContent, ArticleTitle},
};
use serde::{Serialize, Serializer, ser::SerializeMap};
use std::fmt;

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The field was absent or explicitly `null`.
    Missing,
    /// The field was present but an empty string.
    Empty,
}

impl Violation {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Missing => "is required",
            Self::Empty => "must not be empty",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Field name to violation, kept in the order the fields were checked.
///
/// Serializes as a JSON object, e.g. `{"title": "is required"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<(&'static str, Violation)>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, violation: Violation) {
        self.entries.push((field, violation));
    }

    /// Record the violation of `result` under `field`, passing the valid value through.
    pub fn check<T>(&mut self, field: &'static str, result: Result<T, Violation>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(violation) => {
                self.add(field, violation);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, field: &str) -> Option<Violation> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, violation)| *violation)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (field, violation)) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field} {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, violation) in &self.entries {
            map.serialize_entry(field, violation.message())?;
        }
        map.end()
    }
}

fn required(value: Option<String>) -> Result<String, Violation> {
    value.ok_or(Violation::Missing)
}

/// Check raw article fields and build an unsaved article from them.
///
/// Every field is checked, so the error lists all offending fields at once.
pub fn validate_article_fields(
    author: Option<String>,
    title: Option<String>,
    content: Option<String>,
) -> Result<NewArticle, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let author = errors.check("author", required(author).and_then(ArticleAuthor::new));
    let title = errors.check("title", required(title).and_then(ArticleTitle::new));
    let content = errors.check("content", required(content).and_then(ArticleContent::new));

    match (author, title, content) {
        (Some(author), Some(title), Some(content)) => Ok(NewArticle {
            author,
            title,
            content,
        }),
        _ => Err(errors),
    }
}
