//! Examples and candidate documents as read from the source file

use crate::conflict::ConflictType;
use serde::{Deserialize, Serialize};

/// One candidate passage
///
/// Only `doc_id` is required; the other fields are written back exactly as
/// they were read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier, unique within its example
    pub doc_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Document {
    /// Create a document with only an identifier
    #[inline]
    #[must_use]
    pub fn new(doc_id: impl Into<String>) -> Self {
        Self {
            doc_id: doc_id.into(),
            title: None,
            url: None,
            snippet: None,
            date: None,
        }
    }

    /// With title
    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// With URL
    #[inline]
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// With snippet
    #[inline]
    #[must_use]
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    /// With date
    #[inline]
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Title if present and not blank
    #[must_use]
    pub fn display_title(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }

    /// URL if present and not blank
    #[must_use]
    pub fn display_url(&self) -> Option<&str> {
        non_blank(self.url.as_deref())
    }

    /// Date if present and not blank
    #[must_use]
    pub fn display_date(&self) -> Option<&str> {
        non_blank(self.date.as_deref())
    }

    /// Snippet if present and not blank
    #[must_use]
    pub fn display_snippet(&self) -> Option<&str> {
        non_blank(self.snippet.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// One query to annotate, with its fixed document list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub id: String,
    pub query: String,
    pub conflict_type: ConflictType,
    pub docs: Vec<Document>,
    /// Reference answer from the upstream corpus, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_answer: Option<String>,
}

impl Example {
    /// Create an example
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        query: impl Into<String>,
        conflict_type: impl Into<ConflictType>,
        docs: Vec<Document>,
    ) -> Self {
        Self {
            id: id.into(),
            query: query.into(),
            conflict_type: conflict_type.into(),
            docs,
            ref_answer: None,
        }
    }

    /// Look up a document by id
    #[must_use]
    pub fn doc(&self, doc_id: &str) -> Option<&Document> {
        self.docs.iter().find(|d| d.doc_id == doc_id)
    }
}
