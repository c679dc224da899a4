//! Book catalog models.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::filter::Searchable;

/// Book in the platform catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Unique book identifier
    pub id: i64,
    /// Display title
    pub title: String,
    /// Author name shown in listings
    pub author: Option<String>,
    /// Category name shown in listings
    pub category: Option<String>,
    /// Retail price
    pub price: BigDecimal,
    /// Copies currently in stock
    #[serde(default)]
    pub stock: i32,
    /// Long-form description
    pub description: Option<String>,
    /// URL of the uploaded cover image
    pub cover_url: Option<String>,
}

impl Book {
    /// Returns whether the book can currently be ordered.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Returns whether a cover image has been uploaded.
    pub fn has_cover(&self) -> bool {
        self.cover_url.is_some()
    }
}

impl Searchable for Book {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.author.as_deref());
        fields.extend(self.category.as_deref());
        fields
    }
}

/// Data for creating a new book.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewBook {
    /// Display title
    pub title: String,
    /// Author record to link
    pub author_id: Option<i64>,
    /// Category record to link
    pub category_id: Option<i64>,
    /// Retail price
    pub price: BigDecimal,
    /// Copies in stock
    pub stock: i32,
    /// Long-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Data for updating a book. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateBook {
    /// Display title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Author record to link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
    /// Category record to link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    /// Retail price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<BigDecimal>,
    /// Copies in stock
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i32>,
    /// Long-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
