use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName, Slug};

/// Category record forming a tree via `parent_id`.
///
/// Categories are reference data: the HTTP surface never creates or mutates
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
    /// `None` marks a top-level category.
    pub parent_id: Option<CategoryId>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: Slug,
    pub parent_id: Option<CategoryId>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
