//! List ordering for `GET /literary-works`.
//!
//! Each record field may be named as a query parameter whose value picks a
//! direction (`asc`, anything else descending). Parameters are visited in
//! the fixed field order and every present one re-sorts the whole store,
//! so only the last present field decides the final order.

use std::cmp::Ordering;

use lw_domain::LiteraryWork;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Field / direction
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
    Author,
    YearPublished,
    Rating,
}

impl SortField {
    /// Fixed visiting order for sort parameters.
    pub const ALL: [SortField; 5] = [
        SortField::Id,
        SortField::Title,
        SortField::Author,
        SortField::YearPublished,
        SortField::Rating,
    ];

    /// Query parameter (and JSON field) name.
    pub fn param(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Title => "title",
            SortField::Author => "author",
            SortField::YearPublished => "year_published",
            SortField::Rating => "rating",
        }
    }

    /// Ascending comparison of two records on this field.
    pub fn compare(self, a: &LiteraryWork, b: &LiteraryWork) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Title => a.title.cmp(&b.title),
            SortField::Author => a.author.cmp(&b.author),
            SortField::YearPublished => a.year_published.cmp(&b.year_published),
            SortField::Rating => a.rating.total_cmp(&b.rating),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Exactly `"asc"` is ascending; every other value is descending.
    pub fn parse(value: &str) -> Self {
        if value == "asc" {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Query
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Raw sort parameters as they arrive on the query string.
#[derive(Debug, Clone, Default)]
pub struct SortQuery {
    pub id: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub year_published: Option<String>,
    pub rating: Option<String>,
}

impl SortQuery {
    /// Build from decoded query pairs. A repeated parameter keeps its first
    /// value; names that are not record fields are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_ref() {
                "id" => &mut query.id,
                "title" => &mut query.title,
                "author" => &mut query.author,
                "year_published" => &mut query.year_published,
                "rating" => &mut query.rating,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }

    fn value(&self, field: SortField) -> Option<&str> {
        match field {
            SortField::Id => self.id.as_deref(),
            SortField::Title => self.title.as_deref(),
            SortField::Author => self.author.as_deref(),
            SortField::YearPublished => self.year_published.as_deref(),
            SortField::Rating => self.rating.as_deref(),
        }
    }

    /// Requested `(field, direction)` pairs in fixed field order.
    pub fn requested(&self) -> Vec<(SortField, SortDirection)> {
        SortField::ALL
            .iter()
            .filter_map(|&f| self.value(f).map(|v| (f, SortDirection::parse(v))))
            .collect()
    }

    /// The ordering that actually applies: the last requested field.
    /// `None` means insertion order.
    pub fn effective(&self) -> Option<(SortField, SortDirection)> {
        self.requested().last().copied()
    }

    /// Return `works` ordered per this query. The input is left untouched.
    pub fn apply(&self, works: &[LiteraryWork]) -> Vec<LiteraryWork> {
        let mut sorted = works.to_vec();
        if let Some((field, direction)) = self.effective() {
            // Stable in both directions: ties keep insertion order.
            match direction {
                SortDirection::Asc => sorted.sort_by(|a, b| field.compare(a, b)),
                SortDirection::Desc => sorted.sort_by(|a, b| field.compare(b, a)),
            }
        }
        sorted
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
