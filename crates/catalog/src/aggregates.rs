//! Mean / max / min over the numeric fields of every stored work.

use lw_domain::LiteraryWork;
use serde::Serialize;

/// Statistics served by `GET /literary-works/aggregates`.
///
/// An empty store yields all zeros rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Aggregates {
    pub average_rating: f64,
    pub max_rating: f64,
    pub min_rating: f64,
    pub average_year_published: f64,
    pub max_year_published: i64,
    pub min_year_published: i64,
}

impl Aggregates {
    pub fn compute(works: &[LiteraryWork]) -> Self {
        if works.is_empty() {
            return Self::default();
        }

        let count = works.len() as f64;

        let mut rating_sum = 0.0;
        let mut max_rating = f64::NEG_INFINITY;
        let mut min_rating = f64::INFINITY;

        let mut year_sum: i128 = 0;
        let mut max_year = i64::MIN;
        let mut min_year = i64::MAX;

        for work in works {
            rating_sum += work.rating;
            max_rating = max_rating.max(work.rating);
            min_rating = min_rating.min(work.rating);

            year_sum += i128::from(work.year_published);
            max_year = max_year.max(work.year_published);
            min_year = min_year.min(work.year_published);
        }

        Self {
            average_rating: rating_sum / count,
            max_rating,
            min_rating,
            average_year_published: year_sum as f64 / count,
            max_year_published: max_year,
            min_year_published: min_year,
        }
    }
}
