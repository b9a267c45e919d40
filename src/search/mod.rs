//! Catalog filtering driven by the search box query language.

pub mod query;


pub use query::{matches_query, parse_query, Clause, Field, FilterExpr};

use crate::catalog::ShowRecord;
use rayon::prelude::*;
use tracing::debug;

/// Returns the shows matching `query`, in catalog order.
pub fn filter_shows<'a>(shows: &'a [ShowRecord], query: &str) -> Vec<&'a ShowRecord> {
    let expr = parse_query(query);
    filter_with(shows, &expr)
}

pub fn filter_with<'a>(shows: &'a [ShowRecord], expr: &FilterExpr) -> Vec<&'a ShowRecord> {
    if expr.is_empty() {
        return shows.iter().collect();
    }

    let matched: Vec<&ShowRecord> = shows
        .par_iter()
        .filter(|show| matches_query(show, expr))
        .collect();
    debug!(
        query = %expr,
        clauses = expr.len(),
        matched = matched.len(),
        total = shows.len(),
        "catalog filtered"
    );
    matched
}
