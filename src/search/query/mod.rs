mod ast;
mod eval;
mod lexer;
mod parser;

pub use ast::{Clause, Field, FilterExpr};

use crate::catalog::ShowRecord;

/// Turns search box text into clauses. Never fails: anything that is not a
/// recognised `field:value` pair is kept as free text.
pub fn parse_query(input: &str) -> FilterExpr {
    parser::parse(input)
}

pub fn matches_query(show: &ShowRecord, expr: &FilterExpr) -> bool {
    eval::matches(show, expr)
}
