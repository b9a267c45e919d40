//! Browsing core for a catalog of concert recordings: the search box query
//! language, catalog loading, artist rows and show card data.

pub mod artwork;
pub mod card;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod logging;
pub mod rows;
pub mod search;
pub mod sorting;
