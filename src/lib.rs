pub mod api;
pub mod config;
pub mod corpus;
pub mod error;
pub mod ngrams;
pub mod normalize;
pub mod ranker;
// cmd and reports are binary modules (see main.rs).
