pub mod cache;
pub mod cut;
