pub mod queries;
pub mod search;
