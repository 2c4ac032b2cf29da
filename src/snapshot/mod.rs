pub mod document;
pub mod error;
pub mod serializer;
pub mod statistics;
