pub mod dump;
pub mod tree;
