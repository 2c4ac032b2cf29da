pub mod counting_host;
pub mod fixtures;
