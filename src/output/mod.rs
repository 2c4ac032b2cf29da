pub mod fingerprint;
pub mod format;
pub mod persist;
pub mod xml;
