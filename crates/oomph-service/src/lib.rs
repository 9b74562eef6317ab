pub mod error;
pub mod export;
pub mod geocode;
pub mod scan;
