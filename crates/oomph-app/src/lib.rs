pub mod cli;
pub mod source;
