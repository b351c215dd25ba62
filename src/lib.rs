pub mod cli;
pub mod output;

pub use compliance_lib;
