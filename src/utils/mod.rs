pub mod constants;
pub mod formatters;
