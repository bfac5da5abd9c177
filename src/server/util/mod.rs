pub mod date;
pub mod json;
