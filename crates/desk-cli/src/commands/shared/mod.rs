pub mod guard;
pub mod limit;
pub mod parse;
