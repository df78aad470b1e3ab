pub mod presentation;
pub mod print;
