pub mod aggregate;
pub mod title;
