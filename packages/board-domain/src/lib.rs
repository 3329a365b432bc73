pub mod admission;
pub mod keyword;
