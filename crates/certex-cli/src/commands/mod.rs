pub mod extract;
pub mod tables;
