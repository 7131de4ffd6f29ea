pub mod generate;
pub mod posts;
