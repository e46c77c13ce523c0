pub mod embedding;
pub mod similarity;
