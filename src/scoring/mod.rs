pub mod coverage;
pub mod rating;
pub mod report;
