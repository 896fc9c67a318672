pub mod pipelines;
pub mod prompt;
