mod pipeline;

pub use pipeline::{Pipeline, Rejection, RunReport};
