pub mod client;
pub mod types;


pub use client::{ClusterBackend, KMeansClient, ServerError};
pub use types::{RunRequest, RunResponse, StepReply};
