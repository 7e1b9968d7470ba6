// Public API exports
pub mod config;
pub mod dataset;
pub mod render;
pub mod server;
pub mod session;
pub mod view;

// Re-export main types for convenience
pub use config::{Config, ConfigError};
pub use dataset::{Dataset, DatasetGenerator, Point};
pub use render::{Plot, PlotSize, RenderError, render};
pub use server::{ClusterBackend, KMeansClient, ServerError, StepReply};
pub use session::{ActionError, Command, Outcome, Session, alert_text};
pub use view::{Phase, ViewState};
