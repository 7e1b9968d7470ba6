// driver.rs - generate/step actions against the clustering server
use crate::config::Config;
use crate::dataset::DatasetGenerator;
use crate::render::{Plot, PlotSize, render};
use crate::server::{ClusterBackend, ServerError};
use crate::session::command::{Command, HELP};
use crate::view::{Phase, ViewState, ViewStateError};
use thiserror::Error;
use tracing::{debug, error, info};

pub const DEFAULT_INIT_METHOD: &str = "random";

/// A failed user action. `Display` is the text shown to the user.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Please generate data first.")]
    NoData,

    #[error(transparent)]
    Busy(#[from] ViewStateError),

    #[error("Failed to send data to the backend.")]
    Upload(#[source] ServerError),

    #[error("Failed to step through KMeans algorithm.")]
    Step(#[source] ServerError),

    #[error("{0}")]
    Rejected(String),
}

/// The alert line for a failed action.
pub fn alert_text(err: &ActionError) -> String {
    match err {
        ActionError::NoData => err.to_string(),
        _ => format!("Error: {}", err),
    }
}

#[derive(Debug)]
pub enum Outcome {
    Redrawn(Plot),
    Info(String),
    Quit,
}

pub struct Session<B> {
    backend: B,
    generator: DatasetGenerator,
    state: ViewState,
    size: PlotSize,
    init_method: String,
}

impl<B: ClusterBackend> Session<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            generator: DatasetGenerator::default(),
            state: ViewState::new(),
            size: PlotSize::default(),
            init_method: DEFAULT_INIT_METHOD.to_string(),
        }
    }

    pub fn from_config(backend: B, config: &Config) -> Self {
        Self::new(backend)
            .with_generator(DatasetGenerator::new(config.points, config.seed))
            .with_plot_size(config.plot_size())
            .with_init_method(config.init_method.clone())
    }

    pub fn with_generator(mut self, generator: DatasetGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_plot_size(mut self, size: PlotSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_init_method(mut self, init_method: impl Into<String>) -> Self {
        self.init_method = init_method.into();
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    pub fn init_method(&self) -> &str {
        &self.init_method
    }

    pub fn set_init_method(&mut self, init_method: impl Into<String>) {
        self.init_method = init_method.into();
        info!(init_method = %self.init_method, "initialization method selected");
    }

    pub fn redraw(&self) -> Plot {
        render(&self.state, self.size)
    }

    /// Replace the dataset with fresh random points and upload it.
    ///
    /// The new dataset is kept even if the upload fails; only the redraw is
    /// skipped.
    pub async fn generate(&mut self) -> Result<Plot, ActionError> {
        let mut guard = self.state.begin_request()?;
        let dataset = self.generator.next_dataset();
        debug!(points = ?dataset, "generated data points");
        guard.replace_dataset(dataset);

        if let Err(err) = self.backend.set_data(guard.dataset()).await {
            error!(error = %err, "set_data failed");
            return Err(ActionError::Upload(err));
        }
        drop(guard);

        info!(points = self.state.dataset().len(), "dataset uploaded");
        Ok(self.redraw())
    }

    /// Run one algorithm step on the current dataset.
    pub async fn step(&mut self) -> Result<Plot, ActionError> {
        if self.state.dataset().is_empty() {
            return Err(ActionError::NoData);
        }

        let mut guard = self.state.begin_request()?;
        debug!(init_method = %self.init_method, points = ?guard.dataset(), "running step");

        let reply = match self
            .backend
            .run_step(guard.dataset(), &self.init_method)
            .await
        {
            Ok(reply) => reply,
            Err(ServerError::Rejected(message)) => {
                error!(%message, "server rejected step");
                return Err(ActionError::Rejected(message));
            }
            Err(err) => {
                error!(error = %err, "run failed");
                return Err(ActionError::Step(err));
            }
        };

        info!(
            centroids = reply.centroids.len(),
            clusters = reply.clusters.len(),
            "step applied"
        );
        guard.apply_step(reply);
        drop(guard);

        Ok(self.redraw())
    }

    pub fn status(&self) -> String {
        let phase = match self.state.phase() {
            Phase::NoData => "no data",
            Phase::Unclustered => "data, not clustered",
            Phase::Clustered => "clustered",
        };
        format!(
            "{} | {} points, {} centroids | method: {}",
            phase,
            self.state.dataset().len(),
            self.state.centroids().len(),
            self.init_method
        )
    }

    pub async fn execute(&mut self, command: Command) -> Result<Outcome, ActionError> {
        match command {
            Command::Generate => self.generate().await.map(Outcome::Redrawn),
            Command::Step => self.step().await.map(Outcome::Redrawn),
            Command::Method(name) => {
                self.set_init_method(name);
                Ok(Outcome::Info(format!("method: {}", self.init_method)))
            }
            Command::Status => Ok(Outcome::Info(self.status())),
            Command::Help => Ok(Outcome::Info(HELP.to_string())),
            Command::Quit => Ok(Outcome::Quit),
        }
    }
}
