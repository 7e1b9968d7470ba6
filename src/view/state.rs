// state.rs - the one owner of dataset, centroids and assignments
use crate::dataset::{Dataset, Point};
use crate::server::StepReply;
use std::ops::{Deref, DerefMut};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NoData,
    Unclustered,
    Clustered,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewStateError {
    #[error("A request is already in progress")]
    RequestInFlight,
}

/// Everything the renderer draws, plus the single-flight flag.
///
/// Centroids and assignments only change together: `replace_dataset` clears
/// both, `apply_step` replaces both.
#[derive(Debug, Default)]
pub struct ViewState {
    dataset: Dataset,
    centroids: Vec<Point>,
    clusters: Vec<i64>,
    in_flight: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dataset(&self) -> &[Point] {
        &self.dataset
    }

    pub fn centroids(&self) -> &[Point] {
        &self.centroids
    }

    pub fn clusters(&self) -> &[i64] {
        &self.clusters
    }

    pub fn phase(&self) -> Phase {
        if self.dataset.is_empty() {
            Phase::NoData
        } else if self.centroids.is_empty() && self.clusters.is_empty() {
            Phase::Unclustered
        } else {
            Phase::Clustered
        }
    }

    /// Install a fresh dataset and drop any clustering of the previous one.
    pub fn replace_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.centroids.clear();
        self.clusters.clear();
    }

    pub fn apply_step(&mut self, reply: StepReply) {
        self.centroids = reply.centroids;
        self.clusters = reply.clusters;
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Mark a request as started. The flag drops back when the returned
    /// guard does, including when the request future is abandoned.
    ///
    /// `&mut self` already serializes requests within one session; the flag
    /// matters for callers that share the state across tasks (behind a lock)
    /// and for a request future dropped before completion.
    pub fn begin_request(&mut self) -> Result<RequestGuard<'_>, ViewStateError> {
        if self.in_flight {
            return Err(ViewStateError::RequestInFlight);
        }
        self.in_flight = true;
        Ok(RequestGuard { state: self })
    }
}

/// Exclusive access to the view for the lifetime of one server request.
pub struct RequestGuard<'a> {
    state: &'a mut ViewState,
}

impl Deref for RequestGuard<'_> {
    type Target = ViewState;

    fn deref(&self) -> &ViewState {
        self.state
    }
}

impl DerefMut for RequestGuard<'_> {
    fn deref_mut(&mut self) -> &mut ViewState {
        self.state
    }
}

impl Drop for RequestGuard<'_> {
    fn drop(&mut self) {
        self.state.in_flight = false;
    }
}
