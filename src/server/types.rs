// the clustering server contract
use crate::dataset::Point;
use serde::{Deserialize, Serialize};

/// Body of `POST /run`. `/set_data` takes the bare point array instead.
#[derive(Debug, Serialize)]
pub struct RunRequest<'a> {
    pub data: &'a [Point],
    pub init_method: &'a str,
}

/// Body of a 2xx `/run` reply. The server either fills `centroids` and
/// `clusters` or reports a soft failure through `error`.
#[derive(Debug, Deserialize)]
pub struct RunResponse {
    pub centroids: Option<Vec<Point>>,
    pub clusters: Option<Vec<i64>>,
    pub error: Option<String>,
}

/// Result of one algorithm step, ready to be committed to the view.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReply {
    pub centroids: Vec<Point>,
    pub clusters: Vec<i64>,
}
