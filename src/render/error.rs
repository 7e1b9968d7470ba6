use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to draw plot: {0}")]
    Draw(#[from] DrawingAreaErrorKind<std::io::Error>),

    #[error("Failed to write plot: {0}")]
    Io(#[from] std::io::Error),
}
