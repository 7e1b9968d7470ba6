pub mod generator;
pub mod types;


pub use generator::{DEFAULT_POINT_COUNT, DatasetGenerator, generate};
pub use types::{Dataset, Point};
