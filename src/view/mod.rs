pub mod state;


pub use state::{Phase, RequestGuard, ViewState, ViewStateError};
