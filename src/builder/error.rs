//! Build errors for configuration construction.

use thiserror::Error;

/// Errors that can occur when building a configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states declared. Add at least one state or transition")]
    NoStates,
}
