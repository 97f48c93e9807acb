use cnsir_config::ConfigError;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors returned by [`crate::Api`].
///
/// Delegate failures are carried as-is in [`Error::Delegate`]; the façade
/// never translates them.
#[derive(Debug, Error)]
pub enum Error<E> {
    #[error(transparent)]
    Delegate(E),
    #[error("failed to build location key: {0}")]
    LocationKey(#[source] PolarsError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl<E> Error<E> {
    pub fn delegate(&self) -> Option<&E> {
        match self {
            Error::Delegate(err) => Some(err),
            _ => None,
        }
    }

    pub fn into_delegate(self) -> Option<E> {
        match self {
            Error::Delegate(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T, E> = std::result::Result<T, Error<E>>;
