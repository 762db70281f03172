use std::io;

use thiserror::Error;

use oedb_core::{gateways::media::MediaError, repositories, usecases};

pub type ParameterError = usecases::Error;
pub type RepoError = repositories::Error;

/// Business errors are those returned from the business layer,
/// everything else is an infrastructure failure.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(BError::Parameter(err))
    }
}

impl From<MediaError> for AppError {
    fn from(err: MediaError) -> AppError {
        AppError::Business(BError::Parameter(ParameterError::Media(err)))
    }
}

#[derive(Debug, Error)]
pub enum BError {
    #[error("The requested operation is invalid: {0}")]
    Parameter(#[from] ParameterError),
    #[error("The requested object could not be processed: {0}")]
    Repo(#[from] RepoError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<String> for BError {
    fn from(err: String) -> BError {
        BError::Internal(err)
    }
}
