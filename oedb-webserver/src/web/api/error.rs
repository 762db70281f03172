use super::json_error_response;
use anyhow::anyhow;
use oedb_application::error::{AppError, BError};
pub use oedb_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Self::OtherWithStatus(anyhow!(err), Status::BadRequest)
    }
}

impl From<oedb_entities::hours::WeeklyHoursParseError> for Error {
    fn from(err: oedb_entities::hours::WeeklyHoursParseError) -> Self {
        Self::OtherWithStatus(anyhow!(err), Status::BadRequest)
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}

fn parameter_error_status(err: &ParameterError) -> Option<Status> {
    let status = match err {
        ParameterError::Unauthorized => Status::Unauthorized,
        ParameterError::Forbidden => Status::Forbidden,
        ParameterError::ListingNotApproved
        | ParameterError::AlreadyModerated
        | ParameterError::DuplicateReview
        | ParameterError::UserExists
        | ParameterError::MergeConflict => Status::Conflict,
        ParameterError::Repo(RepoError::NotFound) => Status::NotFound,
        // Storage failures are no fault of the client.
        ParameterError::Media(_) | ParameterError::Repo(_) => return None,
        _ => Status::BadRequest,
    };
    Some(status)
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                if let AppError::Business(err) = &err {
                    match err {
                        BError::Parameter(ref err) => {
                            if let Some(status) = parameter_error_status(err) {
                                return json_error_response(req, err, status);
                            }
                        }
                        BError::Repo(RepoError::NotFound) => {
                            return json_error_response(req, err, Status::NotFound);
                        }
                        _ => {}
                    }
                }
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
        }
    }
}
