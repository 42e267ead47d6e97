use gpsdb_core::{
    gateways::geocode::GeoCodingError,
    repositories::Error as RepoError,
    usecases::Error as UsecaseError,
};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
};
use thiserror::Error;

use super::frontend::view;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] UsecaseError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        Self::App(err.into())
    }
}

impl Error {
    pub fn status(&self) -> Status {
        match self {
            Self::App(err) => match err {
                UsecaseError::Validation(_) | UsecaseError::InvalidPosition(_) => {
                    Status::BadRequest
                }
                UsecaseError::GeoCoding(GeoCodingError::NoResults) => Status::NotFound,
                UsecaseError::GeoCoding(_) => Status::BadGateway,
                UsecaseError::AddressExists(_) | UsecaseError::Repo(RepoError::AlreadyExists) => {
                    Status::Conflict
                }
                UsecaseError::Repo(_) => Status::InternalServerError,
            },
            Self::Other(_) => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> response::Result<'static> {
        let status = self.status();
        if status.class().is_server_error() {
            log::error!("{} {}: {self}", req.method(), req.uri());
        } else {
            log::warn!("{} {}: {self}", req.method(), req.uri());
        }
        (status, view::error(&self.to_string())).respond_to(req)
    }
}
