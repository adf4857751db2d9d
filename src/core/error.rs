//! Errors returned by the core [`Playground`](crate::core::Playground).
//!
//! Error | Context | Description
//! ---|---|---
//! `MissingUrl` | Validation | The proxy request has no target URL.
//! `PlaygroundUnderMaintenance` | Access gate | The global playground toggle is off.
//! `PlaygroundDisabledByOwner` | Access gate | The owner turned the playground off for the API.
//! `ApiLookupFailed` | Access gate | The API could not be looked up and the policy is `deny`.
//! `ApiNotFound` | Administration | There is no listed API with the given id.
//! `ApiAlreadyExists` | Administration | The id of a new API is already taken.
//! `Database` | Administration | The database operation failed.
//!
//! A target URL, method or header that cannot be sent is not an error. The
//! request is still gated and it ends as a `Bad Gateway` outcome.
//!
//! The message of every error is safe to be shown to the client. The
//! `location` fields are only used for debugging.
use std::panic::Location;

use super::api::ApiId;
use super::databases;

pub const MAINTENANCE_MESSAGE: &str = "The API playground is temporarily disabled for maintenance. Please try again later.";
pub const OWNER_DISABLED_MESSAGE: &str = "The owner of this API has disabled the playground for it.";

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    // Validation errors
    #[error("The target url is required")]
    MissingUrl { location: &'static Location<'static> },

    // Access gate refusals
    #[error("{}", MAINTENANCE_MESSAGE)]
    PlaygroundUnderMaintenance { location: &'static Location<'static> },

    #[error("{}", OWNER_DISABLED_MESSAGE)]
    PlaygroundDisabledByOwner {
        api_id: ApiId,
        location: &'static Location<'static>,
    },

    #[error("The api {api_id} could not be looked up, try again later")]
    ApiLookupFailed {
        api_id: ApiId,
        source: databases::error::Error,
        location: &'static Location<'static>,
    },

    // Administration errors
    #[error("There is no listed api with id {api_id}")]
    ApiNotFound {
        api_id: ApiId,
        location: &'static Location<'static>,
    },

    #[error("There is already a listed api with id {api_id}")]
    ApiAlreadyExists {
        api_id: ApiId,
        location: &'static Location<'static>,
    },

    #[error("The database operation failed: {source}")]
    Database {
        source: databases::error::Error,
        location: &'static Location<'static>,
    },
}

impl Error {
    /// The request was refused by the access gate.
    #[must_use]
    pub fn is_refusal(&self) -> bool {
        matches!(
            self,
            Error::PlaygroundUnderMaintenance { .. } | Error::PlaygroundDisabledByOwner { .. } | Error::ApiLookupFailed { .. }
        )
    }

    /// The proxy request was malformed.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::MissingUrl { .. })
    }
}

impl From<databases::error::Error> for Error {
    #[track_caller]
    fn from(source: databases::error::Error) -> Self {
        Self::Database {
            source,
            location: Location::caller(),
        }
    }
}
