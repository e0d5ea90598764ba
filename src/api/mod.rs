//! Items API
//!
//! The seam between the controller and the REST server.

mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Item, ItemId, NewItem};

pub use http::HttpItemApi;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never produced a response (offline, refused, aborted)
    #[error("network failure: {0}")]
    Network(String),
    #[error("server rejected request with status {status}")]
    Rejected { status: u16 },
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// The server answered, but not with a 2xx status
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Remote item collection
///
/// Futures are `?Send`: in the browser they hold JS handles.
#[async_trait(?Send)]
pub trait ItemApi {
    /// `GET /items`, in server order
    async fn list_items(&self) -> ApiResult<Vec<Item>>;

    /// `POST /items`; the response body is ignored
    async fn create_item(&self, item: &NewItem) -> ApiResult<()>;

    /// `DELETE /items/{id}`
    async fn delete_item(&self, id: ItemId) -> ApiResult<()>;
}
