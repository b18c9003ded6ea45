use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::store::Collection;
use crate::views;

/// Failures talking to the record store.
///
/// Pages never surface these to visitors: a failed fetch renders the same as
/// an empty one.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request to record store failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("record store answered {status} for {collection}")]
    Status {
        collection: Collection,
        status: reqwest::StatusCode,
    },

    #[error("malformed {collection} record: {source}")]
    Decode {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid record store URL {url}: {reason}")]
    BaseUrl { url: String, reason: String },

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("failed to read fixture file: {0}")]
    Fixture(#[from] std::io::Error),

    #[error("record store unavailable for {0}")]
    Unavailable(Collection),
}

/// Errors that replace the whole page with the generic error view.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("page failed to render: {0}")]
    Render(String),
}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!(error = %self, "rendering error page");
        HttpResponse::build(self.status_code())
            .content_type("text/html; charset=utf-8")
            .body(views::layout::error_document())
    }
}
