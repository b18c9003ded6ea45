//! Page controllers.
//!
//! Each page loads its records once per mount, then renders its main content
//! from the loaded data. Fetch failures are logged and rendered exactly like
//! an empty result.

pub mod about;
pub mod home;
pub mod project_detail;
pub mod projects;
pub mod skills;

use tracing::error;

use crate::error::StoreError;
use crate::models::Record;
use crate::store::{self, RecordStore};
use crate::views::SiteContext;

pub const LOADING_MESSAGE: &str = "Loading...";

/// Loaded data of a page, able to render the page's main content.
pub trait Page: Send + 'static {
    fn render(&self, ctx: &SiteContext) -> String;
}

/// All records of `T`'s collection; failures degrade to an empty list.
pub async fn all_or_empty<T: Record>(store: &dyn RecordStore) -> Vec<T> {
    match store::fetch_all::<T>(store).await {
        Ok(records) => records,
        Err(e) => {
            log_load_error(T::COLLECTION.as_str(), &e);
            Vec::new()
        }
    }
}

/// First record of `T`'s collection, if any could be loaded.
pub async fn first_or_none<T: Record>(store: &dyn RecordStore) -> Option<T> {
    all_or_empty::<T>(store).await.into_iter().next()
}

pub(crate) fn log_load_error(collection: &str, e: &StoreError) {
    error!(collection, error = %e, "Error loading records");
}
