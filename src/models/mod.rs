pub mod profile;
pub mod projects;
pub mod skills;

use serde::de::DeserializeOwned;

use crate::store::Collection;

/// A record type stored in one of the content collections.
pub trait Record: DeserializeOwned + Send + 'static {
    const COLLECTION: Collection;
}

impl Record for profile::Model {
    const COLLECTION: Collection = Collection::ProfileInformation;
}

impl Record for projects::Model {
    const COLLECTION: Collection = Collection::Projects;
}

impl Record for skills::Model {
    const COLLECTION: Collection = Collection::Skills;
}

pub type Profile = profile::Model;
pub type Project = projects::Model;
pub type Skill = skills::Model;

/// Treat blank strings the same as an absent field.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
