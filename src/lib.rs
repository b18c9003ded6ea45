pub mod config;
pub mod controller;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pages;
pub mod router;
pub mod store;
pub mod views;

pub use config::SiteConfig;
pub use store::RecordStore;
