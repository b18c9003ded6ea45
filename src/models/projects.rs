use chrono::{DateTime, NaiveDate};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::present;

/// SeaORM entity for the `projects` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", default)]
    pub created_date: Option<DateTimeUtc>,
    #[serde(rename = "_updatedDate", default)]
    pub updated_date: Option<DateTimeUtc>,
    pub project_name: Option<String>,
    pub project_thumbnail: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub short_description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub full_description: Option<String>,
    /// Comma-separated technology tags, kept as free text for compatibility
    /// with the content backend schema.
    pub technologies_used: Option<String>,
    pub live_demo_url: Option<String>,
    pub github_repo_url: Option<String>,
    /// Either a plain `YYYY-MM-DD` date or an RFC 3339 timestamp.
    pub completion_date: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Technology tags in stored order, trimmed, with empty entries dropped.
    pub fn technologies(&self) -> Vec<&str> {
        split_technologies(self.technologies_used.as_deref().unwrap_or_default())
    }

    /// Completion date formatted as e.g. `March 2024`.
    pub fn completion_month(&self) -> Option<String> {
        let raw = present(&self.completion_date)?;
        parse_completion_date(raw).map(|date| date.format("%B %Y").to_string())
    }

    pub fn name(&self) -> Option<&str> {
        present(&self.project_name)
    }

    pub fn thumbnail(&self) -> Option<&str> {
        present(&self.project_thumbnail)
    }

    pub fn short_description(&self) -> Option<&str> {
        present(&self.short_description)
    }

    pub fn full_description(&self) -> Option<&str> {
        present(&self.full_description)
    }

    /// Short description, falling back to the full one.
    pub fn summary(&self) -> Option<&str> {
        self.short_description().or_else(|| self.full_description())
    }

    pub fn live_demo_url(&self) -> Option<&str> {
        present(&self.live_demo_url)
    }

    pub fn github_repo_url(&self) -> Option<&str> {
        present(&self.github_repo_url)
    }

    /// Path of the detail page for this project.
    pub fn detail_path(&self) -> String {
        format!("/projects/{}", self.id)
    }
}

pub fn split_technologies(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|tech| !tech.is_empty())
        .collect()
}

fn parse_completion_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
