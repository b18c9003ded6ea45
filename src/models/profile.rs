use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::present;

/// SeaORM entity for the `profile_information` table.
///
/// Field names on the wire follow the content backend (`_id`, `fullName`, ...).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profile_information")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", default)]
    pub created_date: Option<DateTimeUtc>,
    #[serde(rename = "_updatedDate", default)]
    pub updated_date: Option<DateTimeUtc>,
    pub full_name: Option<String>,
    pub professional_title: Option<String>,
    pub profile_picture: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub introductory_text: Option<String>,
    pub cv_file_url: Option<String>,
    pub tagline: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// First word of the full name, used as the top line of the hero headline.
    pub fn first_name(&self) -> Option<&str> {
        present(&self.full_name).and_then(|name| name.split_whitespace().next())
    }

    /// Everything after the first word of the full name.
    pub fn remaining_name(&self) -> Option<String> {
        let rest = present(&self.full_name)?
            .split_whitespace()
            .skip(1)
            .collect::<Vec<_>>()
            .join(" ");
        (!rest.is_empty()).then_some(rest)
    }

    pub fn full_name(&self) -> Option<&str> {
        present(&self.full_name)
    }

    pub fn professional_title(&self) -> Option<&str> {
        present(&self.professional_title)
    }

    pub fn profile_picture(&self) -> Option<&str> {
        present(&self.profile_picture)
    }

    pub fn introductory_text(&self) -> Option<&str> {
        present(&self.introductory_text)
    }

    pub fn cv_file_url(&self) -> Option<&str> {
        present(&self.cv_file_url)
    }

    pub fn tagline(&self) -> Option<&str> {
        present(&self.tagline)
    }
}
