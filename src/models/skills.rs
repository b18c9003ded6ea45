use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::present;

/// Label used to group skills that carry no category.
pub const UNCATEGORIZED: &str = "Other";

/// SeaORM entity for the `skills` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skills")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", default)]
    pub created_date: Option<DateTimeUtc>,
    #[serde(rename = "_updatedDate", default)]
    pub updated_date: Option<DateTimeUtc>,
    pub skill_name: Option<String>,
    /// Free text, used as the grouping key on the skills page.
    pub category: Option<String>,
    pub proficiency_level: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub years_experience: Option<f64>,
    pub is_key_skill: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn name(&self) -> Option<&str> {
        present(&self.skill_name)
    }

    pub fn category(&self) -> Option<&str> {
        present(&self.category)
    }

    /// Category used for grouping; uncategorized skills land under "Other".
    pub fn category_label(&self) -> &str {
        self.category().unwrap_or(UNCATEGORIZED)
    }

    pub fn proficiency_level(&self) -> Option<&str> {
        present(&self.proficiency_level)
    }

    pub fn description(&self) -> Option<&str> {
        present(&self.description)
    }

    pub fn is_key_skill(&self) -> bool {
        self.is_key_skill.unwrap_or(false)
    }

    /// `"1 year"` / `"4 years"`. Absent or zero experience renders nothing.
    pub fn years_label(&self) -> Option<String> {
        let years = self.years_experience.filter(|y| *y > 0.0)?;
        let unit = if years == 1.0 { "year" } else { "years" };
        Some(format!("{years} {unit}"))
    }
}
