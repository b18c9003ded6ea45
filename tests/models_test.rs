//! Content record decoding and the presentation helpers on each record.
//!
//! Run with: `cargo test --test models_test`
mod common;

use common::{profile, project, skill};
use portfolio_site::models::projects::split_technologies;
use portfolio_site::models::{Profile, Project, Skill};

#[test]
fn test_technologies_are_trimmed_and_non_empty() {
    assert_eq!(
        split_technologies("React, Node.js ,  Postgres"),
        vec!["React", "Node.js", "Postgres"]
    );
    assert_eq!(split_technologies("Go,, ,Kafka,"), vec!["Go", "Kafka"]);
    assert!(split_technologies("").is_empty());
}

#[test]
fn test_project_without_technologies_has_no_tags() {
    let mut p = project("p1", "Atlas", "");
    assert!(p.technologies().is_empty());
    p.technologies_used = None;
    assert!(p.technologies().is_empty());
}

#[test]
fn test_completion_month_accepts_dates_and_timestamps() {
    let mut p = project("p1", "Atlas", "Rust");
    assert_eq!(p.completion_month().as_deref(), Some("March 2024"));

    p.completion_date = Some("2023-11-02T08:30:00Z".to_string());
    assert_eq!(p.completion_month().as_deref(), Some("November 2023"));

    p.completion_date = Some("sometime soon".to_string());
    assert_eq!(p.completion_month(), None);

    p.completion_date = None;
    assert_eq!(p.completion_month(), None);
}

#[test]
fn test_summary_falls_back_to_full_description() {
    let mut p = project("p1", "Atlas", "Rust");
    p.short_description = Some("   ".to_string());
    assert_eq!(p.summary(), Some("Atlas in several lines."));
    assert_eq!(p.detail_path(), "/projects/p1");
}

#[test]
fn test_profile_name_is_split_on_first_word() {
    let p = profile("Ada Quinn Moreau");
    assert_eq!(p.first_name(), Some("Ada"));
    assert_eq!(p.remaining_name().as_deref(), Some("Quinn Moreau"));

    let single = profile("Ada");
    assert_eq!(single.first_name(), Some("Ada"));
    assert_eq!(single.remaining_name(), None);

    let blank = profile("  ");
    assert_eq!(blank.first_name(), None);
    assert_eq!(blank.full_name(), None);
}

#[test]
fn test_years_label() {
    let mut s = skill("s1", "Rust", Some("Backend"), false);
    assert_eq!(s.years_label().as_deref(), Some("3 years"));

    s.years_experience = Some(1.0);
    assert_eq!(s.years_label().as_deref(), Some("1 year"));

    s.years_experience = Some(2.5);
    assert_eq!(s.years_label().as_deref(), Some("2.5 years"));

    s.years_experience = Some(0.0);
    assert_eq!(s.years_label(), None);

    s.years_experience = None;
    assert_eq!(s.years_label(), None);
}

#[test]
fn test_uncategorized_skill_label() {
    let s = skill("s1", "Figma", None, false);
    assert_eq!(s.category(), None);
    assert_eq!(s.category_label(), "Other");
    assert!(!Skill { is_key_skill: None, ..s }.is_key_skill());
}

#[test]
fn test_records_decode_from_backend_field_names() {
    let project: Project = serde_json::from_value(serde_json::json!({
        "_id": "proj-1",
        "_createdDate": "2024-01-05T10:00:00Z",
        "projectName": "Atlas",
        "technologiesUsed": "Rust, Postgres",
        "githubRepoUrl": "https://github.com/example/atlas"
    }))
    .expect("project should decode");
    assert_eq!(project.id, "proj-1");
    assert!(project.created_date.is_some());
    assert_eq!(project.name(), Some("Atlas"));
    assert_eq!(project.technologies(), vec!["Rust", "Postgres"]);
    assert_eq!(project.live_demo_url(), None);

    let profile: Profile = serde_json::from_value(serde_json::json!({
        "_id": "me",
        "fullName": "Ada Moreau",
        "cvFileUrl": ""
    }))
    .expect("profile should decode");
    assert_eq!(profile.cv_file_url(), None);

    let skill: Skill = serde_json::from_value(serde_json::json!({
        "_id": "sk",
        "skillName": "Rust",
        "yearsExperience": 6,
        "isKeySkill": true
    }))
    .expect("skill should decode");
    assert!(skill.is_key_skill());
    assert_eq!(skill.years_label().as_deref(), Some("6 years"));
}
