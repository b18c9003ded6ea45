//! Skills page derivations: category list, filtering, grouping and key skills.
//!
//! Run with: `cargo test --test skills_test`
mod common;

use common::skill;
use portfolio_site::config::SiteSettings;
use portfolio_site::models::Skill;
use portfolio_site::pages::Page;
use portfolio_site::pages::skills::{
    ALL, SkillsPage, SkillsView, categories, filter_by_category, group_by_category, key_skills,
};
use portfolio_site::views::SiteContext;

fn sample() -> Vec<Skill> {
    vec![
        skill("s1", "React", Some("Frontend"), true),
        skill("s2", "Rust", Some("Backend"), false),
        skill("s3", "CSS", Some("Frontend"), false),
        skill("s4", "Figma", None, false),
        skill("s5", "Postgres", Some("Backend"), true),
    ]
}

#[test]
fn test_categories_are_first_seen_with_all_in_front() {
    let skills = sample();
    assert_eq!(categories(&skills), vec![ALL, "Frontend", "Backend"]);
}

#[test]
fn test_categories_of_empty_set_is_only_all() {
    assert_eq!(categories(&[]), vec![ALL]);
}

#[test]
fn test_filter_all_keeps_everything_in_order() {
    let skills = sample();
    let ids: Vec<&str> = filter_by_category(&skills, ALL)
        .into_iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(ids, vec!["s1", "s2", "s3", "s4", "s5"]);
}

#[test]
fn test_filter_by_category_matches_exactly() {
    let skills = sample();
    let names: Vec<&str> = filter_by_category(&skills, "Backend")
        .into_iter()
        .filter_map(|s| s.name())
        .collect();
    assert_eq!(names, vec!["Rust", "Postgres"]);
    assert!(filter_by_category(&skills, "backend").is_empty());
}

#[test]
fn test_groups_partition_the_filtered_set() {
    let skills = sample();
    let filtered = filter_by_category(&skills, ALL);
    let groups = group_by_category(&filtered);

    let labels: Vec<&str> = groups.iter().map(|g| g.category).collect();
    assert_eq!(labels, vec!["Frontend", "Backend", "Other"]);

    let total: usize = groups.iter().map(|g| g.skills.len()).sum();
    assert_eq!(total, filtered.len());
    for skill in &filtered {
        let containing = groups
            .iter()
            .filter(|g| g.skills.iter().any(|s| s.id == skill.id))
            .count();
        assert_eq!(containing, 1, "{} should be in exactly one group", skill.id);
    }
}

#[test]
fn test_key_skills_ignore_the_selected_category() {
    let skills = sample();
    let all = SkillsView::derive(&skills, ALL);
    let frontend = SkillsView::derive(&skills, "Frontend");

    assert_eq!(all.key_skills, frontend.key_skills);
    let names: Vec<&str> = key_skills(&skills).into_iter().filter_map(|s| s.name()).collect();
    assert_eq!(names, vec!["React", "Postgres"]);
}

#[test]
fn test_unknown_category_selects_all() {
    let skills = sample();
    let view = SkillsView::derive(&skills, "Cooking");

    assert_eq!(view.selected, ALL);
    assert!(view.is_all());
    assert_eq!(view.filtered.len(), skills.len());
}

#[test]
fn test_selected_category_narrows_groups() {
    let skills = sample();
    let view = SkillsView::derive(&skills, "Frontend");

    assert!(!view.is_all());
    assert_eq!(view.groups.len(), 1);
    assert_eq!(view.groups[0].category, "Frontend");
    assert_eq!(view.groups[0].skills.len(), 2);
}

#[test]
fn test_render_hides_groups_outside_the_selection() {
    let page = SkillsPage {
        skills: sample(),
        selected: "Backend".to_string(),
    };
    let html = page.render(&SiteContext::new(SiteSettings::default(), "/skills"));

    assert!(html.contains(r#"data-category="Frontend" hidden>"#));
    assert!(html.contains(r#"data-category="Backend">"#));
    assert!(html.contains(r#"data-selected="Backend""#));
    assert!(html.contains(r#"href="/skills?category=Backend" class="filter is-selected""#));
}

#[test]
fn test_render_without_categories_has_no_filter_bar() {
    let page = SkillsPage {
        skills: vec![skill("s1", "Figma", None, false)],
        selected: ALL.to_string(),
    };
    let html = page.render(&SiteContext::new(SiteSettings::default(), "/skills"));

    assert!(!html.contains("data-skill-filter"));
    assert!(html.contains(r#"data-category="Other">"#));
}

#[test]
fn test_render_empty_skills_shows_message() {
    let page = SkillsPage::default();
    let html = page.render(&SiteContext::new(SiteSettings::default(), "/skills"));

    assert!(html.contains("No skills available yet."));
    assert!(!html.contains("Key Expertise"));
}

#[test]
fn test_literal_other_category_excludes_uncategorized_skills() {
    let skills = vec![
        skill("s1", "Literal", Some("Other"), false),
        skill("s2", "NoCat", None, false),
        skill("s3", "Rust", Some("Backend"), false),
    ];
    let view = SkillsView::derive(&skills, "Other");
    let ids: Vec<&str> = view.filtered.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["s1"]);
    assert_eq!(view.groups.len(), 1);
    assert_eq!(view.groups[0].skills.len(), 1);

    let page = SkillsPage {
        skills,
        selected: "Other".to_string(),
    };
    let html = page.render(&SiteContext::new(SiteSettings::default(), "/skills"));

    assert!(html.contains(r#"<div class="skill-group" data-category="Other">"#));
    assert!(html.contains(r#"<div class="skill-group" data-category="Backend" hidden>"#));
    assert!(html.contains(r#"<div class="skill-item" data-category="Other">"#));
    assert!(html.contains(r#"<div class="skill-item" data-category="" hidden>"#));
    assert_eq!(
        html.matches(r#"class="skill-item""#).count()
            - html.matches(r#"hidden><div class="reveal-trigger skill-card""#).count(),
        1
    );
}

#[test]
fn test_filter_links_encode_the_category() {
    let skills = vec![
        skill("s1", "Figma", Some("UI/UX & Design"), false),
        skill("s2", "Rust", Some("Backend"), false),
    ];
    let page = SkillsPage {
        skills,
        selected: ALL.to_string(),
    };
    let html = page.render(&SiteContext::new(SiteSettings::default(), "/skills"));

    assert!(html.contains(r#"href="/skills?category=UI%2FUX+%26+Design""#));
    assert!(html.contains(r#"data-filter="UI/UX &amp; Design""#));
    assert!(html.contains(r#"href="/skills" class="filter is-selected" data-filter="All""#));
}
