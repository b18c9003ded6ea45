use reqwest::Url;
use std::fmt::Write;

use super::{Page, all_or_empty};
use crate::models::Skill;
use crate::store::RecordStore;
use crate::views::SiteContext;
use crate::views::html::escape;
use crate::views::reveal::Reveal;

/// Pseudo-category selecting every skill.
pub const ALL: &str = "All";
pub const EMPTY_MESSAGE: &str = "No skills available yet.";

/// Skills of one category, in load order.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup<'a> {
    pub category: &'a str,
    pub skills: Vec<&'a Skill>,
}

/// Distinct categories in first-seen order, with `All` in front.
pub fn categories(skills: &[Skill]) -> Vec<&str> {
    let mut out = vec![ALL];
    for category in skills.iter().filter_map(Skill::category) {
        if !out[1..].contains(&category) {
            out.push(category);
        }
    }
    out
}

/// Skills in `selected`, or every skill when `selected` is `All`.
pub fn filter_by_category<'a>(skills: &'a [Skill], selected: &str) -> Vec<&'a Skill> {
    if selected == ALL {
        return skills.iter().collect();
    }
    skills
        .iter()
        .filter(|skill| skill.category() == Some(selected))
        .collect()
}

/// Group skills by category label, keeping first-seen group order. Every
/// skill lands in exactly one group.
pub fn group_by_category<'a>(skills: &[&'a Skill]) -> Vec<SkillGroup<'a>> {
    let mut groups: Vec<SkillGroup<'a>> = Vec::new();
    for &skill in skills {
        let label = skill.category_label();
        match groups.iter_mut().find(|g| g.category == label) {
            Some(group) => group.skills.push(skill),
            None => groups.push(SkillGroup {
                category: label,
                skills: vec![skill],
            }),
        }
    }
    groups
}

/// Skills flagged as key skills. Does not depend on the category filter.
pub fn key_skills(skills: &[Skill]) -> Vec<&Skill> {
    skills.iter().filter(|skill| skill.is_key_skill()).collect()
}

/// Everything the skills page derives from the loaded skill set.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillsView<'a> {
    pub selected: &'a str,
    pub categories: Vec<&'a str>,
    pub filtered: Vec<&'a Skill>,
    pub groups: Vec<SkillGroup<'a>>,
    pub key_skills: Vec<&'a Skill>,
}

impl<'a> SkillsView<'a> {
    /// Derive the view for `selected`. A category not present in `skills`
    /// selects `All`.
    pub fn derive(skills: &'a [Skill], selected: &'a str) -> Self {
        let categories = categories(skills);
        let selected = if categories.contains(&selected) {
            selected
        } else {
            ALL
        };
        let filtered = filter_by_category(skills, selected);
        let groups = group_by_category(&filtered);

        Self {
            selected,
            categories,
            filtered,
            groups,
            key_skills: key_skills(skills),
        }
    }

    pub fn is_all(&self) -> bool {
        self.selected == ALL
    }
}

#[derive(Debug, Clone, Default)]
pub struct SkillsPage {
    pub skills: Vec<Skill>,
    /// Category requested via `?category=`.
    pub selected: String,
}

impl SkillsPage {
    pub async fn load(store: &dyn RecordStore, selected: Option<&str>) -> Self {
        Self {
            skills: all_or_empty::<Skill>(store).await,
            selected: selected.unwrap_or(ALL).to_string(),
        }
    }

    pub fn view(&self) -> SkillsView<'_> {
        SkillsView::derive(&self.skills, &self.selected)
    }
}

fn key_skills_section(view: &SkillsView<'_>) -> String {
    if view.key_skills.is_empty() {
        return String::new();
    }

    let mut cards = String::new();
    for skill in &view.key_skills {
        let _ = write!(
            cards,
            r#"<div class="key-skill"><h3>{}</h3>{}</div>"#,
            escape(skill.name().unwrap_or_default()),
            skill
                .years_label()
                .map(|years| format!("<p>{years}</p>"))
                .unwrap_or_default()
        );
    }

    format!(
        r#"<section class="band key-skills">
<div class="container">
<h2>&#9733; Key Expertise</h2>
<div class="key-skill-grid">{cards}</div>
</div>
</section>"#
    )
}

fn filter_bar(view: &SkillsView<'_>) -> String {
    if view.categories.len() <= 1 {
        return String::new();
    }

    let mut buttons = String::new();
    for category in &view.categories {
        let class = if *category == view.selected {
            "filter is-selected"
        } else {
            "filter"
        };
        let href = filter_href(category);
        let _ = write!(
            buttons,
            r#"<a href="{}" class="{class}" data-filter="{}">{}</a>"#,
            escape(&href),
            escape(category),
            escape(category)
        );
    }
    format!(r#"<section class="container filter-bar" data-skill-filter>{buttons}</section>"#)
}

fn skill_card(skill: &Skill, index: usize) -> String {
    let mut card = format!(
        r#"<div class="skill-head"><h3>{}</h3>{}</div>"#,
        escape(skill.name().unwrap_or_default()),
        if skill.is_key_skill() {
            r#"<span class="star" title="Key skill">&#9733;</span>"#
        } else {
            ""
        }
    );
    if let Some(level) = skill.proficiency_level() {
        let _ = write!(card, r#"<span class="level">{}</span>"#, escape(level));
    }
    if let Some(description) = skill.description() {
        let _ = write!(card, r#"<p class="description">{}</p>"#, escape(description));
    }
    if let Some(years) = skill.years_label() {
        let _ = write!(card, r#"<p class="years">{years} of experience</p>"#);
    }
    Reveal::new()
        .delay_ms(index as u32 * 50)
        .class("skill-card")
        .wrap(&card)
}

/// Every category group of the full set. Groups and cards outside the
/// selected view are marked `hidden`; the filter script toggles them without
/// refetching. Cards carry their raw category, so a literal "Other" category
/// and uncategorized skills sharing the "Other" group stay apart.
fn grouped_skills(skills: &[Skill], view: &SkillsView<'_>) -> String {
    let every = filter_by_category(skills, ALL);
    let all_groups = group_by_category(&every);
    if all_groups.is_empty() {
        return format!(r#"<p class="empty">{EMPTY_MESSAGE}</p>"#);
    }

    let mut out = String::new();
    for group in &all_groups {
        let visible = view.groups.iter().any(|g| g.category == group.category);
        let hidden = if visible { "" } else { " hidden" };
        let heading_hidden = if view.is_all() { "" } else { " hidden" };

        let mut cards = String::new();
        for (index, skill) in group.skills.iter().enumerate() {
            let shown = view.filtered.iter().any(|s| std::ptr::eq(*s, *skill));
            let _ = write!(
                cards,
                r#"<div class="skill-item" data-category="{}"{}>{}</div>"#,
                escape(skill.category().unwrap_or_default()),
                if shown { "" } else { " hidden" },
                skill_card(skill, index)
            );
        }

        let _ = write!(
            out,
            r#"<div class="skill-group" data-category="{category}"{hidden}>
<div class="group-heading"{heading_hidden}><h2>{category}</h2><div class="divider"></div></div>
<div class="skill-grid">{cards}</div>
</div>"#,
            category = escape(group.category),
        );
    }
    out
}

/// Link selecting `category` on the skills page.
fn filter_href(category: &str) -> String {
    if category == ALL {
        return "/skills".to_string();
    }
    match Url::parse_with_params("http://localhost/skills", [("category", category)]) {
        Ok(url) => format!("{}?{}", url.path(), url.query().unwrap_or_default()),
        Err(_) => "/skills".to_string(),
    }
}

impl Page for SkillsPage {
    fn render(&self, _ctx: &SiteContext) -> String {
        let view = self.view();
        format!(
            r#"<section class="page-hero container">
<h1>MY SKILLS</h1>
<div class="rule"></div>
<p>A comprehensive overview of my technical expertise, tools, and competencies developed through years of hands-on experience.</p>
</section>
{key}
{filters}
<section class="container skill-groups" data-selected="{selected}">{groups}</section>
<section class="band dark skills-cta">
<div class="container">{cta}</div>
</section>"#,
            key = key_skills_section(&view),
            filters = filter_bar(&view),
            selected = escape(view.selected),
            groups = grouped_skills(&self.skills, &view),
            cta = Reveal::new().wrap(
                r#"<h2>See These Skills in Action</h2><p>Explore my portfolio to see how I've applied these skills to real-world projects and challenges.</p><a href="/projects" class="button button-accent">VIEW MY PROJECTS</a>"#
            ),
        )
    }
}
