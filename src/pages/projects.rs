use std::fmt::Write;

use super::{Page, all_or_empty};
use crate::models::Project;
use crate::store::RecordStore;
use crate::views::SiteContext;
use crate::views::html::{escape, image};
use crate::views::reveal::Reveal;

pub const EMPTY_MESSAGE: &str = "No projects available yet.";

#[derive(Debug, Clone, Default)]
pub struct ProjectsPage {
    pub projects: Vec<Project>,
}

impl ProjectsPage {
    pub async fn load(store: &dyn RecordStore) -> Self {
        Self {
            projects: all_or_empty::<Project>(store).await,
        }
    }
}

/// Technology tags as `<span>`s, or nothing when the project lists none.
pub fn technology_tags(project: &Project, class: &str) -> String {
    let mut tags = String::new();
    for tech in project.technologies() {
        let _ = write!(tags, r#"<span class="{class}">{}</span>"#, escape(tech));
    }
    tags
}

fn project_card(project: &Project, index: usize) -> String {
    let mut card = String::new();

    if let Some(src) = project.thumbnail() {
        let alt = project.name().unwrap_or("Project thumbnail");
        let _ = write!(
            card,
            r#"<div class="card-media">{}</div>"#,
            image(src, alt, "card-image")
        );
    }
    let _ = write!(
        card,
        "<h2>{}</h2>",
        escape(project.name().unwrap_or_default())
    );
    if let Some(summary) = project.short_description() {
        let _ = write!(card, r#"<p class="summary">{}</p>"#, escape(summary));
    }
    let tags = technology_tags(project, "tag");
    if !tags.is_empty() {
        let _ = write!(card, r#"<div class="tags">{tags}</div>"#);
    }
    if let Some(month) = project.completion_month() {
        let _ = write!(card, r#"<p class="date">{month}</p>"#);
    }
    card.push_str(r#"<span class="card-link">VIEW PROJECT DETAILS</span>"#);

    Reveal::new().delay_ms(index as u32 * 100).class("project-card").wrap(&format!(
        r#"<a href="{}">{card}</a>"#,
        escape(&project.detail_path())
    ))
}

impl Page for ProjectsPage {
    fn render(&self, _ctx: &SiteContext) -> String {
        let grid = if self.projects.is_empty() {
            format!(r#"<p class="empty">{EMPTY_MESSAGE}</p>"#)
        } else {
            let cards: String = self
                .projects
                .iter()
                .enumerate()
                .map(|(index, project)| project_card(project, index))
                .collect();
            format!(r#"<div class="card-grid">{cards}</div>"#)
        };

        format!(
            r#"<section class="page-hero container">
<h1>MY PROJECTS</h1>
<div class="rule"></div>
<p>A collection of my work showcasing diverse skills, creative solutions, and technical expertise across various domains.</p>
</section>
<section class="container projects-grid">{grid}</section>"#
        )
    }
}
