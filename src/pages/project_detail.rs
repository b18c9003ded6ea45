use super::Page;
use super::log_load_error;
use super::projects::technology_tags;
use crate::models::Project;
use crate::store::{self, RecordStore};
use crate::views::SiteContext;
use crate::views::html::{escape, external_link, image};
use crate::views::reveal::Reveal;

pub const NOT_FOUND_TITLE: &str = "Project Not Found";
pub const BACK_LINK: &str = "/projects";

/// Detail page for a single project. `project` is `None` when the lookup
/// failed or matched nothing.
#[derive(Debug, Clone)]
pub struct ProjectDetailPage {
    pub id: String,
    pub project: Option<Project>,
}

impl ProjectDetailPage {
    pub async fn load(store: &dyn RecordStore, id: &str) -> Self {
        let project = match store::fetch_by_id::<Project>(store, id).await {
            Ok(project) => project,
            Err(e) => {
                log_load_error("projects", &e);
                None
            }
        };
        Self {
            id: id.to_string(),
            project,
        }
    }
}

fn back_link(class: &str) -> String {
    format!(r#"<a href="{BACK_LINK}" class="{class}">&larr; BACK TO PROJECTS</a>"#)
}

fn not_found() -> String {
    format!(
        r#"<section class="container not-found">
<h1>{NOT_FOUND_TITLE}</h1>
{}
</section>"#,
        back_link("back-link accent")
    )
}

fn detail(project: &Project) -> String {
    let name = escape(project.name().unwrap_or_default()).into_owned();

    let mut header = format!(r#"<h1 class="detail-title">{name}</h1>"#);
    if let Some(short) = project.short_description() {
        header.push_str(&format!(r#"<p class="lead">{}</p>"#, escape(short)));
    }
    if let Some(month) = project.completion_month() {
        header.push_str(&format!(r#"<div class="meta"><span class="date">{month}</span></div>"#));
    }

    let mut actions = String::new();
    if let Some(url) = project.live_demo_url() {
        actions.push_str(&external_link(url, "button", "LIVE DEMO"));
    }
    if let Some(url) = project.github_repo_url() {
        actions.push_str(&external_link(url, "button button-outline", "VIEW CODE"));
    }
    header.push_str(&format!(r#"<div class="actions">{actions}</div>"#));

    let media = project
        .thumbnail()
        .map(|src| {
            format!(
                r#"<section class="container detail-media">{}</section>"#,
                image(src, project.name().unwrap_or("Project image"), "detail-image")
            )
        })
        .unwrap_or_default();

    let overview = project
        .full_description()
        .map(|text| format!(r#"<div class="overview-text">{}</div>"#, escape(text)))
        .unwrap_or_default();

    let sidebar = if project.technologies().is_empty() {
        String::new()
    } else {
        format!(
            r#"<aside class="tech-box"><h3>Technologies Used</h3><div class="tags">{}</div></aside>"#,
            technology_tags(project, "tag tag-solid")
        )
    };

    format!(
        r#"<section class="container back-row">{back}</section>
<section class="container detail-header">{header}</section>
{media}
<section class="detail-body">
<div class="container detail-grid">
<div class="overview"><h2>Project Overview</h2>{overview}</div>
<div>{sidebar}</div>
</div>
</section>
<section class="container detail-cta">{cta}</section>"#,
        back = back_link("back-link"),
        cta = Reveal::new().wrap(
            r#"<h2>Interested in More Projects?</h2><p>Explore my full portfolio to see more examples of my work and expertise.</p><a href="/projects" class="button">VIEW ALL PROJECTS</a>"#
        ),
    )
}

impl Page for ProjectDetailPage {
    fn render(&self, _ctx: &SiteContext) -> String {
        match &self.project {
            Some(project) => detail(project),
            None => not_found(),
        }
    }
}
