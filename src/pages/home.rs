use futures_util::future::join3;
use std::fmt::Write;

use super::{Page, all_or_empty, first_or_none};
use crate::models::{Profile, Project, Skill};
use crate::store::RecordStore;
use crate::views::SiteContext;
use crate::views::html::{escape, image};
use crate::views::reveal::Reveal;

pub const LOADING_MESSAGE: &str = "LOADING EXPERIENCE";
pub const FEATURED_PROJECTS: usize = 3;
pub const FEATURED_TECHNOLOGIES: usize = 3;
pub const HOME_SKILLS: usize = 8;

pub const DEFAULT_FIRST_NAME: &str = "CREATIVE";
pub const DEFAULT_REMAINING_NAME: &str = "PORTFOLIO";
pub const DEFAULT_TAGLINE: &str = "Designing the future of digital experiences.";
pub const DEFAULT_STATUS: &str = "Available for new opportunities and collaborations.";
pub const DEFAULT_INTRO: &str = "I craft digital experiences that merge form and function. My approach is rooted in a deep understanding of user behavior and a passion for clean, efficient code.";

const MARQUEE_WORDS: [(&str, bool); 4] = [
    ("CREATIVE", false),
    ("DEVELOPER", true),
    ("DESIGNER", false),
    ("STRATEGIST", true),
];

#[derive(Debug, Clone, Default)]
pub struct HomePage {
    pub profile: Option<Profile>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
}

impl HomePage {
    /// Fetch profile, projects and skills concurrently. Completes only once
    /// all three have settled.
    pub async fn load(store: &dyn RecordStore) -> Self {
        let (profile, projects, skills) = join3(
            first_or_none::<Profile>(store),
            all_or_empty::<Project>(store),
            all_or_empty::<Skill>(store),
        )
        .await;

        Self {
            profile,
            projects,
            skills: skills.into_iter().take(HOME_SKILLS).collect(),
        }
    }

    pub fn featured_projects(&self) -> &[Project] {
        &self.projects[..self.projects.len().min(FEATURED_PROJECTS)]
    }

    fn hero(&self) -> String {
        let profile = self.profile.as_ref();
        let first = profile
            .and_then(Profile::first_name)
            .unwrap_or(DEFAULT_FIRST_NAME)
            .to_string();
        let rest = profile
            .and_then(Profile::remaining_name)
            .unwrap_or_else(|| DEFAULT_REMAINING_NAME.to_string());
        let tagline = profile.and_then(Profile::tagline).unwrap_or(DEFAULT_TAGLINE);

        let cv = profile
            .and_then(Profile::cv_file_url)
            .map(|url| {
                format!(
                    r#"<a href="{}" download class="button">DOWNLOAD CV</a>"#,
                    escape(url)
                )
            })
            .unwrap_or_default();

        let picture = match profile.and_then(Profile::profile_picture) {
            Some(src) => {
                let alt = profile.and_then(Profile::full_name).unwrap_or("Profile");
                format!(
                    r#"<div class="parallax" data-parallax>{}</div>"#,
                    image(src, alt, "hero-image")
                )
            }
            None => r#"<div class="image-placeholder"><span>IMAGE</span></div>"#.to_string(),
        };
        let status = profile
            .and_then(Profile::professional_title)
            .unwrap_or(DEFAULT_STATUS);

        format!(
            r#"<section class="hero">
<div class="container">
{headline}
{cta}
</div>
<div class="hero-media clip-diagonal">
{picture}
<div class="status-badge"><p class="badge-label">Current Status</p><p class="badge-text">{status}</p></div>
</div>
</section>"#,
            headline = Reveal::new().class("hero-headline").wrap(&format!(
                r#"<h1 class="display">{}<br><span class="display-secondary">{}</span></h1>"#,
                escape(&first),
                escape(&rest)
            )),
            cta = Reveal::new().delay("0.2s").class("hero-cta").wrap(&format!(
                r#"<h2 class="tagline">{}</h2><div class="rule"></div><div class="actions">{cv}<a href="/about" class="button button-outline">ABOUT ME</a></div>"#,
                escape(tagline)
            )),
            status = escape(status),
        )
    }

    fn marquee(&self) -> String {
        let mut words = String::new();
        for _ in 0..4 {
            for (word, outlined) in MARQUEE_WORDS {
                let class = if outlined { "marquee-word text-stroke" } else { "marquee-word" };
                let _ = write!(words, r#"<span class="{class}">{word}</span>"#);
            }
        }
        format!(
            r#"<section class="marquee" aria-hidden="true"><div class="marquee-track">{words}</div></section>"#
        )
    }

    fn intro(&self) -> String {
        let intro = self
            .profile
            .as_ref()
            .and_then(Profile::introductory_text)
            .unwrap_or(DEFAULT_INTRO);

        format!(
            r#"<section class="vision container">
{title}
<div class="vision-body">
{intro}
<div class="highlights">
{architecture}
{design}
</div>
</div>
</section>"#,
            title = Reveal::new().class("vision-title").wrap(
                r#"<h2>THE<br><span class="accent">VISION</span></h2><p>A glimpse into my professional journey and the philosophy that drives my work.</p>"#
            ),
            intro = Reveal::new()
                .delay("0.2s")
                .wrap(&format!(r#"<p class="intro">{}</p>"#, escape(intro))),
            architecture = Reveal::new().delay("0.3s").class("highlight").wrap(
                "<h3>Full Stack Architecture</h3><p>Building robust, scalable applications from database design to frontend interactivity.</p>"
            ),
            design = Reveal::new().delay("0.4s").class("highlight").wrap(
                "<h3>UI/UX Design</h3><p>Creating intuitive, accessible, and visually stunning interfaces that delight users.</p>"
            ),
        )
    }

    fn featured(&self) -> String {
        let mut rows = String::new();
        for (index, project) in self.featured_projects().iter().enumerate() {
            rows.push_str(&project_row(project, index));
        }

        format!(
            r#"<section class="featured dark">
<div class="container">
<div class="section-head">
{title}
{link}
</div>
<div class="project-rows">{rows}</div>
</div>
</section>"#,
            title = Reveal::new().wrap(r#"<h2>SELECTED<br><span class="accent">WORKS</span></h2>"#),
            link = Reveal::new()
                .delay("0.2s")
                .wrap(r#"<a href="/projects" class="view-all">VIEW ALL ARCHIVE</a>"#),
        )
    }

    fn skills_and_cta(&self, ctx: &SiteContext) -> String {
        let mut pills = String::new();
        for (i, skill) in self.skills.iter().enumerate() {
            let name = skill.name().unwrap_or_default();
            pills.push_str(
                &Reveal::new()
                    .delay_ms(i as u32 * 50)
                    .wrap(&format!(r#"<div class="skill-pill">{}</div>"#, escape(name))),
            );
        }
        pills.push_str(
            &Reveal::new()
                .delay("0.5s")
                .wrap(r#"<a href="/skills" class="skill-pill skill-pill-more">View All Skills</a>"#),
        );

        format!(
            r#"<section class="arsenal container">
{title}
<div class="skill-pills">{pills}</div>
</section>
<section class="final-cta container">
{headline}
{blurb}
{actions}
</section>"#,
            title = Reveal::new().wrap("<h2>TECHNICAL ARSENAL</h2>"),
            headline = Reveal::new().wrap("<h2>LET'S BUILD<br>SOMETHING<br>LEGENDARY</h2>"),
            blurb = Reveal::new().delay("0.2s").wrap(
                "<p>I'm currently available for freelance projects and open to full-time opportunities.</p>"
            ),
            actions = Reveal::new().delay("0.3s").class("actions").wrap(&format!(
                r#"<a href="{}" class="button">START A PROJECT</a><a href="/about" class="button button-outline">READ MY STORY</a>"#,
                escape(&ctx.mailto())
            )),
        )
    }
}

fn project_row(project: &Project, index: usize) -> String {
    let name = project.name().unwrap_or_default();
    let path = escape(&project.detail_path()).into_owned();
    let side = if index % 2 == 0 { "row" } else { "row-reverse" };

    let media = match project.thumbnail() {
        Some(src) => image(src, project.name().unwrap_or("Project"), "project-image"),
        None => r#"<div class="image-placeholder dark"><span>&lt;/&gt;</span></div>"#.to_string(),
    };

    let mut tags = String::new();
    for tech in project.technologies().into_iter().take(FEATURED_TECHNOLOGIES) {
        let _ = write!(tags, r#"<span class="tag">{}</span>"#, escape(tech));
    }

    format!(
        r#"<article class="project-row {side}">
<div class="project-media">{media}</div>
<div class="project-copy">{copy}</div>
</article>"#,
        media = Reveal::new()
            .class("media-frame")
            .wrap(&format!(r#"<a href="{path}">{media}</a>"#)),
        copy = Reveal::new().delay("0.2s").wrap(&format!(
            r#"<span class="row-index">0{number}</span>
<h3><a href="{path}">{name}</a></h3>
<p class="summary">{summary}</p>
<div class="tags">{tags}</div>
<a href="{path}" class="case-study">EXPLORE CASE STUDY</a>"#,
            number = index + 1,
            name = escape(name),
            summary = escape(project.summary().unwrap_or_default()),
        )),
    )
}

impl Page for HomePage {
    fn render(&self, ctx: &SiteContext) -> String {
        [
            self.hero(),
            self.marquee(),
            self.intro(),
            self.featured(),
            self.skills_and_cta(ctx),
        ]
        .join("\n")
    }
}
