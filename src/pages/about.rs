use super::{Page, first_or_none};
use crate::models::Profile;
use crate::store::RecordStore;
use crate::views::SiteContext;
use crate::views::html::{escape, image};
use crate::views::reveal::Reveal;

pub const DEFAULT_NAME: &str = "Professional Name";

#[derive(Debug, Clone, Default)]
pub struct AboutPage {
    pub profile: Option<Profile>,
}

impl AboutPage {
    pub async fn load(store: &dyn RecordStore) -> Self {
        Self {
            profile: first_or_none::<Profile>(store).await,
        }
    }
}

impl Page for AboutPage {
    fn render(&self, _ctx: &SiteContext) -> String {
        let profile = self.profile.as_ref();

        let tagline = profile
            .and_then(Profile::tagline)
            .map(|t| format!(r#"<p class="lead">{}</p>"#, escape(t)))
            .unwrap_or_default();

        let picture = profile
            .and_then(Profile::profile_picture)
            .map(|src| {
                let alt = profile
                    .and_then(Profile::full_name)
                    .unwrap_or("Profile picture");
                format!(
                    r#"<div class="portrait">{}</div>"#,
                    image(src, alt, "portrait-image")
                )
            })
            .unwrap_or_default();

        let name = profile.and_then(Profile::full_name).unwrap_or(DEFAULT_NAME);
        let title = profile
            .and_then(Profile::professional_title)
            .map(|t| format!(r#"<p class="title accent">{}</p>"#, escape(t)))
            .unwrap_or_default();

        let story = profile
            .and_then(Profile::introductory_text)
            .map(|text| format!(r#"<div class="story"><h3>My Story</h3><p>{}</p></div>"#, escape(text)))
            .unwrap_or_default();

        let cv = profile
            .and_then(Profile::cv_file_url)
            .map(|url| {
                format!(
                    r#"<div class="cv"><a href="{}" download class="button">DOWNLOAD MY CV</a></div>"#,
                    escape(url)
                )
            })
            .unwrap_or_default();

        format!(
            r#"<section class="page-hero container">
<h1>ABOUT ME</h1>
<div class="rule"></div>
{tagline}
</section>
<section class="container about-grid">
<div>{picture}</div>
<div class="about-copy">
<div><h2>{name}</h2>{title}</div>
<div class="divider"></div>
{story}
{cv}
</div>
</section>
<section class="band">
<div class="container band-grid">
{band_title}
{band_body}
</div>
</section>"#,
            name = escape(name),
            band_title = Reveal::new().wrap("<h2>Let's Create Something Amazing</h2>"),
            band_body = Reveal::new().delay("0.2s").wrap(
                r#"<p>I'm passionate about bringing ideas to life through innovative solutions and creative problem-solving. Explore my work to see what we can achieve together.</p><div class="actions"><a href="/projects" class="button">VIEW PROJECTS</a><a href="/skills" class="button button-outline">VIEW SKILLS</a></div>"#
            ),
        )
    }
}
