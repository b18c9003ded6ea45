use super::SiteContext;
use super::html::{escape, external_link};

pub fn render(ctx: &SiteContext) -> String {
    let settings = &ctx.settings;
    format!(
        r#"<footer class="site-footer">
<div class="container footer-grid">
<div>
<h3>{name}</h3>
<p>Showcasing creative work and professional expertise through innovative projects and solutions.</p>
</div>
<div>
<h3>QUICK LINKS</h3>
<ul>
<li><a href="/">Home</a></li>
<li><a href="/projects">Projects</a></li>
<li><a href="/about">About</a></li>
<li><a href="/skills">Skills</a></li>
</ul>
</div>
<div>
<h3>CONNECT</h3>
<div class="connect-links">
<a href="{mailto}" aria-label="Email">Email</a>
{linkedin}
{github}
{twitter}
</div>
</div>
</div>
<p class="copyright">&copy; {year} {name_title}. All rights reserved.</p>
</footer>"#,
        name = escape(&settings.site_name),
        name_title = escape(&title_case(&settings.site_name)),
        mailto = escape(&ctx.mailto()),
        linkedin = external_link(&settings.linkedin_url, "connect-link", "LinkedIn"),
        github = external_link(&settings.github_url, "connect-link", "GitHub"),
        twitter = external_link(&settings.twitter_url, "connect-link", "Twitter"),
        year = ctx.year,
    )
}

fn title_case(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
