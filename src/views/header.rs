use std::fmt::Write;

use super::SiteContext;
use super::html::escape;
use crate::router::{NAV_LINKS, is_active};

fn nav_items(ctx: &SiteContext) -> String {
    let mut out = String::new();
    for link in NAV_LINKS {
        let (class, current) = if is_active(link.path, &ctx.current_path) {
            ("nav-link is-active", r#" aria-current="page""#)
        } else {
            ("nav-link", "")
        };
        let _ = write!(
            out,
            r#"<a href="{}" class="{class}"{current}>{}</a>"#,
            link.path, link.label
        );
    }
    out
}

/// Fixed site header. The mobile menu is a `<details>` element, so its
/// open/closed state lives entirely in the element itself.
pub fn render(ctx: &SiteContext) -> String {
    let items = nav_items(ctx);
    format!(
        r#"<header class="site-header">
<div class="container header-row">
<a href="/" class="site-name">{name}</a>
<nav class="nav-desktop" aria-label="Main">{items}</nav>
<details class="nav-mobile">
<summary aria-label="Toggle menu">MENU</summary>
<nav aria-label="Mobile">{items}</nav>
</details>
</div>
</header>"#,
        name = escape(&ctx.settings.site_name),
    )
}
