//! Document shell shared by every page.
//!
//! Pages are streamed in two parts: [`open`] carries the head, the header and
//! the loading placeholder; [`close`] follows the page body and carries the
//! footer. The body chunk hides the placeholder once it arrives.

use super::html::escape;
use super::{SiteContext, footer, header};

/// Resets scroll position on every navigation.
pub const SCROLL_RESET: &str = r#"<script>if("scrollRestoration" in history){history.scrollRestoration="manual";}window.scrollTo(0,0);</script>"#;

pub const PLACEHOLDER_ID: &str = "page-loading";

/// Loading placeholder shown while the page controller is pending.
pub fn placeholder(message: &str) -> String {
    format!(
        r#"<div id="{PLACEHOLDER_ID}" class="loading-screen" role="status"><div class="spinner"></div><div class="loading-text">{}</div></div>"#,
        escape(message)
    )
}

fn head(title: &str, site_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{} | {}</title>
<link rel="stylesheet" href="/static/site.css">
<script src="/static/site.js" defer></script>
</head>
"#,
        escape(title),
        escape(site_name)
    )
}

/// Head, header and the pending view.
pub fn open(ctx: &SiteContext, title: &str, loading_message: &str) -> String {
    format!(
        "{}<body>\n{SCROLL_RESET}\n{}\n{}\n",
        head(title, &ctx.settings.site_name),
        header::render(ctx),
        placeholder(loading_message)
    )
}

/// Wrap a rendered page body so that it replaces the placeholder.
pub fn main(body: &str) -> String {
    format!(
        "<style>#{PLACEHOLDER_ID}{{display:none}}</style>\n<main class=\"page\">\n{body}\n</main>\n"
    )
}

pub fn close(ctx: &SiteContext) -> String {
    format!("{}\n</body>\n</html>\n", footer::render(ctx))
}

/// Body shown in place of a page that failed to render.
pub fn error_body() -> String {
    r#"<section class="container error-page">
<h1>Something went wrong</h1>
<p>We hit an unexpected problem while loading this page.</p>
<a href="/" class="button">BACK TO HOME</a>
</section>"#
        .to_string()
}

/// Stand-alone error document, used when no page shell has been sent yet.
pub fn error_document() -> String {
    format!(
        "{}<body>\n{SCROLL_RESET}\n{}</body>\n</html>\n",
        head("Error", "Portfolio"),
        main(&error_body())
    )
}
