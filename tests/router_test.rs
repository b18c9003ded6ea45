//! Route table, navigation highlight and the scroll reveal wrapper.
//!
//! Run with: `cargo test --test router_test`
use portfolio_site::router::{NAV_LINKS, Route, is_active};
use portfolio_site::views::reveal::Reveal;

#[test]
fn test_resolve_known_paths() {
    assert_eq!(Route::resolve("/"), Route::Home);
    assert_eq!(Route::resolve(""), Route::Home);
    assert_eq!(Route::resolve("/projects"), Route::Projects);
    assert_eq!(
        Route::resolve("/projects/abc-123"),
        Route::ProjectDetail("abc-123".to_string())
    );
    assert_eq!(Route::resolve("/about"), Route::About);
    assert_eq!(Route::resolve("/skills"), Route::Skills);
}

#[test]
fn test_resolve_tolerates_trailing_slash() {
    assert_eq!(Route::resolve("/about/"), Route::About);
    assert_eq!(Route::resolve("/about/").path(), "/about");
    assert_eq!(
        Route::resolve("/projects/p1/").path(),
        "/projects/p1"
    );
}

#[test]
fn test_unknown_paths_redirect_home() {
    for path in ["/nonexistent", "/projects/a/b", "/about/me", "/SKILLS"] {
        let route = Route::resolve(path);
        assert_eq!(route, Route::Redirect, "{path}");
        assert_eq!(route.path(), "/");
    }
}

#[test]
fn test_root_link_matches_exactly() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/", "/projects"));
}

#[test]
fn test_section_links_match_by_prefix() {
    assert!(is_active("/projects", "/projects"));
    assert!(is_active("/projects", "/projects/abc"));
    assert!(!is_active("/projects", "/about"));
}

#[test]
fn test_exactly_one_nav_link_is_active_per_page() {
    for path in ["/", "/projects", "/projects/x", "/about", "/skills"] {
        let active = NAV_LINKS.iter().filter(|l| is_active(l.path, path)).count();
        assert_eq!(active, 1, "{path}");
    }
}

#[test]
fn test_reveal_wrapper_markup() {
    let html = Reveal::new().class("card").delay_ms(200).wrap("<p>hi</p>");
    assert_eq!(
        html,
        r#"<div class="reveal-trigger card" data-reveal-threshold="0.1" style="--reveal-delay: 200ms"><p>hi</p></div>"#
    );

    let defaults = Reveal::new().wrap("");
    assert!(defaults.contains(r#"class="reveal-trigger""#));
    assert!(defaults.contains("--reveal-delay: 0s"));
}

#[test]
fn test_reveal_threshold_is_clamped() {
    assert_eq!(Reveal::new().threshold(3.0).threshold, 1.0);
    assert_eq!(Reveal::new().threshold(-1.0).threshold, 0.0);
}

#[test]
fn test_reveal_stagger_is_whole_milliseconds() {
    for (index, expected) in [(0u32, "0ms"), (3, "150ms"), (7, "350ms")] {
        let html = Reveal::new().delay_ms(index * 50).wrap("");
        assert!(html.contains(&format!("--reveal-delay: {expected}\"")), "{html}");
    }
}
