/// Logical pages of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Projects,
    ProjectDetail(String),
    About,
    Skills,
    /// Anything unmatched; answered with a redirect to `/`.
    Redirect,
}

impl Route {
    /// Match a request path against the route table.
    pub fn resolve(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["projects"] => Route::Projects,
            ["projects", id] if !id.is_empty() => Route::ProjectDetail((*id).to_string()),
            ["about"] => Route::About,
            ["skills"] => Route::Skills,
            _ => Route::Redirect,
        }
    }

    /// Canonical path of the route.
    pub fn path(&self) -> String {
        match self {
            Route::Home | Route::Redirect => "/".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::ProjectDetail(id) => format!("/projects/{id}"),
            Route::About => "/about".to_string(),
            Route::Skills => "/skills".to_string(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home | Route::Redirect => "Home",
            Route::Projects => "Projects",
            Route::ProjectDetail(_) => "Project",
            Route::About => "About",
            Route::Skills => "Skills",
        }
    }
}

/// An entry of the header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { path: "/", label: "HOME" },
    NavLink { path: "/projects", label: "PROJECTS" },
    NavLink { path: "/about", label: "ABOUT" },
    NavLink { path: "/skills", label: "SKILLS" },
];

/// Nav highlight rule: root matches exactly, everything else by prefix, so
/// `/projects/abc` still highlights PROJECTS.
pub fn is_active(link_path: &str, current_path: &str) -> bool {
    if link_path == "/" {
        return current_path == "/";
    }
    current_path.starts_with(link_path)
}
