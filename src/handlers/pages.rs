use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use super::render::stream_page;
use crate::config::SiteSettings;
use crate::pages::about::AboutPage;
use crate::pages::home::{self, HomePage};
use crate::pages::project_detail::ProjectDetailPage;
use crate::pages::projects::ProjectsPage;
use crate::pages::skills::SkillsPage;
use crate::pages::LOADING_MESSAGE;
use crate::router::Route;
use crate::store::StoreData;
use crate::views::SiteContext;

fn context(req: &HttpRequest, settings: &SiteSettings) -> SiteContext {
    SiteContext::new(settings.clone(), req.path())
}

/// GET /: profile, projects and skills, fetched concurrently.
pub async fn home(
    req: HttpRequest,
    store: web::Data<StoreData>,
    settings: web::Data<SiteSettings>,
) -> HttpResponse {
    let store = store.get_ref().clone();
    stream_page(
        context(&req, &settings),
        Route::Home.title(),
        home::LOADING_MESSAGE,
        async move { HomePage::load(store.as_ref()).await },
    )
}

/// GET /projects: every project.
pub async fn projects(
    req: HttpRequest,
    store: web::Data<StoreData>,
    settings: web::Data<SiteSettings>,
) -> HttpResponse {
    let store = store.get_ref().clone();
    stream_page(
        context(&req, &settings),
        Route::Projects.title(),
        LOADING_MESSAGE,
        async move { ProjectsPage::load(store.as_ref()).await },
    )
}

/// GET /projects/{id}: a single project, or the not-found view.
pub async fn project_detail(
    req: HttpRequest,
    store: web::Data<StoreData>,
    settings: web::Data<SiteSettings>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    let route = Route::ProjectDetail(id.clone());
    let store = store.get_ref().clone();
    stream_page(
        context(&req, &settings),
        route.title(),
        LOADING_MESSAGE,
        async move { ProjectDetailPage::load(store.as_ref(), &id).await },
    )
}

/// GET /about: the profile.
pub async fn about(
    req: HttpRequest,
    store: web::Data<StoreData>,
    settings: web::Data<SiteSettings>,
) -> HttpResponse {
    let store = store.get_ref().clone();
    stream_page(
        context(&req, &settings),
        Route::About.title(),
        LOADING_MESSAGE,
        async move { AboutPage::load(store.as_ref()).await },
    )
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillsQuery {
    pub category: Option<String>,
}

/// GET /skills?category=...: every skill, grouped and filtered.
pub async fn skills(
    req: HttpRequest,
    store: web::Data<StoreData>,
    settings: web::Data<SiteSettings>,
    query: web::Query<SkillsQuery>,
) -> HttpResponse {
    let store = store.get_ref().clone();
    let selected = query.into_inner().category;
    stream_page(
        context(&req, &settings),
        Route::Skills.title(),
        LOADING_MESSAGE,
        async move { SkillsPage::load(store.as_ref(), selected.as_deref()).await },
    )
}

/// Anything the route table does not serve: redirect to the canonical path of
/// the matching route, which is `/` for unknown paths.
pub async fn fallback(req: HttpRequest) -> HttpResponse {
    let target = Route::resolve(req.path()).path();
    tracing::debug!(path = %req.path(), %target, "redirecting unmatched path");
    HttpResponse::Found()
        .insert_header((actix_web::http::header::LOCATION, target))
        .finish()
}
