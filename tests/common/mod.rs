#![allow(dead_code, unused_macros)]

use actix_web::web;
use std::sync::Arc;

use portfolio_site::models::{Profile, Project, Skill};
use portfolio_site::store::{RecordStore, StoreData};

pub fn profile(full_name: &str) -> Profile {
    Profile {
        id: "profile-1".to_string(),
        created_date: None,
        updated_date: None,
        full_name: Some(full_name.to_string()),
        professional_title: Some("Software Engineer".to_string()),
        profile_picture: None,
        introductory_text: Some("I build things for the web.".to_string()),
        cv_file_url: Some("https://example.com/cv.pdf".to_string()),
        tagline: Some("Shipping reliable software.".to_string()),
    }
}

pub fn project(id: &str, name: &str, technologies: &str) -> Project {
    Project {
        id: id.to_string(),
        created_date: None,
        updated_date: None,
        project_name: Some(name.to_string()),
        project_thumbnail: None,
        short_description: Some(format!("{name} in one line.")),
        full_description: Some(format!("{name} in several lines.")),
        technologies_used: Some(technologies.to_string()),
        live_demo_url: Some(format!("https://example.com/{id}")),
        github_repo_url: None,
        completion_date: Some("2024-03-15".to_string()),
    }
}

pub fn skill(id: &str, name: &str, category: Option<&str>, key: bool) -> Skill {
    Skill {
        id: id.to_string(),
        created_date: None,
        updated_date: None,
        skill_name: Some(name.to_string()),
        category: category.map(str::to_string),
        proficiency_level: Some("Advanced".to_string()),
        description: None,
        years_experience: Some(3.0),
        is_key_skill: Some(key),
    }
}

pub fn store_data(store: impl RecordStore + 'static) -> web::Data<StoreData> {
    let store: StoreData = Arc::new(store);
    web::Data::new(store)
}

/// Initialise the site's routes and error boundary, wired the way `main`
/// wires them, over `$store`.
macro_rules! init_site {
    ($store:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(portfolio_site::handlers::error_handlers())
                .app_data($crate::common::store_data($store))
                .app_data(actix_web::web::Data::new(
                    portfolio_site::config::SiteSettings::default(),
                ))
                .configure(portfolio_site::handlers::init_routes)
                .default_service(actix_web::web::to(portfolio_site::handlers::pages::fallback)),
        )
        .await
    };
}
