pub mod pages;
pub mod render;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{HttpResponse, web};

use crate::views::layout;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(pages::home));
    cfg.route("/projects", web::get().to(pages::projects));
    cfg.route("/projects/{id}", web::get().to(pages::project_detail));
    cfg.route("/about", web::get().to(pages::about));
    cfg.route("/skills", web::get().to(pages::skills));
}

/// Top-level error boundary: every 5xx leaves as the generic error page.
pub fn error_handlers<B: MessageBody + 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().default_handler_server(render_error_page)
}

fn render_error_page<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    tracing::error!(
        status = %res.status(),
        path = %res.request().path(),
        "request failed, serving error page"
    );

    let status = res.status();
    let (req, _) = res.into_parts();
    let response = HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(layout::error_document());

    let res = ServiceResponse::new(req, response)
        .map_into_boxed_body()
        .map_into_right_body();
    Ok(ErrorHandlerResponse::Response(res))
}
