use actix_web::HttpResponse;
use actix_web::web::Bytes;
use futures_util::FutureExt;
use futures_util::future::{self, Future};
use futures_util::stream::{self, StreamExt};
use std::convert::Infallible;
use std::panic::AssertUnwindSafe;
use tokio::task::JoinHandle;
use tracing::error;

use crate::controller::{Controller, LoadState};
use crate::pages::Page;
use crate::views::SiteContext;
use crate::views::layout;

/// Run `load` as its own task and hand the result to `controller`.
///
/// The task resolves through a resolver taken now, so a result arriving after
/// the controller has been unmounted or dropped is discarded. The handle
/// yields whether the result was applied.
pub fn spawn_load<P, F>(controller: &Controller<P>, load: F) -> JoinHandle<bool>
where
    P: 'static,
    F: Future<Output = P> + 'static,
{
    let resolver = controller.resolver();
    actix_web::rt::spawn(async move {
        match AssertUnwindSafe(load).catch_unwind().await {
            Ok(page) => resolver.resolve(page),
            Err(_) => {
                error!("page load panicked, serving error fallback");
                resolver.fail()
            }
        }
    })
}

/// Stream a page: the shell and loading placeholder go out immediately, the
/// main content follows once the controller has loaded.
///
/// The controller lives inside the response stream. If the client goes away
/// before the load finishes, the stream and the controller are dropped and
/// the pending result is discarded when it arrives.
pub fn stream_page<P, F>(ctx: SiteContext, title: &str, loading_message: &str, load: F) -> HttpResponse
where
    P: Page,
    F: Future<Output = P> + 'static,
{
    let shell = layout::open(&ctx, title, loading_message);

    let controller = Controller::<P>::mount();
    spawn_load(&controller, load);

    let body = async move {
        let content = match &*controller.loaded().await {
            LoadState::Ready(page) => render_guarded(page, &ctx),
            LoadState::Loading | LoadState::Failed => layout::error_body(),
        };
        let html = format!("{}{}", layout::main(&content), layout::close(&ctx));
        Ok::<_, Infallible>(Bytes::from(html))
    };

    let chunks = stream::once(future::ready(Ok::<_, Infallible>(Bytes::from(shell))))
        .chain(stream::once(body));

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .streaming(chunks)
}

/// Render a page body, replacing it with the error fallback if rendering panics.
pub fn render_guarded<P: Page>(page: &P, ctx: &SiteContext) -> String {
    match std::panic::catch_unwind(AssertUnwindSafe(|| page.render(ctx))) {
        Ok(html) => html,
        Err(_) => {
            error!(path = %ctx.current_path, "page render panicked, serving error fallback");
            layout::error_body()
        }
    }
}
