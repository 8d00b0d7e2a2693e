//! Axum router wiring.
//!
//! Registers the root page (with discovery head links), the RSD discovery
//! document, and operational endpoints, then layers the interception
//! middleware over everything. Discovery routes honor the boot-time exposure
//! suppression: a suppressed integration point is simply never registered.

use axum::{
    extract::State,
    http::{header, StatusCode},
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};

use crate::app_state::AppState;
use crate::exposure::{self, IntegrationPoint};
use crate::store::ToggleStore;
use crate::{ops, transport};

pub fn build_router(state: AppState) -> Router {
    let boot = state.boot_toggles();

    let mut router = Router::new()
        .route("/", get(root))
        .route("/healthz", get(ops::healthz));

    if !exposure::is_suppressed(&boot, IntegrationPoint::RsdHeadLink) {
        router = router.route("/rsd", get(rsd_document));
    }

    router
        .layer(middleware::from_fn_with_state(
            state.clone(),
            transport::intercept,
        ))
        .with_state(state)
}

/// Minimal front page carrying the discovery head links that survived
/// suppression.
async fn root(State(app): State<AppState>) -> Html<String> {
    let toggles = app.store().get_toggles().await;
    let links = exposure::head_links(&toggles, app.platform());

    Html(format!(
        "<!doctype html>\n<html>\n<head>\n{}\n</head>\n<body></body>\n</html>\n",
        links.join("\n")
    ))
}

/// Really Simple Discovery document advertising the legacy RPC endpoint.
async fn rsd_document(State(app): State<AppState>) -> Response {
    let platform = app.platform();
    let body = format!(
        "<?xml version=\"1.0\" encoding=\"{charset}\"?>\n\
         <rsd version=\"1.0\" xmlns=\"http://archipelago.phrasewise.com/rsd\">\n\
         \x20 <service>\n\
         \x20   <engineName>remshield</engineName>\n\
         \x20   <apis>\n\
         \x20     <api name=\"XML-RPC\" preferred=\"true\" apiLink=\"{rpc}\" />\n\
         \x20   </apis>\n\
         \x20 </service>\n\
         </rsd>",
        charset = platform.charset,
        rpc = platform.rpc_endpoint,
    );

    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            format!("application/rsd+xml; charset={}", platform.charset),
        )],
        body,
    )
        .into_response()
}
