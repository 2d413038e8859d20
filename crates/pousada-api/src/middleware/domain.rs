//! Host-based property resolution

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use pousada_core::domain::PropertyOverview;

use crate::state::AppState;

/// Request extension set when the `Host` header maps to an active property.
#[derive(Debug, Clone)]
pub struct ResolvedProperty(pub PropertyOverview);

/// Attaches [`ResolvedProperty`] for custom domains and platform subdomains.
/// A miss, or a failed lookup, attaches nothing.
pub async fn resolve_domain(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| request.uri().host())
        .map(str::to_owned);

    if let Some(host) = host {
        if let Some(found) = state.site.resolve_host(&host).await {
            debug!("Host {} resolved to property {}", host, found.property.slug);
            request.extensions_mut().insert(ResolvedProperty(found));
        }
    }

    next.run(request).await
}
