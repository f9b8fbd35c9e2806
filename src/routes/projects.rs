//! Project routes: slider data and the detail page.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Redirect, Response};
use carousel::content::SlideContent;
use serde::Deserialize;

use crate::catalog::ProjectKind;
use crate::detail::render_detail;
use crate::state::AppState;

/// `GET /api/projects/{kind}`: slides for one slider, in catalog order.
pub async fn list_slides(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<Vec<SlideContent>>, StatusCode> {
    let kind = kind.parse::<ProjectKind>().map_err(|e| {
        tracing::debug!(error = %e, "slides requested for unknown kind");
        StatusCode::NOT_FOUND
    })?;
    Ok(Json(state.catalog.slides(kind)))
}

#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    pub id: Option<String>,
}

/// `GET /project-template.html?id=`: the bound detail page, or a redirect to
/// the fallback page when the id is missing or resolves to nothing.
pub async fn detail_page(
    State(state): State<AppState>,
    query: Result<Query<DetailQuery>, QueryRejection>,
) -> Response {
    let id = match query {
        Ok(Query(DetailQuery { id })) => id,
        Err(e) => {
            tracing::debug!(error = %e, "malformed detail query");
            None
        }
    };
    let record = id.as_deref().and_then(|id| state.catalog.find(id));
    match record {
        Some(record) => Html(render_detail(record, &state.owner)).into_response(),
        None => {
            tracing::info!(id = ?id, fallback = %state.fallback_path, "project not found; redirecting");
            Redirect::temporary(&state.fallback_path).into_response()
        }
    }
}
