//! Dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::middleware::RequireVendor;
use crate::models::CurrentVendor;
use crate::state::AppState;

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub current: CurrentVendor,
    pub vendor_count: usize,
    pub active_count: usize,
}

/// Display the signed-in vendor's dashboard.
#[instrument(skip_all)]
pub async fn show(
    State(state): State<AppState>,
    RequireVendor(current): RequireVendor,
) -> impl IntoResponse {
    DashboardTemplate {
        current,
        vendor_count: state.vendors().len(),
        active_count: state.vendors().active_count(),
    }
}
