//! The single-page dashboard.

use axum::Router;
use axum::response::Html;
use axum::routing::get;

use crate::service::ServiceState;

const DASHBOARD_PAGE: &str = include_str!("../../assets/index.html");

/// Serves the dashboard page; all data is loaded from the JSON API.
async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

/// Returns a [`Router`] with the dashboard page.
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/", get(dashboard))
}

#[cfg(test)]
mod tests {
    use crate::handler::test::create_test_server;

    #[tokio::test]
    async fn serves_html_page() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/").await;
        response.assert_status_ok();
        assert!(response.text().contains("ChromaDB Dashboard"));
        Ok(())
    }
}
