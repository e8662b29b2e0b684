use crate::api::ApiClient;
use crate::app::App;

/// Probe the service once so the user knows up front whether analyses
/// will come from it or from the offline fallback.
pub async fn check_service(app: &mut App, client: &ApiClient) {
    match client.health().await {
        Ok(health) => {
            tracing::info!(status = %health.status, message = %health.message, "Service reachable");
            app.set_status(format!("Connected to {}", client.base_url()));
        }
        Err(err) => {
            tracing::warn!(error = ?err, "Service health check failed");
            app.set_status(format!(
                "Service unreachable at {}, analyses will use offline suggestions",
                client.base_url()
            ));
        }
    }
}
