//! Startup reachability probe. Diagnostic only: the outcome is logged and
//! never influences rendering.

use crate::content::client::{ContentClient, Select};
use crate::content::ContentError;

pub async fn report_backend_reachability(client: &ContentClient) {
    let probe = client
        .select::<serde_json::Value>(Select::all("projects").columns("id").limit(1))
        .await;
    match probe {
        Ok(_) => log::info!("backend reachable, projects table present"),
        Err(ContentError::NotFound) => {
            log::info!("backend reachable, projects table not created yet")
        }
        Err(err) => log::warn!("backend connectivity check failed: {err}"),
    }
}
