//! Service info handler

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct ServiceInfo {
    message: &'static str,
    status: &'static str,
    endpoints: [&'static str; 2],
}

pub async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: concat!("MediVision API v", env!("CARGO_PKG_VERSION")),
        status: "operational",
        endpoints: ["/predict", "/detailed-analysis"],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_info_payload() {
        let Json(info) = info().await;
        assert_eq!(info.status, "operational");
        assert!(info.endpoints.contains(&"/predict"));
        assert!(info.endpoints.contains(&"/detailed-analysis"));
    }
}
