use contracts::domain::a001_order::aggregate::{Order, OrderStatusUpdateDto};
use contracts::enums::order_status::OrderStatus;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, ensure_ok, with_auth};
use crate::shared::error::ApiError;

fn order_path(id: &str) -> String {
    format!("/api/commandes/{}", urlencoding::encode(id))
}

pub async fn fetch_by_id(id: &str) -> Result<Order, ApiError> {
    let url = api_url(&order_path(id));
    log::debug!("GET {}", url);

    let response = with_auth(Request::get(&url))
        .header("Accept", "application/json")
        .send()
        .await?;

    Ok(ensure_ok(response).await?.json::<Order>().await?)
}

pub async fn update_status(id: &str, status: OrderStatus) -> Result<(), ApiError> {
    let url = api_url(&format!("{}/status", order_path(id)));
    log::info!("PATCH {} termine={}", url, status.is_complete());

    let response = with_auth(Request::patch(&url))
        .json(&OrderStatusUpdateDto { termine: status })?
        .send()
        .await?;

    ensure_ok(response).await?;
    Ok(())
}
