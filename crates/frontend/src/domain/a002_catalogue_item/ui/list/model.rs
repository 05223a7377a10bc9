use contracts::domain::a002_catalogue_item::aggregate::{CatalogueItem, CatalogueItemDto};
use contracts::domain::common::AggregateRoot;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, ensure_ok, with_auth};
use crate::shared::error::ApiError;

fn collection_url() -> String {
    api_url(&CatalogueItem::api_path())
}

fn item_url(id: &str) -> String {
    format!("{}/{}", collection_url(), urlencoding::encode(id))
}

pub async fn fetch_all() -> Result<Vec<CatalogueItem>, ApiError> {
    let url = format!("{}?_ts={}", collection_url(), js_sys::Date::now() as i64);
    log::debug!("GET {}", url);

    let response = with_auth(Request::get(&url))
        .header("Accept", "application/json")
        .header("Cache-Control", "no-cache, no-store, must-revalidate")
        .send()
        .await?;

    Ok(ensure_ok(response).await?.json::<Vec<CatalogueItem>>().await?)
}

pub async fn create(dto: &CatalogueItemDto) -> Result<(), ApiError> {
    let url = collection_url();
    log::debug!("POST {}", url);

    let response = with_auth(Request::post(&url)).json(dto)?.send().await?;
    ensure_ok(response).await?;
    Ok(())
}

pub async fn update(id: &str, dto: &CatalogueItemDto) -> Result<(), ApiError> {
    let url = item_url(id);
    log::debug!("PUT {}", url);

    let response = with_auth(Request::put(&url)).json(dto)?.send().await?;
    ensure_ok(response).await?;
    Ok(())
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    let url = item_url(id);
    log::debug!("DELETE {}", url);

    let response = with_auth(Request::delete(&url)).send().await?;
    ensure_ok(response).await?;
    Ok(())
}
