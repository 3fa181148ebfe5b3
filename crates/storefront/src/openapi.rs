//! OpenAPI documentation.
//!
//! The generated document is served as JSON at `/openapi.json`.

use axum::Json;
use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::models::{
    AvailabilityCheckRequest, AvailabilityCheckResponse, Cart, DeliveryAddress,
    DeliveryCostRequest, DeliveryCostResponse, DeliveryInfo, Product,
};

/// Cart and delivery API documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cart and Delivery API",
        version = "1.0.0",
        description = "Add products to a cart, estimate delivery costs and manage delivery addresses."
    ),
    paths(
        crate::routes::cart::show,
        crate::routes::cart::add_item,
        crate::routes::cart::remove_item,
        crate::routes::cart::checkout,
        crate::routes::delivery::calculate,
        crate::routes::delivery::info,
        crate::routes::delivery::availability,
        crate::routes::addresses::index,
        crate::routes::addresses::create,
    ),
    components(schemas(
        Product,
        Cart,
        DeliveryAddress,
        DeliveryInfo,
        DeliveryCostRequest,
        DeliveryCostResponse,
        AvailabilityCheckRequest,
        AvailabilityCheckResponse,
        ErrorResponse,
    )),
    tags(
        (name = "cart", description = "Shopping cart and checkout"),
        (name = "delivery", description = "Delivery cost, tracking and availability"),
        (name = "addresses", description = "Saved delivery addresses"),
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_api_path() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();

        for path in [
            "/cart/{user_id}",
            "/cart/{user_id}/items",
            "/cart/{user_id}/items/{product_id}",
            "/cart/{user_id}/checkout",
            "/delivery/calculate",
            "/delivery/info/{order_id}",
            "/delivery/availability",
            "/user/{user_id}/addresses",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
        assert!(paths["/user/{user_id}/addresses"]["get"].is_object());
        assert!(paths["/user/{user_id}/addresses"]["post"].is_object());
    }

    #[test]
    fn test_document_info() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Cart and Delivery API");
        assert_eq!(doc.info.version, "1.0.0");
    }
}
