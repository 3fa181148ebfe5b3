//! Integration tests for Cartline.
//!
//! Each test starts its own storefront on an ephemeral local port with a
//! fresh in-memory store and talks to it over real HTTP.
//!
//! ```rust,ignore
//! #[tokio::test]
//! async fn test_health() {
//!     let ctx = TestContext::new().await;
//!     let resp = ctx.client.get(ctx.url("/health")).send().await.unwrap();
//!     assert_eq!(resp.status(), 200);
//! }
//! ```

use std::net::SocketAddr;

use cartline_storefront::config::StorefrontConfig;
use cartline_storefront::state::AppState;
use serde_json::{Value, json};
use tokio::task::JoinHandle;

/// A running storefront plus an HTTP client pointed at it.
pub struct TestContext {
    pub client: reqwest::Client,
    pub base_url: String,
    server: JoinHandle<()>,
}

impl TestContext {
    /// Start a storefront with default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn new() -> Self {
        Self::with_config(StorefrontConfig::default()).await
    }

    /// Start a storefront with the given configuration.
    ///
    /// The configured host and port are ignored; the server always binds
    /// `127.0.0.1:0`.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn with_config(config: StorefrontConfig) -> Self {
        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        let app = cartline_storefront::app(AppState::new(config));
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server error");
        });

        Self {
            client: reqwest::Client::new(),
            base_url: format!("http://{addr}"),
            server,
        }
    }

    /// Absolute URL for a path on the test server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Add a product to a user's cart and return the cart body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or does not return 200.
    pub async fn add_product(&self, user_id: &str, product: Value) -> Value {
        let resp = self
            .client
            .post(self.url(&format!("/cart/{user_id}/items")))
            .json(&product)
            .send()
            .await
            .expect("Request failed");
        assert_eq!(resp.status(), 200);
        resp.json().await.expect("Invalid JSON body")
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// A product body with an explicit ID.
#[must_use]
pub fn product(id: &str, name: &str, price: f64, quantity: i64) -> Value {
    json!({ "id": id, "name": name, "price": price, "quantity": quantity })
}

/// A delivery address body without an ID.
#[must_use]
pub fn address(country: &str) -> Value {
    json!({
        "street": "Khreshchatyk 1",
        "city": "Kyiv",
        "postal_code": "01001",
        "country": country,
    })
}
