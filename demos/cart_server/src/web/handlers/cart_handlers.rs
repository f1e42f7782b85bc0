// demos/cart_server/src/web/handlers/cart_handlers.rs

use actix_web::{web, FromRequest, HttpRequest, HttpResponse};
use home4u_cart::{CartEvent, CartView, MutationOutcome, ProductId, RemoveMode, Toast, UserId};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::services::SessionResult;
use crate::state::AppState;

// --- Identity Extractor ---
// The user id comes from the X-User-ID header. No header means an anonymous,
// transient cart; a header that is not a decimal id is rejected.
#[derive(Debug, Clone, Copy)]
pub struct RequestIdentity {
  pub user_id: Option<UserId>,
}

impl FromRequest for RequestIdentity {
  type Error = AppError;
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    let header = match req.headers().get("X-User-ID") {
      Some(header) => header,
      None => return futures_util::future::ready(Ok(RequestIdentity { user_id: None })),
    };
    let parsed = header.to_str().ok().and_then(|raw| raw.parse::<UserId>().ok());
    match parsed {
      Some(user_id) => futures_util::future::ready(Ok(RequestIdentity { user_id: Some(user_id) })),
      None => {
        warn!("RequestIdentity extractor: invalid X-User-ID header.");
        futures_util::future::ready(Err(AppError::Auth(
          "X-User-ID header must be a decimal user id.".to_string(),
        )))
      }
    }
  }
}

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddItemPayload {
  pub product_id: ProductId,
  pub unit_price: f64,
  pub display_name: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantityPayload {
  pub quantity: i64,
  pub display_name: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RemoveItemQuery {
  #[serde(default)]
  pub mode: RemoveMode,
  pub display_name: Option<String>,
}

// --- Response DTO ---
#[derive(Serialize, Debug)]
pub struct MutationResponse {
  pub outcome: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub event: Option<CartEvent>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub notification: Option<Toast>,
  pub cart: CartView,
}

impl From<SessionResult<MutationOutcome>> for MutationResponse {
  fn from(result: SessionResult<MutationOutcome>) -> Self {
    let outcome = if result.value.is_changed() { "changed" } else { "unchanged" };
    Self {
      outcome,
      event: result.value.into_event(),
      notification: result.notification,
      cart: result.cart,
    }
  }
}

fn respond(result: SessionResult<MutationOutcome>) -> HttpResponse {
  if let Some(toast) = &result.notification {
    info!(icon = toast.icon, "{}", toast.message);
  }
  HttpResponse::Ok().json(MutationResponse::from(result))
}

// --- Handler Implementations ---

#[instrument(name = "handler::get_cart", skip(app_state), fields(user_id = ?identity.user_id))]
pub async fn get_cart_handler(
  app_state: web::Data<AppState>,
  identity: RequestIdentity,
) -> Result<HttpResponse, AppError> {
  let result = app_state.sessions.run(identity.user_id, |_| ())?;
  Ok(HttpResponse::Ok().json(json!({ "cart": result.cart })))
}

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, payload),
    fields(user_id = ?identity.user_id, product_id = %payload.product_id)
)]
pub async fn add_item_handler(
  app_state: web::Data<AppState>,
  identity: RequestIdentity,
  payload: web::Json<AddItemPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = payload.into_inner();
  if !payload.unit_price.is_finite() || payload.unit_price < 0.0 {
    return Err(AppError::Validation(
      "unitPrice must be a non-negative number.".to_string(),
    ));
  }
  let result = app_state.sessions.run(identity.user_id, |cart| {
    cart.add_to_cart(payload.product_id, payload.unit_price, payload.display_name)
  })?;
  Ok(respond(result))
}

#[instrument(name = "handler::remove_from_cart", skip(app_state, query), fields(user_id = ?identity.user_id))]
pub async fn remove_item_handler(
  app_state: web::Data<AppState>,
  identity: RequestIdentity,
  path: web::Path<ProductId>,
  query: web::Query<RemoveItemQuery>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let query = query.into_inner();
  let result = app_state.sessions.run(identity.user_id, |cart| {
    cart.remove_from_cart(product_id, query.mode, query.display_name)
  })?;
  Ok(respond(result))
}

#[instrument(name = "handler::update_quantity", skip(app_state, payload), fields(user_id = ?identity.user_id))]
pub async fn update_quantity_handler(
  app_state: web::Data<AppState>,
  identity: RequestIdentity,
  path: web::Path<ProductId>,
  payload: web::Json<UpdateQuantityPayload>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let payload = payload.into_inner();
  let result = app_state.sessions.run(identity.user_id, |cart| {
    cart.update_quantity(product_id, payload.quantity, payload.display_name)
  })?;
  Ok(respond(result))
}

#[instrument(name = "handler::clear_cart", skip(app_state), fields(user_id = ?identity.user_id))]
pub async fn clear_cart_handler(
  app_state: web::Data<AppState>,
  identity: RequestIdentity,
) -> Result<HttpResponse, AppError> {
  let result = app_state.sessions.run(identity.user_id, |cart| cart.clear_cart())?;
  Ok(respond(result))
}

#[cfg(test)]
mod tests {
  use crate::config::AppConfig;
  use crate::state::AppState;
  use crate::web::configure_app_routes;
  use actix_web::{http::StatusCode, test, web, App};
  use home4u_cart::CartConfig;
  use serde_json::{json, Value};
  use std::sync::Arc;

  fn state_with_store(store_path: Option<std::path::PathBuf>) -> AppState {
    let config = Arc::new(AppConfig {
      server_host: "127.0.0.1".into(),
      server_port: 0,
      store_path,
      cart: CartConfig::default(),
    });
    AppState::from_config(config).unwrap()
  }

  macro_rules! app {
    ($state:expr) => {
      test::init_service(
        App::new()
          .app_data(web::Data::new($state))
          .configure(configure_app_routes),
      )
      .await
    };
  }

  #[actix_web::test]
  async fn add_reduce_and_clear_round_trip() {
    let app = app!(state_with_store(None));

    let req = test::TestRequest::post()
      .uri("/api/v1/cart/items")
      .insert_header(("X-User-ID", "42"))
      .set_json(json!({"productId": 42, "unitPrice": 100.0, "displayName": "Lamp"}))
      .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["outcome"], "changed");
    assert_eq!(body["event"]["kind"], "added");
    assert_eq!(body["notification"]["message"], "Lamp added to your cart");
    assert_eq!(body["notification"]["position"], "top-right");

    let req = test::TestRequest::post()
      .uri("/api/v1/cart/items")
      .insert_header(("X-User-ID", "42"))
      .set_json(json!({"productId": 42, "unitPrice": 120.0, "displayName": "Lamp"}))
      .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["cart"]["items"][0]["quantity"], 2);
    assert_eq!(body["cart"]["total"], 240.0);

    let req = test::TestRequest::delete()
      .uri("/api/v1/cart/items/42?mode=reduce")
      .insert_header(("X-User-ID", "42"))
      .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["event"]["kind"], "reduced");
    assert_eq!(body["cart"]["items"][0]["quantity"], 1);

    let req = test::TestRequest::delete()
      .uri("/api/v1/cart")
      .insert_header(("X-User-ID", "42"))
      .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["notification"]["message"], "Cart cleared: 1 item removed");

    let req = test::TestRequest::delete()
      .uri("/api/v1/cart")
      .insert_header(("X-User-ID", "42"))
      .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["outcome"], "unchanged");
    assert!(body.get("notification").is_none());
  }

  #[actix_web::test]
  async fn update_quantity_on_unknown_item_is_unchanged() {
    let app = app!(state_with_store(None));
    let req = test::TestRequest::put()
      .uri("/api/v1/cart/items/7")
      .insert_header(("X-User-ID", "1"))
      .set_json(json!({"quantity": 3}))
      .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["outcome"], "unchanged");
    assert_eq!(body["cart"]["lineCount"], 0);
  }

  #[actix_web::test]
  async fn carts_are_isolated_per_user_and_anonymous_is_transient() {
    let app = app!(state_with_store(None));
    for user in ["1", "2"] {
      let req = test::TestRequest::post()
        .uri("/api/v1/cart/items")
        .insert_header(("X-User-ID", user))
        .set_json(json!({"productId": user.parse::<u64>().unwrap(), "unitPrice": 1.0}))
        .to_request();
      let _: Value = test::call_and_read_body_json(&app, req).await;
    }

    let req = test::TestRequest::get()
      .uri("/api/v1/cart")
      .insert_header(("X-User-ID", "2"))
      .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["cart"]["items"][0]["productId"], 2);
    assert_eq!(body["cart"]["lineCount"], 1);

    let req = test::TestRequest::post()
      .uri("/api/v1/cart/items")
      .set_json(json!({"productId": 5, "unitPrice": 1.0}))
      .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["cart"]["lineCount"], 1);
    let req = test::TestRequest::get().uri("/api/v1/cart").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["cart"]["lineCount"], 0);
  }

  #[actix_web::test]
  async fn bad_identity_and_bad_price_are_rejected() {
    let app = app!(state_with_store(None));
    let req = test::TestRequest::get()
      .uri("/api/v1/cart")
      .insert_header(("X-User-ID", "abc"))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
      .uri("/api/v1/cart/items")
      .insert_header(("X-User-ID", "1"))
      .set_json(json!({"productId": 1, "unitPrice": -3.0}))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[actix_web::test]
  async fn file_store_keeps_carts_between_app_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("carts.json");

    {
      let app = app!(state_with_store(Some(path.clone())));
      let req = test::TestRequest::post()
        .uri("/api/v1/cart/items")
        .insert_header(("X-User-ID", "9"))
        .set_json(json!({"productId": 3, "unitPrice": 2.5}))
        .to_request();
      let _: Value = test::call_and_read_body_json(&app, req).await;
    }

    let raw = std::fs::read_to_string(&path).unwrap();
    let stored: Value = serde_json::from_str(&raw).unwrap();
    let record: Value = serde_json::from_str(stored["cart-9"].as_str().unwrap()).unwrap();
    assert_eq!(record, json!({"cartProducts": [{"id": 3, "amount": 1, "price": 2.5}]}));

    let app = app!(state_with_store(Some(path)));
    let req = test::TestRequest::get()
      .uri("/api/v1/cart")
      .insert_header(("X-User-ID", "9"))
      .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["cart"]["items"][0]["quantity"], 1);
  }
}
