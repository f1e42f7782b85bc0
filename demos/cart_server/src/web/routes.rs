// demos/cart_server/src/web/routes.rs

use crate::web::handlers::cart_handlers;
use actix_web::web;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called from `main.rs` (and the handler tests) to mount the API.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      .route("/health", web::get().to(health_check_handler))
      // Identity comes from the X-User-ID header, see `RequestIdentity`.
      .service(
        web::scope("/cart")
          .route("", web::get().to(cart_handlers::get_cart_handler))
          .route("", web::delete().to(cart_handlers::clear_cart_handler))
          .route("/items", web::post().to(cart_handlers::add_item_handler))
          .route(
            "/items/{product_id}",
            web::put().to(cart_handlers::update_quantity_handler),
          )
          .route(
            "/items/{product_id}",
            web::delete().to(cart_handlers::remove_item_handler),
          ),
      ),
  );
}
