// demos/cart_server/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use home4u_cart::{CartConfig, ToastPosition};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  /// JSON file standing in for the browser's local storage. `None` keeps carts in memory.
  pub store_path: Option<PathBuf>,
  pub cart: CartConfig,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| env::var(var_name).ok().filter(|v| !v.trim().is_empty());

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let store_path = get_env("CART_STORE_PATH").map(PathBuf::from);

    let mut cart = CartConfig::default();
    if let Some(prefix) = get_env("CART_STORAGE_PREFIX") {
      cart.storage_prefix = prefix;
    }
    if let Some(duration) = get_env("CART_TOAST_DURATION_MS") {
      cart.toast.duration_ms = duration
        .parse::<u64>()
        .map_err(|e| AppError::Config(format!("Invalid CART_TOAST_DURATION_MS: {}", e)))?;
    }
    if let Some(position) = get_env("CART_TOAST_POSITION") {
      cart.toast.position = position
        .parse::<ToastPosition>()
        .map_err(|e| AppError::Config(format!("Invalid CART_TOAST_POSITION: {}", e)))?;
    }
    cart
      .validate()
      .map_err(|e| AppError::Config(e.to_string()))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      store_path,
      cart,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  const VARS: [&str; 6] = [
    "SERVER_HOST",
    "SERVER_PORT",
    "CART_STORE_PATH",
    "CART_STORAGE_PREFIX",
    "CART_TOAST_DURATION_MS",
    "CART_TOAST_POSITION",
  ];

  fn clear_vars() {
    for var in VARS {
      env::remove_var(var);
    }
  }

  #[test]
  #[serial]
  fn defaults_apply_when_unset() {
    clear_vars();
    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg.server_host, "127.0.0.1");
    assert_eq!(cfg.server_port, 8080);
    assert!(cfg.store_path.is_none());
    assert_eq!(cfg.cart, CartConfig::default());
  }

  #[test]
  #[serial]
  fn cart_settings_are_read_from_env() {
    clear_vars();
    env::set_var("CART_STORE_PATH", "/tmp/carts.json");
    env::set_var("CART_STORAGE_PREFIX", "basket-");
    env::set_var("CART_TOAST_DURATION_MS", "3500");
    env::set_var("CART_TOAST_POSITION", "bottom-center");
    let cfg = AppConfig::from_env().unwrap();
    clear_vars();

    assert_eq!(cfg.store_path, Some(PathBuf::from("/tmp/carts.json")));
    assert_eq!(cfg.cart.storage_prefix, "basket-");
    assert_eq!(cfg.cart.toast.duration_ms, 3500);
    assert_eq!(cfg.cart.toast.position, ToastPosition::BottomCenter);
  }

  #[test]
  #[serial]
  fn malformed_values_are_config_errors() {
    clear_vars();
    env::set_var("CART_TOAST_POSITION", "middle");
    let result = AppConfig::from_env();
    clear_vars();
    assert!(matches!(result, Err(AppError::Config(_))));
  }
}
