// demos/cart_server/src/web/handlers/mod.rs

pub mod cart_handlers;
