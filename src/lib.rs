//! API CRUD de vehículos sobre PostgreSQL
//!
//! Librería del servicio: el binario solo arma la configuración, elige el
//! store y levanta el router que expone `routes::create_app`.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
