//! Weather lookup front-end: a form posts a place name, the server fetches
//! current conditions from the upstream weather API, keeps the latest raw
//! payload in a single in-memory slot, and serves it back on `/showResponse`.

pub mod cache;
pub mod config;
pub mod routes;
pub mod weather;

pub use cache::ResponseSlot;
pub use config::Config;
pub use routes::{create_router, AppState};
pub use weather::{WeatherClient, WeatherError};
