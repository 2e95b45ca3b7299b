pub mod app;
pub mod dates;
pub mod db;
pub mod errors;
pub mod filters;
pub mod handlers;
pub mod models;
pub mod report;
pub mod state;
pub mod ui;

pub use app::router;
pub use db::{connect, resolve_database_url};
pub use state::AppState;
