pub mod handlers;
pub mod identity;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
