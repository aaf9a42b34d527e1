pub mod dto;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod utils;

pub use routes::create_api_routes;
pub use state::AppState;
