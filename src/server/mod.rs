mod api;
pub mod dto;
pub mod extract;
pub mod response;
mod router;
mod session;

pub use router::{AppState, create_router};
