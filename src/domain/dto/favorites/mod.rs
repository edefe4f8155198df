pub mod response;

pub use response::{FavoritesResponse, SessionResponse, ToggleResponse};
