pub mod response;

pub use response::{DestinationMapResponse, PlaceDetail, PlaceListResponse, PlaceSummary};
