pub mod response;

pub use response::{DestinationDetail, DestinationSummary};
