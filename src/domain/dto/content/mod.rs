pub mod request;

pub use request::ContentQuery;
