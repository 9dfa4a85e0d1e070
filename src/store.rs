pub mod store;

pub use store::{FlightStore, LoadReport};
