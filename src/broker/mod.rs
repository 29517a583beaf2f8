mod alpaca;
mod models;

pub use alpaca::{position_qty_from_response, AlpacaClient};
pub use models::Position;
