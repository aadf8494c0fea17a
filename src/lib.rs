pub mod error;
pub mod http_client;
pub mod json_extract;
pub mod league_data;
pub mod page_fetch;
pub mod pipeline;
pub mod render;
pub mod script_locator;
pub mod standings;

pub use error::{Dataset, StandingsError};
pub use pipeline::{build_league, League};
