//! # adgram-client
//!
//! HTTP client for the Adgram marketplace backend.
//!
//! [`MarketClient`] implements the [`adgram_proto::DealApi`] seam the sync
//! engine polls through, and exposes the collaborator glue endpoints (auth,
//! channels, campaigns, deal creation) as thin typed calls.
//!
//! ```no_run
//! use adgram_client::MarketClient;
//! use adgram_proto::DealApi;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MarketClient::from_env()?;
//!     for deal in client.fetch_deals().await? {
//!         println!("#{} {} ({})", deal.id, deal.title, deal.status);
//!     }
//!     Ok(())
//! }
//! ```

mod api;
mod config;
mod error;
mod types;

pub use api::MarketClient;
pub use config::MarketConfig;
pub use error::{ClientError, ClientResult};
pub use types::{
    Campaign, Channel, DealCreated, NewCampaign, NewChannel, NewDeal, User,
};
