//! ethscan - Etherscan in the terminal
//!
//! An interactive client for Etherscan-compatible explorer APIs: account
//! balances, the latest block number and an address's transaction history.

pub mod api;
pub mod config;
pub mod error;
pub mod menu;

// Re-export commonly used types
pub use api::ExplorerClient;
pub use config::{Config, Endpoint};
pub use error::{ApiResult, ExplorerError};
pub use menu::Menu;
