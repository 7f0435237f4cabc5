// Contract integration module
// Binds the deployed CampaignFactory contract to a network client

pub mod abis;
pub mod addresses;
pub mod client;
pub mod config;
pub mod types;

// Re-export main components for easy access
pub use client::{init, instance, CampaignFactory};
pub use config::FactoryConfig;
pub use types::FactoryError;
