pub mod infrastructure;

#[cfg(test)]
mod tests;

// Main exports for external use
pub use infrastructure::contracts::{init, instance, CampaignFactory, FactoryConfig, FactoryError};
