use std::path::PathBuf;

use ethers::types::Address;
use tracing::debug;

use crate::infrastructure::contracts::abis::DEFAULT_ARTIFACT_PATH;
use crate::infrastructure::contracts::addresses::{self, CAMPAIGN_FACTORY_ADDRESS};
use crate::infrastructure::contracts::types::FactoryError;

pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

pub const RPC_URL_VAR: &str = "RPC_URL";
pub const ARTIFACT_PATH_VAR: &str = "CAMPAIGN_FACTORY_ARTIFACT";
pub const ADDRESS_VAR: &str = "CAMPAIGN_FACTORY_ADDRESS";

/// Everything needed to bind the CampaignFactory handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryConfig {
    pub rpc_url: String,
    pub artifact_path: PathBuf,
    pub address: Address,
}

impl FactoryConfig {
    /// Configuration built only from the compiled-in constants.
    pub fn from_defaults() -> Result<Self, FactoryError> {
        Self::from_lookup(|_| None)
    }

    /// Loads `.env` if present, then applies environment overrides.
    pub fn from_env() -> Result<Self, FactoryError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FactoryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let rpc_url = get(RPC_URL_VAR).unwrap_or_else(|| DEFAULT_RPC_URL.to_string());
        let artifact_path = PathBuf::from(
            get(ARTIFACT_PATH_VAR).unwrap_or_else(|| DEFAULT_ARTIFACT_PATH.to_string()),
        );

        let address = match get(ADDRESS_VAR) {
            Some(value) => {
                debug!(address = %value, "Using CampaignFactory address override");
                addresses::parse_address(&value)?
            }
            None => addresses::campaign_factory_address().map_err(|e| {
                FactoryError::Config(format!(
                    "built-in address {} is invalid: {}",
                    CAMPAIGN_FACTORY_ADDRESS, e
                ))
            })?,
        };

        Ok(Self {
            rpc_url,
            artifact_path,
            address,
        })
    }
}
