use ethers::{
    abi::{Abi, Detokenize, Event, Tokenize},
    contract::{Contract, ContractCall},
    providers::{Http, Middleware, Provider},
    types::Address,
};
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

use crate::infrastructure::contracts::abis;
use crate::infrastructure::contracts::config::FactoryConfig;
use crate::infrastructure::contracts::types::FactoryError;
use crate::infrastructure::web3;

static INSTANCE: OnceLock<CampaignFactory> = OnceLock::new();

/// Handle to the deployed CampaignFactory contract.
///
/// Holds the parsed interface, the contract address and the network client.
/// It is never mutated after construction, so it can be shared freely
/// between tasks.
#[derive(Clone)]
pub struct CampaignFactory<M = Provider<Http>> {
    contract: Contract<M>,
}

impl<M: Middleware> CampaignFactory<M> {
    /// Binds `abi` to `address` on `client`. Nothing is sent over the wire.
    pub fn new(address: Address, abi: Abi, client: Arc<M>) -> Self {
        Self {
            contract: Contract::new(address, abi, client),
        }
    }

    /// Loads the interface named by `config` and binds it on an existing client.
    pub fn load_with_client(config: &FactoryConfig, client: Arc<M>) -> Result<Self, FactoryError> {
        let abi = abis::load_campaign_factory_abi(&config.artifact_path)?;
        let factory = Self::new(config.address, abi, client);

        info!(
            address = ?factory.address(),
            functions = factory.abi().functions.len(),
            events = factory.abi().events.len(),
            "CampaignFactory handle bound"
        );

        Ok(factory)
    }

    pub fn address(&self) -> Address {
        self.contract.address()
    }

    pub fn abi(&self) -> &Abi {
        self.contract.abi()
    }

    pub fn contract(&self) -> &Contract<M> {
        &self.contract
    }

    pub fn client(&self) -> Arc<M> {
        self.contract.client()
    }

    /// Function names in the interface, sorted.
    pub fn function_names(&self) -> Vec<&str> {
        self.abi().functions.keys().map(String::as_str).collect()
    }

    /// Event names in the interface, sorted.
    pub fn event_names(&self) -> Vec<&str> {
        self.abi().events.keys().map(String::as_str).collect()
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.abi().functions.contains_key(name)
    }

    /// Prepares a call to `name`. The returned call is only sent when the
    /// caller awaits `.call()` or `.send()` on it.
    pub fn method<T: Tokenize, D: Detokenize>(
        &self,
        name: &str,
        args: T,
    ) -> Result<ContractCall<M, D>, FactoryError> {
        Ok(self.contract.method(name, args)?)
    }

    /// Looks up an event definition, e.g. to build a log filter from its signature.
    pub fn event_by_name(&self, name: &str) -> Result<&Event, FactoryError> {
        self.abi()
            .event(name)
            .map_err(|e| FactoryError::Abi(format!("{}: {}", name, e)))
    }
}

impl CampaignFactory<Provider<Http>> {
    /// Reads the artifact, creates the HTTP provider and binds the contract.
    pub fn load(config: &FactoryConfig) -> Result<Self, FactoryError> {
        let provider = web3::connect(&config.rpc_url)?;
        Self::load_with_client(config, provider)
    }
}

impl<M: Middleware> fmt::Debug for CampaignFactory<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CampaignFactory")
            .field("address", &self.contract.address())
            .field("functions", &self.contract.abi().functions.len())
            .field("events", &self.contract.abi().events.len())
            .finish()
    }
}

/// Binds the process-wide handle on first use and returns it.
///
/// Once a handle exists, later calls return it unchanged and `config` is
/// ignored. If two threads race, the first stored handle wins.
pub fn init(config: &FactoryConfig) -> Result<&'static CampaignFactory, FactoryError> {
    if let Some(factory) = INSTANCE.get() {
        debug!("CampaignFactory already initialized");
        return Ok(factory);
    }

    let factory = CampaignFactory::load(config)?;
    Ok(INSTANCE.get_or_init(|| factory))
}

/// The process-wide handle, if `init` has succeeded.
pub fn instance() -> Option<&'static CampaignFactory> {
    INSTANCE.get()
}
