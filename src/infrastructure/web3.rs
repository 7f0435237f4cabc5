use std::sync::Arc;

use ethers::providers::{Http, Provider};
use tracing::debug;

use crate::infrastructure::contracts::types::FactoryError;

/// Creates the HTTP provider used by contract handles.
///
/// Only the URL is parsed here; the first request goes out when a caller
/// invokes a method on the handle.
pub fn connect(rpc_url: &str) -> Result<Arc<Provider<Http>>, FactoryError> {
    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| FactoryError::Provider(format!("invalid RPC URL {}: {}", rpc_url, e)))?;

    debug!(rpc_url, "Created HTTP provider");
    Ok(Arc::new(provider))
}
