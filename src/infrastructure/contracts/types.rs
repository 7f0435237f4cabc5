// ============ ERROR TYPES ============

/// Failures raised while binding the CampaignFactory handle.
///
/// Every variant is a startup failure: the artifact or configuration is
/// inconsistent with the deployment, so nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    #[error("Contract artifact not found: {path}")]
    ArtifactNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read contract artifact {path}: {source}")]
    ArtifactUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed contract artifact {path}: {reason}")]
    MalformedArtifact { path: String, reason: String },

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("ABI error: {0}")]
    Abi(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ethers::contract::AbiError> for FactoryError {
    fn from(err: ethers::contract::AbiError) -> Self {
        FactoryError::Abi(err.to_string())
    }
}
