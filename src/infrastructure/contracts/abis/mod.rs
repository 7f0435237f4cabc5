use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use ethers::abi::Abi;
use serde::Deserialize;
use tracing::debug;

use crate::infrastructure::contracts::types::FactoryError;

/// Where the compile step drops the CampaignFactory build output.
pub const DEFAULT_ARTIFACT_PATH: &str = "ethereum/build/CampaignFactory.json";

/// Compiler output for a single contract. Only the interface is consumed;
/// bytecode and the other compiler fields are ignored.
#[derive(Debug, Deserialize)]
pub struct BuildArtifact {
    pub interface: Interface,
}

/// solc's legacy output stores the ABI as a JSON-encoded string, newer
/// toolchains inline the array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Interface {
    Encoded(String),
    Inline(Abi),
}

impl Interface {
    fn into_abi(self) -> Result<Abi, serde_json::Error> {
        match self {
            Interface::Encoded(text) => serde_json::from_str(&text),
            Interface::Inline(abi) => Ok(abi),
        }
    }
}

pub fn load_campaign_factory_abi(path: impl AsRef<Path>) -> Result<Abi, FactoryError> {
    load_interface(path)
}

/// Reads a build artifact from disk and parses its interface.
pub fn load_interface(path: impl AsRef<Path>) -> Result<Abi, FactoryError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FactoryError::ArtifactNotFound {
            path: display.clone(),
            source: e,
        },
        _ => FactoryError::ArtifactUnreadable {
            path: display.clone(),
            source: e,
        },
    })?;

    parse_interface(&display, &content)
}

/// Parses artifact text. `path` is only used in diagnostics.
pub fn parse_interface(path: &str, content: &str) -> Result<Abi, FactoryError> {
    let malformed = |reason: String| FactoryError::MalformedArtifact {
        path: path.to_string(),
        reason,
    };

    let artifact: BuildArtifact =
        serde_json::from_str(content).map_err(|e| malformed(e.to_string()))?;

    let abi = artifact
        .interface
        .into_abi()
        .map_err(|e| malformed(format!("interface is not a valid ABI: {}", e)))?;

    debug!(
        path,
        functions = abi.functions.len(),
        events = abi.events.len(),
        "Parsed contract interface"
    );

    Ok(abi)
}
