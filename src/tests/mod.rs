use std::path::{Path, PathBuf};

pub mod config_tests;

/// The CampaignFactory build output checked into the repository.
pub fn fixture_artifact() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("ethereum/build/CampaignFactory.json")
}

/// Artifact with an inline ABI that also declares an event.
pub const INLINE_ARTIFACT: &str = r#"{
    "contractName": "Registry",
    "bytecode": "0x6080",
    "interface": [
        {
            "type": "event",
            "name": "Deployed",
            "anonymous": false,
            "inputs": [{ "name": "instance", "type": "address", "indexed": true }]
        },
        {
            "type": "function",
            "name": "count",
            "inputs": [],
            "outputs": [{ "name": "", "type": "uint256" }],
            "stateMutability": "view"
        }
    ]
}"#;
