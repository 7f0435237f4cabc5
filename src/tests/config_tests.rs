use std::collections::HashMap;
use std::path::PathBuf;

use crate::infrastructure::contracts::abis::DEFAULT_ARTIFACT_PATH;
use crate::infrastructure::contracts::addresses::{parse_address, CAMPAIGN_FACTORY_ADDRESS};
use crate::infrastructure::contracts::config::{
    FactoryConfig, ADDRESS_VAR, ARTIFACT_PATH_VAR, DEFAULT_RPC_URL, RPC_URL_VAR,
};
use crate::infrastructure::contracts::types::FactoryError;

fn config_from(vars: &[(&str, &str)]) -> Result<FactoryConfig, FactoryError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    FactoryConfig::from_lookup(|key| vars.get(key).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_the_deployed_address() {
        let config = FactoryConfig::from_defaults().unwrap();

        assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(config.artifact_path, PathBuf::from(DEFAULT_ARTIFACT_PATH));
        assert_eq!(
            format!("{:?}", config.address),
            CAMPAIGN_FACTORY_ADDRESS.to_lowercase()
        );
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            (RPC_URL_VAR, "https://sepolia.example.org"),
            (ARTIFACT_PATH_VAR, "/tmp/Factory.json"),
            (ADDRESS_VAR, "0x428e3b4bC0f5F94d5CCf9Eb7DAd11Ee7Ba621252"),
        ])
        .unwrap();

        assert_eq!(config.rpc_url, "https://sepolia.example.org");
        assert_eq!(config.artifact_path, PathBuf::from("/tmp/Factory.json"));
        assert_eq!(
            config.address,
            parse_address("0x428e3b4bC0f5F94d5CCf9Eb7DAd11Ee7Ba621252").unwrap()
        );
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config = config_from(&[(RPC_URL_VAR, ""), (ADDRESS_VAR, "  ")]).unwrap();

        assert_eq!(config, FactoryConfig::from_defaults().unwrap());
    }

    #[test]
    fn test_invalid_address_override() {
        let err = config_from(&[(ADDRESS_VAR, "0x1234")]).unwrap_err();

        match err {
            FactoryError::InvalidAddress(message) => assert!(message.starts_with("0x1234")),
            other => panic!("expected InvalidAddress, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_address_trims_whitespace() {
        let padded = format!("  {}\n", CAMPAIGN_FACTORY_ADDRESS);
        assert_eq!(
            parse_address(&padded).unwrap(),
            parse_address(CAMPAIGN_FACTORY_ADDRESS).unwrap()
        );
    }

    #[test]
    fn test_parse_address_rejects_non_hex() {
        assert!(parse_address("0xzzB0F7917Dca6b63b9E6c798404447eA0DB43435").is_err());
    }
}
