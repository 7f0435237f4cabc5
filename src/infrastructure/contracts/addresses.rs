use ethers::types::Address;

use crate::infrastructure::contracts::types::FactoryError;

// Live CampaignFactory deployment. Retargeting means changing this literal or
// setting CAMPAIGN_FACTORY_ADDRESS.
pub const CAMPAIGN_FACTORY_ADDRESS: &str = "0x7bB0F7917Dca6b63b9E6c798404447eA0DB43435";

pub fn campaign_factory_address() -> Result<Address, FactoryError> {
    parse_address(CAMPAIGN_FACTORY_ADDRESS)
}

pub fn parse_address(value: &str) -> Result<Address, FactoryError> {
    value
        .trim()
        .parse::<Address>()
        .map_err(|e| FactoryError::InvalidAddress(format!("{}: {}", value, e)))
}
