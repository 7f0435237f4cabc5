pub mod contracts;
pub mod web3;
