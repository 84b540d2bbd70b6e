use std::{env, path::PathBuf};

use auction_admin::{
    client::{EtherSigner, NetworkClient},
    config::{NetworksConfig, LOCALHOST_NETWORK},
    contracts::auction::EthersNetwork,
    network::AuctionParams,
    utils::parse_address,
};
use ethers::types::{Address, U256};

const NETWORK_ENV_VAR: &str = "AUCTION_NETWORK";
const ARTIFACT_ENV_VAR: &str = "AUCTION_ARTIFACT";

const DURATION_MINUTES_ENV_VAR: &str = "AUCTION_DURATION_MINUTES";
const FEE_RECEIVER_ENV_VAR: &str = "AUCTION_FEE_RECEIVER";
const FEE_PERCENT_ENV_VAR: &str = "AUCTION_FEE_PERCENT";

const AUCTION_ADDRESS_ENV_VAR: &str = "AUCTION_ADDRESS";
const NEW_FEE_RECEIVER_ENV_VAR: &str = "NEW_FEE_RECEIVER";
const NEW_FEE_PERCENT_ENV_VAR: &str = "NEW_FEE_PERCENT";

const DEFAULT_ARTIFACT: &str = "artifacts/contracts/Auction.sol/Auction.json";

const DEFAULT_DURATION_MINUTES: u64 = 30;
const DEFAULT_FEE_RECEIVER: &str = "0x1234567890abcdef1234567890abcdef12345678";
const DEFAULT_FEE_PERCENT: u64 = 2;

// first contract deployed by the first dev account of a fresh local node
const DEFAULT_AUCTION_ADDRESS: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
const DEFAULT_NEW_FEE_RECEIVER: &str = "0xABCDEF1234567890abcdef1234567890ABCDEF12";
const DEFAULT_NEW_FEE_PERCENT: u64 = 3;

/// Settings shared by every script: which network to act on, as whom, and
/// where the compiled contract lives.
pub struct ScriptConfig {
    pub network: String,
    pub networks: NetworksConfig,
    pub artifact_path: PathBuf,
}

impl ScriptConfig {
    /// load from env, else local
    pub fn load() -> Self {
        let networks = NetworksConfig::from_env();
        let network = var_or(NETWORK_ENV_VAR, LOCALHOST_NETWORK);
        let artifact_path = PathBuf::from(var_or(ARTIFACT_ENV_VAR, DEFAULT_ARTIFACT));

        println!("Using network: {network}");

        Self {
            network,
            networks,
            artifact_path,
        }
    }

    pub fn connect(&self) -> anyhow::Result<EthersNetwork<EtherSigner>> {
        let network = self.networks.get(&self.network)?;
        let client = NetworkClient::connect(network)?;

        Ok(EthersNetwork::from_client(&client, &self.artifact_path))
    }
}

pub fn deploy_params() -> anyhow::Result<AuctionParams> {
    Ok(AuctionParams {
        duration_minutes: parse_u64(
            DURATION_MINUTES_ENV_VAR,
            &var_or(DURATION_MINUTES_ENV_VAR, &DEFAULT_DURATION_MINUTES.to_string()),
        )?,
        fee_receiver: parse_address(&var_or(FEE_RECEIVER_ENV_VAR, DEFAULT_FEE_RECEIVER))?,
        fee_percent: U256::from(parse_u64(
            FEE_PERCENT_ENV_VAR,
            &var_or(FEE_PERCENT_ENV_VAR, &DEFAULT_FEE_PERCENT.to_string()),
        )?),
    })
}

pub fn auction_address() -> anyhow::Result<Address> {
    Ok(parse_address(&var_or(
        AUCTION_ADDRESS_ENV_VAR,
        DEFAULT_AUCTION_ADDRESS,
    ))?)
}

pub fn new_fee_receiver() -> anyhow::Result<Address> {
    Ok(parse_address(&var_or(
        NEW_FEE_RECEIVER_ENV_VAR,
        DEFAULT_NEW_FEE_RECEIVER,
    ))?)
}

pub fn new_fee_percent() -> anyhow::Result<U256> {
    let percent = parse_u64(
        NEW_FEE_PERCENT_ENV_VAR,
        &var_or(NEW_FEE_PERCENT_ENV_VAR, &DEFAULT_NEW_FEE_PERCENT.to_string()),
    )?;
    Ok(U256::from(percent))
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

fn parse_u64(key: &str, value: &str) -> anyhow::Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("{key}='{value}' is not an unsigned integer: {e}"))
}
