use std::{collections::BTreeMap, env};

use url::Url;

use crate::error::{AdminError, AdminResult};

const INFURA_API_KEY_ENV_VAR: &str = "INFURA_API_KEY";
const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY";
const MNEMONIC_ENV_VAR: &str = "MNEMONIC";

pub const SEPOLIA_NETWORK: &str = "sepolia";
pub const LOCALHOST_NETWORK: &str = "localhost";

const SEPOLIA_INFURA_BASE_URL: &str = "https://sepolia.infura.io/v3/";
const SEPOLIA_CHAIN_ID: u64 = 11155111;

const LOCALHOST_RPC_URL: &str = "http://localhost:8545";
const LOCALHOST_CHAIN_ID: u64 = 31337;

/// A credential able to authorize transactions on a network.
#[derive(Clone, PartialEq, Eq)]
pub enum AccountCredential {
    /// hex encoded secp256k1 private key, with or without the `0x` prefix
    PrivateKey(String),
    Mnemonic { phrase: String, index: u32 },
}

// never print key material
impl std::fmt::Debug for AccountCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PrivateKey(_) => f.write_str("PrivateKey(..)"),
            Self::Mnemonic { index, .. } => f
                .debug_struct("Mnemonic")
                .field("index", index)
                .finish_non_exhaustive(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkConfig {
    pub name: String,
    /// empty when the endpoint could not be built from the environment
    pub rpc_url: String,
    pub chain_id: u64,
    pub accounts: Vec<AccountCredential>,
}

impl NetworkConfig {
    /// The credential of the first signer, which every operation acts as.
    pub fn first_account(&self) -> AdminResult<&AccountCredential> {
        self.accounts
            .first()
            .ok_or_else(|| AdminError::NoSigner(self.name.clone()))
    }

    pub fn endpoint(&self) -> AdminResult<Url> {
        if self.rpc_url.is_empty() {
            return Err(AdminError::MissingEndpoint(self.name.clone()));
        }
        Url::parse(&self.rpc_url).map_err(|e| AdminError::Provider(e.to_string()))
    }
}

/// Network name -> network config, resolved once at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NetworksConfig {
    networks: BTreeMap<String, NetworkConfig>,
}

impl NetworksConfig {
    /// load from env (and a `.env` file when present). Unset variables
    /// leave the endpoint empty or the account list empty.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self::from_vars(
            non_empty_var(INFURA_API_KEY_ENV_VAR),
            non_empty_var(PRIVATE_KEY_ENV_VAR),
            non_empty_var(MNEMONIC_ENV_VAR),
        )
    }

    pub fn from_vars(
        infura_api_key: Option<String>,
        private_key: Option<String>,
        mnemonic: Option<String>,
    ) -> Self {
        let sepolia_url = infura_api_key
            .and_then(|key| Url::parse(&format!("{SEPOLIA_INFURA_BASE_URL}{key}")).ok())
            .map(String::from)
            .unwrap_or_default();

        let sepolia = NetworkConfig {
            name: SEPOLIA_NETWORK.to_owned(),
            rpc_url: sepolia_url,
            chain_id: SEPOLIA_CHAIN_ID,
            accounts: private_key
                .clone()
                .map(AccountCredential::PrivateKey)
                .into_iter()
                .collect(),
        };

        // a local node is usually driven by its dev mnemonic
        let local_account = match (private_key, mnemonic) {
            (Some(key), _) => Some(AccountCredential::PrivateKey(key)),
            (None, Some(phrase)) => Some(AccountCredential::Mnemonic { phrase, index: 0 }),
            (None, None) => None,
        };

        let localhost = NetworkConfig {
            name: LOCALHOST_NETWORK.to_owned(),
            rpc_url: LOCALHOST_RPC_URL.to_owned(),
            chain_id: LOCALHOST_CHAIN_ID,
            accounts: local_account.into_iter().collect(),
        };

        let mut networks = Self::default();
        networks.insert(sepolia);
        networks.insert(localhost);
        networks
    }

    pub fn insert(&mut self, network: NetworkConfig) {
        self.networks.insert(network.name.clone(), network);
    }

    pub fn get(&self, name: &str) -> AdminResult<&NetworkConfig> {
        self.networks
            .get(name)
            .ok_or_else(|| AdminError::UnknownNetwork(name.to_owned()))
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
