use std::sync::Arc;

use ethers::{
    core::k256::ecdsa::SigningKey,
    middleware::SignerMiddleware,
    providers::{Http, Provider},
    signers::{coins_bip39::English, LocalWallet, MnemonicBuilder, Signer, Wallet},
    types::Address,
};

use crate::{
    config::{AccountCredential, NetworkConfig},
    error::{AdminError, AdminResult},
};

pub type EtherSigner = SignerMiddleware<Provider<Http>, Wallet<SigningKey>>;

/// Signer-backed connection to one configured network.
#[derive(Clone, Debug)]
pub struct NetworkClient {
    signer: Arc<EtherSigner>,
}

impl NetworkClient {
    /// Resolve the first signer of `config` and bind it to the network's RPC
    /// endpoint. Nothing is sent to the network here; a missing signer or
    /// endpoint is reported before any request is made.
    pub fn connect(config: &NetworkConfig) -> AdminResult<Self> {
        let credential = config.first_account()?;
        let endpoint = config.endpoint()?;

        let wallet = wallet_from_credential(credential, config.chain_id)?;
        let provider = Provider::<Http>::try_from(endpoint.as_str())
            .map_err(|e| AdminError::Provider(e.to_string()))?;

        Ok(Self {
            signer: Arc::new(SignerMiddleware::new(provider, wallet)),
        })
    }

    pub fn address(&self) -> Address {
        self.signer.address()
    }

    pub fn signer(&self) -> Arc<EtherSigner> {
        self.signer.clone()
    }
}

pub fn wallet_from_credential(
    credential: &AccountCredential,
    chain_id: u64,
) -> AdminResult<Wallet<SigningKey>> {
    let wallet = match credential {
        AccountCredential::PrivateKey(key) => key
            .parse::<LocalWallet>()
            .map_err(|e| AdminError::InvalidCredential(e.to_string()))?,
        AccountCredential::Mnemonic { phrase, index } => MnemonicBuilder::<English>::default()
            .phrase(phrase.as_str())
            .index(*index)
            .map_err(|e| AdminError::InvalidCredential(e.to_string()))?
            .build()
            .map_err(|e| AdminError::InvalidCredential(e.to_string()))?,
    };

    Ok(wallet.with_chain_id(chain_id))
}
