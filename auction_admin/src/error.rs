use ethers::types::{Address, H256};
use thiserror::Error;

pub type AdminResult<T> = std::result::Result<T, AdminError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdminError {
    #[error("Unknown network '{0}'")]
    UnknownNetwork(String),

    #[error("Network '{0}' has no RPC endpoint configured")]
    MissingEndpoint(String),

    #[error("No signer available for network '{0}'")]
    NoSigner(String),

    #[error("Invalid signer credential: {0}")]
    InvalidCredential(String),

    #[error("Invalid address '{0}'")]
    InvalidAddress(String),

    #[error("Contract artifact error: {0}")]
    Artifact(String),

    #[error("No contract at address {0:?}")]
    NoContractAtAddress(Address),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Contract call failed: {0}")]
    Contract(String),

    #[error("Transaction {0:?} was dropped before confirmation")]
    Dropped(H256),

    #[error("Transaction {0:?} reverted")]
    Reverted(H256),
}
