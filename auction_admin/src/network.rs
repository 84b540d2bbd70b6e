//! The seam between the admin operations and whatever network executes them.

use ethers::types::{Address, TransactionReceipt, H256, U256, U64};

use crate::error::{AdminError, AdminResult};

/// Constructor arguments of an `Auction` deployment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuctionParams {
    pub duration_minutes: u64,
    pub fee_receiver: Address,
    pub fee_percent: U256,
}

/// A state-changing call (or deployment) that has been mined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Confirmation {
    pub tx_hash: H256,
    pub block_number: Option<U64>,
}

impl Confirmation {
    pub fn from_receipt(receipt: &TransactionReceipt) -> AdminResult<Self> {
        if receipt.status == Some(U64::zero()) {
            return Err(AdminError::Reverted(receipt.transaction_hash));
        }

        Ok(Self {
            tx_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
        })
    }
}

/// Callable handle to a deployed `Auction` contract.
#[allow(async_fn_in_trait)]
pub trait AuctionContract {
    fn address(&self) -> Address;

    async fn auction_end_time(&self) -> AdminResult<U256>;

    async fn fee_receiver(&self) -> AdminResult<Address>;

    async fn fee_percent(&self) -> AdminResult<U256>;

    /// Submit `updateFeeReceiver` and wait until it is mined.
    async fn update_fee_receiver(&self, new_receiver: Address) -> AdminResult<Confirmation>;

    /// Submit `updateFeePercent` and wait until it is mined.
    async fn update_fee_percent(&self, new_percent: U256) -> AdminResult<Confirmation>;
}

/// A network with a signer, able to deploy new auctions or attach to
/// deployed ones.
#[allow(async_fn_in_trait)]
pub trait AuctionNetwork {
    type Contract: AuctionContract;

    fn signer_address(&self) -> Address;

    async fn deploy(&self, params: &AuctionParams) -> AdminResult<(Self::Contract, Confirmation)>;

    /// Fails with [`AdminError::NoContractAtAddress`] when no code lives at
    /// `address`.
    async fn attach(&self, address: Address) -> AdminResult<Self::Contract>;
}
