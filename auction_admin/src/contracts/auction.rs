use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use ethers::{
    contract::{abigen, ContractCall, ContractError, ContractFactory},
    providers::Middleware,
    types::{Address, TransactionReceipt, H256, U256},
};

use crate::{
    client::{EtherSigner, NetworkClient},
    error::{AdminError, AdminResult},
    network::{AuctionContract, AuctionNetwork, AuctionParams, Confirmation},
};

use super::artifact::HardhatArtifact;

// Typed binding for the calls the admin operations make. Deployment goes
// through the compiled artifact instead, since it needs the bytecode.
abigen!(
    Auction,
    r#"[
        function auctionEndTime() external view returns (uint256)
        function feeReceiver() external view returns (address)
        function feePercent() external view returns (uint256)
        function updateFeeReceiver(address _newReceiver) external
        function updateFeePercent(uint256 _newPercent) external
    ]"#
);

fn contract_error<M: Middleware>(e: ContractError<M>) -> AdminError {
    AdminError::Contract(e.to_string())
}

pub struct EthersAuction<M> {
    contract: Auction<M>,
}

impl<M: Middleware> EthersAuction<M> {
    pub fn new(address: Address, client: Arc<M>) -> Self {
        Self {
            contract: Auction::new(address, client),
        }
    }

    async fn confirm(&self, call: ContractCall<M, ()>) -> AdminResult<Confirmation> {
        let pending = call.send().await.map_err(contract_error)?;
        let tx_hash = *pending;

        let receipt = pending
            .await
            .map_err(|e| AdminError::Provider(e.to_string()))?;

        confirmation_for(tx_hash, receipt)
    }
}

/// A pending transaction resolving to no receipt was dropped from the mempool.
fn confirmation_for(
    tx_hash: H256,
    receipt: Option<TransactionReceipt>,
) -> AdminResult<Confirmation> {
    let receipt = receipt.ok_or(AdminError::Dropped(tx_hash))?;
    Confirmation::from_receipt(&receipt)
}

impl<M: Middleware> AuctionContract for EthersAuction<M> {
    fn address(&self) -> Address {
        self.contract.address()
    }

    async fn auction_end_time(&self) -> AdminResult<U256> {
        self.contract
            .auction_end_time()
            .call()
            .await
            .map_err(contract_error)
    }

    async fn fee_receiver(&self) -> AdminResult<Address> {
        self.contract
            .fee_receiver()
            .call()
            .await
            .map_err(contract_error)
    }

    async fn fee_percent(&self) -> AdminResult<U256> {
        self.contract
            .fee_percent()
            .call()
            .await
            .map_err(contract_error)
    }

    async fn update_fee_receiver(&self, new_receiver: Address) -> AdminResult<Confirmation> {
        self.confirm(self.contract.update_fee_receiver(new_receiver))
            .await
    }

    async fn update_fee_percent(&self, new_percent: U256) -> AdminResult<Confirmation> {
        self.confirm(self.contract.update_fee_percent(new_percent))
            .await
    }
}

/// [`AuctionNetwork`] over any ethers middleware; the scripts use a
/// signer-backed JSON-RPC client.
pub struct EthersNetwork<M> {
    client: Arc<M>,
    signer_address: Address,
    artifact_path: PathBuf,
}

impl<M: Middleware> EthersNetwork<M> {
    /// `artifact_path` is only read when deploying.
    pub fn new(client: Arc<M>, signer_address: Address, artifact_path: impl AsRef<Path>) -> Self {
        Self {
            client,
            signer_address,
            artifact_path: artifact_path.as_ref().to_path_buf(),
        }
    }
}

impl EthersNetwork<EtherSigner> {
    pub fn from_client(client: &NetworkClient, artifact_path: impl AsRef<Path>) -> Self {
        Self::new(client.signer(), client.address(), artifact_path)
    }
}

impl<M: Middleware> AuctionNetwork for EthersNetwork<M> {
    type Contract = EthersAuction<M>;

    fn signer_address(&self) -> Address {
        self.signer_address
    }

    async fn deploy(&self, params: &AuctionParams) -> AdminResult<(Self::Contract, Confirmation)> {
        let artifact = HardhatArtifact::load(&self.artifact_path)?;
        artifact.check_auction_interface()?;

        let factory = ContractFactory::new(artifact.abi, artifact.bytecode, self.client.clone());
        let deployer = factory
            .deploy((
                U256::from(params.duration_minutes),
                params.fee_receiver,
                params.fee_percent,
            ))
            .map_err(contract_error)?;

        let (contract, receipt) = deployer.send_with_receipt().await.map_err(contract_error)?;
        let confirmation = Confirmation::from_receipt(&receipt)?;

        Ok((
            EthersAuction::new(contract.address(), self.client.clone()),
            confirmation,
        ))
    }

    async fn attach(&self, address: Address) -> AdminResult<Self::Contract> {
        let code = self
            .client
            .get_code(address, None)
            .await
            .map_err(|e| AdminError::Provider(e.to_string()))?;
        if code.is_empty() {
            return Err(AdminError::NoContractAtAddress(address));
        }

        Ok(EthersAuction::new(address, self.client.clone()))
    }
}
