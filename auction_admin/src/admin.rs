//! The three administrative flows. Each is a single linear sequence: the
//! first failure aborts the rest and is handed back to the caller.

use ethers::types::{Address, U256};

use crate::{
    error::AdminResult,
    network::{AuctionContract, AuctionNetwork, AuctionParams, Confirmation},
    utils::{format_address, format_end_time, format_fee_percent},
};

/// State of an auction as read back after a deployment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployReport {
    pub address: Address,
    pub auction_end_time: U256,
    pub fee_receiver: Address,
    pub fee_percent: U256,
    pub confirmation: Confirmation,
}

/// Value of an administrative field before and after an update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateReport<T> {
    pub previous: T,
    pub current: T,
    pub confirmation: Confirmation,
}

pub async fn deploy<N: AuctionNetwork>(
    network: &N,
    params: &AuctionParams,
) -> AdminResult<DeployReport> {
    println!(
        "Deploying contract with account: {}",
        format_address(&network.signer_address())
    );

    let (auction, confirmation) = network.deploy(params).await?;

    let report = DeployReport {
        address: auction.address(),
        auction_end_time: auction.auction_end_time().await?,
        fee_receiver: auction.fee_receiver().await?,
        fee_percent: auction.fee_percent().await?,
        confirmation,
    };

    println!("Auction deployed to: {}", format_address(&report.address));
    println!(
        "Auction ends at: {}",
        format_end_time(&report.auction_end_time)
    );
    println!("Fee receiver: {}", format_address(&report.fee_receiver));
    println!("Fee percent: {}", format_fee_percent(&report.fee_percent));

    Ok(report)
}

pub async fn update_fee_receiver<N: AuctionNetwork>(
    network: &N,
    auction_address: Address,
    new_receiver: Address,
) -> AdminResult<UpdateReport<Address>> {
    println!(
        "Connected as: {}",
        format_address(&network.signer_address())
    );
    let auction = network.attach(auction_address).await?;

    let previous = auction.fee_receiver().await?;
    println!("Current fee receiver: {}", format_address(&previous));

    let confirmation = auction.update_fee_receiver(new_receiver).await?;
    log_confirmation(&confirmation);

    let current = auction.fee_receiver().await?;
    println!("Fee receiver updated to: {}", format_address(&current));

    Ok(UpdateReport {
        previous,
        current,
        confirmation,
    })
}

pub async fn update_fee_percent<N: AuctionNetwork>(
    network: &N,
    auction_address: Address,
    new_percent: U256,
) -> AdminResult<UpdateReport<U256>> {
    println!(
        "Connected as: {}",
        format_address(&network.signer_address())
    );
    let auction = network.attach(auction_address).await?;

    let previous = auction.fee_percent().await?;
    println!("Current fee percent: {}", format_fee_percent(&previous));

    let confirmation = auction.update_fee_percent(new_percent).await?;
    log_confirmation(&confirmation);

    let current = auction.fee_percent().await?;
    println!("Fee percent updated to: {}", format_fee_percent(&current));

    Ok(UpdateReport {
        previous,
        current,
        confirmation,
    })
}

fn log_confirmation(confirmation: &Confirmation) {
    match confirmation.block_number {
        Some(block) => println!(
            "Transaction {:?} mined in block {block}",
            confirmation.tx_hash
        ),
        None => println!("Transaction {:?} mined", confirmation.tx_hash),
    }
}

#[cfg(test)]
mod tests {
    use ethers::types::{Address, U256, U64};

    use crate::{
        config::{AccountCredential, NetworkConfig},
        contracts::test_utils::{SimulatedNetwork, GENESIS_TIMESTAMP},
        error::AdminError,
        network::{AuctionContract, AuctionNetwork, AuctionParams},
        utils::parse_address,
    };

    const DEV_PRIVATE_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn local_config(accounts: Vec<AccountCredential>) -> NetworkConfig {
        NetworkConfig {
            name: "localhost".to_owned(),
            rpc_url: "http://localhost:8545".to_owned(),
            chain_id: 31337,
            accounts,
        }
    }

    fn network() -> SimulatedNetwork {
        SimulatedNetwork::connect(&local_config(vec![AccountCredential::PrivateKey(
            DEV_PRIVATE_KEY.into(),
        )]))
        .unwrap()
    }

    fn default_params() -> AuctionParams {
        AuctionParams {
            duration_minutes: 30,
            fee_receiver: parse_address("0x1234567890abcdef1234567890abcdef12345678").unwrap(),
            fee_percent: U256::from(2),
        }
    }

    async fn deployed(network: &SimulatedNetwork) -> Address {
        super::deploy(network, &default_params())
            .await
            .unwrap()
            .address
    }

    #[tokio::test]
    async fn test_deploy_reads_back_constructor_args() {
        let network = network();
        let params = default_params();

        let report = super::deploy(&network, &params).await.unwrap();

        assert_eq!(report.fee_percent, U256::from(2));
        assert_eq!(report.fee_receiver, params.fee_receiver);
        assert_eq!(
            report.auction_end_time,
            U256::from(GENESIS_TIMESTAMP + 1 + 30 * 60)
        );
        assert_eq!(report.confirmation.block_number, Some(U64::from(1u64)));

        // the handle obtained by attaching sees the same contract
        let auction = network.attach(report.address).await.unwrap();
        assert_eq!(auction.fee_percent().await.unwrap(), U256::from(2));
        assert_eq!(auction.fee_receiver().await.unwrap(), params.fee_receiver);
    }

    #[tokio::test]
    async fn test_update_fee_receiver_then_read() {
        let network = network();
        let address = deployed(&network).await;
        let new_receiver = parse_address("0xABCDEF1234567890abcdef1234567890ABCDEF12").unwrap();

        let report = super::update_fee_receiver(&network, address, new_receiver)
            .await
            .unwrap();

        assert_eq!(report.previous, default_params().fee_receiver);
        assert_eq!(report.current, new_receiver);

        let auction = network.attach(address).await.unwrap();
        assert_eq!(auction.fee_receiver().await.unwrap(), new_receiver);
    }

    #[tokio::test]
    async fn test_update_fee_percent_then_read() {
        let network = network();
        let address = deployed(&network).await;

        let report = super::update_fee_percent(&network, address, U256::from(3))
            .await
            .unwrap();

        assert_eq!(report.previous, U256::from(2));
        assert_eq!(report.current, U256::from(3));

        let auction = network.attach(address).await.unwrap();
        assert_eq!(auction.fee_percent().await.unwrap(), U256::from(3));
    }

    #[tokio::test]
    async fn test_attach_to_missing_contract_fails() {
        let network = network();
        let nowhere = parse_address("0x000000000000000000000000000000000000dEaD").unwrap();

        assert_eq!(
            network.attach(nowhere).await.err(),
            Some(AdminError::NoContractAtAddress(nowhere))
        );
        assert_eq!(
            super::update_fee_percent(&network, nowhere, U256::from(3))
                .await
                .err(),
            Some(AdminError::NoContractAtAddress(nowhere))
        );
        assert_eq!(
            super::update_fee_receiver(&network, nowhere, nowhere)
                .await
                .err(),
            Some(AdminError::NoContractAtAddress(nowhere))
        );
        // nothing was mined
        assert_eq!(network.block_number(), 0);
    }

    #[tokio::test]
    async fn test_signer_is_reported_before_attaching() {
        let network = network();
        let nowhere = parse_address("0x000000000000000000000000000000000000dEaD").unwrap();

        assert!(super::update_fee_receiver(&network, nowhere, nowhere)
            .await
            .is_err());
        assert!(super::update_fee_percent(&network, nowhere, U256::from(3))
            .await
            .is_err());

        assert_eq!(
            network.calls(),
            vec!["signer_address", "attach", "signer_address", "attach"]
        );
    }

    #[test]
    fn test_no_signer_fails_before_network() {
        assert_eq!(
            SimulatedNetwork::connect(&local_config(vec![])).err(),
            Some(AdminError::NoSigner("localhost".to_owned()))
        );
    }

    #[tokio::test]
    async fn test_repeated_update_with_same_value_succeeds() {
        let network = network();
        let address = deployed(&network).await;
        let new_receiver = parse_address("0xABCDEF1234567890abcdef1234567890ABCDEF12").unwrap();

        let first = super::update_fee_receiver(&network, address, new_receiver)
            .await
            .unwrap();
        let second = super::update_fee_receiver(&network, address, new_receiver)
            .await
            .unwrap();

        assert_eq!(first.current, new_receiver);
        assert_eq!(second.previous, new_receiver);
        assert_eq!(second.current, new_receiver);
        assert_ne!(first.confirmation, second.confirmation);

        let first = super::update_fee_percent(&network, address, U256::from(5))
            .await
            .unwrap();
        let second = super::update_fee_percent(&network, address, U256::from(5))
            .await
            .unwrap();

        assert_eq!(first.current, U256::from(5));
        assert_eq!(second.previous, U256::from(5));
        assert_eq!(second.current, U256::from(5));
    }

    #[tokio::test]
    async fn test_deployments_get_distinct_addresses() {
        let network = network();

        let first = deployed(&network).await;
        let second = deployed(&network).await;

        assert_ne!(first, second);
    }
}
