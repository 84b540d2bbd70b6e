use std::path::Path;

use ethers::{abi::Abi, types::Bytes};
use serde::Deserialize;

use crate::error::{AdminError, AdminResult};

/// Functions the admin operations call on a deployed auction.
pub const AUCTION_FUNCTIONS: [&str; 5] = [
    "auctionEndTime",
    "feeReceiver",
    "feePercent",
    "updateFeeReceiver",
    "updateFeePercent",
];

/// duration in minutes, fee receiver, fee percent
const AUCTION_CONSTRUCTOR_INPUTS: usize = 3;

/// Compiled contract as written by hardhat under
/// `artifacts/contracts/<Source>.sol/<Name>.json`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardhatArtifact {
    pub contract_name: String,
    pub abi: Abi,
    pub bytecode: Bytes,
}

impl HardhatArtifact {
    pub fn load(path: &Path) -> AdminResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| AdminError::Artifact(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> AdminResult<Self> {
        serde_json::from_str(json).map_err(|e| AdminError::Artifact(e.to_string()))
    }

    /// Check that the artifact is deployable and exposes what the admin
    /// operations call.
    pub fn check_auction_interface(&self) -> AdminResult<()> {
        if self.bytecode.is_empty() {
            return Err(AdminError::Artifact(format!(
                "{} has no creation bytecode",
                self.contract_name
            )));
        }

        let constructor_inputs = self
            .abi
            .constructor()
            .map(|c| c.inputs.len())
            .unwrap_or_default();
        if constructor_inputs != AUCTION_CONSTRUCTOR_INPUTS {
            return Err(AdminError::Artifact(format!(
                "{} constructor takes {constructor_inputs} arguments, expected {AUCTION_CONSTRUCTOR_INPUTS}",
                self.contract_name
            )));
        }

        if let Some(missing) = AUCTION_FUNCTIONS
            .iter()
            .find(|name| self.abi.function(name).is_err())
        {
            return Err(AdminError::Artifact(format!(
                "{} does not expose {missing}()",
                self.contract_name
            )));
        }

        Ok(())
    }
}
