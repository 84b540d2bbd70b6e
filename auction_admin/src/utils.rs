use chrono::{TimeZone, Utc};
use ethers::{
    types::{Address, U256},
    utils::to_checksum,
};

use crate::error::{AdminError, AdminResult};

/// EIP-55 checksummed form, as block explorers and ethers.js print it.
/// (note the debug fmt of an address is all lowercase, and `.to_string()` truncates it)
pub fn format_address(address: &Address) -> String {
    to_checksum(address, None)
}

pub fn format_fee_percent(percent: &U256) -> String {
    format!("{percent}%")
}

/// Raw epoch seconds, followed by the UTC date when it is representable.
pub fn format_end_time(epoch: &U256) -> String {
    let datetime = u64::try_from(*epoch)
        .ok()
        .and_then(|secs| i64::try_from(secs).ok())
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single());

    match datetime {
        Some(dt) => format!("{epoch} ({})", dt.to_rfc3339()),
        None => epoch.to_string(),
    }
}

pub fn parse_address(address: &str) -> AdminResult<Address> {
    address
        .trim()
        .parse()
        .map_err(|_| AdminError::InvalidAddress(address.to_owned()))
}
