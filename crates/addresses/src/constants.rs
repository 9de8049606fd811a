//! Fraxtal testnet address constants.

use alloy_primitives::{Address, address};

/// Name of the network these addresses are deployed on.
pub const NETWORK: &str = "fraxtal-testnet";

pub const FRAXCHAIN_ADMIN: &str = "0x8b1E899ec5d51387a41Ee68261149F7d3Dfd7160";
pub const PROXY_ADMIN: &str = "0xfC00000000000000000000000000000000000007";
pub const L2_STANDARD_BRIDGE: &str = "0x4200000000000000000000000000000000000010";

/// Lending market controller.
pub const COMPTROLLER: &str = "0x012fcFb933b9a4335B1BCC836e6a9a475146beBd";

// Fraxswap-specific

/// Zero address placeholder: no factory is configured for this network.
pub const FRAXSWAP_FACTORY: &str = "0x0000000000000000000000000000000000000000";

pub const FRAXCHAIN_ADMIN_ADDRESS: Address =
    address!("0x8b1E899ec5d51387a41Ee68261149F7d3Dfd7160");
pub const PROXY_ADMIN_ADDRESS: Address = address!("0xfC00000000000000000000000000000000000007");
pub const L2_STANDARD_BRIDGE_ADDRESS: Address =
    address!("0x4200000000000000000000000000000000000010");
pub const COMPTROLLER_ADDRESS: Address = address!("0x012fcFb933b9a4335B1BCC836e6a9a475146beBd");
pub const FRAXSWAP_FACTORY_ADDRESS: Address = Address::ZERO;
