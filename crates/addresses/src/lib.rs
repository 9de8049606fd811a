//! Contract and admin addresses of the Fraxtal testnet deployment.
//!
//! Every address is available in two forms: the exact string as it was
//! authored (EIP-55 casing preserved), and a typed [`Address`] constant with an
//! `_ADDRESS` suffix. The [`FRAXTAL_TESTNET`] table exposes the same data by
//! name.
//!
//! ```
//! use fraxtal_addresses::{FRAXTAL_TESTNET, PROXY_ADMIN};
//!
//! assert_eq!(FRAXTAL_TESTNET.value("PROXY_ADMIN"), Some(PROXY_ADMIN));
//! ```
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use alloy_primitives::Address;

pub mod constants;
pub use constants::*;

pub mod table;
pub use table::{
    AddressTable, Category, FRAXTAL_TESTNET, NamedAddress, TableError, UnknownCategory, UnknownName,
};

pub mod validate;
pub use validate::{AddressFormatError, is_valid_address, parse_address};

pub mod manifest;
pub use manifest::{Drift, Format, Manifest, ManifestError};
