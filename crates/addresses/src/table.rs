//! Name-indexed view over the address constants.

use std::{collections::HashSet, fmt, str::FromStr};

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::{
    constants::*,
    validate::{AddressFormatError, parse_address},
};

/// The Fraxtal testnet address book.
pub static FRAXTAL_TESTNET: AddressTable = AddressTable::new(NETWORK, FRAXTAL_TESTNET_ENTRIES);

const FRAXTAL_TESTNET_ENTRIES: &[NamedAddress] = &[
    NamedAddress::new(
        "FRAXCHAIN_ADMIN",
        FRAXCHAIN_ADMIN,
        FRAXCHAIN_ADMIN_ADDRESS,
        Category::Admin,
    ),
    NamedAddress::new("PROXY_ADMIN", PROXY_ADMIN, PROXY_ADMIN_ADDRESS, Category::Admin),
    NamedAddress::new(
        "L2_STANDARD_BRIDGE",
        L2_STANDARD_BRIDGE,
        L2_STANDARD_BRIDGE_ADDRESS,
        Category::Bridge,
    ),
    NamedAddress::new("COMPTROLLER", COMPTROLLER, COMPTROLLER_ADDRESS, Category::Lending),
    NamedAddress::new(
        "FRAXSWAP_FACTORY",
        FRAXSWAP_FACTORY,
        FRAXSWAP_FACTORY_ADDRESS,
        Category::Fraxswap,
    ),
];

/// Grouping of an address within the address book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Privileged chain or proxy administration accounts.
    Admin,
    /// Bridge predeploys.
    Bridge,
    /// Lending protocol contracts.
    Lending,
    /// Fraxswap contracts.
    Fraxswap,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Admin, Self::Bridge, Self::Lending, Self::Fraxswap];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Bridge => "bridge",
            Self::Lending => "lending",
            Self::Fraxswap => "fraxswap",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category `{0}`")]
pub struct UnknownCategory(String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A single named address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamedAddress {
    name: &'static str,
    value: &'static str,
    #[serde(skip)]
    address: Address,
    category: Category,
}

impl NamedAddress {
    pub const fn new(
        name: &'static str,
        value: &'static str,
        address: Address,
        category: Category,
    ) -> Self {
        Self { name, value, address, category }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The address exactly as authored, casing included.
    pub const fn value(&self) -> &'static str {
        self.value
    }

    pub const fn address(&self) -> Address {
        self.address
    }

    pub const fn category(&self) -> Category {
        self.category
    }

    /// Whether this entry holds the zero address placeholder.
    pub fn is_unset(&self) -> bool {
        self.address.is_zero()
    }

    /// Returns the address unless it is the zero placeholder.
    pub fn address_if_set(&self) -> Option<Address> {
        (!self.is_unset()).then_some(self.address)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no address named `{0}`")]
pub struct UnknownName(pub String);

/// Invariant violations found by [`AddressTable::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("address `{name}` is declared more than once")]
    DuplicateName { name: &'static str },
    #[error("address `{name}` is malformed")]
    Malformed {
        name: &'static str,
        #[source]
        source: AddressFormatError,
    },
    #[error("address `{name}` is `{value}` but its typed constant is `{address}`")]
    AddressMismatch { name: &'static str, value: &'static str, address: Address },
    #[error("address `{name}` is `{value}`, expected checksum casing `{expected}`")]
    NotChecksummed { name: &'static str, value: &'static str, expected: String },
}

/// A fixed, read-only set of named addresses for one network.
#[derive(Debug, Clone, Copy)]
pub struct AddressTable {
    network: &'static str,
    entries: &'static [NamedAddress],
}

impl AddressTable {
    pub const fn new(network: &'static str, entries: &'static [NamedAddress]) -> Self {
        Self { network, entries }
    }

    pub const fn network(&self) -> &'static str {
        self.network
    }

    /// Looks up an entry by its exact name.
    pub fn get(&self, name: &str) -> Option<&'static NamedAddress> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn try_get(&self, name: &str) -> Result<&'static NamedAddress, UnknownName> {
        self.get(name).ok_or_else(|| UnknownName(name.to_string()))
    }

    /// Returns the address string exactly as authored.
    pub fn value(&self, name: &str) -> Option<&'static str> {
        self.get(name).map(NamedAddress::value)
    }

    pub fn address(&self, name: &str) -> Option<Address> {
        self.get(name).map(NamedAddress::address)
    }

    /// Case-insensitive lookup, only meant for suggesting a name after [`Self::get`] missed.
    pub fn find_ignore_case(&self, name: &str) -> Option<&'static NamedAddress> {
        self.entries.iter().find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static NamedAddress> + use<> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + use<> {
        self.entries.iter().map(NamedAddress::name)
    }

    pub fn by_category(
        &self,
        category: Category,
    ) -> impl Iterator<Item = &'static NamedAddress> + use<> {
        self.entries.iter().filter(move |entry| entry.category == category)
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks that names are unique, every value parses, matches its typed
    /// address and is spelled in EIP-55 casing.
    pub fn validate(&self) -> Result<(), TableError> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in self.entries {
            if !seen.insert(entry.name) {
                return Err(TableError::DuplicateName { name: entry.name });
            }

            let parsed = parse_address(entry.value)
                .map_err(|source| TableError::Malformed { name: entry.name, source })?;
            if parsed != entry.address {
                return Err(TableError::AddressMismatch {
                    name: entry.name,
                    value: entry.value,
                    address: entry.address,
                });
            }

            let expected = parsed.to_checksum(None);
            if expected != entry.value {
                return Err(TableError::NotChecksummed {
                    name: entry.name,
                    value: entry.value,
                    expected,
                });
            }
        }
        Ok(())
    }
}

impl IntoIterator for &AddressTable {
    type Item = &'static NamedAddress;
    type IntoIter = std::slice::Iter<'static, NamedAddress>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use test_case::test_case;

    #[test_case("FRAXCHAIN_ADMIN", "0x8b1E899ec5d51387a41Ee68261149F7d3Dfd7160" ; "fraxchain admin")]
    #[test_case("PROXY_ADMIN", "0xfC00000000000000000000000000000000000007" ; "proxy admin")]
    #[test_case("L2_STANDARD_BRIDGE", "0x4200000000000000000000000000000000000010" ; "l2 standard bridge")]
    #[test_case("COMPTROLLER", "0x012fcFb933b9a4335B1BCC836e6a9a475146beBd" ; "comptroller")]
    #[test_case("FRAXSWAP_FACTORY", "0x0000000000000000000000000000000000000000" ; "fraxswap factory")]
    fn lookup_returns_exact_value(name: &str, expected: &str) {
        assert_eq!(FRAXTAL_TESTNET.value(name), Some(expected));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(FRAXTAL_TESTNET.get("proxy_admin"), None);
        assert_eq!(
            FRAXTAL_TESTNET.find_ignore_case("proxy_admin").map(NamedAddress::name),
            Some("PROXY_ADMIN")
        );
    }

    #[test]
    fn try_get_reports_name() {
        let err = FRAXTAL_TESTNET.try_get("ROUTER").unwrap_err();
        assert_eq!(err, UnknownName("ROUTER".to_string()));
        assert_eq!(err.to_string(), "no address named `ROUTER`");
    }

    #[test]
    fn only_fraxswap_factory_is_unset() {
        let unset: Vec<_> = FRAXTAL_TESTNET
            .iter()
            .filter(|entry| entry.is_unset())
            .map(NamedAddress::name)
            .collect();
        assert_eq!(unset, ["FRAXSWAP_FACTORY"]);

        let factory = FRAXTAL_TESTNET.try_get("FRAXSWAP_FACTORY").unwrap();
        assert_eq!(factory.address_if_set(), None);
        assert_eq!(factory.value(), FRAXSWAP_FACTORY);
    }

    #[test]
    fn categories() {
        let admins: Vec<_> = FRAXTAL_TESTNET
            .by_category(Category::Admin)
            .map(NamedAddress::name)
            .collect();
        assert_eq!(admins, ["FRAXCHAIN_ADMIN", "PROXY_ADMIN"]);
        assert_eq!(FRAXTAL_TESTNET.by_category(Category::Bridge).count(), 1);
        assert_eq!(FRAXTAL_TESTNET.by_category(Category::Lending).count(), 1);
        assert_eq!(FRAXTAL_TESTNET.by_category(Category::Fraxswap).count(), 1);
    }

    #[test]
    fn category_parse_and_display() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
        assert_eq!("ADMIN".parse::<Category>().unwrap(), Category::Admin);
        assert!("oracle".parse::<Category>().is_err());
    }

    #[test]
    fn builtin_table_is_valid() {
        FRAXTAL_TESTNET.validate().unwrap();
    }

    #[test]
    fn validate_rejects_duplicates() {
        static ENTRIES: &[NamedAddress] = &[
            NamedAddress::new("PROXY_ADMIN", PROXY_ADMIN, PROXY_ADMIN_ADDRESS, Category::Admin),
            NamedAddress::new("PROXY_ADMIN", PROXY_ADMIN, PROXY_ADMIN_ADDRESS, Category::Admin),
        ];
        assert_eq!(
            AddressTable::new("test", ENTRIES).validate(),
            Err(TableError::DuplicateName { name: "PROXY_ADMIN" })
        );
    }

    #[test]
    fn validate_rejects_lowercase_spelling() {
        static ENTRIES: &[NamedAddress] = &[NamedAddress::new(
            "COMPTROLLER",
            "0x012fcfb933b9a4335b1bcc836e6a9a475146bebd",
            address!("0x012fcFb933b9a4335B1BCC836e6a9a475146beBd"),
            Category::Lending,
        )];
        assert!(matches!(
            AddressTable::new("test", ENTRIES).validate(),
            Err(TableError::NotChecksummed { name: "COMPTROLLER", .. })
        ));
    }

    #[test]
    fn validate_rejects_mismatched_typed_address() {
        static ENTRIES: &[NamedAddress] = &[NamedAddress::new(
            "PROXY_ADMIN",
            PROXY_ADMIN,
            L2_STANDARD_BRIDGE_ADDRESS,
            Category::Admin,
        )];
        assert!(matches!(
            AddressTable::new("test", ENTRIES).validate(),
            Err(TableError::AddressMismatch { name: "PROXY_ADMIN", .. })
        ));
    }

    #[test]
    fn validate_rejects_malformed_value() {
        static ENTRIES: &[NamedAddress] =
            &[NamedAddress::new("BROKEN", "0x1234", Address::ZERO, Category::Admin)];
        assert_eq!(
            AddressTable::new("test", ENTRIES).validate(),
            Err(TableError::Malformed {
                name: "BROKEN",
                source: AddressFormatError::Length { len: 6 }
            })
        );
    }
}
