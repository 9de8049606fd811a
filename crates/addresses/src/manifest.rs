//! Serialized form of an [`AddressTable`] and comparison against it.
//!
//! A manifest is what deployment tooling keeps on disk:
//!
//! ```json
//! {
//!   "network": "fraxtal-testnet",
//!   "addresses": {
//!     "PROXY_ADMIN": "0xfC00000000000000000000000000000000000007"
//!   }
//! }
//! ```
//!
//! Address strings are kept verbatim. Consumers compare them as strings, so a
//! casing change is reported as drift even though the address is the same.

use std::{fmt, path::Path};

use indexmap::{IndexMap, map::Entry};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::{table::AddressTable, validate::parse_address};

/// Decode it with [`Manifest::from_json`] or [`Manifest::from_toml`], which
/// reject names listed more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub network: String,
    pub addresses: IndexMap<String, String>,
}

/// On-disk shape of a manifest, entries kept in document order with repeats.
#[derive(Deserialize)]
struct RawManifest {
    network: String,
    #[serde(deserialize_with = "deserialize_entries")]
    addresses: Vec<(String, String)>,
}

impl RawManifest {
    fn into_manifest(self) -> Result<Manifest, ManifestError> {
        let mut addresses = IndexMap::with_capacity(self.addresses.len());
        for (name, value) in self.addresses {
            match addresses.entry(name) {
                Entry::Occupied(entry) => {
                    return Err(ManifestErrorKind::DuplicateName(entry.key().clone()).into());
                }
                Entry::Vacant(entry) => {
                    entry.insert(value);
                }
            }
        }
        Ok(Manifest { network: self.network, addresses })
    }
}

/// Collects a name to address map without collapsing repeated names.
fn deserialize_entries<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{MapAccess, Visitor};

    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, String)>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a map of address names to address strings")
        }

        fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, String>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}

/// Serialization format of a manifest file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if extension.eq_ignore_ascii_case("toml") {
            Some(Self::Toml)
        } else {
            None
        }
    }
}

impl Manifest {
    pub fn from_table(table: &AddressTable) -> Self {
        Self {
            network: table.network().to_string(),
            addresses: table
                .iter()
                .map(|entry| (entry.name().to_string(), entry.value().to_string()))
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self).map_err(ManifestErrorKind::EncodeJson)?)
    }

    pub fn from_json(s: &str) -> Result<Self, ManifestError> {
        serde_json::from_str::<RawManifest>(s)
            .map_err(ManifestErrorKind::DecodeJson)?
            .into_manifest()
    }

    pub fn to_toml(&self) -> Result<String, ManifestError> {
        Ok(toml::to_string_pretty(self).map_err(ManifestErrorKind::EncodeToml)?)
    }

    pub fn from_toml(s: &str) -> Result<Self, ManifestError> {
        toml::from_str::<RawManifest>(s)
            .map_err(ManifestErrorKind::DecodeToml)?
            .into_manifest()
    }

    pub fn encode(&self, format: Format) -> Result<String, ManifestError> {
        match format {
            Format::Json => self.to_json(),
            Format::Toml => self.to_toml(),
        }
    }

    pub fn decode(s: &str, format: Format) -> Result<Self, ManifestError> {
        match format {
            Format::Json => Self::from_json(s),
            Format::Toml => Self::from_toml(s),
        }
    }

    /// Reads a manifest, choosing the format from the file extension.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let format = format_of(path)?;
        let contents = std::fs::read_to_string(path).map_err(ManifestErrorKind::Read)?;
        let manifest = Self::decode(&contents, format)?;
        debug!(
            path = %path.display(),
            network = %manifest.network,
            entries = manifest.addresses.len(),
            "read address manifest"
        );
        Ok(manifest)
    }

    /// Writes the manifest, choosing the format from the file extension.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ManifestError> {
        let path = path.as_ref();
        let encoded = self.encode(format_of(path)?)?;
        std::fs::write(path, encoded).map_err(ManifestErrorKind::Write)?;
        debug!(path = %path.display(), "wrote address manifest");
        Ok(())
    }

    /// Compares this manifest against `table`.
    ///
    /// Entries are reported in table order, followed by names only present in
    /// the manifest. An empty result means both hold byte-identical strings.
    pub fn diff(&self, table: &AddressTable) -> Vec<Drift> {
        let mut drift = Vec::new();

        if self.network != table.network() {
            drift.push(Drift::NetworkMismatch {
                expected: table.network().to_string(),
                found: self.network.clone(),
            });
        }

        for entry in table {
            let Some(found) = self.addresses.get(entry.name()) else {
                drift.push(Drift::Missing { name: entry.name().to_string() });
                continue;
            };
            if found == entry.value() {
                continue;
            }

            let same_address = parse_address(found).is_ok_and(|addr| addr == entry.address())
                || found.eq_ignore_ascii_case(entry.value());
            let name = entry.name().to_string();
            let expected = entry.value().to_string();
            let found = found.clone();
            drift.push(if same_address {
                Drift::CaseMismatch { name, expected, found }
            } else {
                Drift::Mismatch { name, expected, found }
            });
        }

        drift.extend(
            self.addresses
                .iter()
                .filter(|(name, _)| table.get(name).is_none())
                .map(|(name, value)| Drift::Extra { name: name.clone(), value: value.clone() }),
        );

        for item in &drift {
            warn!(%item, "address manifest drifted from built-in table");
        }
        drift
    }
}

fn format_of(path: &Path) -> Result<Format, ManifestError> {
    Format::from_path(path)
        .ok_or_else(|| ManifestErrorKind::UnknownFormat(path.display().to_string()).into())
}

/// A difference between a [`Manifest`] and an [`AddressTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drift {
    NetworkMismatch { expected: String, found: String },
    Missing { name: String },
    Extra { name: String, value: String },
    /// Same address, different spelling.
    CaseMismatch { name: String, expected: String, found: String },
    Mismatch { name: String, expected: String, found: String },
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetworkMismatch { expected, found } => {
                write!(f, "network is `{found}`, expected `{expected}`")
            }
            Self::Missing { name } => write!(f, "`{name}` is missing"),
            Self::Extra { name, value } => {
                write!(f, "`{name}` = `{value}` is not a known address")
            }
            Self::CaseMismatch { name, expected, found } => {
                write!(f, "`{name}` is spelled `{found}`, expected `{expected}`")
            }
            Self::Mismatch { name, expected, found } => {
                write!(f, "`{name}` is `{found}`, expected `{expected}`")
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ManifestError(ManifestErrorKind);

impl From<ManifestErrorKind> for ManifestError {
    fn from(value: ManifestErrorKind) -> Self {
        Self(value)
    }
}

#[derive(Debug, thiserror::Error)]
enum ManifestErrorKind {
    #[error("cannot infer manifest format of `{0}`, expected a `.json` or `.toml` extension")]
    UnknownFormat(String),
    #[error("failed reading the manifest file")]
    Read(#[source] std::io::Error),
    #[error("failed writing the manifest file")]
    Write(#[source] std::io::Error),
    #[error("failed encoding manifest as json")]
    EncodeJson(#[source] serde_json::Error),
    #[error("failed decoding json manifest")]
    DecodeJson(#[source] serde_json::Error),
    #[error("failed encoding manifest as toml")]
    EncodeToml(#[source] toml::ser::Error),
    #[error("failed decoding toml manifest")]
    DecodeToml(#[source] toml::de::Error),
    #[error("address `{0}` is listed more than once")]
    DuplicateName(String),
}
