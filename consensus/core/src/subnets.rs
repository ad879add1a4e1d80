use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt::{Display, Formatter};
use std::str::{self, FromStr};
use thiserror::Error;

/// The size of the array used to store subnetwork IDs.
pub const SUBNETWORK_ID_SIZE: usize = 20;

#[derive(Clone, Debug, Error)]
pub enum SubnetworkIdError {
    #[error("subnetwork id must be {expected} hex characters long, got {0}", expected = SUBNETWORK_ID_SIZE * 2)]
    InvalidLength(usize),

    #[error("subnetwork id is not valid hex: {0}")]
    HexParsingError(#[from] faster_hex::Error),
}

pub type SubnetworkIdResult<T> = std::result::Result<T, SubnetworkIdError>;

/// The domain representation of a Subnetwork ID
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct SubnetworkId([u8; SUBNETWORK_ID_SIZE]);

impl AsRef<[u8]> for SubnetworkId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl SubnetworkId {
    pub const fn from_byte(b: u8) -> SubnetworkId {
        let mut bytes = [0u8; SUBNETWORK_ID_SIZE];
        bytes[0] = b;
        SubnetworkId(bytes)
    }

    pub const fn from_bytes(bytes: [u8; SUBNETWORK_ID_SIZE]) -> SubnetworkId {
        SubnetworkId(bytes)
    }

    /// Decodes the hex encoded form in which subnetwork ids are stored.
    ///
    /// The text form is the byte-reversed hex of the id, so the coinbase id reads
    /// as 39 zeros followed by `1`. The input must hold exactly [`SUBNETWORK_ID_SIZE`]
    /// bytes, that is twice as many hex characters. Shorter or longer values are
    /// rejected rather than padded.
    pub fn decode(encoded: &str) -> SubnetworkIdResult<SubnetworkId> {
        if encoded.len() != SUBNETWORK_ID_SIZE * 2 {
            return Err(SubnetworkIdError::InvalidLength(encoded.len()));
        }
        let mut bytes = [0u8; SUBNETWORK_ID_SIZE];
        faster_hex::hex_decode(encoded.as_bytes(), &mut bytes)?;
        bytes.reverse();
        Ok(SubnetworkId(bytes))
    }

    /// Returns true if the subnetwork is a built-in subnetwork, which
    /// means all nodes, including partial nodes, must validate it, and its transactions
    /// always use 0 gas.
    #[inline]
    pub fn is_builtin(&self) -> bool {
        *self == SUBNETWORK_ID_COINBASE || *self == SUBNETWORK_ID_REGISTRY
    }

    /// Returns true if the subnetwork is the native or a built-in subnetwork
    #[inline]
    pub fn is_builtin_or_native(&self) -> bool {
        *self == SUBNETWORK_ID_NATIVE || self.is_builtin()
    }
}

impl FromStr for SubnetworkId {
    type Err = SubnetworkIdError;

    #[inline]
    fn from_str(str: &str) -> Result<Self, Self::Err> {
        Self::decode(str)
    }
}

impl Display for SubnetworkId {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        let mut hex = [0u8; SUBNETWORK_ID_SIZE * 2];
        faster_hex::hex_encode(&reversed, &mut hex).expect("The output is exactly twice the size of the input");
        f.write_str(str::from_utf8(&hex).expect("hex is always valid UTF-8"))
    }
}

impl Serialize for SubnetworkId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SubnetworkId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str> as Deserialize>::deserialize(deserializer)?;
        SubnetworkId::decode(&s).map_err(de::Error::custom)
    }
}

/// The default subnetwork ID which is used for transactions without related payload data
pub const SUBNETWORK_ID_NATIVE: SubnetworkId = SubnetworkId::from_byte(0);

/// The subnetwork ID which is used for the coinbase transaction
pub const SUBNETWORK_ID_COINBASE: SubnetworkId = SubnetworkId::from_byte(1);

/// The subnetwork ID which is used for adding new sub networks to the registry
pub const SUBNETWORK_ID_REGISTRY: SubnetworkId = SubnetworkId::from_byte(2);
