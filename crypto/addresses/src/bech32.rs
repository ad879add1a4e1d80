use crate::{Address, AddressError, PayloadVec, Prefix, Version};

const CHARSET: &[u8] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";
const REV_CHARSET: [u8; 123] = [
    100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100,
    100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 15, 100, 10, 17, 21,
    20, 26, 30, 7, 5, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100,
    100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 29, 100, 24, 13, 25, 9, 8, 23, 100, 18, 22, 31, 27,
    19, 100, 1, 0, 3, 16, 11, 28, 12, 14, 6, 4, 2,
];

/// Number of 5-bit groups holding the 40 bits checksum.
const CHECKSUM_LEN: usize = 8;

// Checksum for bech32
// https://bch.info/en/specifications
fn polymod<'data, I>(values: I) -> u64
where
    I: Iterator<Item = &'data u8>,
{
    let mut c = 1u64;
    for d in values {
        let c0 = c >> 35;
        c = ((c & 0x07ffffffff) << 5) ^ (*d as u64);

        if c0 & 0x01 != 0 {
            c ^= 0x98f2bc8e61;
        }
        if c0 & 0x02 != 0 {
            c ^= 0x79b76d99e2;
        }
        if c0 & 0x04 != 0 {
            c ^= 0xf33e5fb3c4;
        }
        if c0 & 0x08 != 0 {
            c ^= 0xae2eabe2a8;
        }
        if c0 & 0x10 != 0 {
            c ^= 0x1e4f43e470;
        }
    }
    c ^ 1
}

fn checksum(payload: &[u8], prefix: &[u8]) -> u64 {
    polymod(prefix.iter().chain(&[0u8]).chain(payload).chain(&[0u8; CHECKSUM_LEN]))
}

fn fivebit_prefix(prefix: Prefix) -> Vec<u8> {
    prefix.as_str().as_bytes().iter().map(|c| c & 0x1fu8).collect()
}

/// Regroups a stream of `from`-bit values into `to`-bit values, padding the
/// trailing group with zero bits when `pad` is set and dropping it otherwise.
fn regroup(data: &[u8], from: u32, to: u32, pad: bool) -> Vec<u8> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let max = (1u32 << to) - 1;
    let mut out = Vec::with_capacity(data.len() * from as usize / to as usize + 1);
    for &value in data {
        acc = (acc << from) | value as u32;
        bits += from;
        while bits >= to {
            bits -= to;
            out.push(((acc >> bits) & max) as u8);
        }
    }
    if pad && bits > 0 {
        out.push(((acc << (to - bits)) & max) as u8);
    }
    out
}

// Convert 8bit array to 5bit array with right padding
fn conv8to5(payload: &[u8]) -> Vec<u8> {
    regroup(payload, 8, 5, true)
}

// Convert 5 bit array to 8 bit array, ignore right side padding
fn conv5to8(payload: &[u8]) -> Vec<u8> {
    regroup(payload, 5, 8, false)
}

impl Address {
    pub(crate) fn encode_payload(&self) -> String {
        let mut versioned = Vec::with_capacity(self.payload.len() + 1);
        versioned.push(self.version as u8);
        versioned.extend_from_slice(&self.payload);
        let fivebit_payload = conv8to5(&versioned);

        let checksum = checksum(&fivebit_payload, &fivebit_prefix(self.prefix));

        fivebit_payload
            .iter()
            .chain(conv8to5(&checksum.to_be_bytes()[3..]).iter())
            .map(|c| CHARSET[*c as usize] as char)
            .collect()
    }

    pub(crate) fn decode_payload(prefix: Prefix, address: &str) -> Result<Self, AddressError> {
        // From letters to 5 bit groups
        let address_u5 = address
            .chars()
            .map(|c| match REV_CHARSET.get(c as usize) {
                Some(&i) if i != 100 => Ok(i),
                _ => Err(AddressError::DecodingError(c)),
            })
            .collect::<Result<Vec<u8>, _>>()?;

        if address_u5.len() <= CHECKSUM_LEN {
            return Err(AddressError::BadPayload);
        }
        let (payload_u5, checksum_u5) = address_u5.split_at(address_u5.len() - CHECKSUM_LEN);

        let mut checksum_bytes = [0u8; 8];
        let checksum_u8 = conv5to8(checksum_u5);
        checksum_bytes[3..].copy_from_slice(&checksum_u8);
        if checksum(payload_u5, &fivebit_prefix(prefix)) != u64::from_be_bytes(checksum_bytes) {
            return Err(AddressError::BadChecksum);
        }

        let payload_u8 = conv5to8(payload_u5);
        let (&version, payload) = payload_u8.split_first().ok_or(AddressError::BadPayload)?;
        let version = Version::try_from(version)?;
        if !prefix.is_test() && payload.len() != version.public_key_len() {
            return Err(AddressError::BadPayload);
        }
        Ok(Self { prefix, version, payload: PayloadVec::from_slice(payload) })
    }
}
