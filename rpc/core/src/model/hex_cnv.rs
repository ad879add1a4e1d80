use smallvec::{SmallVec, smallvec};
use std::str;

pub trait HexConversion {
    fn to_hex_string(&self) -> String;
}

/// Format of full smallvec content
/// (so string lengths are always even).
impl<A: smallvec::Array<Item = u8>> HexConversion for SmallVec<A> {
    fn to_hex_string(&self) -> String {
        // an empty vector is allowed
        if self.is_empty() {
            return "".to_string();
        }

        // Scripts rarely exceed 36 bytes, so the hex buffer normally stays on the stack
        let mut hex: SmallVec<[u8; 96]> = smallvec![0u8; self.len() * 2];

        faster_hex::hex_encode(self, hex.as_mut_slice()).expect("The output is exactly twice the size of the input");
        let result = str::from_utf8(&hex).expect("hex is always valid UTF-8");
        result.to_string()
    }
}
