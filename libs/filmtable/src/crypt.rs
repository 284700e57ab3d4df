//! Film table stream cipher.
//!
//! Each byte is XORed against a keystream byte and run through a fixed
//! bit permutation. The keystream is an 8-bit linear congruential
//! generator seeded with [`KEYSTREAM_SEED`]; encryption and decryption
//! are only inverses when both sides replay the keystream from a fresh
//! seed, one byte per buffer byte.

/// Keystream seed value
pub const KEYSTREAM_SEED: u8 = 0x35;

/// Keystream state for one encrypt/decrypt session
pub struct KeyStream {
    state: u8,
}

impl KeyStream {
    /// Create a freshly seeded keystream
    pub fn new() -> Self {
        Self {
            state: KEYSTREAM_SEED,
        }
    }

    /// Emit the current keystream byte and advance the generator
    fn next(&mut self) -> u8 {
        let value = self.state;
        self.state = self.state.wrapping_mul(13).wrapping_add(7);
        value
    }

    /// Decrypt a single byte and update state
    pub fn decrypt_byte(&mut self, encrypted: u8) -> u8 {
        bit_permute(self.next() ^ encrypted)
    }

    /// Encrypt a single byte and update state
    pub fn encrypt_byte(&mut self, plain: u8) -> u8 {
        self.next() ^ bit_permute(plain)
    }
}

impl Default for KeyStream {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed bit permutation applied next to the keystream XOR.
/// Permutes bits as follows:
///   * Bits 0 and 7 are swapped
///   * Bits 1 and 2 pass straight through
///   * Bits 3 and 4 are swapped
///   * Bit  5 is XORed with bit 1
///   * Bit  6 is XORed with bit 2
pub fn bit_permute(input: u8) -> u8 {
    ((input & 0x01) << 7)
        | ((input & 0x80) >> 7)
        | (input & 0x06)
        | ((input & 0x08) << 1)
        | ((input & 0x10) >> 1)
        | ((input & 0x60) ^ ((input & 0x06) << 4))
}

/// Decrypt an entire buffer with a fresh keystream session
pub fn decrypt(data: &[u8]) -> Vec<u8> {
    let mut keystream = KeyStream::new();
    data.iter().map(|&byte| keystream.decrypt_byte(byte)).collect()
}

/// Encrypt an entire buffer with a fresh keystream session
pub fn encrypt(data: &[u8]) -> Vec<u8> {
    let mut keystream = KeyStream::new();
    data.iter().map(|&byte| keystream.encrypt_byte(byte)).collect()
}
