//! Parsing helpers shared between configuration and request handling.

/// Returns true when `address` is a well-formed base58-encoded 32-byte
/// Solana public key.
pub fn is_valid_pubkey(address: &str) -> bool {
	bs58::decode(address)
		.into_vec()
		.map(|bytes| bytes.len() == 32)
		.unwrap_or(false)
}
