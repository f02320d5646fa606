//! Solana-specific data models.
//!
//! Serde models for the `value` payloads returned by the token RPC methods
//! (`getTokenSupply`, `getTokenAccountsByOwner`, `getTokenAccountBalance`).

use serde::{Deserialize, Serialize};

/// Token amount as reported by the RPC node.
///
/// The raw `amount` field is a decimal string of the integer amount in the
/// token's smallest unit. It is kept as a string end to end so values larger
/// than 2^53 survive JSON round trips without precision loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAmount {
	/// Raw integer amount as a decimal string
	pub amount: String,
	/// Number of base-10 digits to the right of the decimal point
	pub decimals: u8,
	/// Human-readable amount string, if the node provided one
	#[serde(
		rename = "uiAmountString",
		default,
		skip_serializing_if = "Option::is_none"
	)]
	pub ui_amount_string: Option<String>,
}

/// A token account entry from `getTokenAccountsByOwner`.
///
/// Only the account public key is retained; the account data blob is not
/// needed for balance lookups and is left to serde to discard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyedTokenAccount {
	/// Base58-encoded public key of the token account
	pub pubkey: String,
}
