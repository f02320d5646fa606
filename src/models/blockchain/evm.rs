//! EVM-specific data models.

use alloy::primitives::U256;

/// Result of the staking contract's `getStakerInfo(address)` read call.
///
/// The contract returns an ordered 3-tuple of `uint256` values. The order is
/// fixed by the contract ABI and preserved here: staked amount, reward due,
/// last-staked timestamp (seconds since epoch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakerInfo {
	/// Amount currently staked, in the token's smallest unit
	pub staked_amount: U256,
	/// Reward accrued but not yet claimed
	pub reward_due: U256,
	/// Unix timestamp of the staker's most recent stake operation
	pub last_staked_time: U256,
}
