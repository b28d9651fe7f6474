//! Protocol fee taken from every reward claim.

/// Fee charged on claims, in basis points (1 bps = 0.01 %).
pub const FEE_BPS: i128 = 200;

/// Basis-point denominator.
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Split a claim into `(net, fee)`.
///
/// ```text
/// fee = pending × FEE_BPS / 10_000   (floored)
/// net = pending − fee
/// ```
///
/// Flooring the fee means any fractional basis point stays with the staker;
/// `net + fee == pending` always holds, so nothing is stranded.
#[allow(clippy::arithmetic_side_effects)]
pub fn apply(pending: i128) -> (i128, i128) {
    if pending <= 0 {
        return (0, 0);
    }
    let fee = pending.saturating_mul(FEE_BPS) / BPS_DENOMINATOR;
    (pending - fee, fee)
}
