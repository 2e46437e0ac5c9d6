//! Synthetic identifier generation.

use rand::Rng;

/// `TRK-` plus five random digits. Used for both activity ids and truck ids,
/// drawn independently.
pub(crate) fn truck_ref(rng: &mut impl Rng) -> String {
    format!("TRK-{}", rng.gen_range(10_000..100_000))
}

/// `PO-` plus six random digits.
pub(crate) fn po_number(rng: &mut impl Rng) -> String {
    format!("PO-{}", rng.gen_range(100_000..1_000_000))
}

/// `A/B` queue position, with the denominator range varying by caller.
pub(crate) fn sequence(rng: &mut impl Rng, denom_min: u32, denom_max: u32) -> String {
    format!(
        "{}/{}",
        rng.gen_range(1..=9),
        rng.gen_range(denom_min..=denom_max)
    )
}
