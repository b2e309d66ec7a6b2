//! Coin amount conversions
//!
//! The node reports values as floating-point whole coins. Values are stored
//! as integer atoms; the conversion works on the shortest decimal rendering of
//! the float so that `0.29` becomes `29000000` rather than `28999999`.

/// Atoms per whole coin
pub const ATOMS_PER_COIN: u64 = 100_000_000;

const DECIMALS: usize = 8;

/// Convert a whole-coin amount to atoms, truncating sub-atom residue
///
/// Returns `None` for negative, non-finite or out-of-range values.
///
/// # Examples
/// ```
/// use dcr_chain_adapter::utils::amount::coins_to_atoms;
///
/// assert_eq!(coins_to_atoms(7.57418852), Some(757418852));
/// assert_eq!(coins_to_atoms(0.29), Some(29000000));
/// assert_eq!(coins_to_atoms(-1.0), None);
/// ```
pub fn coins_to_atoms(coins: f64) -> Option<u64> {
    if !coins.is_finite() || coins < 0.0 {
        return None;
    }

    // f64 Display never uses exponent notation
    let rendered = coins.to_string();
    let (whole, frac) = match rendered.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (rendered.as_str(), ""),
    };

    let whole: u64 = whole.parse().ok()?;
    let mut frac_digits: String = frac.chars().take(DECIMALS).collect();
    while frac_digits.len() < DECIMALS {
        frac_digits.push('0');
    }
    let frac: u64 = frac_digits.parse().ok()?;

    whole.checked_mul(ATOMS_PER_COIN)?.checked_add(frac)
}

/// Convert atoms to a whole-coin float for node-shaped output
pub fn atoms_to_coins(atoms: u64) -> f64 {
    atoms as f64 / ATOMS_PER_COIN as f64
}

/// Format an atom amount as dual DCR + atoms display
///
/// # Examples
/// ```
/// use dcr_chain_adapter::utils::amount::format_atoms_as_dcr;
///
/// assert_eq!(
///     format_atoms_as_dcr(757418852),
///     "7.57418852 DCR (757418852 atoms)"
/// );
/// ```
pub fn format_atoms_as_dcr(atoms: u64) -> String {
    format!(
        "{}.{:08} DCR ({} atoms)",
        atoms / ATOMS_PER_COIN,
        atoms % ATOMS_PER_COIN,
        atoms
    )
}
