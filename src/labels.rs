//! Label sets and the classic combine rules.
//!
//! A [`LabelSet`] is an ordered, deduplicated sequence of opaque label values;
//! the engine only requires equality and hashing. The constructors here build
//! the sets that name the classic labeling families:
//!
//! - [`graceful_set`]: `{0, 1, ..., n}` with absolute difference.
//! - [`harmonious_set`]: `{1, ..., n}` with addition mod `n`.
//! - [`gamma_set`]: direct products of residue groups with componentwise sums.
//! - [`pi_set`]: the multiplicative units mod `n` with multiplication mod `n`.

use std::collections::HashSet;
use std::hash::Hash;
use std::ops::Deref;

// ============================================================================
// LabelSet
// ============================================================================

/// An ordered, deduplicated, finite sequence of label values.
///
/// Iteration order is fixed at construction and is the order the candidate
/// generator enumerates in, so it must be stable for searches to be
/// reproducible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelSet<L> {
    values: Vec<L>,
}

impl<L: Clone + Eq + Hash> LabelSet<L> {
    /// Builds a label set, dropping duplicates while preserving the first
    /// occurrence's position.
    pub fn new(values: impl IntoIterator<Item = L>) -> Self {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for value in values {
            if seen.insert(value.clone()) {
                out.push(value);
            }
        }
        Self { values: out }
    }
}

impl<L> LabelSet<L> {
    /// The labels, in iteration order.
    #[inline]
    pub fn values(&self) -> &[L] {
        &self.values
    }
}

impl<L> Deref for LabelSet<L> {
    type Target = [L];

    fn deref(&self) -> &[L] {
        &self.values
    }
}

// ============================================================================
// Set constructors
// ============================================================================

/// The closed integer interval `[0, n]`, used for graceful labelings.
pub fn graceful_set(n: u64) -> LabelSet<u64> {
    LabelSet::new(0..=n)
}

/// The closed integer interval `[1, n]`, used for harmonious labelings.
pub fn harmonious_set(n: u64) -> LabelSet<u64> {
    LabelSet::new(1..=n)
}

/// The multiplicative units mod `n`: positive integers up to `n` that are
/// coprime to `n`. For example `pi_set(8)` is `{1, 3, 5, 7}`.
pub fn pi_set(n: u64) -> LabelSet<u64> {
    LabelSet::new((1..=n).filter(|&x| gcd(x, n) == 1))
}

/// The direct product of residue groups `Z_{m_0} x Z_{m_1} x ...`, one tuple
/// per element, in odometer order (last component varies fastest).
///
/// `gamma_set(&[4, 2])` is the 8-element set `(0,0), (0,1), (1,0), ...`.
/// An empty `mods` slice yields an empty set.
pub fn gamma_set(mods: &[u64]) -> LabelSet<Vec<u64>> {
    if mods.is_empty() || mods.contains(&0) {
        return LabelSet::new(std::iter::empty());
    }

    let total: u64 = mods.iter().product();
    let mut tuples = Vec::with_capacity(usize::try_from(total).unwrap_or(0));
    for mut index in 0..total {
        let mut tuple = vec![0u64; mods.len()];
        for (slot, &m) in tuple.iter_mut().zip(mods).rev() {
            *slot = index % m;
            index /= m;
        }
        tuples.push(tuple);
    }
    LabelSet::new(tuples)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

// ============================================================================
// Combine rules
// ============================================================================

/// Graceful combine rule: `|a - b|`.
pub fn absolute_difference(a: &u64, b: &u64) -> u64 {
    a.abs_diff(*b)
}

/// Harmonious combine rule: `(a + b) mod m`.
pub fn sum_mod(m: u64) -> impl Fn(&u64, &u64) -> u64 {
    move |a, b| (a + b) % m
}

/// Pi-harmonious combine rule: `(a * b) mod m`.
pub fn product_mod(m: u64) -> impl Fn(&u64, &u64) -> u64 {
    move |a, b| (a * b) % m
}

/// Gamma-harmonious combine rule: componentwise `(a_i + b_i) mod m_i`.
///
/// Pairs with [`gamma_set`] built from the same `mods`.
pub fn componentwise_sum(mods: Vec<u64>) -> impl Fn(&Vec<u64>, &Vec<u64>) -> Vec<u64> {
    move |a, b| {
        a.iter()
            .zip(b)
            .zip(&mods)
            .map(|((x, y), m)| (x + y) % m)
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
