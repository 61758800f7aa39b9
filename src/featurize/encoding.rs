//! One-hot encoding with an overflow bucket.
//!
//! Every vocabulary reserves its last entry for values it does not list.
//! A value that is not found is encoded into that last slot; encoding never
//! fails.

/// Encodes `value` against `vocabulary`.
///
/// The result has one entry per vocabulary item and a single `1.0` at the
/// first position equal to `value`, or at the last position if there is
/// none. An empty vocabulary yields an empty vector.
pub fn one_hot<T: PartialEq>(value: &T, vocabulary: &[T]) -> Vec<f64> {
    let mut out = Vec::with_capacity(vocabulary.len());
    push_one_hot(&mut out, value, vocabulary);
    out
}

/// Appends the [`one_hot`] encoding of `value` to `out`.
pub fn push_one_hot<T: PartialEq>(out: &mut Vec<f64>, value: &T, vocabulary: &[T]) {
    let Some(last) = vocabulary.len().checked_sub(1) else {
        return;
    };
    let hot = vocabulary
        .iter()
        .position(|v| v == value)
        .unwrap_or(last);

    out.extend((0..vocabulary.len()).map(|k| if k == hot { 1.0 } else { 0.0 }));
}

#[inline]
pub fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}
