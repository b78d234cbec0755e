//! Dispatch partition planning.
//!
//! A single generated match over every entity can outgrow practical
//! compiler limits once the corpus reaches hundreds of entities. The
//! conversion emitters therefore split their match logic into bounded-size
//! units; this module plans the partitions and assembles the linear chain
//! that evaluates the units in order. Partitioning never changes outcomes:
//! the chain is observably identical to one flat match.

use std::ops::Range;

/// Splits `len` items into ordered ranges of at most `chunk_size`.
///
/// A zero chunk size is treated as one. An empty list still produces one
/// empty range, so the emitted dispatch surface always has at least one
/// unit and the chain shape stays uniform.
#[must_use]
pub fn partition(len: usize, chunk_size: usize) -> Vec<Range<usize>> {
    let size = chunk_size.max(1);
    if len == 0 {
        return vec![0..0];
    }
    (0..len)
        .step_by(size)
        .map(|start| start..(start + size).min(len))
        .collect()
}

/// Name of the numbered dispatch unit for an emitter prefix.
#[must_use]
pub fn unit_name(prefix: &str, index: usize) -> String {
    format!("{prefix}_{index}")
}

/// Assembles the linear chain evaluating every unit in partition order.
///
/// Produces `prefix_0(arg).or_else(|| prefix_1(arg))...` with each
/// fallthrough on its own line; the caller appends its own terminal
/// behind the chain.
#[must_use]
pub fn dispatch_chain(prefix: &str, units: usize, arg: &str) -> String {
    let mut chain = format!("{}({arg})", unit_name(prefix, 0));
    for index in 1..units {
        chain.push_str(&format!(
            "\n            .or_else(|| {}({arg}))",
            unit_name(prefix, index)
        ));
    }
    chain
}
