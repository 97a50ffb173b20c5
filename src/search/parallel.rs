//! Parallel matching for large arrays.
//!
//! Matching is spread over a rayon pool in chunks; results are collected in input order, so
//! output is identical to the sequential path.

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use serde_json::Value;

use crate::types::Record;

use super::matcher::take_if_match;

/// Smallest number of elements a rayon task handles.
const MIN_CHUNK_LEN: usize = 1_024;

/// Filter `items` in parallel.
///
/// With `num_threads = Some(n)` a dedicated pool of `n` threads is used; with `None` (or if
/// the pool cannot be built) the global rayon pool is used.
pub(crate) fn filter_parallel(
    items: Vec<Value>,
    needle: &str,
    num_threads: Option<usize>,
) -> Vec<Record> {
    let run = move || {
        items
            .into_par_iter()
            .with_min_len(MIN_CHUNK_LEN)
            .filter_map(|item| take_if_match(item, needle))
            .collect::<Vec<_>>()
    };

    match num_threads {
        Some(n) => match ThreadPoolBuilder::new().num_threads(n.max(1)).build() {
            Ok(pool) => pool.install(run),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    threads = n,
                    "failed to build search thread pool, using global pool"
                );
                run()
            }
        },
        None => run(),
    }
}
