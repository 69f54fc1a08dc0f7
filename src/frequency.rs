use std::{collections::HashMap, thread};

use crate::Symbol;

/// Occurrence counts, keyed by symbol.
///
/// Counts are signed so that a caller-supplied table may carry zero or negative
/// entries; the tree builder drops those.
pub type FrequencyTable<S> = HashMap<S, i64>;

/// Count how many times each distinct symbol occurs.
pub fn count<S: Symbol>(symbols: impl IntoIterator<Item = S>) -> FrequencyTable<S> {
    let mut table = FrequencyTable::new();
    for symbol in symbols {
        *table.entry(symbol).or_insert(0) += 1;
    }
    table
}

/// Add every count in `from` into `into`, key by key.
pub fn merge<S: Symbol>(into: &mut FrequencyTable<S>, from: FrequencyTable<S>) {
    for (symbol, n) in from {
        *into.entry(symbol).or_insert(0) += n;
    }
}

/// Count each chunk on its own thread, then merge the partial tables.
///
/// The result is the same as calling [`count`] on the concatenated chunks.
pub fn count_chunks<S>(chunks: &[&[S]]) -> FrequencyTable<S>
where
    S: Symbol + Send + Sync,
{
    let partials: Vec<FrequencyTable<S>> = thread::scope(|scope| {
        let handles: Vec<_> = chunks
            .iter()
            .map(|chunk| scope.spawn(move || count(chunk.iter().cloned())))
            .collect();

        handles
            .into_iter()
            // A counting thread can only panic on overflow; re-raise it here.
            .map(|handle| handle.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    });

    let mut table = FrequencyTable::new();
    for partial in partials {
        merge(&mut table, partial);
    }
    log::debug!(
        "counted {} distinct symbols across {} chunks",
        table.len(),
        chunks.len()
    );
    table
}

#[cfg(test)]
mod tests {
    use rand_chacha::{
        rand_core::{RngCore, SeedableRng},
        ChaCha8Rng,
    };

    use super::*;

    #[test]
    fn counts_text() {
        let table = count("aaabbc".chars());
        let expected: FrequencyTable<char> = [('a', 3), ('b', 2), ('c', 1)].into();
        assert_eq!(table, expected);
    }

    #[test]
    fn empty_input_is_empty_table() {
        let table = count(std::iter::empty::<u8>());
        assert!(table.is_empty());
    }

    #[test]
    fn merge_adds_key_wise() {
        let mut a: FrequencyTable<char> = [('x', 2), ('y', 1)].into();
        let b: FrequencyTable<char> = [('y', 4), ('z', 7)].into();
        merge(&mut a, b);

        let expected: FrequencyTable<char> = [('x', 2), ('y', 5), ('z', 7)].into();
        assert_eq!(a, expected);
    }

    /// Split 10KB of random bytes into uneven chunks; the chunked count must
    /// agree with a single pass over the whole buffer.
    #[test]
    fn chunked_count_matches_single_pass() {
        let mut payload = vec![0u8; 10_000];
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        rng.fill_bytes(&mut payload);

        let chunks: Vec<&[u8]> = payload.chunks(777).collect();
        assert_eq!(count_chunks(&chunks), count(payload.iter().copied()));
    }
}
