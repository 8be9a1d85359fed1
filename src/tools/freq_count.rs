use rayon::prelude::*;

/// Inputs below this size are counted sequentially; the chunking overhead
/// outweighs the parallelism below 64k.
const PARALLEL_THRESHOLD: usize = 64_000;
/// 16k is pretty much the sweet spot for chunk size.
const CHUNK_SIZE: usize = 16_000;

/// Per-byte occurrence counts for one input. Built once, immutable afterward.
///
/// Counts are u64 so no in-memory input can wrap them; the container format
/// narrows to u32 per entry at write time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqTable {
    counts: [u64; 256],
}

impl FreqTable {
    /// Count every byte of the input. Uses parallelism when the data set is
    /// over 64k. The result is independent of the chunking.
    pub fn new(data: &[u8]) -> Self {
        let counts = if data.len() > PARALLEL_THRESHOLD {
            data.par_chunks(CHUNK_SIZE)
                .fold(
                    || [0_u64; 256],
                    |mut counts, chunk| {
                        chunk.iter().for_each(|&el| counts[el as usize] += 1);
                        counts
                    },
                )
                .reduce(
                    || [0_u64; 256],
                    |mut sum, partial| {
                        sum.iter_mut().zip(partial.iter()).for_each(|(s, p)| *s += p);
                        sum
                    },
                )
        } else {
            let mut counts = [0_u64; 256];
            data.iter().for_each(|&el| counts[el as usize] += 1);
            counts
        };
        Self { counts }
    }

    /// Rebuild a table from persisted (symbol, count) pairs.
    pub fn from_entries(entries: &[(u8, u32)]) -> Self {
        let mut counts = [0_u64; 256];
        for &(symbol, count) in entries {
            counts[symbol as usize] = count as u64;
        }
        Self { counts }
    }

    /// Occurrence count for one symbol (0 if absent).
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Present symbols with their counts, in ascending symbol order.
    pub fn entries(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }

    /// Number of distinct symbols present.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// Total input length, i.e. the sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// True when no symbol was seen at all (empty input).
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }
}
