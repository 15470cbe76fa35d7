//! Disjoint, exhaustive partitioning of the candidate sequence.
//!
//! Two strategies with the same contract and different resource trade-offs:
//!
//! - [`Chunked`]: pulls fixed-size batches from a single generator, suited to
//!   a shared-memory pool consuming batches from one queue. Bounds peak
//!   memory at `chunk_size` candidates.
//! - [`Striped`]: worker `i` of `W` keeps only the positions `j` with
//!   `j mod W == i`. No shared queue at all; each worker independently
//!   re-enumerates the sequence and skips, trading redundant generation CPU
//!   for zero coordination.
//!
//! The invariant the whole engine leans on: across all chunks or all
//! stripes, every position of the underlying sequence appears exactly once.

/// Fixed-size batches pulled sequentially from an iterator.
///
/// The final batch may be shorter; an empty source yields no batches.
#[derive(Clone, Debug)]
pub struct Chunked<I: Iterator> {
    inner: I,
    chunk_size: usize,
}

impl<I: Iterator> Chunked<I> {
    /// Wraps `inner`, emitting batches of at most `chunk_size` items.
    /// A zero `chunk_size` is treated as 1.
    pub fn new(inner: I, chunk_size: usize) -> Self {
        Self {
            inner,
            chunk_size: chunk_size.max(1),
        }
    }
}

impl<I: Iterator> Iterator for Chunked<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        let chunk: Vec<I::Item> = self.inner.by_ref().take(self.chunk_size).collect();
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }
}

/// Every `stride`-th item of an iterator, starting at `offset`.
///
/// `Striped::new(seq, i, w)` is worker `i`'s slice of a `w`-worker search.
#[derive(Clone, Debug)]
pub struct Striped<I: Iterator> {
    inner: I,
    offset: usize,
    stride: usize,
    started: bool,
}

impl<I: Iterator> Striped<I> {
    /// Wraps `inner`, keeping positions `offset, offset + stride, ...`.
    ///
    /// # Panics
    /// Panics if `stride == 0` or `offset >= stride`.
    pub fn new(inner: I, offset: usize, stride: usize) -> Self {
        assert!(stride > 0, "stride must be positive");
        assert!(offset < stride, "offset {offset} out of range for stride {stride}");
        Self {
            inner,
            offset,
            stride,
            started: false,
        }
    }
}

impl<I: Iterator> Iterator for Striped<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.started {
            self.inner.nth(self.stride - 1)
        } else {
            self.started = true;
            self.inner.nth(self.offset)
        }
    }
}
