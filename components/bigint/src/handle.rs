/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use crate::error::{Error, Result};
use std::alloc::{self, Layout};
use std::ptr;

/// A single digit of the magnitude. Matches the C `int` the external arithmetic
/// code reads and writes.
pub type Word = i32;

/// A sign-magnitude integer whose words are filled in by someone else.
///
/// The handle exclusively owns its word buffer. The buffer has a fixed capacity
/// of [`allocated_words`](Self::allocated_words) slots, of which the first
/// [`word_count`](Self::word_count) are considered significant. Capacity may
/// exceed the word count so that the external code can write a larger
/// intermediate result in place.
///
/// Nothing in this type interprets the words: word order, normalization and the
/// meaning of slots past `word_count` are up to whoever writes them. A `sign` of
/// `0` denotes zero regardless of what the buffer holds.
///
/// Dropping the handle releases the buffer and then the record.
#[derive(Debug)]
pub struct BigIntHandle {
    sign: i32,
    word_count: usize,
    words: Box<[Word]>,
}

impl BigIntHandle {
    /// Allocate a handle with room for `allocated_words` words, or exactly
    /// `word_count` words if no capacity is given.
    ///
    /// The buffer starts out zeroed, but callers should treat its contents as
    /// unspecified until they've written them.
    ///
    /// `sign` is expected to be one of `-1`, `0` or `1`, but it is stored as-is.
    ///
    /// # Errors
    ///
    /// - [`Error::CapacityTooSmall`] if `allocated_words < word_count`.
    /// - [`Error::AllocationFailure`] if the buffer can't be allocated. No part of
    ///   the handle survives a failed call.
    pub fn new(sign: i32, word_count: usize, allocated_words: Option<usize>) -> Result<Self> {
        let allocated_words = allocated_words.unwrap_or(word_count);
        if allocated_words < word_count {
            return Err(Error::CapacityTooSmall {
                word_count,
                allocated_words,
            });
        }
        if !(-1..=1).contains(&sign) {
            log::warn!("Creating a bigint with unexpected sign {}", sign);
        }
        // The record is only built once the buffer exists, so there's nothing to
        // unwind if the allocation fails.
        let words = allocate_words(allocated_words)?;
        log::trace!(
            "Allocated bigint: sign {}, {} of {} words",
            sign,
            word_count,
            allocated_words
        );
        Ok(Self {
            sign,
            word_count,
            words,
        })
    }

    #[inline]
    pub fn sign(&self) -> i32 {
        self.sign
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Capacity of the word buffer. Always at least `word_count`.
    #[inline]
    pub fn allocated_words(&self) -> usize {
        self.words.len()
    }

    /// The whole buffer, `allocated_words` slots long.
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Mutable view of the whole buffer. This is how the words get populated;
    /// the handle never copies them in itself.
    #[inline]
    pub fn words_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }

    /// The first `word_count` words.
    #[inline]
    pub fn significant_words(&self) -> &[Word] {
        &self.words[..self.word_count]
    }
}

// Zeroed pages come straight from the allocator (calloc/mmap), so a large buffer
// isn't touched until the caller writes to it.
fn allocate_words(len: usize) -> Result<Box<[Word]>> {
    if len == 0 {
        return Ok(Box::default());
    }
    let failure = || Error::AllocationFailure { requested: len };
    let layout = Layout::array::<Word>(len).map_err(|_| failure())?;
    // SAFETY: `layout` has a non-zero size since `len > 0`.
    let ptr = unsafe { alloc::alloc_zeroed(layout) }.cast::<Word>();
    if ptr.is_null() {
        return Err(failure());
    }
    // SAFETY: `ptr` came from the global allocator with the layout of `[Word; len]`,
    // and all-zero bytes are a valid `Word`.
    Ok(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(ptr, len)) })
}
