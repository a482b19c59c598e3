/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The word buffer could not be allocated.
    #[error("Unable to allocate a buffer of {requested} words")]
    AllocationFailure { requested: usize },

    #[error("Capacity of {allocated_words} words is smaller than the word count {word_count}")]
    CapacityTooSmall {
        word_count: usize,
        allocated_words: usize,
    },

    /// A size that arrived over the FFI was negative (and not the `-1` sentinel
    /// where one is allowed).
    #[error("Invalid value for {name}: {value}")]
    InvalidSize { name: &'static str, value: i64 },
}
