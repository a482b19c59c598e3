/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// This module implement the traits that make the FFI code easier to manage.

use crate::{BigIntHandle, Error, Result};
use ffi_support::{ErrorCode, ExternError};

pub mod error_codes {
    // Note: -1 and 0 (panic and success) codes are reserved by the ffi-support library

    /// The word buffer could not be allocated.
    pub const ALLOCATION_FAILURE: i32 = 1;

    /// The requested capacity can't hold the requested word count.
    pub const CAPACITY_TOO_SMALL: i32 = 2;

    /// A negative size was passed where none is allowed.
    pub const INVALID_SIZE: i32 = 3;
}

/// Passed as `allocated_words` to request a buffer of exactly `word_count` words.
pub const EXACT_CAPACITY: i32 = -1;

fn get_code(err: &Error) -> ErrorCode {
    match err {
        Error::AllocationFailure { requested } => {
            log::error!("Out of memory allocating {} words", requested);
            ErrorCode::new(error_codes::ALLOCATION_FAILURE)
        }
        Error::CapacityTooSmall { .. } => {
            log::error!("{}", err);
            ErrorCode::new(error_codes::CAPACITY_TOO_SMALL)
        }
        Error::InvalidSize { .. } => {
            log::error!("{}", err);
            ErrorCode::new(error_codes::INVALID_SIZE)
        }
    }
}

impl From<Error> for ExternError {
    fn from(e: Error) -> ExternError {
        ExternError::new_error(get_code(&e), e.to_string())
    }
}

fn size_from_c(name: &'static str, value: i32) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::InvalidSize {
        name,
        value: value.into(),
    })
}

impl BigIntHandle {
    /// Construct a handle from the C-level arguments, where `allocated_words` may
    /// be [`EXACT_CAPACITY`] to mean "no slack".
    pub fn from_ffi_args(sign: i32, word_count: i32, allocated_words: i32) -> Result<Self> {
        let word_count = size_from_c("word_count", word_count)?;
        let allocated_words = match allocated_words {
            EXACT_CAPACITY => None,
            n => Some(size_from_c("allocated_words", n)?),
        };
        BigIntHandle::new(sign, word_count, allocated_words)
    }
}
