/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![warn(rust_2018_idioms)]

//! C ABI for [`bigint_handle`].
//!
//! Handles are opaque `u64` values issued by a [`ConcurrentHandleMap`]; `0` is
//! never a valid handle and is what `bigint_handle_external_init` returns on
//! failure. Stale handles are rejected with `ErrorCode::INVALID_HANDLE` rather
//! than touching freed memory.
//!
//! Handles are 64 bits wide on every target, wasm32 included. A JavaScript caller
//! of a wasm build receives and passes them as `BigInt`, not as a 32-bit pointer.
//!
//! The pointer returned by `bigint_handle_get_words` points into the buffer owned
//! by the handle. It stays valid until `bigint_handle_free` is called, and the
//! caller must not write more than `bigint_handle_get_allocated_words` words
//! through it. Writes through that pointer are not synchronized by the map.

use bigint_handle::{BigIntHandle, Word};
use ffi_support::{
    define_handle_map_deleter, define_string_destructor, ConcurrentHandleMap, ExternError, IntoFfi,
};

lazy_static::lazy_static! {
    static ref BIGINTS: ConcurrentHandleMap<BigIntHandle> = ConcurrentHandleMap::new();
}

/// Raw pointer to the start of a word buffer, null on error.
struct WordsPtr(*mut Word);

unsafe impl IntoFfi for WordsPtr {
    type Value = *mut Word;

    #[inline]
    fn ffi_default() -> *mut Word {
        std::ptr::null_mut()
    }

    #[inline]
    fn into_ffi_value(self) -> *mut Word {
        self.0
    }
}

/// Allocate a bigint with room for `allocated_words` words, ready to be filled by
/// the caller. Pass `-1` for `allocated_words` to allocate exactly `word_count`.
///
/// Returns `0` on failure, with `error` set to one of
/// [`error_codes`](bigint_handle::ffi::error_codes):
///
/// - `ALLOCATION_FAILURE` (1): the word buffer could not be allocated.
/// - `CAPACITY_TOO_SMALL` (2): `allocated_words` is less than `word_count`.
/// - `INVALID_SIZE` (3): `word_count` is negative, or `allocated_words` is
///   negative and not `-1`.
#[no_mangle]
pub extern "C" fn bigint_handle_external_init(
    sign: i32,
    word_count: i32,
    allocated_words: i32,
    error: &mut ExternError,
) -> u64 {
    log::debug!("bigint_handle_external_init");
    BIGINTS.insert_with_result(error, || {
        BigIntHandle::from_ffi_args(sign, word_count, allocated_words)
    })
}

#[no_mangle]
pub extern "C" fn bigint_handle_get_words(handle: u64, error: &mut ExternError) -> *mut Word {
    log::debug!("bigint_handle_get_words");
    BIGINTS.call_with_output_mut(error, handle, |bigint| {
        WordsPtr(bigint.words_mut().as_mut_ptr())
    })
}

#[no_mangle]
pub extern "C" fn bigint_handle_get_sign(handle: u64, error: &mut ExternError) -> i32 {
    log::debug!("bigint_handle_get_sign");
    BIGINTS.call_with_output(error, handle, |bigint| bigint.sign())
}

// Sizes arrive as `i32`, so they always fit on the way back out.

#[no_mangle]
pub extern "C" fn bigint_handle_get_word_count(handle: u64, error: &mut ExternError) -> i32 {
    log::debug!("bigint_handle_get_word_count");
    BIGINTS.call_with_output(error, handle, |bigint| bigint.word_count() as i32)
}

#[no_mangle]
pub extern "C" fn bigint_handle_get_allocated_words(
    handle: u64,
    error: &mut ExternError,
) -> i32 {
    log::debug!("bigint_handle_get_allocated_words");
    BIGINTS.call_with_output(error, handle, |bigint| bigint.allocated_words() as i32)
}

define_handle_map_deleter!(BIGINTS, bigint_handle_free);
define_string_destructor!(bigint_handle_destroy_string);
