/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![warn(rust_2018_idioms)]

//! # Big integer handles
//!
//! This crate owns the storage for sign-magnitude big integers whose digits are
//! computed somewhere else. The typical consumer is an arithmetic library running
//! on the other side of an FFI boundary (for example JavaScript driving a wasm
//! module): it asks for a record of a given shape, writes the words directly into
//! the buffer it gets back, and later asks for the record to be released.
//!
//! There is no arithmetic here. A [`BigIntHandle`] is a sign, a count
//! of significant words, and a fixed-capacity word buffer, nothing more.
//!
//! The `extern "C"` surface lives in the `bigint-handle-ffi` crate. Enabling the
//! `ffi` feature of this crate provides the `ExternError` conversion it needs.

mod error;
#[cfg(feature = "ffi")]
pub mod ffi;
mod handle;

pub use crate::error::{Error, Result};
pub use crate::handle::{BigIntHandle, Word};
