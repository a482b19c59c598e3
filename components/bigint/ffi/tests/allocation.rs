/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// Out-of-memory at the C boundary. A global allocator that can be told to fail
// a single allocation of a given size stands in for an exhausted heap.

use bigint_handle::ffi::error_codes;
use bigint_handle::Word;
use bigint_handle_ffi::{bigint_handle_external_init, bigint_handle_free};
use ffi_support::{ErrorCode, ExternError};
use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::mem::size_of;
use std::ptr;

struct FailingAllocator;

thread_local! {
    static FAIL_SIZE: Cell<Option<usize>> = const { Cell::new(None) };
}

fn should_fail(size: usize) -> bool {
    FAIL_SIZE
        .try_with(|fail| {
            if fail.get() == Some(size) {
                fail.set(None);
                true
            } else {
                false
            }
        })
        .unwrap_or(false)
}

unsafe impl GlobalAlloc for FailingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if should_fail(layout.size()) {
            return ptr::null_mut();
        }
        System.alloc(layout)
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        if should_fail(layout.size()) {
            return ptr::null_mut();
        }
        System.alloc_zeroed(layout)
    }

    unsafe fn dealloc(&self, p: *mut u8, layout: Layout) {
        System.dealloc(p, layout);
    }
}

#[global_allocator]
static ALLOCATOR: FailingAllocator = FailingAllocator;

#[test]
fn test_out_of_memory_returns_null_handle() {
    let _ = env_logger::try_init();
    let words = 4321;
    FAIL_SIZE.with(|fail| fail.set(Some(words * size_of::<Word>())));

    let mut error = ExternError::success();
    let handle = bigint_handle_external_init(1, 5, words as i32, &mut error);
    assert_eq!(handle, 0);
    assert_eq!(
        error.get_code(),
        ErrorCode::new(error_codes::ALLOCATION_FAILURE)
    );

    // Nothing is left half-registered; the same request goes through now.
    let handle = bigint_handle_external_init(1, 5, words as i32, &mut error);
    assert_eq!(error.get_code(), ErrorCode::SUCCESS);
    assert_ne!(handle, 0);
    bigint_handle_free(handle, &mut error);
    assert_eq!(error.get_code(), ErrorCode::SUCCESS);
}
