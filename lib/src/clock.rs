//! Wall-clock time source for history timestamps.
//!
//! The engine has no clock of its own. A host registers one with
//! [`clock_register_source`]; until then every accessor returns `0`.

use core::sync::atomic::{AtomicPtr, Ordering};

/// Returns milliseconds since an arbitrary, host-chosen epoch.
pub type ClockFn = fn() -> u64;

static SOURCE: AtomicPtr<()> = AtomicPtr::new(core::ptr::null_mut());

pub fn clock_register_source(source: ClockFn) {
    SOURCE.store(source as *mut (), Ordering::Release);
}

pub fn clock_is_registered() -> bool {
    !SOURCE.load(Ordering::Acquire).is_null()
}

/// Milliseconds reported by the registered source, or `0` before one exists.
#[inline]
pub fn uptime_ms() -> u64 {
    let ptr = SOURCE.load(Ordering::Acquire);
    if ptr.is_null() {
        return 0;
    }
    // SAFETY: only `clock_register_source` writes SOURCE, and it stores a
    // valid `ClockFn`.
    let source: ClockFn = unsafe { core::mem::transmute::<*mut (), ClockFn>(ptr) };
    source()
}
