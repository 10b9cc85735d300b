#![no_std]

#[cfg(test)]
extern crate std;

pub mod clock;
pub mod klog;
pub mod random;
pub mod ring_buffer;

pub use clock::{ClockFn, clock_register_source, uptime_ms};
pub use klog::{
    KlogBackend, KlogLevel, klog_get_level, klog_init, klog_is_enabled, klog_register_backend,
    klog_set_level,
};
pub use random::{Lfsr64, random_next};
pub use ring_buffer::RingBuffer;
