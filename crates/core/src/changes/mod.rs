//! Changes module - diffing a snapshot against its predecessor.

mod change_detector;

pub use change_detector::detect_changes;

#[cfg(test)]
mod change_detector_tests;
