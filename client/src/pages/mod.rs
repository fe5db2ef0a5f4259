//! Page modules for screen-level orchestration.
//!
//! ARCHITECTURE
//! ============
//! A page owns its state signals and every network operation; rendering
//! details are delegated to `components`.

pub mod products;
