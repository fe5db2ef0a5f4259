//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components receive plain values and callbacks from the page that owns the
//! state; they hold no signals of their own.

pub mod product_card;
