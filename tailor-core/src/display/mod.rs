//! Reactive display synchronization for the order form.
//!
//! The calculation core stays pure; this module is the thin layer that reads
//! the two input fields, recomputes the derived amounts, and writes them to
//! named display slots. Adapters (terminal, web form, file) implement
//! [`InputSource`] and [`DisplaySink`] and own event delivery; the binding
//! owns the computation and the slot writes.

mod binding;

pub use binding::{DisplayConfig, DisplaySink, InputSource, PricingBinding};
