//! Browsing history state machine.
//!
//! [`HistoryNavigator`] owns the visited locations and a cursor marking the
//! current one. Moving past either end of the history is a no-op, so every
//! operation is total over its input.

pub mod navigator;

pub use navigator::HistoryNavigator;
