//! # State Module
//!
//! Form state for each calculator.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │      GstFormState        │        │   PercentageFormState    │      │
//! │  │                          │        │                          │      │
//! │  │  amount text             │        │  base text               │      │
//! │  │  rate text               │        │  percentage text         │      │
//! │  │  active preset           │        │                          │      │
//! │  │  GstCalculator (mode)    │        │  PercentageCalculator    │      │
//! │  │  GstView                 │        │  PercentageView          │      │
//! │  └──────────────────────────┘        └──────────────────────────┘      │
//! │                                                                         │
//! │  The two forms are independent. Each is owned by one session, so no   │
//! │  locking is needed: every change runs synchronously to completion.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod gst;
mod percentage;

pub use gst::{GstFormState, GstView};
pub use percentage::{PercentageFormState, PercentageView};
