//! The validation chain and its accumulator.
//!
//! This module provides [`Validation`], which collects every failure of a
//! chain of checks instead of stopping at the first one, the [`Chain`]
//! trait carrying the check methods, the [`Gate`] used for conditional
//! checks, and [`scope`] for chains that finish themselves.
//!
//! # Key Components
//!
//! - [`begin`] / [`begin_with`] - start a chain
//! - [`Chain`] - check methods shared by accumulators, gates and `Option<Validation>`
//! - [`Validation::finish`] - turn the accumulated failures into one error
//! - [`Gate`] - run or skip the next check
//! - [`scope`] - run a chain that is finished on exit
//!
//! # Examples
//!
//! ```
//! use arg_rail::prelude::*;
//!
//! let quantity = "12";
//! let gift = true;
//! let note: Option<&str> = None;
//!
//! let result = begin()
//!     .check_numeric(Some(quantity), "quantity")?
//!     .gate_on(gift)
//!     .check_not_null_or_empty(note, "gift_note")?
//!     .finish();
//!
//! let err = result.unwrap_err();
//! assert_eq!(err.single().unwrap().name(), "gift_note");
//! # Ok::<(), UsageError>(())
//! ```
pub mod core;
pub mod gate;
pub mod scope;
pub mod traits;

pub use self::core::*;
pub use self::gate::*;
pub use self::scope::*;
pub use self::traits::*;
