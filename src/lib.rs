//! The UnitSize crate is a library for parsing and formatting integer
//! quantities expressed with unit suffixes, such as `"10KB"`, `"-4Gi"`, or
//! `"+512"`.
//!
//! A caller builds a [`UnitTable`] mapping unit suffixes to multipliers, and
//! parses strings against it to obtain [`SizedValue`]s holding the exact
//! scaled integer, along with a record of the sign the user wrote. Formatting
//! picks the largest unit that divides the stored value evenly.
//!
//! The crate deliberately exposes just a parse/display pair, so that a value
//! can be bound to any command-line flag or configuration mechanism that
//! works in terms of "set from string" and "render to string" hooks.



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cognitive_complexity,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::integer_division,
	clippy::let_underscore_must_use,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod errors;
mod table;
mod value;



//		Packages

pub use errors::{ParseError, UnitTableError};
pub use table::UnitTable;
pub use value::{Sign, SizedValue};


