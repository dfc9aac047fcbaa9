//! Contains error types used throughout the library.



//		Packages

use core::num::ParseIntError;
use std::collections::BTreeMap;
use thiserror::Error as ThisError;



//		Enums

//		UnitTableError
/// Represents the errors that can occur when constructing a unit table.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum UnitTableError {
	/// No entry in the supplied mapping has a multiplier of exactly 1, which
	/// would leave some values without an exact textual representation.
	#[error("No unit maps to multiplier 1 in {0:?}")]
	NoBaseUnit(BTreeMap<String, i64>),
}

//		ParseError
/// Represents the errors that can occur when parsing a sized value.
///
/// Every variant carries the offending input, so that the embedding
/// application can surface it to the user without further context.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ParseError {
	/// The input string is empty.
	#[error("Empty value")]
	Empty,

	/// The numeric part of the input is not a valid signed 64-bit base-10
	/// integer. This includes an empty numeric part, non-digit content before
	/// the unit suffix, and values outside the 64-bit signed range.
	#[error(r#"Could not convert "{0}" to a size: {1}"#)]
	InvalidNumber(String, #[source] ParseIntError),

	/// The unit suffix of the input is not present in the unit table.
	#[error(r#"Unit "{1}" in "{0}" is not valid"#)]
	UnknownUnit(String, String),

	/// Scaling the parsed number by its unit multiplier overflows a signed
	/// 64-bit integer.
	#[error(r#"Size "{0}" overflows a 64-bit integer"#)]
	Overflow(String),
}


