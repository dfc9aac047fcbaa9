//! Unit table type.



//		Modules

#[cfg(test)]
#[path = "tests/table.rs"]
mod tests;



//		Packages

use crate::errors::{ParseError, UnitTableError};
use crate::value::{Sign, SizedValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;



//		Structs

//		UnitTable
/// A table of unit suffixes and their multipliers.
///
/// This type maps unit-suffix strings (e.g. `"KB"`, `"Gi"`, or `""` for the
/// bare unit) to positive integer multipliers, and is the context against
/// which every [`SizedValue`] is parsed and formatted. A typical table for
/// byte quantities would be:
///
/// ```text
/// {"": 1, "KB": 1000, "MB": 1000000, "Ki": 1024, "Mi": 1048576}
/// ```
///
/// At least one entry must map to a multiplier of exactly 1, known as the
/// "base unit", so that every parsed value has at least one exact textual
/// representation. Construction fails with [`UnitTableError::NoBaseUnit`]
/// otherwise. Multipliers are expected to be strictly positive; this is not
/// validated, but a non-positive multiplier is never selected when
/// formatting.
///
/// The table is immutable once constructed, and is shared by reference
/// across all the values parsed against it. It is typically built once, at
/// process startup, from configuration owned by the embedding application.
/// Deserialisation goes through the same validation as [`new()`](UnitTable::new()),
/// so a table loaded from a config file upholds the base-unit invariant.
///
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "BTreeMap<String, i64>", try_from = "BTreeMap<String, i64>")]
pub struct UnitTable {
	/// The unit suffix to multiplier mapping.
	mapping: BTreeMap<String, i64>,
}

//󰭅		UnitTable
impl UnitTable {
	//		new
	/// Creates a new unit table from the supplied mapping.
	///
	/// # Errors
	///
	/// Returns [`UnitTableError::NoBaseUnit`] if no entry in the mapping has
	/// a multiplier of exactly 1.
	pub fn new(mapping: BTreeMap<String, i64>) -> Result<Self, UnitTableError> {
		if mapping.values().any(|&multiplier| multiplier == 1) {
			Ok(Self { mapping })
		} else {
			Err(UnitTableError::NoBaseUnit(mapping))
		}
	}

	//		mapping
	/// The unit suffix to multiplier mapping.
	#[must_use]
	pub const fn mapping(&self) -> &BTreeMap<String, i64> {
		&self.mapping
	}

	//		multiplier
	/// The multiplier for the given unit suffix, if present.
	///
	/// Matching is exact and case-sensitive, with no normalisation.
	#[must_use]
	pub fn multiplier(&self, suffix: &str) -> Option<i64> {
		self.mapping.get(suffix).copied()
	}

	//		parse
	/// Parses an input string against this table.
	///
	/// This is a convenience for [`SizedValue::parse()`], which documents the
	/// full algorithm.
	///
	/// # Errors
	///
	/// Returns a [`ParseError`] describing the offending input if the string
	/// cannot be converted.
	pub fn parse(&self, input: &str) -> Result<SizedValue<'_>, ParseError> {
		SizedValue::parse(self, input)
	}

	//		value
	/// Creates a value directly from an already-scaled magnitude and a sign.
	///
	/// This is intended for embedding adapters that need to seed a default
	/// value before any input has been parsed.
	#[must_use]
	pub const fn value(&self, magnitude: i64, sign: Sign) -> SizedValue<'_> {
		SizedValue::new(self, magnitude, sign)
	}
}

//󰭅		From: UnitTable -> BTreeMap
impl From<UnitTable> for BTreeMap<String, i64> {
	//		from
	fn from(table: UnitTable) -> Self {
		table.mapping
	}
}

//󰭅		TryFrom: BTreeMap -> UnitTable
impl TryFrom<BTreeMap<String, i64>> for UnitTable {
	type Error = UnitTableError;

	//		try_from
	fn try_from(mapping: BTreeMap<String, i64>) -> Result<Self, Self::Error> {
		Self::new(mapping)
	}
}


