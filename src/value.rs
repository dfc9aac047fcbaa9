//! Sized value and sign types.



//		Modules

#[cfg(test)]
#[path = "tests/value.rs"]
mod tests;



//		Packages

use crate::errors::ParseError;
use crate::table::UnitTable;
use core::fmt::{Display, Formatter, self};
use serde::{Deserialize, Serialize};



//		Enums

//		Sign
/// The sign explicitly written at the start of a parsed input.
///
/// This records whether the input text began with a `+` or `-` character,
/// independently of the arithmetic sign of the resulting magnitude: a user
/// can write `"-0KB"`, and the magnitude is zero while the recorded sign is
/// [`Negative`](Sign::Negative). It is purely an annotation of how the input
/// was written.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Sign {
	/// No explicit sign character was present.
	#[default]
	None,

	/// The input began with a `-` character.
	Negative,

	/// The input began with a `+` character.
	Positive,
}

//󰭅		Sign
impl Sign {
	//		as_str
	/// The prefix string this sign was written as.
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::None     => "",
			Self::Negative => "-",
			Self::Positive => "+",
		}
	}
}

//󰭅		Display
impl Display for Sign {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}



//		Structs

//		SizedValue
/// A sized quantity, canonicalised against a unit table.
///
/// This type holds the exact unit-scaled integer for an input such as
/// `"10KB"` or `"-4Gi"`, together with a record of the sign the user wrote
/// and a reference to the [`UnitTable`] it was parsed against. It is the
/// value type to embed wherever users type quantities with units, such as
/// memory limits or file-size thresholds, and the program needs an exact
/// integer.
///
/// Values are immutable: parsing produces a fresh value rather than mutating
/// an existing one, so a value already handed to another component can never
/// change underneath it. An adapter that needs in-place update semantics
/// replaces its stored value with the newly-parsed one.
///
/// The magnitude is always an exact `number * multiplier` product for a
/// multiplier present in the table; no partially-parsed state is ever
/// observable.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SizedValue<'u> {
	/// The unit-scaled integer value, sign included.
	magnitude: i64,

	/// The sign explicitly present in the parsed input.
	sign: Sign,

	/// The unit table the value was parsed against.
	table: &'u UnitTable,
}

//󰭅		SizedValue
impl<'u> SizedValue<'u> {
	//		new
	/// Creates a value directly from an already-scaled magnitude and a sign.
	#[must_use]
	pub const fn new(table: &'u UnitTable, magnitude: i64, sign: Sign) -> Self {
		Self { magnitude, sign, table }
	}

	//		parse
	/// Parses an input string against the given unit table.
	///
	/// The input is a base-10 signed integer followed by an optional unit
	/// suffix. An explicit leading `+` or `-` is recorded as the value's
	/// [`Sign`], and also participates in the numeric value itself. The unit
	/// suffix begins at the first Unicode-alphabetic character after the
	/// optional sign, runs to the end of the input, and is looked up in the
	/// table exactly as written; when no letter is present the empty suffix
	/// is looked up, so a table must contain an entry for `""` if bare
	/// integers are to be accepted. The result's magnitude is the parsed
	/// number multiplied by the suffix's multiplier.
	///
	/// # Errors
	///
	/// * [`ParseError::Empty`] if the input is empty.
	/// * [`ParseError::InvalidNumber`] if the substring before the suffix is
	///   not a valid signed 64-bit integer. Non-letter characters between the
	///   digits and the suffix fold into the numeric substring, so they
	///   surface here rather than as an unknown unit.
	/// * [`ParseError::UnknownUnit`] if the suffix is not in the table.
	/// * [`ParseError::Overflow`] if the scaled magnitude does not fit in a
	///   signed 64-bit integer.
	pub fn parse(table: &'u UnitTable, input: &str) -> Result<Self, ParseError> {
		if input.is_empty() {
			return Err(ParseError::Empty);
		}

		//	Record an explicit leading sign. The sign character stays part of
		//	the numeric substring, so the parsed number carries it too.
		let (sign, skip) = match input.chars().next() {
			Some('+') => (Sign::Positive, 1),
			Some('-') => (Sign::Negative, 1),
			_         => (Sign::None,     0),
		};

		//	The unit suffix starts at the first letter after the sign.
		#[expect(clippy::arithmetic_side_effects, reason = "Cannot overflow, as both are in-bounds offsets")]
		let boundary = input.get(skip..).unwrap_or_default()
			.char_indices()
			.find(|&(_, c)| c.is_alphabetic())
			.map_or(input.len(), |(i, _)| skip + i)
		;
		let (number, suffix) = input.split_at(boundary);

		let number: i64 = number.parse()
			.map_err(|err| ParseError::InvalidNumber(input.to_owned(), err))?;

		let multiplier = table.multiplier(suffix)
			.ok_or_else(|| ParseError::UnknownUnit(input.to_owned(), suffix.to_owned()))?;

		let magnitude = number.checked_mul(multiplier)
			.ok_or_else(|| ParseError::Overflow(input.to_owned()))?;

		Ok(Self { magnitude, sign, table })
	}

	//		magnitude
	/// The unit-scaled integer value, sign included.
	#[must_use]
	pub const fn magnitude(&self) -> i64 {
		self.magnitude
	}

	//		sign
	/// The sign explicitly present in the parsed input.
	#[must_use]
	pub const fn sign(&self) -> Sign {
		self.sign
	}

	//		table
	/// The unit table the value was parsed against.
	#[must_use]
	pub const fn table(&self) -> &'u UnitTable {
		self.table
	}
}

//󰭅		Display
impl Display for SizedValue<'_> {
	//		fmt
	/// Formats the value using the largest unit that divides it evenly.
	///
	/// Among all table entries whose multiplier evenly divides the magnitude,
	/// the one with the largest multiplier is selected, and the quotient is
	/// printed followed by that entry's suffix. When several entries share
	/// the winning multiplier, which of them is printed is unspecified; any
	/// of them re-parses to the same magnitude. If no entry divides the
	/// magnitude evenly, which cannot happen for a validated table because
	/// the base unit always divides, the raw magnitude is printed with a
	/// `(no unit)` marker.
	///
	/// A recorded [`Positive`](Sign::Positive) sign is rendered as a `+`
	/// prefix. A recorded [`Negative`](Sign::Negative) sign is only rendered
	/// when the quotient does not already carry its own minus sign, as with a
	/// parsed `"-0KB"`, so the output never doubles the sign and always
	/// re-parses to the same magnitude.
	#[expect(clippy::arithmetic_side_effects, reason = "Multiplier is at least 1 when reached")]
	#[expect(clippy::integer_division,        reason = "Only exact divisions are selected")]
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	Find the largest multiplier that divides the value evenly. The
		//	comparison runs first, so a non-positive multiplier can never
		//	reach the modulo.
		let mut best: Option<(&str, i64)> = None;
		for (suffix, &multiplier) in self.table.mapping() {
			if multiplier >= best.map_or(1, |(_, mult)| mult) && self.magnitude % multiplier == 0 {
				best = Some((suffix.as_str(), multiplier));
			}
		}

		let sign = match self.sign {
			Sign::Negative if self.magnitude >= 0 => "-",
			Sign::Positive                        => "+",
			_                                     => "",
		};

		match best {
			Some((suffix, multiplier)) => write!(f, "{sign}{}{suffix}", self.magnitude / multiplier),
			None                       => write!(f, "{sign}{} (no unit)", self.magnitude),
		}
	}
}


