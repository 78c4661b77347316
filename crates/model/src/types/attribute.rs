use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a faceted field such as `color` or `price.value`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attribute(String);

impl Attribute {
	/// Create a new [`Attribute`] from the provided `name`.
	#[must_use]
	pub fn new(name: impl Into<String>) -> Self {
		Self(name.into())
	}

	/// Return the underlying attribute name.
	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Attribute {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for Attribute {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

impl From<String> for Attribute {
	fn from(name: String) -> Self {
		Self(name)
	}
}

impl Borrow<str> for Attribute {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for Attribute {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
