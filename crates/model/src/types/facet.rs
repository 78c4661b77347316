use serde::{Deserialize, Serialize};

use super::Attribute;

/// A single facet value with the number of hits carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
	pub value: String,
	pub count: u64,
	/// Value with highlighting markup applied, when the source provides one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub highlighted: Option<String>,
}

impl Facet {
	/// Create a new [`Facet`] with the provided `value` and `count`.
	#[must_use]
	pub fn new(value: impl Into<String>, count: u64) -> Self {
		Self {
			value: value.into(),
			count,
			highlighted: None,
		}
	}

	/// Attach a highlighted rendition of the value.
	#[must_use]
	pub fn with_highlighted(mut self, highlighted: impl Into<String>) -> Self {
		self.highlighted = Some(highlighted.into());
		self
	}
}

/// An attribute paired with its ordered facet values, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributedFacets {
	pub attribute: Attribute,
	pub facets: Vec<Facet>,
}

impl AttributedFacets {
	#[must_use]
	pub fn new(attribute: impl Into<Attribute>, facets: Vec<Facet>) -> Self {
		Self {
			attribute: attribute.into(),
			facets,
		}
	}

	/// Iterate over the facet value strings in order.
	pub fn values(&self) -> impl Iterator<Item = &str> {
		self.facets.iter().map(|facet| facet.value.as_str())
	}
}
