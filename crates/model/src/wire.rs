//! Serde adapters for the upstream JSON shape of facet mappings.
//!
//! Search responses encode facets as nested objects,
//! `{ "color": { "red": 3, "blue": 1 } }`, rather than as lists of value and
//! count pairs. Key order is significant: it is the input order the orderer
//! falls back to, so decoding goes through [`IndexMap`] at both levels.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{Attribute, Facet, FacetsMap};

struct WireFacets<'a>(&'a FacetsMap);

struct WireValues<'a>(&'a [Facet]);

impl Serialize for WireFacets<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.0.len()))?;
		for (attribute, facets) in self.0 {
			map.serialize_entry(attribute, &WireValues(facets))?;
		}
		map.end()
	}
}

impl Serialize for WireValues<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.0.len()))?;
		for facet in self.0 {
			map.serialize_entry(&facet.value, &facet.count)?;
		}
		map.end()
	}
}

fn from_wire(raw: IndexMap<Attribute, IndexMap<String, u64>>) -> FacetsMap {
	raw.into_iter()
		.map(|(attribute, values)| {
			let facets = values
				.into_iter()
				.map(|(value, count)| Facet::new(value, count))
				.collect();
			(attribute, facets)
		})
		.collect()
}

/// `#[serde(with = "...")]` adapter for `Option<FacetsMap>` fields.
pub mod optional_facets {
	use super::*;

	pub fn serialize<S: Serializer>(
		facets: &Option<FacetsMap>,
		serializer: S,
	) -> Result<S::Ok, S::Error> {
		match facets {
			Some(facets) => serializer.serialize_some(&WireFacets(facets)),
			None => serializer.serialize_none(),
		}
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(
		deserializer: D,
	) -> Result<Option<FacetsMap>, D::Error> {
		let raw = Option::<IndexMap<Attribute, IndexMap<String, u64>>>::deserialize(deserializer)?;
		Ok(raw.map(from_wire))
	}
}
