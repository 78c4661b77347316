use facetlist_model::FacetsMap;

/// Append disjunctive facet values to the primary facets.
///
/// Only attributes already present in `primary` are touched. A secondary
/// value is appended when no value with the same string exists yet; existing
/// values keep their count. Returns the number of values appended.
pub fn merge_disjunctive(primary: &mut FacetsMap, secondary: &FacetsMap) -> usize {
	let mut appended = 0;
	for (attribute, extra) in secondary {
		let Some(existing) = primary.get_mut(attribute.as_str()) else {
			continue;
		};
		for facet in extra {
			if !existing.iter().any(|known| known.value == facet.value) {
				existing.push(facet.clone());
				appended += 1;
			}
		}
	}
	appended
}

#[cfg(test)]
mod tests {
	use facetlist_model::Facet;

	use super::*;

	#[test]
	fn appends_new_values_and_leaves_existing_ones_untouched() {
		let mut primary = FacetsMap::new();
		primary.insert("Y".into(), vec![Facet::new("red", 3)]);
		let mut secondary = FacetsMap::new();
		secondary.insert("Y".into(), vec![Facet::new("red", 9), Facet::new("blue", 2)]);

		assert_eq!(merge_disjunctive(&mut primary, &secondary), 1);
		assert_eq!(primary["Y"], [Facet::new("red", 3), Facet::new("blue", 2)]);
	}

	#[test]
	fn ignores_attributes_missing_from_the_primary_facets() {
		let mut primary = FacetsMap::new();
		primary.insert("color".into(), vec![Facet::new("red", 1)]);
		let mut secondary = FacetsMap::new();
		secondary.insert("brand".into(), vec![Facet::new("acme", 4)]);

		assert_eq!(merge_disjunctive(&mut primary, &secondary), 0);
		assert!(!primary.contains_key("brand"));
	}

	#[test]
	fn duplicate_secondary_values_are_appended_once() {
		let mut primary = FacetsMap::new();
		primary.insert("size".into(), vec![]);
		let mut secondary = FacetsMap::new();
		secondary.insert("size".into(), vec![Facet::new("m", 1), Facet::new("m", 5)]);

		merge_disjunctive(&mut primary, &secondary);
		assert_eq!(primary["size"], [Facet::new("m", 1)]);
	}
}
