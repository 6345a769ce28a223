// src/checklist/select.rs

use crate::checklist::catalog::{catalogue, categories_for_section, InspectionModule, ItemConfig};

/// Items to present and validate in one checklist section, in catalogue
/// declaration order. Sections outside 2..=4 yield an empty sequence.
///
/// Pure table lookup + filter; safe to call on every render.
pub fn items_for_section(module: InspectionModule, section: usize) -> Vec<&'static ItemConfig> {
    let cats = categories_for_section(module, section);
    if cats.is_empty() {
        return Vec::new();
    }

    catalogue(module)
        .iter()
        .filter(|item| cats.contains(&item.category))
        .collect()
}

/// Same items partitioned under their categories, in first-seen order.
pub fn grouped_items_for_section(
    module: InspectionModule,
    section: usize,
) -> Vec<(&'static str, Vec<&'static ItemConfig>)> {
    let mut groups: Vec<(&'static str, Vec<&'static ItemConfig>)> = Vec::new();

    for item in items_for_section(module, section) {
        match groups.iter_mut().find(|(cat, _)| *cat == item.category) {
            Some((_, items)) => items.push(item),
            None => groups.push((item.category, vec![item])),
        }
    }

    groups
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn checklist_sections_cover_the_catalogue_exactly_once() {
        for module in InspectionModule::ALL {
            let mut union: BTreeSet<&str> = BTreeSet::new();
            let mut total = 0usize;

            for section in 2..=4 {
                let ids: BTreeSet<&str> = items_for_section(module, section)
                    .iter()
                    .map(|i| i.id)
                    .collect();
                assert!(
                    union.is_disjoint(&ids),
                    "{module:?}: section {section} repeats items from an earlier section"
                );
                total += ids.len();
                union.extend(ids);
            }

            let all: BTreeSet<&str> = catalogue(module).iter().map(|i| i.id).collect();
            assert_eq!(union, all, "{module:?}: union of sections != catalogue");
            assert_eq!(total, all.len());
        }
    }

    #[test]
    fn non_checklist_sections_yield_empty() {
        for module in InspectionModule::ALL {
            for section in [0usize, 1, 5, 6, 42] {
                assert!(items_for_section(module, section).is_empty());
                assert!(grouped_items_for_section(module, section).is_empty());
            }
        }
    }

    #[test]
    fn selection_preserves_catalogue_order() {
        for module in InspectionModule::ALL {
            for section in 2..=4 {
                let selected = items_for_section(module, section);
                let mut last_pos = 0usize;
                for item in selected {
                    let pos = catalogue(module)
                        .iter()
                        .position(|i| std::ptr::eq(i, item))
                        .expect("item comes from catalogue");
                    assert!(pos >= last_pos, "{module:?}: order not preserved");
                    last_pos = pos;
                }
            }
        }
    }

    #[test]
    fn grouping_keeps_first_seen_category_order() {
        let groups = grouped_items_for_section(InspectionModule::Petroleum, 3);
        let cats: Vec<&str> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(cats, vec!["Cab & Electrical", "Tanker Shell & Valves"]);

        for (cat, items) in groups {
            assert!(!items.is_empty());
            assert!(items.iter().all(|i| i.category == cat));
        }
    }
}
