//! The regions that publish editions.

use std::sync::LazyLock;

const ACTIVE_REGION_IDS: [&str; 9] = ["7", "8", "9", "12", "13", "14", "17", "18", "19"];

/// A selectable region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub id: String,
    pub label: String,
}

/// All active regions, in display order. The first is the default.
pub static REGIONS: LazyLock<Vec<Region>> = LazyLock::new(|| {
    ACTIVE_REGION_IDS
        .iter()
        .map(|id| Region {
            id: (*id).to_string(),
            label: format!("Region {id}"),
        })
        .collect()
});

pub fn region_index(id: &str) -> Option<usize> {
    REGIONS.iter().position(|r| r.id == id)
}

pub fn region_by_id(id: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.id == id)
}

/// Index after `index`, wrapping to the first region.
pub fn next_index(index: usize) -> usize {
    (index + 1) % REGIONS.len()
}

/// Index before `index`, wrapping to the last region.
pub fn prev_index(index: usize) -> usize {
    index.checked_sub(1).unwrap_or(REGIONS.len() - 1)
}

/// Comma-separated list of valid ids, for error messages.
pub fn known_ids() -> String {
    ACTIVE_REGION_IDS.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_have_labels() {
        assert_eq!(REGIONS.len(), 9);
        assert_eq!(REGIONS[0].id, "7");
        assert_eq!(REGIONS[0].label, "Region 7");
    }

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(region_index("12"), Some(3));
        assert_eq!(region_by_id("19").map(|r| r.label.as_str()), Some("Region 19"));
        assert!(region_index("10").is_none());
    }

    #[test]
    fn test_cycling_wraps_both_ways() {
        assert_eq!(next_index(0), 1);
        assert_eq!(next_index(8), 0);
        assert_eq!(prev_index(0), 8);
        assert_eq!(prev_index(3), 2);
    }
}
