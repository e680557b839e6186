//! Crop-specific agronomic tips, selected by regex over the lower-cased
//! crop label.

use regex::Regex;
use std::sync::OnceLock;

const TIP_TABLE: [(&str, &str); 8] = [
    (
        r"rice|paddy",
        "Maintain consistent soil moisture; avoid standing water for seedlings.",
    ),
    (
        r"wheat|barley",
        "Ensure adequate irrigation at crown root initiation; monitor rust.",
    ),
    (
        r"maize|corn",
        "Irrigate around tasseling; check for borers and nutrient deficiency.",
    ),
    (
        r"millet|ragi|sorghum",
        "Light irrigation if dry; watch for blast and smut.",
    ),
    (
        r"sugarcane",
        "Keep soil moist; remove weeds early; monitor shoot borer.",
    ),
    (
        r"cotton",
        "Scout for bollworm/aphids; avoid waterlogging.",
    ),
    (
        r"soybean|mustard|groundnut",
        "Balanced nutrients; watch for aphids/leaf spot; avoid excess moisture.",
    ),
    (
        r"banana|potato|onion",
        "Ensure drainage; apply recommended fertilizers; monitor fungal issues.",
    ),
];

fn compiled_tips() -> &'static Vec<(Regex, &'static str)> {
    static COMPILED: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        TIP_TABLE
            .iter()
            .map(|(pattern, tip)| (Regex::new(pattern).unwrap(), *tip))
            .collect()
    })
}

/// The tip for a crop label, if the label matches a known crop family.
pub fn tip_for(label: &str) -> Option<&'static str> {
    let lower = label.to_lowercase();
    compiled_tips()
        .iter()
        .find(|(regex, _)| regex.is_match(&lower))
        .map(|(_, tip)| *tip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheat_gets_the_crown_root_tip() {
        assert_eq!(
            tip_for("Wheat"),
            Some("Ensure adequate irrigation at crown root initiation; monitor rust.")
        );
    }

    #[test]
    fn synonym_families_share_a_tip() {
        assert_eq!(tip_for("Corn"), tip_for("maize"));
        assert_eq!(tip_for("Paddy"), tip_for("rice"));
    }

    #[test]
    fn unknown_crops_get_no_tip() {
        assert_eq!(tip_for("Cactus"), None);
    }
}
