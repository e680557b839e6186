//! Crop label vocabulary and normalization shared by the identification
//! paths.

/// Candidate labels for the zero-shot plant check.
pub const PLANT_CHECK_LABELS: [&str; 5] = ["plant", "person", "animal", "object", "landscape"];

/// Fixed crop vocabulary for zero-shot crop labeling and keyword
/// inference.
pub const CROP_LABELS: [&str; 18] = [
    // Cereals
    "rice", "wheat", "maize", "corn", "barley", "millet", "ragi", "sorghum",
    // Cash crops
    "sugarcane", "cotton",
    // Oilseeds and pulses
    "soybean", "mustard", "groundnut", "chickpea", "pigeon pea",
    // Horticulture
    "banana", "potato", "onion",
];

/// Label keywords treated as evidence that a generic classifier saw a
/// plant.
pub const PLANT_HINTS: [&str; 10] = [
    "plant", "leaf", "tree", "flower", "field", "vegetation", "corn", "wheat", "rice", "maize",
];

/// Map regional synonyms onto the display vocabulary.
pub fn apply_synonym(label: &str) -> &str {
    match label {
        "maize" => "corn",
        "paddy" => "rice",
        other => other,
    }
}

/// Capitalize the first character, leaving the rest untouched.
pub fn title_case(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Normalize a raw classifier label into a display crop label: collapse
/// whitespace, lower-case, map synonyms, title-case.
pub fn normalize_crop_label(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
    title_case(apply_synonym(&collapsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synonyms_map_to_display_vocabulary() {
        assert_eq!(normalize_crop_label("maize"), "Corn");
        assert_eq!(normalize_crop_label("Paddy"), "Rice");
        assert_eq!(normalize_crop_label("wheat"), "Wheat");
    }

    #[test]
    fn whitespace_is_collapsed_before_matching() {
        assert_eq!(normalize_crop_label("  pigeon   pea "), "Pigeon pea");
    }

    #[test]
    fn title_case_touches_only_the_first_character() {
        assert_eq!(title_case("pigeon pea"), "Pigeon pea");
        assert_eq!(title_case(""), "");
    }
}
