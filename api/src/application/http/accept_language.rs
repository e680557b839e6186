use axum::http::HeaderMap;
use krishiseer_core::domain::locale::Locale;

/// Display locale for a request: an explicit `language` field wins,
/// otherwise the first `Accept-Language` tag, otherwise English.
pub fn locale_for(headers: &HeaderMap, explicit: Option<&str>) -> Locale {
    if let Some(language) = explicit {
        return Locale::from_tag(language);
    }

    headers
        .get("accept-language")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|tag| Locale::from_tag(tag.trim()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn explicit_language_wins() {
        let mut headers = HeaderMap::new();
        headers.insert("accept-language", HeaderValue::from_static("en-US,en"));
        assert_eq!(locale_for(&headers, Some("hi")), Locale::Hi);
    }

    #[test]
    fn falls_back_to_accept_language_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "accept-language",
            HeaderValue::from_static("or-IN,or;q=0.9,en;q=0.8"),
        );
        assert_eq!(locale_for(&headers, None), Locale::Or);
    }

    #[test]
    fn defaults_to_english() {
        assert_eq!(locale_for(&HeaderMap::new(), None), Locale::En);
    }
}
