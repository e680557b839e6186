//! Deterministic rule-based responder: the final fallback tier when every
//! provider is unreachable.

use regex::Regex;
use std::sync::OnceLock;

use crate::domain::locale::{Locale, MessageId, catalog};

struct TopicRule {
    pattern: &'static str,
    message: MessageId,
}

/// Ordered topic rules; first match wins. English and Hindi keyword sets.
const RULES: [TopicRule; 7] = [
    TopicRule {
        pattern: r"crop|farming|खेती|फसल",
        message: MessageId::ChatCrop,
    },
    TopicRule {
        pattern: r"weather|rain|मौसम|बारिश",
        message: MessageId::ChatWeather,
    },
    TopicRule {
        pattern: r"disease|बीमारी|रोग",
        message: MessageId::ChatDisease,
    },
    TopicRule {
        pattern: r"fertilizer|उर्वरक",
        message: MessageId::ChatFertilizer,
    },
    TopicRule {
        pattern: r"water|irrigation|पानी|सिंचाई",
        message: MessageId::ChatWater,
    },
    TopicRule {
        pattern: r"pest|कीट",
        message: MessageId::ChatPest,
    },
    TopicRule {
        pattern: r"scheme|योजना",
        message: MessageId::ChatScheme,
    },
];

fn compiled_rules() -> &'static Vec<(Regex, MessageId)> {
    static COMPILED: OnceLock<Vec<(Regex, MessageId)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        RULES
            .iter()
            .map(|rule| (Regex::new(rule.pattern).unwrap(), rule.message))
            .collect()
    })
}

/// Canned response for the user's last message, keyed by topic regex.
pub fn respond(last_message: &str, locale: Locale) -> &'static str {
    let lower = last_message.to_lowercase();
    let message = compiled_rules()
        .iter()
        .find(|(regex, _)| regex.is_match(&lower))
        .map(|(_, message)| *message)
        .unwrap_or(MessageId::ChatGeneric);

    catalog::text(locale, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn irrigation_routes_to_water_management() {
        assert_eq!(
            respond("What irrigation schedule suits my field?", Locale::En),
            catalog::text(Locale::En, MessageId::ChatWater)
        );
    }

    #[test]
    fn hindi_keywords_route_in_hindi() {
        assert_eq!(
            respond("सिंचाई कब करें?", Locale::Hi),
            catalog::text(Locale::Hi, MessageId::ChatWater)
        );
    }

    #[test]
    fn pest_topic_is_reachable() {
        assert_eq!(
            respond("aphid pest outbreak", Locale::En),
            catalog::text(Locale::En, MessageId::ChatPest)
        );
    }

    #[test]
    fn disease_takes_priority_over_pest() {
        assert_eq!(
            respond("disease from pest damage", Locale::En),
            catalog::text(Locale::En, MessageId::ChatDisease)
        );
    }

    #[test]
    fn unmatched_input_gets_generic_response() {
        assert_eq!(
            respond("hello there", Locale::En),
            catalog::text(Locale::En, MessageId::ChatGeneric)
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            respond("WEATHER tomorrow?", Locale::En),
            catalog::text(Locale::En, MessageId::ChatWeather)
        );
    }
}
