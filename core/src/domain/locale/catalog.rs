//! Keyed message catalog consulted by both the advisory synthesizer and
//! the rule-based chat responder. Entries without a translation for a
//! locale resolve to the English text.

use super::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageId {
    // Advisory flow
    AdviceLabel,
    HealthLabel,
    TreatmentLabel,
    PossibleIssuesLabel,
    NotCropDetected,
    NeedClearerPhoto,
    AnalysisFailed,
    // Health status display names
    StatusHealthy,
    StatusNeedsAttention,
    StatusImmediateCare,
    StatusUnhealthy,
    // Rule-based chat responses
    ChatCrop,
    ChatWeather,
    ChatDisease,
    ChatFertilizer,
    ChatWater,
    ChatPest,
    ChatScheme,
    ChatGeneric,
}

/// Look up a message. Falls back to English when the locale has no entry.
pub fn text(locale: Locale, id: MessageId) -> &'static str {
    match locale {
        Locale::En => english(id),
        Locale::Hi => hindi(id).unwrap_or_else(|| english(id)),
        Locale::Or => odia(id).unwrap_or_else(|| english(id)),
    }
}

fn english(id: MessageId) -> &'static str {
    use MessageId::*;
    match id {
        AdviceLabel => "AI Advice",
        HealthLabel => "Health",
        TreatmentLabel => "Treatment",
        PossibleIssuesLabel => "Possible issues:",
        NotCropDetected => {
            "This does not appear to be a crop. Please upload a clear photo of a plant or field."
        }
        NeedClearerPhoto => {
            "Could not identify the crop confidently. Please upload a clearer, well-lit photo."
        }
        AnalysisFailed => "Analysis failed. Please try again in a moment.",
        StatusHealthy => "Healthy",
        StatusNeedsAttention => "Needs Attention",
        StatusImmediateCare => "Immediate Care Required",
        StatusUnhealthy => "Unhealthy",
        ChatCrop => {
            "For crop management, consider soil testing, proper irrigation, and organic fertilizers. Which specific crop are you growing?"
        }
        ChatWeather => {
            "Weather monitoring is crucial for farming. Check local forecasts and plan irrigation accordingly. Would you like current weather updates?"
        }
        ChatDisease => {
            "Plant diseases can be identified by symptoms like yellowing, spots, or wilting. Upload a photo in our Advisory section for detailed analysis."
        }
        ChatFertilizer => {
            "Use balanced NPK fertilizers based on soil test results. Organic options include compost, vermicompost, and green manure."
        }
        ChatWater => {
            "Efficient water management includes drip irrigation, mulching, and rainwater harvesting. What's your current irrigation method?"
        }
        ChatPest => {
            "Integrated Pest Management (IPM) combines biological, cultural, and chemical controls. Early detection is key."
        }
        ChatScheme => {
            "Government schemes like PM-KISAN, Soil Health Card, and crop insurance are available. Check our Schemes section for details."
        }
        ChatGeneric => {
            "I'm here to help with your farming questions! Ask about crops, weather, diseases, fertilizers, government schemes, or any agricultural topic."
        }
    }
}

fn hindi(id: MessageId) -> Option<&'static str> {
    use MessageId::*;
    let text = match id {
        AdviceLabel => "एआई सलाह",
        HealthLabel => "स्वास्थ्य",
        TreatmentLabel => "उपचार",
        PossibleIssuesLabel => "संभावित समस्याएं:",
        NotCropDetected => "यह फसल नहीं लगती। कृपया पौधे या खेत की स्पष्ट फोटो अपलोड करें।",
        NeedClearerPhoto => "फसल की पहचान नहीं हो सकी। कृपया साफ रोशनी में स्पष्ट फोटो अपलोड करें।",
        AnalysisFailed => "विश्लेषण विफल रहा। कृपया थोड़ी देर बाद पुनः प्रयास करें।",
        StatusHealthy => "स्वस्थ",
        StatusNeedsAttention => "ध्यान की आवश्यकता",
        StatusImmediateCare => "तुरंत देखभाल चाहिए",
        StatusUnhealthy => "अस्वस्थ",
        ChatCrop => {
            "फसल प्रबंधन के लिए मिट्टी की जांच, उचित सिंचाई और जैविक उर्वरक का उपयोग करें। आप कौन सी फसल उगा रहे हैं?"
        }
        ChatWeather => "खेती के लिए मौसम की निगरानी महत्वपूर्ण है। स्थानीय पूर्वानुमान देखें और सिंचाई की योजना बनाएं।",
        ChatDisease => {
            "पौधों की बीमारियों की पहचान पीलापन, धब्बे या मुरझाने से होती है। विस्तृत विश्लेषण के लिए हमारे सलाह विभाग में फोटो अपलोड करें।"
        }
        ChatFertilizer => {
            "मिट्टी परीक्षण के आधार पर संतुलित NPK उर्वरक का उपयोग करें। जैविक विकल्पों में कंपोस्ट और वर्मीकंपोस्ट शामिल हैं।"
        }
        ChatWater => "कुशल जल प्रबंधन में ड्रिप सिंचाई, मल्चिंग और वर्षा जल संचयन शामिल है।",
        ChatPest => "एकीकृत कीट प्रबंधन (IPM) जैविक, सांस्कृतिक और रासायनिक नियंत्रण को जोड़ता है।",
        ChatScheme => "PM-किसान, सॉइल हेल्थ कार्ड और फसल बीमा जैसी सरकारी योजनाएं उपलब्ध हैं।",
        ChatGeneric => {
            "मैं आपके खेती के सवालों में मदद के लिए यहां हूं! फसल, मौसम, बीमारी, उर्वरक या किसी भी कृषि विषय के बारे में पूछें।"
        }
    };
    Some(text)
}

// Odia coverage mirrors the product: the advisory and health strings are
// translated, chat responses are not.
fn odia(id: MessageId) -> Option<&'static str> {
    use MessageId::*;
    match id {
        AdviceLabel => Some("ଏଆଇ ପରାମର୍ଶ"),
        NotCropDetected => Some(
            "ଏହା ଫସଲ ପରି ଦେଖାଯାଉ ନାହିଁ। ଦୟାକରି ଗଛ କିମ୍ବା କ୍ଷେତର ସ୍ପଷ୍ଟ ଫଟୋ ଅପଲୋଡ୍ କରନ୍ତୁ।",
        ),
        NeedClearerPhoto => Some(
            "ଫସଲ ଚିହ୍ନଟ ହୋଇପାରିଲା ନାହିଁ। ଦୟାକରି ଅଧିକ ସ୍ପଷ୍ଟ ଫଟୋ ଅପଲୋଡ୍ କରନ୍ତୁ।",
        ),
        AnalysisFailed => Some("ବିଶ୍ଳେଷଣ ବିଫଳ ହେଲା। ଦୟାକରି ପୁଣି ଚେଷ୍ଟା କରନ୍ତୁ।"),
        HealthLabel => Some("ସ୍ୱାସ୍ଥ୍ୟ"),
        TreatmentLabel => Some("ଚିକିତ୍ସା"),
        PossibleIssuesLabel => Some("ସମ୍ଭାବ୍ୟ ସମସ୍ୟା:"),
        StatusHealthy => Some("ସୁସ୍ଥ"),
        StatusNeedsAttention => Some("ଧ୍ୟାନ ଆବଶ୍ୟକ"),
        StatusImmediateCare => Some("ତୁରନ୍ତ ଯତ୍ନ ଆବଶ୍ୟକ"),
        StatusUnhealthy => Some("ଅସୁସ୍ଥ"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odia_falls_back_to_english_for_chat() {
        assert_eq!(
            text(Locale::Or, MessageId::ChatWater),
            text(Locale::En, MessageId::ChatWater)
        );
    }

    #[test]
    fn odia_health_strings_are_translated() {
        assert_eq!(text(Locale::Or, MessageId::StatusHealthy), "ସୁସ୍ଥ");
        assert_ne!(
            text(Locale::Or, MessageId::HealthLabel),
            text(Locale::En, MessageId::HealthLabel)
        );
    }

    #[test]
    fn hindi_is_fully_translated() {
        assert_eq!(text(Locale::Hi, MessageId::StatusUnhealthy), "अस्वस्थ");
    }
}
