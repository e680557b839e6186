use tracing::warn;

use crate::domain::{
    chat::{
        entities::{ChatCompletionRequest, ChatMessage, ChatReply, ChatRole, MAX_TEXT_LEN},
        ports::ChatService,
        rules,
        stream::{self, SseByteStream},
    },
    common::{entities::app_errors::CoreError, services::Service},
    farmer::ports::FarmerRepository,
    health::ports::HealthCheckRepository,
    identification::ports::{
        AnalysisRepository, PlantIdentificationProvider, ZeroShotClassifierProvider,
    },
    locale::Locale,
    storage::ports::ObjectStoragePort,
    weather::ports::{AirQualityProvider, ForecastProvider, GeocodingProvider},
};

#[derive(Debug, Clone)]
pub struct ChatInput {
    pub text: String,
    pub language: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ChatStreamInput {
    pub messages: Vec<ChatMessage>,
    pub language: Option<String>,
}

fn single_turn_system(language: Option<&str>) -> String {
    format!(
        "You are Krishi-Seer's agricultural AI assistant. Provide practical, \
         actionable advice for farmers. Focus on crop management, disease \
         identification, and agricultural best practices. Reply in the user's \
         language if specified: {}.",
        language.unwrap_or("auto")
    )
}

fn conversation_system(language: &str) -> String {
    format!(
        "You are Krishi-Seer's agricultural AI assistant, specialized in helping \
         farmers with crop management, weather insights, disease identification, \
         government schemes, and agricultural best practices. Your responses should \
         be practical and actionable, consider Indian agricultural practices and \
         crops, reference relevant government schemes when appropriate, include \
         seasonal considerations, and reply in the user's language ({language}). \
         If asked about anything outside agriculture, politely redirect the user to \
         farming topics. Always prioritize farmer safety and sustainable \
         agricultural practices."
    )
}

fn truncate(text: &str, max_len: usize) -> &str {
    match text.char_indices().nth(max_len) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

impl<PI, ZC, AR, FR, OS, HC, FP, AQ, GC> ChatService
    for Service<PI, ZC, AR, FR, OS, HC, FP, AQ, GC>
where
    PI: PlantIdentificationProvider,
    ZC: ZeroShotClassifierProvider,
    AR: AnalysisRepository,
    FR: FarmerRepository,
    OS: ObjectStoragePort,
    HC: HealthCheckRepository,
    FP: ForecastProvider,
    AQ: AirQualityProvider,
    GC: GeocodingProvider,
{
    async fn chat(&self, input: ChatInput) -> Result<ChatReply, CoreError> {
        let text = truncate(&input.text, MAX_TEXT_LEN).to_string();
        let request = ChatCompletionRequest::new(
            single_turn_system(input.language.as_deref()),
            vec![ChatMessage {
                role: ChatRole::User,
                content: text.clone(),
            }],
        );

        for provider in &self.chat_providers {
            match provider.complete(request.clone()).await {
                Ok(reply) if !reply.is_empty() => {
                    return Ok(ChatReply {
                        reply,
                        source: provider.name().to_string(),
                    });
                }
                Ok(_) => warn!("{} returned an empty reply", provider.name()),
                Err(err) => warn!("{} failed, trying next tier: {err}", provider.name()),
            }
        }

        let locale = Locale::from_tag(input.language.as_deref().unwrap_or("en"));
        Ok(ChatReply {
            reply: rules::respond(&text, locale).to_string(),
            source: "rules".to_string(),
        })
    }

    async fn chat_stream(&self, input: ChatStreamInput) -> Result<SseByteStream, CoreError> {
        let language = input.language.clone().unwrap_or_else(|| "en".to_string());
        let request =
            ChatCompletionRequest::new(conversation_system(&language), input.messages);

        for provider in &self.chat_providers {
            if provider.supports_streaming() {
                match provider.open_stream(request.clone()).await {
                    Ok(upstream) => return Ok(stream::passthrough(upstream)),
                    Err(err) => {
                        warn!("{} stream failed, trying next tier: {err}", provider.name())
                    }
                }
            } else {
                match provider.complete(request.clone()).await {
                    Ok(reply) if !reply.is_empty() => return Ok(stream::fabricate(reply)),
                    Ok(_) => warn!("{} returned an empty reply", provider.name()),
                    Err(err) => {
                        warn!("{} failed, trying next tier: {err}", provider.name())
                    }
                }
            }
        }

        let locale = Locale::from_tag(&language);
        let canned = rules::respond(request.last_user_content(), locale).to_string();
        Ok(stream::fabricate(canned))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bytes::Bytes;
    use futures::{StreamExt, future::BoxFuture, stream as futures_stream};

    use super::*;
    use crate::domain::{
        chat::ports::ChatCompletionProvider,
        common::services::Buckets,
        farmer::ports::MockFarmerRepository,
        health::ports::MockHealthCheckRepository,
        identification::ports::{
            MockAnalysisRepository, MockPlantIdentificationProvider,
            MockZeroShotClassifierProvider,
        },
        locale::{MessageId, catalog},
        storage::ports::MockObjectStoragePort,
        weather::ports::{
            MockAirQualityProvider, MockForecastProvider, MockGeocodingProvider,
        },
    };

    struct FakeProvider {
        name: &'static str,
        reply: Option<&'static str>,
        streaming: bool,
    }

    impl ChatCompletionProvider for FakeProvider {
        fn name(&self) -> &'static str {
            self.name
        }

        fn supports_streaming(&self) -> bool {
            self.streaming
        }

        fn complete<'a>(
            &'a self,
            _request: ChatCompletionRequest,
        ) -> BoxFuture<'a, Result<String, CoreError>> {
            Box::pin(async move {
                self.reply.map(str::to_string).ok_or(CoreError::Provider {
                    provider: self.name,
                    detail: "unreachable".to_string(),
                })
            })
        }

        fn open_stream<'a>(
            &'a self,
            _request: ChatCompletionRequest,
        ) -> BoxFuture<'a, Result<SseByteStream, CoreError>> {
            Box::pin(async move {
                match self.reply {
                    Some(reply) if self.streaming => {
                        let frame = Bytes::from(format!("data: {{\"delta\":\"{reply}\"}}\n\n"));
                        Ok(futures_stream::iter(vec![Ok(frame)]).boxed())
                    }
                    _ => Err(CoreError::Provider {
                        provider: self.name,
                        detail: "unreachable".to_string(),
                    }),
                }
            })
        }
    }

    fn service(
        providers: Vec<Arc<dyn ChatCompletionProvider>>,
    ) -> Service<
        MockPlantIdentificationProvider,
        MockZeroShotClassifierProvider,
        MockAnalysisRepository,
        MockFarmerRepository,
        MockObjectStoragePort,
        MockHealthCheckRepository,
        MockForecastProvider,
        MockAirQualityProvider,
        MockGeocodingProvider,
    > {
        Service::new(
            MockPlantIdentificationProvider::new(),
            MockZeroShotClassifierProvider::new(),
            MockAnalysisRepository::new(),
            MockFarmerRepository::new(),
            MockObjectStoragePort::new(),
            MockHealthCheckRepository::new(),
            MockForecastProvider::new(),
            MockAirQualityProvider::new(),
            MockGeocodingProvider::new(),
            providers,
            Buckets {
                avatars: "avatars".into(),
                analyses: "analyses".into(),
            },
        )
    }

    #[tokio::test]
    async fn falls_through_to_second_tier() {
        let svc = service(vec![
            Arc::new(FakeProvider {
                name: "groq",
                reply: None,
                streaming: true,
            }),
            Arc::new(FakeProvider {
                name: "openai",
                reply: Some("use drip irrigation"),
                streaming: true,
            }),
        ]);

        let reply = svc
            .chat(ChatInput {
                text: "water advice".into(),
                language: None,
            })
            .await
            .unwrap();
        assert_eq!(reply.reply, "use drip irrigation");
        assert_eq!(reply.source, "openai");
    }

    #[tokio::test]
    async fn exhausted_tiers_fall_to_rules() {
        let svc = service(vec![
            Arc::new(FakeProvider {
                name: "groq",
                reply: None,
                streaming: true,
            }),
            Arc::new(FakeProvider {
                name: "openai",
                reply: None,
                streaming: true,
            }),
        ]);

        let reply = svc
            .chat(ChatInput {
                text: "my irrigation pump broke".into(),
                language: None,
            })
            .await
            .unwrap();
        assert_eq!(reply.reply, catalog::text(Locale::En, MessageId::ChatWater));
        assert_eq!(reply.source, "rules");
    }

    #[tokio::test]
    async fn rules_respect_requested_language() {
        let svc = service(Vec::new());
        let reply = svc
            .chat(ChatInput {
                text: "irrigation".into(),
                language: Some("hi-IN".into()),
            })
            .await
            .unwrap();
        assert_eq!(reply.reply, catalog::text(Locale::Hi, MessageId::ChatWater));
    }

    #[tokio::test]
    async fn stream_passes_upstream_through_with_sentinel() {
        let svc = service(vec![Arc::new(FakeProvider {
            name: "groq",
            reply: Some("hello"),
            streaming: true,
        })]);

        let frames: Vec<Bytes> = svc
            .chat_stream(ChatStreamInput {
                messages: vec![ChatMessage {
                    role: ChatRole::User,
                    content: "hi".into(),
                }],
                language: None,
            })
            .await
            .unwrap()
            .map(|f| f.unwrap())
            .collect()
            .await;

        assert_eq!(frames.len(), 2);
        assert_eq!(frames.last().unwrap(), &stream::done_frame());
    }

    #[tokio::test(start_paused = true)]
    async fn non_streaming_tier_is_fabricated() {
        let svc = service(vec![
            Arc::new(FakeProvider {
                name: "groq",
                reply: None,
                streaming: true,
            }),
            Arc::new(FakeProvider {
                name: "huggingface",
                reply: Some("two words"),
                streaming: false,
            }),
        ]);

        let frames: Vec<Bytes> = svc
            .chat_stream(ChatStreamInput {
                messages: vec![ChatMessage {
                    role: ChatRole::User,
                    content: "hi".into(),
                }],
                language: None,
            })
            .await
            .unwrap()
            .map(|f| f.unwrap())
            .collect()
            .await;

        // Two word frames plus the sentinel.
        assert_eq!(frames.len(), 3);
        assert_eq!(frames.last().unwrap(), &stream::done_frame());
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("पानी", 2), "पा");
    }
}
