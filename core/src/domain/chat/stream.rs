//! One chunk-stream contract for both response sources: a finite,
//! cancellable sequence of SSE frames ending in a `[DONE]` sentinel.
//! Upstream provider bytes pass through unmodified; fallback replies are
//! fabricated word-by-word so the two sources look alike to the client.

use std::time::Duration;

use bytes::Bytes;
use futures::stream::{self, BoxStream, StreamExt};
use serde_json::json;

use crate::domain::common::entities::app_errors::CoreError;

pub type SseByteStream = BoxStream<'static, Result<Bytes, CoreError>>;

/// Cadence of fabricated word emission.
pub const WORD_DELAY: Duration = Duration::from_millis(50);

/// Terminal sentinel frame.
pub fn done_frame() -> Bytes {
    Bytes::from_static(b"data: [DONE]\n\n")
}

/// Frame a single delta fragment the way the streaming providers do.
pub fn delta_frame(word: &str) -> Bytes {
    Bytes::from(format!("data: {}\n\n", json!({ "delta": word })))
}

/// Pass an upstream byte stream through unmodified, appending the
/// terminal sentinel. Dropping the returned stream drops the upstream
/// connection with it.
pub fn passthrough(
    upstream: impl futures::Stream<Item = Result<Bytes, CoreError>> + Send + 'static,
) -> SseByteStream {
    upstream
        .chain(stream::once(async { Ok(done_frame()) }))
        .boxed()
}

/// Fabricate a token stream from a precomputed reply: one word per frame
/// at a fixed cadence, then the sentinel. Finite and cancellable, not
/// restartable.
pub fn fabricate(text: String) -> SseByteStream {
    let words: Vec<String> = text.split(' ').map(str::to_string).collect();
    let last = words.len().saturating_sub(1);

    let word_frames = stream::iter(words.into_iter().enumerate()).then(move |(i, word)| async move {
        tokio::time::sleep(WORD_DELAY).await;
        let fragment = if i < last { format!("{word} ") } else { word };
        Ok(delta_frame(&fragment))
    });

    word_frames
        .chain(stream::once(async { Ok(done_frame()) }))
        .boxed()
}
