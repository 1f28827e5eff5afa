use crate::errors::{AssistantResult, DecodeError};
use crate::services::chat::StreamPayload;
use crate::transport::{ByteStream, DeltaStream};
use futures::{Stream, StreamExt};
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

pin_project! {
    /// Ordered stream of content deltas for one assistant turn.
    ///
    /// Yields each non-empty `choices[0].delta.content` fragment in
    /// arrival order; the stream ending is the turn's single completion
    /// signal.
    pub struct AssistantStream {
        #[pin]
        inner: Pin<Box<dyn Stream<Item = AssistantResult<String>> + Send>>,
    }
}

impl AssistantStream {
    pub(crate) fn new(bytes: ByteStream, max_line_bytes: usize) -> Self {
        let deltas = DeltaStream::new(bytes, max_line_bytes).filter_map(|result| async move {
            match result {
                Ok(payload) => match serde_json::from_str::<StreamPayload>(&payload) {
                    Ok(parsed) => parsed.into_content().map(Ok),
                    Err(e) => Some(Err(DecodeError::MalformedFrame {
                        reason: format!("{}: {}", e, payload),
                    }
                    .into())),
                },
                Err(e) => Some(Err(e)),
            }
        });

        Self {
            inner: Box::pin(deltas),
        }
    }

    /// Awaits the next delta, bounding the wait.
    ///
    /// Expiry means the gateway went quiet mid-stream and is surfaced as a
    /// decode error rather than hanging the turn.
    pub async fn next_with_timeout(
        &mut self,
        timeout: Duration,
    ) -> AssistantResult<Option<String>> {
        match tokio::time::timeout(timeout, self.next()).await {
            Ok(item) => item.transpose(),
            Err(_) => Err(DecodeError::ReadTimeout {
                timeout_ms: timeout.as_millis() as u64,
            }
            .into()),
        }
    }

    /// Drives the stream to exhaustion, invoking `on_delta` once per
    /// delta. Returns `Ok(())` exactly once, after the final delta.
    pub async fn for_each_delta<F>(mut self, mut on_delta: F) -> AssistantResult<()>
    where
        F: FnMut(&str),
    {
        while let Some(delta) = self.next().await {
            on_delta(&delta?);
        }
        Ok(())
    }

    /// Collects the whole reply into one string.
    pub async fn collect_content(mut self) -> AssistantResult<String> {
        let mut content = String::new();
        while let Some(delta) = self.next().await {
            content.push_str(&delta?);
        }
        Ok(content)
    }
}

impl Stream for AssistantStream {
    type Item = AssistantResult<String>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().inner.poll_next(cx)
    }
}
