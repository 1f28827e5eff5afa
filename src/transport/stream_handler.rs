//! Streaming-body decoder for the chat assistant endpoint.
//!
//! The gateway relays model output as newline-delimited frames in the
//! server-sent-event style:
//!
//! ```text
//! : keep-alive
//! data: {"choices":[{"delta":{"content":"Hel"}}]}
//! data: {"choices":[{"delta":{"content":"lo"}}]}
//! data: [DONE]
//! ```
//!
//! [`SseLineDecoder`] reassembles complete lines from arbitrarily-chunked
//! bytes and extracts the `data:` payloads; [`DeltaStream`] adapts it onto
//! an async byte stream.

use crate::errors::{AssistantError, AssistantResult, DecodeError, ErrorMapper};
use bytes::Bytes;
use futures::{Stream, StreamExt};
use pin_project_lite::pin_project;
use reqwest::Response;
use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::transport::ByteStream;

/// Upper bound on a pending line before the decoder gives up on it.
pub const DEFAULT_MAX_LINE_BYTES: usize = 256 * 1024;

const DATA_PREFIX: &str = "data: ";
const DONE_SENTINEL: &str = "[DONE]";

pub struct StreamHandler;

impl StreamHandler {
    /// Wraps a streaming response body, mapping a non-2xx status to the
    /// gateway error taxonomy before any bytes are surfaced.
    pub async fn handle_stream(response: Response) -> AssistantResult<ByteStream> {
        let status = response.status();
        if !status.is_success() {
            let headers = response.headers().clone();
            let body = response.bytes().await.unwrap_or_default();
            return Err(ErrorMapper::from_response(status.as_u16(), &headers, &body));
        }

        let stream = response
            .bytes_stream()
            .map(|result| result.map_err(AssistantError::from));
        Ok(Box::pin(stream))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecoderState {
    /// Accumulating bytes; the buffer may hold a partial line.
    Open,
    /// Sentinel seen, source exhausted, or poisoned by an error.
    Finished,
}

/// Classification of one complete line.
enum LineFrame {
    /// Comment, keep-alive blank, or non-`data:` field.
    Skip,
    /// The `[DONE]` sentinel.
    Done,
    /// A `data:` payload to hand to the JSON layer.
    Data(String),
}

/// Incremental line decoder over a bounded byte buffer.
///
/// Buffering happens at the byte level, so a multi-byte character split
/// across chunk boundaries stays intact: its line is only decoded once the
/// terminating newline has arrived. A line that grows past the limit
/// without a newline is unrecoverable and poisons the decoder.
pub struct SseLineDecoder {
    buf: Vec<u8>,
    max_line_bytes: usize,
    state: DecoderState,
}

impl SseLineDecoder {
    pub fn new(max_line_bytes: usize) -> Self {
        Self {
            buf: Vec::new(),
            max_line_bytes,
            state: DecoderState::Open,
        }
    }

    pub fn with_default_limit() -> Self {
        Self::new(DEFAULT_MAX_LINE_BYTES)
    }

    pub fn is_finished(&self) -> bool {
        self.state == DecoderState::Finished
    }

    /// Feeds one chunk and returns the data payloads it completed, in
    /// arrival order. Stops at the sentinel; after that (or after an
    /// error) further chunks are ignored.
    pub fn push_chunk(&mut self, chunk: &[u8]) -> Result<Vec<String>, DecodeError> {
        if self.state == DecoderState::Finished {
            return Ok(Vec::new());
        }

        self.buf.extend_from_slice(chunk);
        let mut payloads = Vec::new();

        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let mut line: Vec<u8> = self.buf.drain(..=pos).collect();
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }

            let text = match std::str::from_utf8(&line) {
                Ok(text) => text,
                Err(e) => {
                    self.state = DecoderState::Finished;
                    return Err(DecodeError::InvalidUtf8(e.to_string()));
                }
            };

            match Self::classify(text) {
                LineFrame::Skip => {}
                LineFrame::Done => {
                    self.state = DecoderState::Finished;
                    return Ok(payloads);
                }
                LineFrame::Data(payload) => payloads.push(payload),
            }
        }

        if self.buf.len() > self.max_line_bytes {
            self.state = DecoderState::Finished;
            return Err(DecodeError::BufferOverflow {
                limit: self.max_line_bytes,
            });
        }

        Ok(payloads)
    }

    /// Flushes a trailing line left unterminated when the source ends.
    pub fn finish(&mut self) -> Result<Option<String>, DecodeError> {
        if self.state == DecoderState::Finished || self.buf.is_empty() {
            self.state = DecoderState::Finished;
            return Ok(None);
        }

        let line: Vec<u8> = std::mem::take(&mut self.buf);
        self.state = DecoderState::Finished;

        let mut line = line;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        let text =
            std::str::from_utf8(&line).map_err(|e| DecodeError::InvalidUtf8(e.to_string()))?;

        match Self::classify(text) {
            LineFrame::Data(payload) => Ok(Some(payload)),
            _ => Ok(None),
        }
    }

    fn classify(line: &str) -> LineFrame {
        if line.trim().is_empty() || line.starts_with(':') {
            return LineFrame::Skip;
        }

        let Some(rest) = line.strip_prefix(DATA_PREFIX) else {
            return LineFrame::Skip;
        };

        let rest = rest.trim();
        if rest == DONE_SENTINEL {
            LineFrame::Done
        } else if rest.is_empty() {
            LineFrame::Skip
        } else {
            LineFrame::Data(rest.to_string())
        }
    }
}

pin_project! {
    /// Adapts a response byte stream into a stream of `data:` payload
    /// strings, ending at the sentinel or when the source is exhausted,
    /// whichever comes first.
    pub struct DeltaStream<S> {
        #[pin]
        inner: S,
        decoder: SseLineDecoder,
        pending: VecDeque<String>,
        done: bool,
    }
}

impl<S> DeltaStream<S>
where
    S: Stream<Item = AssistantResult<Bytes>>,
{
    pub fn new(inner: S, max_line_bytes: usize) -> Self {
        Self {
            inner,
            decoder: SseLineDecoder::new(max_line_bytes),
            pending: VecDeque::new(),
            done: false,
        }
    }
}

impl<S> Stream for DeltaStream<S>
where
    S: Stream<Item = AssistantResult<Bytes>>,
{
    type Item = AssistantResult<String>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if let Some(payload) = this.pending.pop_front() {
                return Poll::Ready(Some(Ok(payload)));
            }
            if *this.done {
                return Poll::Ready(None);
            }
            if this.decoder.is_finished() {
                *this.done = true;
                return Poll::Ready(None);
            }

            match this.inner.as_mut().poll_next(cx) {
                Poll::Ready(Some(Ok(chunk))) => match this.decoder.push_chunk(&chunk) {
                    Ok(payloads) => this.pending.extend(payloads),
                    Err(e) => {
                        *this.done = true;
                        return Poll::Ready(Some(Err(e.into())));
                    }
                },
                Poll::Ready(Some(Err(e))) => {
                    *this.done = true;
                    return Poll::Ready(Some(Err(e)));
                }
                Poll::Ready(None) => {
                    *this.done = true;
                    match this.decoder.finish() {
                        Ok(Some(payload)) => this.pending.push_back(payload),
                        Ok(None) => {}
                        Err(e) => return Poll::Ready(Some(Err(e.into()))),
                    }
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
