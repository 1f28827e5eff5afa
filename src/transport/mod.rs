mod http_transport;
mod response_parser;
mod stream_handler;

pub use http_transport::{HttpTransport, ReqwestTransport};
pub use response_parser::ResponseParser;
pub use stream_handler::{DeltaStream, SseLineDecoder, StreamHandler, DEFAULT_MAX_LINE_BYTES};

use crate::errors::AssistantResult;
use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;

/// Raw body byte stream of a single streaming response.
pub type ByteStream = Pin<Box<dyn Stream<Item = AssistantResult<Bytes>> + Send>>;
