use oxrdfio::RdfParseError;
use std::io;

/// An error raised by a [`SkolemizeProcessor`](crate::SkolemizeProcessor).
///
/// Every variant is fatal: an unsupported format prevents the processor from starting at all,
/// and any error on a message aborts the whole stream. There is no per-message recovery.
#[derive(Debug, thiserror::Error)]
pub enum SkolemizeProcessorError {
    /// No parser/serializer pair is registered for the configured MIME type.
    #[error("no parser found for MIME type {0}")]
    UnsupportedFormat(String),
    /// An inbound document could not be parsed.
    #[error(transparent)]
    Parsing(#[from] RdfParseError),
    /// A transformed dataset could not be serialized.
    #[error(transparent)]
    Serialization(#[from] io::Error),
    /// The outbound channel was closed while the stream still had output.
    #[error("outbound channel rejected a serialized document")]
    OutboundClosed,
}
