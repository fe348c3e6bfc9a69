use crate::SkolemizeProcessorError;
use oxrdfio::RdfFormat;

/// Resolves the [`RdfFormat`] handling the given MIME type.
///
/// The resolved format constructs both the parser and the serializer of a processor, so a
/// single lookup covers the whole capability pair. Resolution happens once at startup;
/// an unregistered MIME type fails fast with
/// [`SkolemizeProcessorError::UnsupportedFormat`] before any message is consumed.
pub fn resolve_format(mime: &str) -> Result<RdfFormat, SkolemizeProcessorError> {
    RdfFormat::from_media_type(mime)
        .ok_or_else(|| SkolemizeProcessorError::UnsupportedFormat(mime.to_owned()))
}
