use crate::{resolve_format, ProcessorConfig, SkolemizeProcessorError};
use oxrdfio::{RdfFormat, RdfParser, RdfSerializer};
use rdf_skolem_engine::Skolemizer;
use rdf_skolem_model::Dataset;
use std::io;
use tokio::sync::mpsc;
use tracing::debug;

/// Maps entities with blank node identifiers to equivalents with named node identifiers.
///
/// The processor pulls one raw document at a time from an inbound channel, parses it into a
/// [`Dataset`], replaces the blank nodes discovered by the [`Skolemizer`], serializes the
/// result and pushes the text to an outbound channel. A message is atomic: it is fully parsed,
/// fully transformed and fully serialized before the next one is considered, and nothing is
/// shared between messages.
#[derive(Debug)]
pub struct SkolemizeProcessor {
    format: RdfFormat,
    skolemizer: Skolemizer,
}

impl SkolemizeProcessor {
    /// Creates a processor for the MIME type named by `config`.
    ///
    /// Fails with [`SkolemizeProcessorError::UnsupportedFormat`] if no parser/serializer pair
    /// is registered for it.
    pub fn new(config: &ProcessorConfig) -> Result<Self, SkolemizeProcessorError> {
        let format = resolve_format(config.mime())?;
        Ok(Self {
            format,
            skolemizer: Skolemizer::new(),
        })
    }

    /// Returns the negotiated format of inbound and outbound documents.
    pub fn format(&self) -> RdfFormat {
        self.format
    }

    /// Transforms one complete raw document into its skolemized serialization.
    pub fn transform_document(&self, raw: &str) -> Result<String, SkolemizeProcessorError> {
        let dataset = self.parse_document(raw)?;
        let quads = dataset.len();
        let dataset = self.skolemizer.skolemize(dataset);
        let serialized = self.serialize_dataset(&dataset)?;
        debug!("Transformed a document of {quads} quads.");
        Ok(serialized)
    }

    /// Processes the inbound stream message by message until it ends.
    ///
    /// Strictly sequential: one message is fully transformed and accepted by the bounded
    /// outbound channel before the next is fetched, so the processor never buffers ahead of
    /// the consumer. Any parse or serialization failure aborts the whole stream. When the
    /// inbound channel closes, the outbound sender is dropped, which closes the outbound
    /// channel exactly once.
    pub async fn run(
        &self,
        mut incoming: mpsc::Receiver<String>,
        outgoing: mpsc::Sender<String>,
    ) -> Result<(), SkolemizeProcessorError> {
        while let Some(raw) = incoming.recv().await {
            let serialized = self.transform_document(&raw)?;
            outgoing
                .send(serialized)
                .await
                .map_err(|_| SkolemizeProcessorError::OutboundClosed)?;
        }
        Ok(())
    }

    fn parse_document(&self, raw: &str) -> Result<Dataset, SkolemizeProcessorError> {
        Ok(RdfParser::from_format(self.format)
            .for_reader(raw.as_bytes())
            .collect::<Result<Dataset, _>>()?)
    }

    fn serialize_dataset(&self, dataset: &Dataset) -> Result<String, SkolemizeProcessorError> {
        let mut serializer = RdfSerializer::from_format(self.format).for_writer(Vec::new());
        for quad in dataset {
            serializer.serialize_quad(quad)?;
        }
        let bytes = serializer.finish()?;
        String::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
    }
}
