/// Startup configuration of a [`SkolemizeProcessor`](crate::SkolemizeProcessor).
#[derive(Debug, Clone, Default)]
pub struct ProcessorConfig {
    /// The MIME type of every inbound and outbound document.
    ///
    /// Defaults to `text/turtle` when absent. An unsupported value is a fatal startup error.
    pub mime: Option<String>,
}

impl ProcessorConfig {
    /// The MIME type used when the configuration does not name one.
    pub const DEFAULT_MIME: &'static str = "text/turtle";

    /// Returns the configured MIME type, falling back to [`Self::DEFAULT_MIME`].
    pub fn mime(&self) -> &str {
        self.mime.as_deref().unwrap_or(Self::DEFAULT_MIME)
    }
}
