mod config;
mod error;
mod format;
mod processor;

pub use config::ProcessorConfig;
pub use error::SkolemizeProcessorError;
pub use format::resolve_format;
pub use processor::SkolemizeProcessor;

// Re-exported so that callers can name the negotiated format without depending on oxrdfio.
pub use oxrdfio::RdfFormat;
