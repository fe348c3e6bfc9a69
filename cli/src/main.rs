use crate::cli::Args;
use anyhow::Context;
use clap::Parser;
use rdf_skolem_pipeline::{ProcessorConfig, SkolemizeProcessor};
use std::fs::File;
use std::io::{self, stdin, stdout, BufWriter, Write};
use tokio::sync::mpsc;

mod cli;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let processor = SkolemizeProcessor::new(&ProcessorConfig {
        mime: Some(args.mime.clone()),
    })
    .with_context(|| format!("cannot start a processor for MIME type {}", args.mime))?;

    let documents = read_documents(&args)?;

    let (in_tx, in_rx) = mpsc::channel(1);
    let (out_tx, mut out_rx) = mpsc::channel(1);
    let worker = tokio::spawn(async move { processor.run(in_rx, out_tx).await });
    let producer = tokio::spawn(async move {
        for document in documents {
            // The processor dropping its receiver on a failed stream ends the feed.
            if in_tx.send(document).await.is_err() {
                break;
            }
        }
    });

    let mut writer = open_output(&args)?;
    while let Some(serialized) = out_rx.recv().await {
        writer.write_all(serialized.as_bytes())?;
    }
    writer.flush()?;

    producer.await?;
    worker.await?.context("stream processing failed")?;
    Ok(())
}

/// Reads every input file as one complete document, or stdin as a single document if no file
/// was given.
fn read_documents(args: &Args) -> anyhow::Result<Vec<String>> {
    if args.file.is_empty() {
        return Ok(vec![
            io::read_to_string(stdin().lock()).context("cannot read stdin")?
        ]);
    }
    args.file
        .iter()
        .map(|path| {
            std::fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))
        })
        .collect()
}

fn open_output(args: &Args) -> anyhow::Result<Box<dyn Write>> {
    Ok(match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("cannot create {}", path.display())
        })?)),
        None => Box::new(stdout().lock()),
    })
}
