use anyhow::Context;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Writes one compact JSON value per line.
pub struct JsonlSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonlSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    pub fn write<T: Serialize + ?Sized>(&mut self, item: &T) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.writer, item)?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of lines written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonlSink<Box<dyn Write>> {
    /// Create `path` for writing; `-` writes stdout.
    pub fn create(path: &str) -> anyhow::Result<Self> {
        let writer: Box<dyn Write> = if path == "-" {
            Box::new(BufWriter::new(io::stdout()))
        } else {
            let file =
                File::create(path).with_context(|| format!("create output file {}", path))?;
            Box::new(BufWriter::new(file))
        };
        Ok(Self::new(writer))
    }
}
