use anyhow::Context;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read record input")]
    Io(#[from] io::Error),

    #[error("invalid JSON at line {line}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Lazily parses one JSON value per non-blank line.
pub struct JsonlSource<R> {
    lines: io::Lines<R>,
    lineno: usize,
}

impl<R: BufRead> JsonlSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            lineno: 0,
        }
    }
}

impl JsonlSource<Box<dyn BufRead>> {
    /// Open `path` for reading; `-` reads stdin.
    pub fn open(path: &str) -> anyhow::Result<Self> {
        let reader: Box<dyn BufRead> = if path == "-" {
            Box::new(BufReader::new(io::stdin()))
        } else {
            let file = File::open(path).with_context(|| format!("open input file {}", path))?;
            Box::new(BufReader::new(file))
        };
        Ok(Self::new(reader))
    }
}

impl<R: BufRead> Iterator for JsonlSource<R> {
    type Item = Result<Value, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.lineno += 1;

            if line.trim().is_empty() {
                continue;
            }

            return Some(serde_json::from_str(&line).map_err(|source| SourceError::Parse {
                line: self.lineno,
                source,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::io::Cursor;

    #[test]
    fn parses_lines_and_skips_blanks() {
        let text = "{\"type\":\"control\",\"command\":\"snapshot\"}\n\n   \n42\n{\"foo\":\"bar\"}";
        let values: Vec<Value> = JsonlSource::new(Cursor::new(text))
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(
            values,
            vec![
                json!({"type": "control", "command": "snapshot"}),
                json!(42),
                json!({"foo": "bar"}),
            ]
        );
    }

    #[test]
    fn reports_line_of_bad_json() {
        let text = "{\"a\":1}\n\n{not json}\n";
        let mut source = JsonlSource::new(Cursor::new(text));

        assert!(source.next().unwrap().is_ok());
        match source.next().unwrap() {
            Err(SourceError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(JsonlSource::new(Cursor::new("")).next().is_none());
    }
}
