//! Per-tick trajectory output, one JSON object per line.

use anyhow::{Context, Result};
use physics::StepOutcome;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    pub tick: u64,
    pub center: [f32; 3],
    pub velocity: [f32; 3],
    pub collided: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub boxes: Vec<usize>,
}

impl TraceRecord {
    #[must_use]
    pub fn from_outcome(tick: u64, outcome: &StepOutcome) -> Self {
        Self {
            tick,
            center: outcome.sphere.center.to_array(),
            velocity: outcome.sphere.velocity.to_array(),
            collided: outcome.collided,
            boxes: outcome.box_hits.clone(),
        }
    }
}

pub struct TraceWriter<W: Write> {
    out: W,
}

impl TraceWriter<BufWriter<File>> {
    /// # Errors
    ///
    /// Fails when the file cannot be created.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).with_context(|| format!("creating trace file {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TraceWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// # Errors
    ///
    /// Propagates I/O errors from the underlying writer.
    pub fn write(&mut self, record: &TraceRecord) -> Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    /// # Errors
    ///
    /// Propagates I/O errors from the final flush.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physics::{advance, Simulation};

    #[test]
    fn writes_one_line_per_record() {
        let sim = Simulation::demo();
        let outcome = advance(*sim.sphere(), sim.world()).unwrap();

        let mut writer = TraceWriter::new(Vec::new());
        writer.write(&TraceRecord::from_outcome(1, &outcome)).unwrap();
        writer.write(&TraceRecord::from_outcome(2, &outcome)).unwrap();
        let bytes = writer.finish().unwrap();

        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: TraceRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.tick, 1);
        assert!(!first.collided);
        assert!(!lines[0].contains("boxes"));
    }
}
