//! Peak normalization and the batch export loop.

use std::fs;
use std::path::{Path, PathBuf};

use ndarray::{Array2, ArrayView2};

use crate::error::Error;
use crate::layout::Target;
use crate::reader::{Match, Sofa};
use crate::wav;

const DEFAULT_SAMPLE_RATE: u32 = 48_000;
const DEFAULT_PEAK_LEVEL: f64 = 0.95;

/// Largest absolute sample value across all channels.
pub fn peak(ir: ArrayView2<'_, f64>) -> f64 {
    ir.iter().fold(0.0, |max, &s| max.max(s.abs()))
}

/// Scale `ir` so its peak lands exactly on `level`.
///
/// Returns `None` when the buffer is entirely silent; a silent response has
/// no meaningful gain and is skipped by the export loop.
pub fn normalized(ir: ArrayView2<'_, f64>, level: f64) -> Option<Array2<f64>> {
    let peak = peak(ir);

    if peak == 0.0 {
        return None;
    }

    Some(ir.mapv(|s| s * (level / peak)))
}

/// What happened to a single target.
#[derive(Clone, Debug)]
pub enum Outcome {
    /// Matched impulse response was normalized and written to `path`.
    Written { matched: Match, path: PathBuf },
    /// Matched impulse response was entirely silent; nothing written.
    SkippedSilent { matched: Match },
}

/// Per-target outcomes of one export run, in layout order.
#[derive(Clone, Debug, Default)]
pub struct Report {
    pub entries: Vec<(&'static str, Outcome)>,
}

impl Report {
    /// Number of WAV files written.
    pub fn written(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, outcome)| matches!(outcome, Outcome::Written { .. }))
            .count()
    }

    /// Number of targets skipped as silent.
    pub fn skipped(&self) -> usize {
        self.entries.len() - self.written()
    }
}

/// Settings for a batch export run.
#[derive(Clone, Debug)]
pub struct Extractor {
    out_dir: PathBuf,
    sample_rate: u32,
    peak_level: f64,
}

impl Extractor {
    pub fn new<P: AsRef<Path>>(out_dir: P) -> Self {
        Self {
            out_dir: out_dir.as_ref().to_path_buf(),
            sample_rate: DEFAULT_SAMPLE_RATE,
            peak_level: DEFAULT_PEAK_LEVEL,
        }
    }

    /// Sample rate stamped into the WAV headers. Default value is 48_000.
    ///
    /// The impulse responses themselves are written out as-is, never
    /// resampled.
    pub fn sample_rate(&mut self, sample_rate: u32) -> &mut Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Peak level exported responses are normalized to. Default value
    /// is 0.95.
    pub fn peak_level(&mut self, peak_level: f64) -> &mut Self {
        self.peak_level = peak_level;
        self
    }

    /// Match, normalize and write one WAV per target.
    ///
    /// The output directory is created if absent. Targets are processed in
    /// slice order with one report line per target on stdout. A target whose
    /// matched response is silent is skipped, not failed. The first error
    /// aborts the remaining targets; files already written stay on disk.
    ///
    /// ```no_run
    /// use sofa2wav::extract::Extractor;
    /// use sofa2wav::layout::DEFAULT_LAYOUT;
    /// use sofa2wav::reader::Sofa;
    ///
    /// let sofa = Sofa::open("my/sofa/file.sofa").unwrap();
    ///
    /// let report = Extractor::new("./safe_wavs")
    ///     .run(&sofa, DEFAULT_LAYOUT)
    ///     .unwrap();
    ///
    /// assert!(report.written() <= DEFAULT_LAYOUT.len());
    /// ```
    pub fn run(&self, sofa: &Sofa, targets: &[Target]) -> Result<Report, Error> {
        fs::create_dir_all(&self.out_dir)?;

        let mut report = Report::default();

        for target in targets {
            let matched = sofa.nearest(target.direction);
            let ir = sofa.ir(matched.index);

            log::debug!(
                "{}: row {} at distance {:.3}",
                target.label,
                matched.index,
                matched.distance,
            );

            let outcome = match normalized(ir, self.peak_level) {
                Some(buf) => {
                    let path = self.out_dir.join(format!("{}.wav", target.label));
                    wav::write(&path, buf.view(), self.sample_rate)?;

                    println!(
                        "Saved {}: Target[{}, {}] -> Found[{:.1}, {:.1}]",
                        target.label,
                        target.direction.azimuth,
                        target.direction.elevation,
                        matched.azimuth,
                        matched.elevation,
                    );

                    Outcome::Written { matched, path }
                }
                None => {
                    println!("Skipping {} (Silent)", target.label);

                    Outcome::SkippedSilent { matched }
                }
            };

            report.entries.push((target.label, outcome));
        }

        Ok(report)
    }
}
