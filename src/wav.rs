//! Float WAV export.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use ndarray::ArrayView2;

use crate::error::Error;

const BITS_PER_SAMPLE: u16 = 32;

/// Write a channels x samples buffer as a 32-bit float WAV file.
///
/// Frames are interleaved frame-major: frame `t` carries sample `t` of
/// every channel in row order.
pub fn write<P: AsRef<Path>>(
    path: P,
    ir: ArrayView2<'_, f64>,
    sample_rate: u32,
) -> Result<(), Error> {
    let (channels, samples) = ir.dim();

    let spec = WavSpec {
        channels: channels as u16,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec)?;

    for t in 0..samples {
        for c in 0..channels {
            writer.write_sample(ir[(c, t)] as f32)?;
        }
    }

    writer.finalize()?;

    Ok(())
}
