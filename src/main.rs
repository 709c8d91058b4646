use std::env;

use anyhow::{bail, Context, Error};

use sofa2wav::extract::Extractor;
use sofa2wav::layout::DEFAULT_LAYOUT;
use sofa2wav::reader::Sofa;

const DEFAULT_SOFA_PATH: &str = "D1_48K_24bit_0.3s_FIR_SOFA.sofa";
const DEFAULT_OUTPUT_DIR: &str = "./safe_wavs";

const SAMPLE_RATE: u32 = 48_000;

fn main() -> Result<(), Error> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let (sofa_path, output_dir) = match args.len() {
        1 => (DEFAULT_SOFA_PATH, DEFAULT_OUTPUT_DIR),
        2 => (args[1].as_str(), DEFAULT_OUTPUT_DIR),
        3 => (args[1].as_str(), args[2].as_str()),
        _ => bail!("Usage: {} [SOFA_FILE] [OUTPUT_DIR]", args[0].clone()),
    };

    let sofa = Sofa::open(sofa_path).context("Open sofa file failed")?;

    if let Some(rate) = sofa.sampling_rate() {
        if rate != f64::from(SAMPLE_RATE) {
            log::warn!("file reports {} Hz, writing headers at {} Hz", rate, SAMPLE_RATE);
        }
    }

    let report = Extractor::new(output_dir)
        .sample_rate(SAMPLE_RATE)
        .run(&sofa, DEFAULT_LAYOUT)
        .context("Export failed")?;

    log::debug!("{} written, {} skipped", report.written(), report.skipped());

    Ok(())
}
