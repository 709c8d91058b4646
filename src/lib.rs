//! # sofa2wav
//!
//! Extract loudspeaker calibration impulse responses from `SOFA` files
//! (Spatially Oriented Format for Acoustics).
//!
//! A SOFA file stores measured impulse responses indexed by source
//! direction. For each speaker of a static calibration layout this crate
//! picks the measurement nearest that speaker's direction, peak-normalizes
//! it and writes it out as an individual 32-bit float WAV file.
//!
//! # Example
//!
//! ```no_run
//! use sofa2wav::extract::Extractor;
//! use sofa2wav::layout::DEFAULT_LAYOUT;
//! use sofa2wav::reader::Sofa;
//!
//! let sofa = Sofa::open("my/sofa/file.sofa").unwrap();
//!
//! let report = Extractor::new("./safe_wavs")
//!     .run(&sofa, DEFAULT_LAYOUT)
//!     .unwrap();
//!
//! println!("{} written, {} skipped", report.written(), report.skipped());
//! ```

pub mod error;
pub mod extract;
pub mod layout;
pub mod reader;
pub mod wav;

pub use error::Error;
