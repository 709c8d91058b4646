//! SOFA container loading and nearest-direction lookup.
//!
//! `SOFA` (Spatially Oriented Format for Acoustics, AES69) files are HDF5
//! containers. Measurement geometry lives in the `SourcePosition` dataset
//! (N x 3: azimuth and elevation in degrees, radius in meters) and the
//! impulse responses in `Data.IR` (N x receivers x samples). Row `i` of one
//! table corresponds to row `i` of the other.

use std::path::Path;

use ndarray::{Array2, Array3, ArrayView2, Axis, Ix2, Ix3};

use crate::error::Error;
use crate::layout::Direction;

const SOURCE_POSITION: &str = "SourcePosition";
const DATA_IR: &str = "Data.IR";
const SAMPLING_RATE: &str = "Data.SamplingRate";

/// In-memory copy of a SOFA file's measurement tables.
///
/// The container handle is closed as soon as the tables are extracted;
/// every lookup afterwards runs against the owned arrays.
pub struct Sofa {
    positions: Array2<f64>,
    irs: Array3<f64>,
    sampling_rate: Option<f64>,
}

/// Result of a nearest-direction lookup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Match {
    /// Row index into the measurement tables.
    pub index: usize,
    /// Azimuth of the matched measurement, degrees.
    pub azimuth: f64,
    /// Elevation of the matched measurement, degrees.
    pub elevation: f64,
    /// Flat-plane distance between target and match, degrees.
    pub distance: f64,
}

impl Sofa {
    /// Open a SOFA file and extract its measurement tables.
    ///
    /// Fails if the file cannot be opened, lacks the `SourcePosition` or
    /// `Data.IR` dataset, or if the two tables disagree on the measurement
    /// count. There is no partial-success mode.
    ///
    /// ```no_run
    /// use sofa2wav::reader::Sofa;
    ///
    /// let sofa = Sofa::open("my/sofa/file.sofa").unwrap();
    /// println!("{} measurements", sofa.len());
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = hdf5::File::open(path)?;

        if !file.link_exists(SOURCE_POSITION) {
            return Err(Error::MissingDataset(SOURCE_POSITION));
        }

        if !file.link_exists(DATA_IR) {
            return Err(Error::MissingDataset(DATA_IR));
        }

        let positions = file
            .dataset(SOURCE_POSITION)?
            .read_dyn::<f64>()?
            .into_dimensionality::<Ix2>()
            .map_err(|_| Error::InvalidDimensions(SOURCE_POSITION))?;

        let irs = file
            .dataset(DATA_IR)?
            .read_dyn::<f64>()?
            .into_dimensionality::<Ix3>()
            .map_err(|_| Error::InvalidDimensions(DATA_IR))?;

        let sampling_rate = match file.link_exists(SAMPLING_RATE) {
            true => file.dataset(SAMPLING_RATE)?.read_raw::<f64>()?.first().copied(),
            false => None,
        };

        let mut sofa = Self::from_parts(positions, irs)?;
        sofa.sampling_rate = sampling_rate;

        log::debug!(
            "loaded {} measurements, {} channels x {} samples",
            sofa.len(),
            sofa.channels(),
            sofa.filter_len(),
        );

        Ok(sofa)
    }

    /// Build from in-memory tables, bypassing the container.
    ///
    /// Validation matches [`Sofa::open`]: positions must be N x 3, impulse
    /// responses N x channels x samples with the same N, and N > 0.
    pub fn from_parts(positions: Array2<f64>, irs: Array3<f64>) -> Result<Self, Error> {
        if positions.ncols() != 3 {
            return Err(Error::InvalidDimensions(SOURCE_POSITION));
        }

        if irs.shape()[0] != positions.nrows() {
            return Err(Error::InvalidDimensions(DATA_IR));
        }

        if positions.nrows() == 0 {
            return Err(Error::Empty);
        }

        Ok(Self {
            positions,
            irs,
            sampling_rate: None,
        })
    }

    /// Number of measurements in the tables.
    pub fn len(&self) -> usize {
        self.positions.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Receiver channels per impulse response.
    pub fn channels(&self) -> usize {
        self.irs.shape()[1]
    }

    /// Samples per impulse response channel.
    pub fn filter_len(&self) -> usize {
        self.irs.shape()[2]
    }

    /// Sampling rate recorded in the file, if any.
    pub fn sampling_rate(&self) -> Option<f64> {
        self.sampling_rate
    }

    /// Impulse response at `index` as a channels x samples view.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn ir(&self, index: usize) -> ArrayView2<'_, f64> {
        self.irs.index_axis(Axis(0), index)
    }

    /// Find the measurement nearest to `target`.
    ///
    /// Distance is Euclidean in the flat (azimuth, elevation) plane; the
    /// azimuth does not wrap, so 359 and 1 degrees are 358 degrees apart.
    /// Ties go to the earliest row.
    pub fn nearest(&self, target: Direction) -> Match {
        let mut index = 0;
        let mut best = f64::INFINITY;

        for (i, row) in self.positions.rows().into_iter().enumerate() {
            let da = row[0] - target.azimuth;
            let de = row[1] - target.elevation;
            let dist = da * da + de * de;

            if dist < best {
                index = i;
                best = dist;
            }
        }

        Match {
            index,
            azimuth: self.positions[(index, 0)],
            elevation: self.positions[(index, 1)],
            distance: best.sqrt(),
        }
    }
}
