use std::fs;
use std::path::{Path, PathBuf};

use assert_approx_eq::assert_approx_eq;
use ndarray::{arr1, arr2, Array2, Array3};

use sofa2wav::error::Error;
use sofa2wav::extract::{Extractor, Outcome};
use sofa2wav::layout::Target;
use sofa2wav::reader::Sofa;

fn write_sofa(path: &Path, positions: &Array2<f64>, irs: &Array3<f64>) {
    let file = hdf5::File::create(path).unwrap();

    file.new_dataset_builder()
        .with_data(positions)
        .create("SourcePosition")
        .unwrap();

    file.new_dataset_builder()
        .with_data(irs)
        .create("Data.IR")
        .unwrap();
}

/// Three measurements: an exact front-center hit, one off to the left and
/// one silent row at the back.
fn fixture(dir: &Path) -> PathBuf {
    let positions = arr2(&[
        [0.0, 0.0, 1.5],
        [45.0, 0.0, 1.5],
        [180.0, 0.0, 1.5],
    ]);

    let mut irs = Array3::zeros((3, 2, 16));
    irs[(0, 0, 0)] = 0.5;
    irs[(0, 1, 1)] = -0.25;
    irs[(1, 0, 0)] = 0.1;
    irs[(1, 1, 2)] = 0.4;
    // row 2 stays silent

    let path = dir.join("fixture.sofa");
    write_sofa(&path, &positions, &irs);

    path
}

#[test]
fn exports_nearest_and_skips_silent() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("wavs");

    let sofa = Sofa::open(fixture(tmp.path())).unwrap();

    let targets = [
        Target::new("FC_0", 0.0, 0.0),
        Target::new("FL_45", 40.0, 0.0),
        Target::new("BC_180", 180.0, 0.0),
    ];

    let report = Extractor::new(&out).run(&sofa, &targets).unwrap();

    assert_eq!(report.written(), 2);
    assert_eq!(report.skipped(), 1);

    assert!(out.join("FC_0.wav").exists());
    assert!(out.join("FL_45.wav").exists());
    assert!(!out.join("BC_180.wav").exists());

    // the exact (0, 0) measurement must win at distance zero
    match &report.entries[0].1 {
        Outcome::Written { matched, .. } => {
            assert_eq!(matched.index, 0);
            assert_eq!(matched.distance, 0.0);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    match &report.entries[2].1 {
        Outcome::SkippedSilent { matched } => assert_eq!(matched.index, 2),
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn written_wav_is_normalized_and_round_trips() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("wavs");

    let sofa = Sofa::open(fixture(tmp.path())).unwrap();

    Extractor::new(&out)
        .run(&sofa, &[Target::new("FC_0", 0.0, 0.0)])
        .unwrap();

    let mut reader = hound::WavReader::open(out.join("FC_0.wav")).unwrap();
    let spec = reader.spec();

    assert_eq!(spec.channels as usize, sofa.channels());
    assert_eq!(spec.sample_rate, 48_000);
    assert_eq!(spec.bits_per_sample, 32);
    assert_eq!(spec.sample_format, hound::SampleFormat::Float);
    assert_eq!(reader.duration() as usize, sofa.filter_len());

    let peak = reader
        .samples::<f32>()
        .map(|s| s.unwrap().abs())
        .fold(0.0f32, f32::max);

    assert_approx_eq!(peak, 0.95f32);
}

#[test]
fn duplicate_targets_write_identical_files() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("wavs");

    let sofa = Sofa::open(fixture(tmp.path())).unwrap();

    let targets = [
        Target::new("A", 2.0, 0.0),
        Target::new("B", 2.0, 0.0),
    ];

    let report = Extractor::new(&out).run(&sofa, &targets).unwrap();

    assert_eq!(report.written(), 2);
    assert_eq!(
        fs::read(out.join("A.wav")).unwrap(),
        fs::read(out.join("B.wav")).unwrap(),
    );
}

#[test]
fn reruns_are_deterministic() {
    let tmp = tempfile::tempdir().unwrap();
    let sofa_path = fixture(tmp.path());

    let targets = [Target::new("FC_0", 3.0, 0.0)];

    for out in ["first", "second"] {
        let sofa = Sofa::open(&sofa_path).unwrap();
        Extractor::new(tmp.path().join(out))
            .run(&sofa, &targets)
            .unwrap();
    }

    assert_eq!(
        fs::read(tmp.path().join("first/FC_0.wav")).unwrap(),
        fs::read(tmp.path().join("second/FC_0.wav")).unwrap(),
    );
}

#[test]
fn missing_position_table_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("broken.sofa");

    {
        let file = hdf5::File::create(&path).unwrap();
        let irs: Array3<f64> = Array3::zeros((1, 2, 4));

        file.new_dataset_builder()
            .with_data(&irs)
            .create("Data.IR")
            .unwrap();
    }

    match Sofa::open(&path) {
        Err(Error::MissingDataset(name)) => assert_eq!(name, "SourcePosition"),
        other => panic!("expected missing dataset error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn sampling_rate_is_reported_when_present() {
    let tmp = tempfile::tempdir().unwrap();
    let path = fixture(tmp.path());

    {
        let file = hdf5::File::open_rw(&path).unwrap();

        file.new_dataset_builder()
            .with_data(&arr1(&[44_100.0]))
            .create("Data.SamplingRate")
            .unwrap();
    }

    let sofa = Sofa::open(&path).unwrap();

    assert_eq!(sofa.sampling_rate(), Some(44_100.0));
}
