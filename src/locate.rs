use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::dataset::Dataset;
use crate::error::{LocateError, Result};

// NSRR datasets keep one directory per study under the storage root:
//
// <root>/<dataset>/polysomnography/
//     -> edfs/*.edf
//     -> annotations-events-profusion/<prefix>-<subject>-profusion.xml
//
// Each recording has exactly one matching annotation file, named after the
// subject identifier embedded in the recording file name. Annotation paths
// are constructed, never checked for existence.
//
// <https://sleepdata.org/datasets>

const ANNOTATION_DIR: &str = "annotations-events-profusion";
const ANNOTATION_SUFFIX: &str = "profusion.xml";
const VISIT: &str = "visit1";

/// All recordings of one dataset, plus the directory its annotations live in.
#[derive(Debug)]
pub struct Listing {
    /// Recording paths in lexicographic order.
    pub recordings: Vec<PathBuf>,
    pub annotation_dir: PathBuf,
}

/// Where one recording's annotations are, and whose they are.
#[derive(Debug)]
pub struct Resolution {
    pub subject: String,
    /// Always `"visit1"`, for both datasets. NSRR names CFS hypnograms with a
    /// `cfs-visit5` prefix, but the visit reported here stays `"visit1"`;
    /// multi-visit designs are not distinguished.
    pub visit: &'static str,
    pub annotation_path: PathBuf,
}

/// Lists every recording of `dataset` under `root_dir`, sorted, along with
/// the directory holding the dataset's annotation files.
pub fn list_recordings<P>(dataset: Dataset, root_dir: P) -> Result<Listing>
where
    P: AsRef<Path>,
{
    let convention = dataset.convention();
    let study_dir = root_dir.as_ref().join(convention.dir).join("polysomnography");
    let recording_dir = study_dir.join("edfs");
    let annotation_dir = study_dir.join(ANNOTATION_DIR);

    let mut recordings = fs::read_dir(&recording_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == convention.extension))
        .collect::<Vec<PathBuf>>();
    recordings.sort();
    debug!(
        "{}: {} recordings under {}",
        dataset,
        recordings.len(),
        recording_dir.display()
    );

    if recordings.is_empty() {
        return Err(LocateError::NoRecordingsFound(recording_dir));
    }

    Ok(Listing {
        recordings,
        annotation_dir,
    })
}

/// Extracts the subject and visit identifiers from one recording path and
/// constructs the path of its annotation file inside `annotation_dir`.
pub fn resolve<P, Q>(recording: P, dataset: Dataset, annotation_dir: Q) -> Result<Resolution>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let subject = subject_from_name(recording.as_ref())?;
    let annotation_path = annotation_dir.as_ref().join(format!(
        "{}-{}-{}",
        dataset.convention().annotation_prefix,
        subject,
        ANNOTATION_SUFFIX
    ));

    Ok(Resolution {
        subject,
        visit: VISIT,
        annotation_path,
    })
}

/// [`list_recordings`] followed by [`resolve`] on each recording.
pub fn resolve_all<P>(dataset: Dataset, root_dir: P) -> Result<Vec<(PathBuf, Resolution)>>
where
    P: AsRef<Path>,
{
    let listing = list_recordings(dataset, root_dir)?;
    listing
        .recordings
        .into_iter()
        .map(|recording| {
            resolve(&recording, dataset, &listing.annotation_dir)
                .map(|resolution| (recording, resolution))
        })
        .collect()
}

// The subject identifier is the third hyphen-delimited token of the file
// name, minus the 4-character extension. Names without that shape are
// rejected instead of sliced out of range.
fn subject_from_name(recording: &Path) -> Result<String> {
    let malformed = || LocateError::MalformedFileName(recording.to_path_buf());

    let name = recording
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(malformed)?;
    let token = name.split('-').nth(2).ok_or_else(malformed)?;

    let mut chars = token.chars();
    for _ in 0..4 {
        chars.next_back().ok_or_else(malformed)?;
    }
    let subject = chars.as_str();
    if subject.is_empty() {
        return Err(malformed());
    }

    Ok(subject.to_string())
}
