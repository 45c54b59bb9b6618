use std::fmt::Display;
use std::str::FromStr;

use crate::error::LocateError;

/// One of the recognized NSRR sleep studies.
///
/// The set is closed: adding a study means adding a variant and its
/// [`Convention`] entry, and every dispatch in the crate is an exhaustive
/// match over it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// Multi-Ethnic Study of Atherosclerosis
    Mesa,
    /// Cleveland Family Study
    Cfs,
}

// Per-dataset naming convention: the directory under the storage root, the
// recording extension, and the prefix of annotation file names.
pub(crate) struct Convention {
    pub dir: &'static str,
    pub extension: &'static str,
    pub annotation_prefix: &'static str,
}

impl Dataset {
    pub(crate) const fn convention(self) -> Convention {
        match self {
            Dataset::Mesa => Convention {
                dir: "mesa",
                extension: "edf",
                annotation_prefix: "mesa-sleep",
            },
            Dataset::Cfs => Convention {
                dir: "cfs",
                extension: "edf",
                annotation_prefix: "cfs-visit5",
            },
        }
    }
}

impl FromStr for Dataset {
    type Err = LocateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mesa" => Ok(Dataset::Mesa),
            "cfs" => Ok(Dataset::Cfs),
            other => Err(LocateError::UnsupportedDataset(other.into())),
        }
    }
}

impl Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.convention().dir)
    }
}
