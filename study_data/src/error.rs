use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure modes of the dataset operations. Lookup misses are not errors and
/// come back as None from the locator functions.
#[derive(Debug)]
pub enum DatasetError {
    /// a directory matched subj_* but does not parse as subj_<digits>
    MalformedSubjectName(String),
    /// two existing directories would rename to the same padded name
    NameCollision {
        target:PathBuf,
        first:PathBuf,
        second:PathBuf,
    },
    /// a directory with a group's name is already present
    GroupDirExists(PathBuf),
    /// a subject id was assigned to more than one group
    DuplicateAssignment(u32),
    /// a subject directory on disk was assigned to no group
    UnassignedSubject(u32),
    /// a subject id was assigned but has no directory on disk
    SubjectNotFound(u32),
    /// filesystem failure, passed through untouched
    Io(io::Error),
}

impl fmt::Display for DatasetError {
    fn fmt(&self,f:&mut fmt::Formatter) -> fmt::Result {
        match self {
            DatasetError::MalformedSubjectName(name) => write!(f,"malformed subject directory name: {}",name),
            DatasetError::NameCollision {target,first,second} => write!(f,"{:?} and {:?} would both rename to {:?}",first,second,target),
            DatasetError::GroupDirExists(dir) => write!(f,"group directory already exists: {:?}",dir),
            DatasetError::DuplicateAssignment(id) => write!(f,"subject {} is assigned to more than one group",id),
            DatasetError::UnassignedSubject(id) => write!(f,"subject {} is not assigned to any group",id),
            DatasetError::SubjectNotFound(id) => write!(f,"subject {} has no directory in the dataset",id),
            DatasetError::Io(e) => write!(f,"I/O error: {}",e),
        }
    }
}

impl Error for DatasetError {}

impl From<io::Error> for DatasetError {
    fn from(e:io::Error) -> Self {
        DatasetError::Io(e)
    }
}
