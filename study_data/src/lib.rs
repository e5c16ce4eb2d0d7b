pub mod error;
pub mod subject;
pub mod nifti;
pub mod pad;
pub mod reorganize;
pub mod subject_files;
pub mod locate;
