use std::fs::rename;
use std::path::{Path, PathBuf};
use crate::error::DatasetError;
use crate::nifti::is_image;
use crate::subject::{SubjectName, SUBJECT_GLOB};

/// rename every image file in subject_dir to <group>_subj_<id>_<original name>,
/// keeping whatever zero-padding the directory name carries. NOT idempotent:
/// a second run stacks another prefix on top of the first. returns the
/// renames that were performed
pub fn rename_subject_files(subject_dir:&Path,group:&str) -> Result<Vec<(PathBuf,PathBuf)>,DatasetError> {
    let dir = utils::absolute(subject_dir);
    let subject = SubjectName::from_dir(&dir)?;
    let files = utils::get_all_matches(&dir,"*").unwrap_or_default();
    let mut moves = Vec::<(PathBuf,PathBuf)>::new();
    for file in files.into_iter().filter(|f| f.is_file()) {
        let name = file.file_name().and_then(|n| n.to_str()).expect("cannot coerce to str");
        if !is_image(name) {
            continue
        }
        let target = file.with_file_name(format!("{}_subj_{}_{}",group,subject.padded_id(),name));
        rename(&file,&target)?;
        moves.push((file,target));
    }
    Ok(moves)
}

/// apply the image naming convention to an entire dataset. every
/// subdirectory of dataset_root is taken as a group directory and its
/// basename as the group label for the subj_* directories inside
pub fn rename_all_subject_files(dataset_root:&Path) -> Result<Vec<(PathBuf,PathBuf)>,DatasetError> {
    let root = utils::absolute(dataset_root);
    let mut moves = Vec::<(PathBuf,PathBuf)>::new();
    for group_dir in utils::sub_dirs(&root) {
        let group = group_dir.file_name().and_then(|n| n.to_str()).expect("cannot coerce to str").to_string();
        let subject_dirs = utils::get_all_matches(&group_dir,SUBJECT_GLOB).unwrap_or_default();
        for subject_dir in subject_dirs.into_iter().filter(|d| d.is_dir()) {
            moves.extend(rename_subject_files(&subject_dir,&group)?);
        }
    }
    Ok(moves)
}
