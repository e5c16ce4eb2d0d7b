use std::path::{Path, PathBuf};
use crate::error::DatasetError;
use crate::subject::{SubjectName, SUBJECT_GLOB, SUBJECT_PREFIX};

// lookups always ask for the compressed form, whatever suffix the file was
// stored with originally
fn image_name(group:&str,padded_id:&str,modality:&str) -> String {
    format!("{}_subj_{}_{}.nii.gz",group,padded_id,modality)
}

/// resolve the expected image path for a subject in a known group. a missing
/// group directory, subject, or image is None, never an error; a subj_*
/// entry that fails to parse is an error
pub fn find_image(dataset_root:&Path,group:&str,id:u32,modality:&str) -> Result<Option<PathBuf>,DatasetError> {
    let group_dir = utils::absolute(dataset_root).join(group);
    if !group_dir.is_dir() {
        return Ok(None)
    }
    let mut found:Option<(PathBuf,SubjectName)> = None;
    for dir in utils::get_all_matches(&group_dir,SUBJECT_GLOB).unwrap_or_default() {
        if !dir.is_dir() {
            continue
        }
        let name = SubjectName::from_dir(&dir)?;
        if name.id() == id {
            found = Some((dir,name));
        }
    }
    match found {
        Some((dir,name)) => {
            let image = dir.join(image_name(group,&name.padded_id(),modality));
            match image.is_file() {
                true => Ok(Some(image)),
                false => Ok(None)
            }
        }
        None => Ok(None)
    }
}

/// resolve an image path without knowing the subject's group. the whole tree
/// is walked in sorted order and of several directories claiming the same id
/// the last one visited wins; the group label is taken from the winning
/// directory's parent
pub fn find_image_any_group(dataset_root:&Path,id:u32,modality:&str) -> Result<Option<PathBuf>,DatasetError> {
    let root = utils::absolute(dataset_root);
    let mut found:Option<(PathBuf,SubjectName)> = None;
    for dir in utils::walk_dirs(&root) {
        let name = match dir.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue
        };
        if !name.starts_with(SUBJECT_PREFIX) {
            continue
        }
        let subject = SubjectName::parse(name)?;
        if subject.id() == id {
            found = Some((dir,subject));
        }
    }
    match found {
        Some((dir,subject)) => {
            let group = dir.parent().and_then(|p| p.file_name()).and_then(|n| n.to_str())
                .expect("subject directory has no parent").to_string();
            let image = dir.join(image_name(&group,&subject.padded_id(),modality));
            match image.is_file() {
                true => Ok(Some(image)),
                false => Ok(None)
            }
        }
        None => Ok(None)
    }
}
