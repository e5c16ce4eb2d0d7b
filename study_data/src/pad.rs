use std::collections::HashMap;
use std::fs::rename;
use std::path::{Path, PathBuf};
use crate::error::DatasetError;
use crate::subject::{pad_width, SubjectName, SUBJECT_GLOB};

/// rename every subj_* directory under dataset_root so all ids carry the same
/// zero-pad width (the digit count of the largest id). lexicographic and
/// numeric subject order then coincide. the full target set is checked for
/// collisions before anything moves. returns the renames that were performed;
/// a directory already at the right width is left alone, so a second pass
/// over a padded dataset does nothing
pub fn pad_subject_dirs(dataset_root:&Path) -> Result<Vec<(PathBuf,PathBuf)>,DatasetError> {
    let root = utils::absolute(dataset_root);
    let entries = utils::get_all_matches(&root,SUBJECT_GLOB).unwrap_or_default();
    let mut subjects = Vec::<(PathBuf,SubjectName)>::new();
    for dir in entries.into_iter().filter(|e| e.is_dir()) {
        let name = SubjectName::from_dir(&dir)?;
        subjects.push((dir,name));
    }
    let max_id = match subjects.iter().map(|(_,name)| name.id()).max() {
        Some(max) => max,
        None => return Ok(Vec::new())
    };
    let width = pad_width(max_id);
    let mut targets = HashMap::<String,PathBuf>::new();
    for (dir,name) in &subjects {
        let target = name.with_pad_width(width).dir_name();
        if let Some(first) = targets.insert(target.clone(),dir.clone()) {
            return Err(DatasetError::NameCollision {
                target:root.join(target),
                first,
                second:dir.clone(),
            })
        }
    }
    let mut moves = Vec::<(PathBuf,PathBuf)>::new();
    for (dir,name) in subjects {
        let target = root.join(name.with_pad_width(width).dir_name());
        if target == dir {
            continue
        }
        rename(&dir,&target)?;
        moves.push((dir,target));
    }
    Ok(moves)
}
