use std::collections::{HashMap, HashSet};
use std::fs::{create_dir, rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use serde_json;
use crate::error::DatasetError;
use crate::subject::{SubjectName, SUBJECT_GLOB};

/// which subjects belong to which group, in the order the group directories
/// will be created
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct GroupAssignments {
    pub groups:Vec<GroupAssignment>,
}

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct GroupAssignment {
    pub label:String,
    pub subjects:Vec<u32>,
}

impl GroupAssignments {
    pub fn from_file(filename:&Path) -> Self {
        let mut f = File::open(filename).expect(&format!("cannot open file {:?}",filename));
        let mut str = String::new();
        f.read_to_string(&mut str).expect("encountered problem reading file");
        serde_json::from_str(&str).expect("cannot deserialize assignments. Is the file corrupt?")
    }
    pub fn to_file(&self,filename:&Path) {
        let str = serde_json::to_string_pretty(&self).expect("cannot serialize assignments");
        let mut f = File::create(filename).expect("cannot create file");
        f.write_all(str.as_bytes()).expect("encountered error writing to file");
    }
}

/// create one directory per group label under dataset_root and move every
/// subject directory into its assigned group. the assignment is checked
/// before anything moves: every on-disk subject must appear in exactly one
/// group, every assigned id must exist on disk, and no group directory may
/// already exist. subject lookup goes through the numeric id, so any
/// zero-pad width works
pub fn reorganize_data_set(dataset_root:&Path,assignments:&GroupAssignments) -> Result<(),DatasetError> {
    let root = utils::absolute(dataset_root);
    let entries = utils::get_all_matches(&root,SUBJECT_GLOB).unwrap_or_default();
    let mut on_disk = HashMap::<u32,(PathBuf,SubjectName)>::new();
    for dir in entries.into_iter().filter(|e| e.is_dir()) {
        let name = SubjectName::from_dir(&dir)?;
        on_disk.insert(name.id(),(dir,name));
    }
    let mut assigned = HashSet::<u32>::new();
    for group in &assignments.groups {
        for &id in &group.subjects {
            if !assigned.insert(id) {
                return Err(DatasetError::DuplicateAssignment(id))
            }
            if !on_disk.contains_key(&id) {
                return Err(DatasetError::SubjectNotFound(id))
            }
        }
        let group_dir = root.join(&group.label);
        if group_dir.exists() {
            return Err(DatasetError::GroupDirExists(group_dir))
        }
    }
    for id in on_disk.keys() {
        if !assigned.contains(id) {
            return Err(DatasetError::UnassignedSubject(*id))
        }
    }
    for group in &assignments.groups {
        let group_dir = root.join(&group.label);
        create_dir(&group_dir)?;
        for id in &group.subjects {
            let (dir,name) = &on_disk[id];
            rename(dir,group_dir.join(name.dir_name()))?;
        }
    }
    Ok(())
}
