use std::env::current_dir;
use std::path::{Path, PathBuf};
use glob::glob;
use walkdir::WalkDir;
use path_clean::PathClean;

/// resolve a user-supplied directory to an absolute path with no trailing
/// separator or redundant components, so that file_name() behaves
pub fn absolute(dir:&Path) -> PathBuf {
    let p = match dir.is_absolute() {
        true => dir.to_path_buf(),
        false => current_dir().expect("cannot determine working directory").join(dir),
    };
    p.clean()
}

// single depth search, lexicographic order
pub fn get_all_matches(dir:&Path,pattern:&str) -> Option<Vec<PathBuf>> {
    let pat = dir.join(pattern);
    let pat = pat.to_str().expect("cannot coerce to str");
    let matches:Vec<PathBuf> = glob(pat).expect("Failed to read glob pattern").flat_map(|m| m).collect();
    match matches.is_empty() {
        true => None,
        false => Some(matches)
    }
}

/// immediate subdirectories of dir in lexicographic order
pub fn sub_dirs(dir:&Path) -> Vec<PathBuf> {
    match get_all_matches(dir,"*") {
        Some(matches) => matches.into_iter().filter(|m| m.is_dir()).collect(),
        None => Vec::new()
    }
}

/// every directory under base_dir (base_dir included), depth-first with
/// siblings visited in file-name order
pub fn walk_dirs(base_dir:&Path) -> Vec<PathBuf> {
    let mut dirs = Vec::<PathBuf>::new();
    let walker = WalkDir::new(base_dir).sort_by_file_name();
    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_dir() {
            dirs.push(entry.path().to_owned());
        }
    }
    dirs
}

// recursive walk, files only
pub fn find_files(base_dir:&Path,extension:&str) -> Option<Vec<PathBuf>> {
    let mut files = Vec::<PathBuf>::new();
    let walker = WalkDir::new(base_dir).sort_by_file_name();
    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue
        }
        match entry.path().extension() {
            Some(ext) => {
                if ext.to_str().unwrap() == extension {
                    files.push(entry.path().to_owned());
                }
            }
            None => {}
        }
    }
    match files.len() {
        0 => None,
        _ => Some(files)
    }
}
