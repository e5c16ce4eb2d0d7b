use std::fs::{remove_file, File};
use std::io::copy;
use std::path::{Path, PathBuf};
use flate2::write::GzEncoder;
use flate2::Compression;
use crate::error::DatasetError;

/// recognized image suffixes, longest first so a compressed file is never
/// split at the inner .nii
pub const KNOWN_IMAGE_EXTENSIONS:[&str;2] = [".nii.gz",".nii"];

/// split a file name into its stem and its image suffix. names without a
/// recognized suffix come back whole with an empty suffix
pub fn split_image_ext(name:&str) -> (&str,&str) {
    for ext in KNOWN_IMAGE_EXTENSIONS {
        if name.ends_with(ext) {
            return name.split_at(name.len() - ext.len())
        }
    }
    (name,"")
}

pub fn is_image(name:&str) -> bool {
    KNOWN_IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// gzip every .nii file under dataset_root to a sibling .nii.gz and remove
/// the original once the compressed copy is written. files that are already
/// compressed are left alone. returns the compressed copies
pub fn compress_all(dataset_root:&Path) -> Result<Vec<PathBuf>,DatasetError> {
    let uncompressed = utils::find_files(dataset_root,"nii").unwrap_or_default();
    let mut compressed = Vec::<PathBuf>::with_capacity(uncompressed.len());
    for file in uncompressed {
        let target = file.with_extension("nii.gz");
        let mut reader = File::open(&file)?;
        let writer = File::create(&target)?;
        let mut encoder = GzEncoder::new(writer,Compression::default());
        copy(&mut reader,&mut encoder)?;
        encoder.finish()?;
        remove_file(&file)?;
        compressed.push(target);
    }
    Ok(compressed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_known_suffixes() {
        assert_eq!(split_image_ext("t1.nii"),("t1",".nii"));
        assert_eq!(split_image_ext("t1.nii.gz"),("t1",".nii.gz"));
        assert_eq!(split_image_ext("controls_subj_007_t1.nii.gz"),("controls_subj_007_t1",".nii.gz"));
    }

    #[test]
    fn split_unknown_suffix() {
        assert_eq!(split_image_ext("notes.txt"),("notes.txt",""));
        assert_eq!(split_image_ext("t1"),("t1",""));
    }

    #[test]
    fn image_detection() {
        assert!(is_image("a.nii"));
        assert!(is_image("a.nii.gz"));
        assert!(!is_image("a.nii.gz.bak"));
        assert!(!is_image("a.txt"));
    }
}
