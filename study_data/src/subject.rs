use std::path::Path;
use regex::Regex;
use crate::error::DatasetError;

/// prefix every subject directory name starts with
pub const SUBJECT_PREFIX:&str = "subj_";

/// glob pattern selecting candidate subject directories
pub const SUBJECT_GLOB:&str = "subj_*";

/// A validated subject directory name of the form `subj_<digits>`.
///
/// The numeric id and its field width are captured separately so the original
/// string, zero-padding included, can always be reproduced exactly.
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct SubjectName {
    id:u32,
    pad_width:usize,
}

impl SubjectName {

    pub fn parse(name:&str) -> Result<Self,DatasetError> {
        let reg = Regex::new(r"^subj_([0-9]+)$").expect("invalid regex");
        let caps = reg.captures(name).ok_or(DatasetError::MalformedSubjectName(name.to_string()))?;
        let digits = &caps[1];
        let id = digits.parse().map_err(|_| DatasetError::MalformedSubjectName(name.to_string()))?;
        Ok(Self {
            id,
            pad_width:digits.len(),
        })
    }

    pub fn from_dir(dir:&Path) -> Result<Self,DatasetError> {
        let name = dir.file_name().and_then(|n| n.to_str())
            .ok_or(DatasetError::MalformedSubjectName(dir.to_string_lossy().to_string()))?;
        Self::parse(name)
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// the id rendered with its zero-padding intact
    pub fn padded_id(&self) -> String {
        format!("{:0width$}",self.id,width=self.pad_width)
    }

    pub fn dir_name(&self) -> String {
        format!("{}{}",SUBJECT_PREFIX,self.padded_id())
    }

    /// the same subject rendered at a different field width
    pub fn with_pad_width(&self,pad_width:usize) -> Self {
        Self {
            id:self.id,
            pad_width,
        }
    }
}

/// field width at which every id up to and including max_id sorts
/// lexicographically: the digit count of max_id, never less than 1
pub fn pad_width(max_id:u32) -> usize {
    max_id.to_string().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_padding() {
        let name = SubjectName::parse("subj_007").unwrap();
        assert_eq!(name.id(),7);
        assert_eq!(name.padded_id(),"007");
        assert_eq!(name.dir_name(),"subj_007");
    }

    #[test]
    fn parse_unpadded() {
        let name = SubjectName::parse("subj_42").unwrap();
        assert_eq!(name.id(),42);
        assert_eq!(name.dir_name(),"subj_42");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(SubjectName::parse("subj_").is_err());
        assert!(SubjectName::parse("subj_x7").is_err());
        assert!(SubjectName::parse("subj_7b").is_err());
        assert!(SubjectName::parse("sub_7").is_err());
        assert!(SubjectName::parse("subj_7_t1").is_err());
        assert!(SubjectName::parse("subj_-1").is_err());
    }

    #[test]
    fn repad_never_truncates() {
        let name = SubjectName::parse("subj_100").unwrap();
        assert_eq!(name.with_pad_width(1).dir_name(),"subj_100");
        assert_eq!(name.with_pad_width(5).dir_name(),"subj_00100");
    }

    #[test]
    fn width_is_digit_count() {
        assert_eq!(pad_width(0),1);
        assert_eq!(pad_width(9),1);
        assert_eq!(pad_width(10),2);
        assert_eq!(pad_width(99),2);
        assert_eq!(pad_width(100),3);
    }
}
