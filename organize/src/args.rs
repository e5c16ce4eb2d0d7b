use std::path::PathBuf;

#[derive(clap::Parser,Debug)]
pub struct OrganizeArgs {
    #[command(subcommand)]
    pub action: Action,
}

#[derive(clap::Subcommand,Debug)]
pub enum Action {
    /// zero-pad every subject directory name so they sort numerically
    PadSubjects(DatasetArgs),
    /// move subject directories into group directories per an assignment file
    Reorganize(ReorganizeArgs),
    /// prefix every image in every group's subject directories
    RenameImages(DatasetArgs),
    /// prefix the images of a single subject directory
    RenameSubjectImages(SubjectDirArgs),
    /// resolve the path of a subject's image
    FindImage(FindImageArgs),
    /// gzip every uncompressed image in the dataset
    Compress(DatasetArgs),
}

#[derive(clap::Args,Debug)]
pub struct DatasetArgs {
    pub dataset_root:PathBuf,
}

#[derive(clap::Args,Debug)]
pub struct ReorganizeArgs {
    pub dataset_root:PathBuf,
    pub assignments:PathBuf,
}

#[derive(clap::Args,Debug)]
pub struct SubjectDirArgs {
    pub subject_dir:PathBuf,
    pub group:String,
}

#[derive(clap::Args,Debug)]
pub struct FindImageArgs {
    pub dataset_root:PathBuf,
    pub subject_id:u32,
    pub modality:String,
    #[clap(short, long)]
    pub group:Option<String>,
}
