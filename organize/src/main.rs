use std::path::PathBuf;
use std::process::exit;
use clap::Parser;
use study_data::error::DatasetError;
use study_data::locate::{find_image, find_image_any_group};
use study_data::nifti::compress_all;
use study_data::pad::pad_subject_dirs;
use study_data::reorganize::{reorganize_data_set, GroupAssignments};
use study_data::subject_files::{rename_all_subject_files, rename_subject_files};

mod args;
use args::*;

fn main(){
    let args = OrganizeArgs::parse();

    match args.action {
        Action::PadSubjects(args) => {
            println!("Padding subject directories ...");
            let moves = check(pad_subject_dirs(&args.dataset_root));
            report_moves(&moves);
        }
        Action::Reorganize(args) => {
            println!("Reorganizing dataset ...");
            let assignments = GroupAssignments::from_file(&args.assignments);
            check(reorganize_data_set(&args.dataset_root,&assignments));
            println!("moved subjects into {} group directories",assignments.groups.len());
        }
        Action::RenameImages(args) => {
            println!("Renaming images ...");
            let moves = check(rename_all_subject_files(&args.dataset_root));
            report_moves(&moves);
        }
        Action::RenameSubjectImages(args) => {
            let moves = check(rename_subject_files(&args.subject_dir,&args.group));
            report_moves(&moves);
        }
        Action::FindImage(args) => {
            let found = match &args.group {
                Some(group) => check(find_image(&args.dataset_root,group,args.subject_id,&args.modality)),
                None => check(find_image_any_group(&args.dataset_root,args.subject_id,&args.modality)),
            };
            match found {
                Some(image) => println!("{}",image.to_string_lossy()),
                None => {
                    println!("image not found");
                    exit(1);
                }
            }
        }
        Action::Compress(args) => {
            println!("Compressing images ...");
            let compressed = check(compress_all(&args.dataset_root));
            println!("compressed {} images",compressed.len());
        }
    }
}

// batches stop at the first error. entries already renamed stay put
fn check<T>(result:Result<T,DatasetError>) -> T {
    match result {
        Ok(val) => val,
        Err(e) => {
            println!("{}",e);
            exit(1);
        }
    }
}

fn report_moves(moves:&[(PathBuf,PathBuf)]) {
    for (from,to) in moves {
        println!("{} -> {}",from.to_string_lossy(),to.to_string_lossy());
    }
    println!("renamed {} entries",moves.len());
}
