//! Loading of RLFAP instances.
//!
//! An instance is spread over three whitespace-separated text files in a shared data directory,
//! located by name: a `var…` file listing the variables, a `dom…` file defining the candidate
//! domains, and a `ctr…` file listing the distance constraints. The first line of every file is
//! a count header.

pub(crate) mod error;
pub(crate) mod parser;

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use log::debug;
use marconi_solver::model::ConstraintModel;

use self::error::RlfapError;

/// Locates and parses the three files of the given instance, producing the model to solve.
pub(crate) fn load_instance(
    data_dir: &Path,
    instance: &str,
) -> Result<ConstraintModel, RlfapError> {
    let dom_path = find_instance_file(data_dir, "dom", instance)?;
    let var_path = find_instance_file(data_dir, "var", instance)?;
    let ctr_path = find_instance_file(data_dir, "ctr", instance)?;
    debug!(
        "instance {instance}: domains from {}, variables from {}, constraints from {}",
        dom_path.display(),
        var_path.display(),
        ctr_path.display()
    );

    let domains = parser::parse_domains(&fs::read_to_string(dom_path)?)?;
    let variables = parser::parse_variables(&fs::read_to_string(var_path)?)?;
    let constraints = parser::parse_constraints(&fs::read_to_string(ctr_path)?)?;

    parser::assemble_model(&domains, &variables, &constraints)
}

/// Finds the file of the given kind (`var`, `dom` or `ctr`) belonging to the instance: the
/// first directory entry whose name contains `<kind><instance>`.
fn find_instance_file(
    directory: &Path,
    kind: &'static str,
    instance: &str,
) -> Result<PathBuf, RlfapError> {
    let needle = format!("{kind}{instance}");

    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().contains(&needle) {
            return Ok(entry.path());
        }
    }

    Err(RlfapError::MissingInstanceFile {
        kind,
        instance: instance.to_owned(),
        directory: directory.to_path_buf(),
    })
}
