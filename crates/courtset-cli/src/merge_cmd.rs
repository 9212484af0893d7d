use std::path::{Path, PathBuf};

use courtset::Dataset;

use crate::shared::{load_export, write_export};

pub fn run(inputs: &[PathBuf], output: &Path) -> Result<(), i32> {
    let mut dataset = Dataset::new();
    let mut duplicates = 0usize;

    for path in inputs {
        let incoming = load_export(path)?;
        let total = incoming.len();
        let added = dataset.merge(incoming);
        duplicates += total - added;
        eprintln!("Merged {added} records from {}", path.display());
    }

    write_export(&dataset, output)?;
    eprintln!(
        "Wrote {} records to {} ({duplicates} duplicates dropped)",
        dataset.len(),
        output.display(),
    );
    Ok(())
}
