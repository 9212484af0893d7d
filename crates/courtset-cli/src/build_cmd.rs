use std::path::{Path, PathBuf};

use courtset::{Dataset, ExtractOptions, build_record};

use crate::shared::{load_export, write_export};

pub fn run(
    dir: &Path,
    output: &Path,
    merge: &[PathBuf],
    min_chars: usize,
    summary: Option<&Path>,
) -> Result<(), i32> {
    let pdfs = scan_directory(dir)?;

    // Seed the dedup set from prior exports; their records are carried
    // into the output.
    let mut dataset = Dataset::new();
    for path in merge {
        let prior = load_export(path)?;
        let carried = dataset.merge(prior);
        eprintln!("Loaded {carried} records from {}", path.display());
    }

    let options = ExtractOptions::default();
    let mut added = 0usize;
    let mut skipped = 0usize;
    let mut duplicates = 0usize;

    for path in &pdfs {
        match build_record(path, &options, min_chars) {
            Ok(record) => {
                if dataset.insert(record) {
                    added += 1;
                } else {
                    duplicates += 1;
                    eprintln!("Duplicate case, skipping: {}", path.display());
                }
            }
            Err(err) => {
                skipped += 1;
                eprintln!("Skipping {}: {err}", path.display());
            }
        }
    }

    write_export(&dataset, output)?;
    if let Some(summary_path) = summary {
        courtset::write_csv_summary_file(dataset.records(), summary_path).map_err(|e| {
            eprintln!("Error: failed to write {}: {e}", summary_path.display());
            1
        })?;
    }

    eprintln!(
        "Wrote {} records to {} ({added} new, {duplicates} duplicates, {skipped} skipped)",
        dataset.len(),
        output.display(),
    );
    Ok(())
}

/// Collect the PDF files of `dir`, sorted by name for a deterministic run.
fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>, i32> {
    if !dir.is_dir() {
        eprintln!("Error: not a directory: {}", dir.display());
        return Err(1);
    }

    let entries = std::fs::read_dir(dir).map_err(|e| {
        eprintln!("Error: cannot read {}: {e}", dir.display());
        1
    })?;

    let mut pdfs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
        })
        .collect();
    pdfs.sort();
    Ok(pdfs)
}
