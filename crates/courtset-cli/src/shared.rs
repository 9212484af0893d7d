use std::path::Path;

use courtset::Dataset;

/// Load a JSONL export into a dataset with a user-friendly error message.
pub fn load_export(path: &Path) -> Result<Dataset, i32> {
    if !path.exists() {
        eprintln!("Error: file not found: {}", path.display());
        return Err(1);
    }
    courtset::read_jsonl_file(path)
        .map(Dataset::from_records)
        .map_err(|e| {
            eprintln!("Error: failed to read {}: {e}", path.display());
            1
        })
}

/// Write a dataset to a JSONL file with a user-friendly error message.
pub fn write_export(dataset: &Dataset, path: &Path) -> Result<(), i32> {
    courtset::write_jsonl_file(dataset.records(), path).map_err(|e| {
        eprintln!("Error: failed to write {}: {e}", path.display());
        1
    })
}
