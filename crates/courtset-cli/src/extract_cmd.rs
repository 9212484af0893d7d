use std::path::Path;

use courtset::{ExtractOptions, extract_document};

use crate::cli::OutputFormat;

pub fn run(file: &Path, format: OutputFormat, raw: bool) -> Result<(), i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    let options = ExtractOptions {
        raw,
        ..ExtractOptions::default()
    };

    let document = extract_document(file, &options).map_err(|e| {
        eprintln!("Error: failed to extract {}: {e}", file.display());
        1
    })?;

    match format {
        OutputFormat::Text => println!("{}", document.text),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "text": document.text,
                "page_count": document.page_count,
            });
            println!("{value}");
        }
    }

    Ok(())
}
