use crate::core::batch::run_batch;
use crate::core::{AddressMapExpander, BatchOptions, KeyValueExtractor};
use crate::error::{ConvertError, ConvertResult};
use crate::writer::KeyValueMap;
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

/// Execute the json command (legacy A:B layout)
pub fn json(filename: Option<PathBuf>, verbose: bool) -> ConvertResult<()> {
    let file = filename.ok_or(ConvertError::MissingFilename)?;
    let extractor = KeyValueExtractor::new(&file)?;

    println!("{}", "🔥 SystemeHD - JSON conversion".bold().green());
    println!("   Input:  {}\n", file.display());

    if verbose {
        println!("{}", "📖 Reading name/address columns (A:B)...".cyan());
    }
    let map = extractor.extract_legacy()?;
    write_key_value(&extractor, &map, verbose)
}

/// Execute the new-json command (new A:C layout)
pub fn new_json(filename: Option<PathBuf>, verbose: bool) -> ConvertResult<()> {
    let file = filename.ok_or(ConvertError::MissingFilename)?;
    let extractor = KeyValueExtractor::new(&file)?;

    println!("{}", "🔥 SystemeHD - JSON conversion (new layout)".bold().green());
    println!("   Input:  {}\n", file.display());

    if verbose {
        println!(
            "{}",
            "📖 Reading object name/type/instance columns (A:C)...".cyan()
        );
    }
    let map = extractor.extract_new_layout()?;
    write_key_value(&extractor, &map, verbose)
}

fn write_key_value(
    extractor: &KeyValueExtractor,
    map: &KeyValueMap,
    verbose: bool,
) -> ConvertResult<()> {
    if verbose {
        println!("   Found {} points\n", map.len());
        println!("{}", "💾 Writing JSON file...".cyan());
    }

    let output = extractor.write_map(map)?;

    println!("{}", "✅ Conversion Complete!".bold().green());
    println!("   JSON file: {}\n", output.display());
    Ok(())
}

/// Execute the platform command, for one file or a whole directory tree
pub fn platform(
    filename: Option<PathBuf>,
    batch: Option<BatchOptions>,
    verbose: bool,
) -> ConvertResult<()> {
    if let Some(options) = batch {
        return platform_batch(options, verbose);
    }

    let file = filename.ok_or(ConvertError::MissingFilename)?;
    let expander = AddressMapExpander::new(&file)?;

    println!("{}", "🔥 SystemeHD - Platform HD address map".bold().green());
    println!("   Input:  {}\n", file.display());

    if verbose {
        println!("{}", "📖 Reading name/area/description columns (A:D)...".cyan());
    }

    let expansion = expander.convert()?;

    if verbose {
        println!(
            "   {} records written, {} rows skipped\n",
            expansion.records.len(),
            expansion.issues.len()
        );
    }

    println!("{}", "✅ Conversion Complete!".bold().green());
    println!("   Excel file: {}\n", expander.output_path()?.display());
    Ok(())
}

/// Convert every matching file below the batch root. Per-file failures are
/// printed and never fail the command.
fn platform_batch(options: BatchOptions, verbose: bool) -> ConvertResult<()> {
    println!("{}", "🔥 SystemeHD - Platform HD batch conversion".bold().green());
    println!("   Root:    {}", options.root.display());
    println!("   Pattern: {}\n", options.pattern);

    let report = run_batch(&options, |path| {
        if verbose {
            println!("{}", format!("📊 Converting {}", path.display()).cyan());
        }
        AddressMapExpander::new(path)?.convert().map(|_| ())
    })?;

    for err in &report.failed {
        println!(" {}", err.to_string().red());
    }

    let summary = format!(
        "Converted {} of {} files",
        report.converted.len(),
        report.total()
    );
    if report.failed.is_empty() {
        println!("{}", format!("✅ {summary}").bold().green());
    } else {
        println!("{}", format!("⚠️  {summary}").bold().yellow());
    }
    Ok(())
}

/// Execute the show command. Recognized, but performs no action.
pub fn show(filename: Option<PathBuf>) -> ConvertResult<()> {
    debug!(file = ?filename, "show does nothing");
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
