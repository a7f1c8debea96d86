use crate::Result;
use log::info;
use std::{
    fmt::Display,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

/// Writes the document in DIMACS format, one record per line, header first.
///
/// Works for anything that displays as DIMACS, i.e. a `CnfDocument` or a `RawCnf`.
pub fn write_document(document: &impl Display, mut output: impl Write) -> std::io::Result<()> {
    writeln!(output, "{document}")?;
    output.flush()
}

/// Serializes the document completely in memory and writes it to `path` in one pass.
pub fn write_document_to_file(document: &impl Display, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    write_document(document, &mut buffer)?;
    fs::write(path, buffer)?;
    Ok(())
}

/// The file name of a numbered trial, e.g. `Randomizer3.cnf`.
pub fn trial_file_name(prefix: &str, trial: usize) -> String {
    format!("{prefix}{trial}.cnf")
}

/// Writes the trials as `<prefix><i>.cnf` into `directory`, numbering them from 1.
///
/// Each trial is written before the next one is pulled from the iterator.
/// Returns the paths that were written, in trial order.
pub fn write_trials<D: Display>(
    trials: impl IntoIterator<Item = D>,
    directory: &Path,
    prefix: &str,
) -> Result<Vec<PathBuf>> {
    trials
        .into_iter()
        .enumerate()
        .map(|(index, trial)| {
            let path = directory.join(trial_file_name(prefix, index + 1));
            write_document_to_file(&trial, &path)?;
            info!("Wrote trial {} to {}.", index + 1, path.display());
            Ok(path)
        })
        .collect()
}
