use std::fs::File;

/// Shared reader configuration for cookie logs: fields are verbatim
/// comma-separated text (no quote interpretation), trimmed on both sides.
/// Header handling is done by the caller, so the first line's content never
/// matters. Blank lines never surface as records, which means the caller's
/// header drop applies to the first non-blank line. Flexible mode lets
/// wrong-arity rows through as records so they can be dropped instead of
/// aborting the read.
pub(crate) fn cookie_reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .quoting(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .buffer_capacity(32 * 1024);
    builder
}

/// Build a CSV reader over the log file at `path`. Open failures propagate
/// to the caller.
pub fn build_csv_reader(path: &str) -> Result<csv::Reader<File>, csv::Error> {
    cookie_reader_builder().from_path(path)
}
