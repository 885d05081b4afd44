/// Parsed command-line arguments: the log file to read and the target date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    pub file_path: String,
    pub date: String,
}
