pub mod fs;
pub mod prompt;

pub use fs::{backup, check_dir, is_markdown, read_to_string, resolve_files, write_atomic};
pub use prompt::{input_until, InputSource, LinePrompt};
