use clap::Parser;
use std::path::PathBuf;

use crate::processor::ProcessOptions;

/// Insert or refresh `slug:` fields derived from markdown post titles
#[derive(Parser, Debug)]
#[command(name = "hugo-slug", version, about, long_about = None)]
pub struct Cli {
    /// Directory storing the blog; prompted for when omitted
    pub dir: Option<PathBuf>,

    #[command(flatten)]
    pub opts: CommonOpts,
}

#[derive(clap::Args, Debug, Default)]
pub struct CommonOpts {
    /// Preview changes without modifying files
    #[arg(short = 'n', long)]
    pub dry_run: bool,
    /// Create a backup copy with suffix before overwriting
    #[arg(long)]
    pub backup_suffix: Option<String>,
}

impl From<CommonOpts> for ProcessOptions {
    fn from(opts: CommonOpts) -> Self {
        Self {
            dry_run: opts.dry_run,
            backup_suffix: opts.backup_suffix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["hugo-slug"]).unwrap();
        assert!(cli.dir.is_none());
        assert!(!cli.opts.dry_run);
        assert!(cli.opts.backup_suffix.is_none());
    }

    #[test]
    fn test_dir_and_options() {
        let cli =
            Cli::try_parse_from(["hugo-slug", "-n", "--backup-suffix", ".bak", "content/posts"])
                .unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("content/posts")));

        let options = ProcessOptions::from(cli.opts);
        assert!(options.dry_run);
        assert_eq!(options.backup_suffix.as_deref(), Some(".bak"));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
