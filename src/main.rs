use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use hugo_slug::{
    args::Cli,
    io::{check_dir, input_until, LinePrompt},
    SlugInserter,
};

const DIR_PROMPT: &str = "Enter directory storing the blog: ";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let dir = match cli.dir {
        Some(dir) => {
            check_dir(&dir)?;
            dir
        }
        None => prompt_dir()?,
    };

    let inserter = SlugInserter::new(cli.opts.into())?;
    if inserter.options().dry_run {
        log::info!("dry run: no files will be modified");
    }

    let summary = inserter
        .run(&dir)
        .with_context(|| format!("failed to process {}", dir.display()))?;
    log::info!("{summary}");
    Ok(())
}

fn prompt_dir() -> Result<PathBuf> {
    let mut prompt = LinePrompt::stdio();
    let dir = input_until(&mut prompt, DIR_PROMPT, |v| Path::new(v).is_dir())
        .context("no blog directory given")?;
    Ok(PathBuf::from(dir))
}
