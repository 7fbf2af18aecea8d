use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

/// A file path, or `None` for the standard stream (absent or `-`).
fn file_path(path: &Option<PathBuf>) -> Option<&Path> {
    path.as_deref().filter(|p| *p != Path::new("-"))
}

/// Label or code input; one value per line.
#[derive(clap::Args, Debug, Default)]
pub struct InputArgs {
    /// Input file; stdin if absent or "-".
    #[clap(short, long)]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match file_path(&self.input) {
            Some(p) => {
                log::debug!("reading {}", p.display());
                Box::new(BufReader::new(File::open(p)?))
            }
            None => Box::new(BufReader::new(std::io::stdin().lock())),
        })
    }
}

/// Code or label output; one value per line.
#[derive(clap::Args, Debug, Default)]
pub struct OutputArgs {
    /// Output file; stdout if absent or "-".
    #[clap(short, long)]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match file_path(&self.output) {
            Some(p) => {
                log::debug!("writing {}", p.display());
                Box::new(BufWriter::new(File::create(p)?))
            }
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}
