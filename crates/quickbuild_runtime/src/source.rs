//! Grid source loading.
//!
//! Configuration files are ordinary grid sources read before the inputs, so
//! their sticky defaults, aliases, and reverse mappings apply to everything
//! that follows.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use quickbuild_foundation::{Error, Result};

/// File names looked for when no configuration file is given.
pub const DEFAULT_CONFIG_NAMES: [&str; 2] = [".qbcfg", "qb.cfg"];

/// Name used for text read from standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// One named grid source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    /// Name reported in locations.
    pub name: String,
    /// Full text.
    pub text: String,
}

impl SourceFile {
    /// Creates a source from text already in memory.
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Reads a source from disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read as UTF-8 text.
    pub fn load(path: &Path) -> Result<Self> {
        let name = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|e| Error::io(&name, &e))?;
        tracing::debug!(file = %name, bytes = text.len(), "loaded source");
        Ok(Self { name, text })
    }

    /// Reads a source to the end of `reader`.
    ///
    /// # Errors
    /// Returns an error if reading fails or the text is not UTF-8.
    pub fn from_reader(name: impl Into<String>, mut reader: impl Read) -> Result<Self> {
        let name = name.into();
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| Error::io(&name, &e))?;
        Ok(Self { name, text })
    }

    /// Reads standard input.
    ///
    /// # Errors
    /// Returns an error if standard input cannot be read.
    pub fn stdin() -> Result<Self> {
        Self::from_reader(STDIN_NAME, std::io::stdin().lock())
    }
}

/// Candidate configuration files: each default name in `cwd`, then in `home`.
#[must_use]
pub fn default_config_candidates(cwd: &Path, home: Option<&Path>) -> Vec<PathBuf> {
    std::iter::once(cwd)
        .chain(home)
        .flat_map(|dir| DEFAULT_CONFIG_NAMES.iter().map(move |name| dir.join(name)))
        .collect()
}

/// Where configuration comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Look for the default names in the working and home directories.
    #[default]
    Defaults,
    /// Use exactly this file.
    File(PathBuf),
    /// Read no configuration.
    Disabled,
}

impl ConfigSource {
    /// Loads the configuration sources to prepend to the inputs.
    ///
    /// Default candidates that do not exist, or are not regular files, are
    /// skipped. An explicitly named file must exist.
    ///
    /// # Errors
    /// Returns an error if an existing configuration file cannot be read.
    pub fn load(&self) -> Result<Vec<SourceFile>> {
        match self {
            Self::Disabled => Ok(Vec::new()),
            Self::File(path) => Ok(vec![SourceFile::load(path)?]),
            Self::Defaults => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                let home = dirs::home_dir();
                default_config_candidates(&cwd, home.as_deref())
                    .iter()
                    .filter(|path| path.is_file())
                    .map(|path| SourceFile::load(path))
                    .collect()
            }
        }
    }
}
