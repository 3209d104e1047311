use std::fmt;
use std::path::PathBuf;

/// Where a run reads text from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A UTF-8 text file, read line by line.
    File(PathBuf),
    /// The standard input stream, read until EOF.
    Stdin,
}

impl Source {
    /// Maps command-line paths to sources, falling back to standard input
    /// when no path is given.
    pub fn from_paths<I>(paths: I) -> Vec<Source>
    where
        I: IntoIterator,
        I::Item: Into<PathBuf>,
    {
        let sources: Vec<Source> = paths
            .into_iter()
            .map(|p| Source::File(p.into()))
            .collect();

        if sources.is_empty() {
            vec![Source::Stdin]
        } else {
            sources
        }
    }

    /// Returns true for [`Source::Stdin`].
    #[inline]
    pub fn is_stdin(&self) -> bool {
        matches!(self, Source::Stdin)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Stdin => f.write_str("<stdin>"),
        }
    }
}
