//! Strategies for turning the path handed to [`Ini::load`](crate::Ini::load) into the path that
//! is actually opened.

use std::borrow::Cow;
use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Maps a caller-supplied path to the file that should be read.
pub trait PathResolver {
    fn resolve<'a>(&self, path: &'a Path) -> io::Result<Cow<'a, Path>>;
}

/// Resolve bare file names against the directory holding the running executable.
///
/// `config.ini` and `./config.ini` both become `<exe dir>/config.ini`. Any other path with a
/// directory component, including absolute paths, is returned unchanged. This is the default
/// used by [`Ini::load`](crate::Ini::load).
///
/// The directory is that of the canonicalized [`env::current_exe`], so symlinks are followed:
/// a binary started through a link looks next to the link's target, not next to the link.
/// Wrap [`RelativeTo`] around the link's directory if the other behavior is needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutableRelative;

impl PathResolver for ExecutableRelative {
    fn resolve<'a>(&self, path: &'a Path) -> io::Result<Cow<'a, Path>> {
        let Some(name) = path.file_name().filter(|_| is_bare_file_name(path)) else {
            return Ok(Cow::Borrowed(path));
        };

        let exe = dunce::canonicalize(env::current_exe()?)?;
        let dir = exe.parent().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "executable path has no parent directory",
            )
        })?;

        Ok(Cow::Owned(dir.join(name)))
    }
}

/// Leave the path untouched so relative paths follow the process working directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkingDirectory;

impl PathResolver for WorkingDirectory {
    fn resolve<'a>(&self, path: &'a Path) -> io::Result<Cow<'a, Path>> {
        Ok(Cow::Borrowed(path))
    }
}

/// Resolve every relative path against a fixed base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeTo(pub PathBuf);

impl PathResolver for RelativeTo {
    fn resolve<'a>(&self, path: &'a Path) -> io::Result<Cow<'a, Path>> {
        if path.is_absolute() {
            Ok(Cow::Borrowed(path))
        } else {
            Ok(Cow::Owned(self.0.join(path)))
        }
    }
}

/// A file name with no directory component, or one whose only component is `.`.
///
/// The path is not normalized first, so `conf/../config.ini` still counts as having a
/// directory component.
fn is_bare_file_name(path: &Path) -> bool {
    path.parent()
        .is_some_and(|parent| parent.as_os_str().is_empty() || parent == Path::new("."))
}
