//! [`HomeResolver`] implementations.

use crate::traits::{HomeError, HomeResolver};
use std::path::PathBuf;

/// Resolves home from the `HOME` environment variable.
///
/// An unset or empty `HOME` is an error rather than a silent fallback to
/// some other directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvHome;

impl HomeResolver for EnvHome {
    fn home_dir(&self) -> Result<PathBuf, HomeError> {
        match std::env::var_os("HOME") {
            Some(home) if !home.is_empty() => Ok(PathBuf::from(home)),
            _ => Err(HomeError("$HOME is not defined".into())),
        }
    }
}

/// Always resolves to the same directory, or always fails when built with
/// [`FixedHome::unavailable`].
#[derive(Debug, Clone)]
pub struct FixedHome(Option<PathBuf>);

impl FixedHome {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(Some(path.into()))
    }

    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl HomeResolver for FixedHome {
    fn home_dir(&self) -> Result<PathBuf, HomeError> {
        self.0
            .clone()
            .ok_or_else(|| HomeError("home directory unavailable".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_home_resolves() {
        let home = FixedHome::new("/home/u");
        assert_eq!(home.home_dir().unwrap(), PathBuf::from("/home/u"));
    }

    #[test]
    fn unavailable_home_fails() {
        let err = FixedHome::unavailable().home_dir().unwrap_err();
        assert_eq!(err.to_string(), "home directory unavailable");
    }
}
