//! Reading and replacing the Hyprland monitor-layout file.
//!
//! The file lives at `<home>/.config/hypr/monitors.conf` by default and is
//! treated as opaque text.  Hyprland may read or rewrite it at any time; no
//! lock is taken.  Writes go through a temporary file in the same directory
//! followed by a rename, so a reader sees either the old or the new content
//! but never a truncated file.  An external edit made between our read and
//! our write is still lost: the last writer wins.

use crate::error::{Access, Error};
use crate::traits::HomeResolver;
use log::{debug, info, warn};
use std::fs;
use std::io::Write;
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

/// Path of the layout file relative to the home directory.
pub const DEFAULT_RELATIVE_PATH: &str = ".config/hypr/monitors.conf";

/// Permission bits for a newly created layout file.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Handle to the monitor-layout file.
///
/// The home directory is resolved on every call, so a handle stays valid
/// for the lifetime of the process.
pub struct MonitorsConf<H: HomeResolver> {
    home: H,
    relative: PathBuf,
    mode: u32,
}

impl<H: HomeResolver> MonitorsConf<H> {
    /// Handle for [`DEFAULT_RELATIVE_PATH`] with [`DEFAULT_FILE_MODE`].
    pub fn new(home: H) -> Self {
        Self::with_path(home, DEFAULT_RELATIVE_PATH, DEFAULT_FILE_MODE)
    }

    pub fn with_path(home: H, relative: impl Into<PathBuf>, mode: u32) -> Self {
        Self {
            home,
            relative: relative.into(),
            mode,
        }
    }

    /// Absolute path of the file.
    fn path(&self, access: Access) -> Result<PathBuf, Error> {
        let home = self
            .home
            .home_dir()
            .map_err(|e| Error::HomeResolution {
                access,
                reason: e.to_string(),
            })?;
        debug!("home directory: {}", home.display());
        Ok(home.join(&self.relative))
    }

    /// Read the whole file.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
    /// failing the read.
    pub fn read(&self) -> Result<String, Error> {
        let path = self.path(Access::Read)?;
        let bytes = fs::read(&path).map_err(|source| Error::FileRead {
            path: path.clone(),
            source,
        })?;
        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(e) => {
                warn!("{} is not valid utf-8, replacing invalid bytes", path.display());
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }

    /// Replace the file with `content`, creating it if absent.
    ///
    /// The parent directory must already exist.
    pub fn write(&self, content: &str) -> Result<(), Error> {
        let path = self.path(Access::Write)?;
        let target = resolve_symlinks(&path);
        replace_atomically(&target, content.as_bytes(), self.mode)
            .map_err(|source| Error::FileWrite { path, source })?;
        info!("wrote {} bytes to {}", content.len(), target.display());
        Ok(())
    }
}

/// Upper bound on symlink hops, as in Linux's `MAXSYMLINKS`.
const MAX_SYMLINK_HOPS: usize = 40;

/// Follow `path` through symlinks to the file that should be replaced.
///
/// The destination does not have to exist, so a dangling link still gets
/// its target created instead of being overwritten itself.
fn resolve_symlinks(path: &Path) -> PathBuf {
    let mut target = path.to_path_buf();
    for _ in 0..MAX_SYMLINK_HOPS {
        let is_link = fs::symlink_metadata(&target)
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false);
        if !is_link {
            break;
        }
        match fs::read_link(&target) {
            Ok(dest) => {
                target = match target.parent() {
                    Some(parent) => parent.join(dest),
                    None => dest,
                };
            }
            Err(e) => {
                warn!("could not read link {}: {}", target.display(), e);
                break;
            }
        }
    }
    target
}

/// Distinguishes temporary files of concurrent writes within one process.
static WRITE_SEQ: AtomicU32 = AtomicU32::new(0);

fn temp_path_for(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let seq = WRITE_SEQ.fetch_add(1, Ordering::Relaxed);
    target.with_file_name(format!(
        ".{}.hyprmon-{}-{}.tmp",
        name,
        std::process::id(),
        seq
    ))
}

/// Write `bytes` next to `target`, flush them to disk, then rename over
/// `target`.  The temporary file is removed on any failure.
fn replace_atomically(target: &Path, bytes: &[u8], new_mode: u32) -> std::io::Result<()> {
    let existing = fs::metadata(target)
        .ok()
        .map(|meta| meta.permissions().mode() & 0o7777);
    let tmp = temp_path_for(target);

    let result = (|| {
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .mode(existing.unwrap_or(new_mode))
            .open(&tmp)?;
        // The open mode is filtered by the umask; existing bits are copied
        // back exactly.
        if let Some(mode) = existing {
            file.set_permissions(fs::Permissions::from_mode(mode))?;
        }
        file.write_all(bytes)?;
        file.sync_all()?;
        fs::rename(&tmp, target)
    })();

    match result {
        Ok(()) => {
            // Persist the rename itself.  The content is already in place,
            // so a failure here is only reported.
            if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
                if let Err(e) = fs::File::open(parent).and_then(|dir| dir.sync_all()) {
                    warn!("could not sync {}: {}", parent.display(), e);
                }
            }
            Ok(())
        }
        Err(e) => {
            if let Err(rm) = fs::remove_file(&tmp) {
                if rm.kind() != std::io::ErrorKind::NotFound {
                    warn!("could not remove {}: {}", tmp.display(), rm);
                }
            }
            Err(e)
        }
    }
}
