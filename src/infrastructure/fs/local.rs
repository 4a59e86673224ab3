//! Local file writes
//!
//! Output files are replaced in one step: content is written to a temporary
//! file next to the destination, then renamed over it. A symlinked
//! destination is followed so the link keeps pointing at the updated file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

const MAX_SYMLINK_HOPS: usize = 40;

/// Write `content` to `path` atomically.
///
/// The destination directory must already exist. Symlinks are resolved to
/// the file they point at, and a read-only destination is refused with
/// `PermissionDenied`. An existing file keeps its permissions; a new one gets
/// the usual `0644` on Unix instead of the temporary file's private mode.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let target = resolve_destination(path)?;

    if let Ok(meta) = fs::metadata(&target) {
        if meta.permissions().readonly() {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is read-only", target.display()),
            ));
        }
    }

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".portalmap-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    carry_permissions(&tmp, &target)?;

    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}

/// Follow symlinks from `path` to the file that should receive the content.
///
/// A dangling link resolves to its missing target, which is then created.
fn resolve_destination(path: &Path) -> io::Result<PathBuf> {
    let mut current = path.to_path_buf();
    for _ in 0..MAX_SYMLINK_HOPS {
        match fs::symlink_metadata(&current) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let link = fs::read_link(&current)?;
                current = match current.parent() {
                    Some(parent) if link.is_relative() => parent.join(link),
                    _ => link,
                };
            }
            _ => return Ok(current),
        }
    }
    Err(io::Error::new(
        io::ErrorKind::Other,
        format!("too many levels of symbolic links at {}", path.display()),
    ))
}

#[cfg(unix)]
fn carry_permissions(tmp: &NamedTempFile, target: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match std::fs::metadata(target) {
        Ok(meta) => meta.permissions(),
        Err(_) => std::fs::Permissions::from_mode(0o644),
    };
    tmp.as_file().set_permissions(permissions)
}

#[cfg(not(unix))]
fn carry_permissions(_tmp: &NamedTempFile, _target: &Path) -> io::Result<()> {
    Ok(())
}
