use std::path::Path;

/// Move every entry of `src` into `dst`, then remove the emptied `src`.
///
/// Used after project scaffolding to hoist the generated subdirectory's
/// contents into the working directory. Entries are moved with `rename`,
/// so `src` and `dst` must live on the same filesystem; a failure mid-way
/// leaves already-moved entries in place.
pub fn hoist_dir_contents(src: &Path, dst: &Path) -> std::io::Result<()> {
    if !src.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Source directory not found: {}", src.display()),
        ));
    }

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        std::fs::rename(entry.path(), &target).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to move {} to {}: {}",
                    entry.path().display(),
                    target.display(),
                    e
                ),
            )
        })?;
    }

    std::fs::remove_dir(src)
}
