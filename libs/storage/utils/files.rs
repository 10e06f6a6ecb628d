use std::path::{Path, PathBuf};

pub fn check_path_is_directory(path: &Path) -> eyre::Result<()> {
    if !path.exists() {
        return Err(eyre::eyre!("Directory {:?} doesn't exist", path));
    } else if !path.is_dir() {
        return Err(eyre::eyre!("Path {:?} is not a directory", path));
    }
    Ok(())
}

/// Create directory and all necessary parent directories of a given path
pub fn create_dir_if_not_exists_deep(path: &Path) -> eyre::Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Resolve the file backing `key` inside `dir`. The extension is always
/// appended so that every key gets its own file.
pub fn key_to_path(dir: &Path, key: &str, extension: &str) -> eyre::Result<PathBuf> {
    let valid = !key.is_empty()
        && key != "."
        && key != ".."
        && !key.contains(['/', '\\'])
        && !key.contains('\0');

    if !valid {
        return Err(eyre::eyre!("Storage key '{key}' can't be used as a file name"));
    }

    Ok(dir.join(format!("{key}.{extension}")))
}
