use jwalk::WalkDir;
use std::fs;
use std::path::{Component, Path};

use super::table::{Asset, AssetTable, AssetTableBuilder};
use crate::error::IndexError;
use crate::http::mime::{self, Sniffer};

/// Read every file under `root` into a frozen [`AssetTable`]
///
/// Any unreadable entry aborts the whole index; there is no partial table.
/// Symlinks are not followed while walking but are read through, so a link
/// to a file is served with the target's contents.
pub fn index_directory<S>(root: &Path, sniffer: &S) -> Result<AssetTable, IndexError>
where
    S: Sniffer + ?Sized,
{
    if !root.is_dir() {
        return Err(IndexError::NotADirectory(root.to_path_buf()));
    }

    let mut builder = AssetTableBuilder::new();
    for entry in WalkDir::new(root).sort(true) {
        let entry = entry?;
        let path = entry.path();
        // `Path::is_dir` follows links, so a link to a directory is skipped too
        if entry.file_type().is_dir() || path.is_dir() {
            continue;
        }

        let content = fs::read(&path).map_err(|source| IndexError::Read {
            path: path.clone(),
            source,
        })?;
        let file_name = entry.file_name().to_string_lossy();
        let content_type = mime::resolve_content_type(&file_name, &content, sniffer);

        builder.insert(route_for(root, &path)?, Asset::new(content, content_type));
    }

    Ok(builder.finish())
}

/// Request path for a file below `root`: its relative path, `/`-separated,
/// with a leading `/`
pub fn route_for(root: &Path, file: &Path) -> Result<String, IndexError> {
    let relative = file
        .strip_prefix(root)
        .map_err(|_| IndexError::OutsideRoot(file.to_path_buf()))?;

    let mut route = String::new();
    for component in relative.components() {
        if let Component::Normal(segment) = component {
            let segment = segment
                .to_str()
                .ok_or_else(|| IndexError::NonUtf8Path(file.to_path_buf()))?;
            route.push('/');
            route.push_str(segment);
        }
    }
    Ok(route)
}
