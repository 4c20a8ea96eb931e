use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::error::LoadError;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Image files directly inside `dir`, ordered by file name.
pub fn collect_image_paths(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let read_dir_error = |source| LoadError::ReadDir { path: dir.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if path.is_file() && IMAGE_EXTENSIONS.contains(&extension_of(&path).as_str()) {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(LoadError::NoImages(dir.to_path_buf()));
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

pub fn shuffle_paths(paths: &mut [PathBuf]) {
    paths.shuffle(&mut rand::rng());
}

/// EXIF orientation tag of a JPEG, or 1 (upright) when absent or unreadable.
pub fn exif_orientation(bytes: &[u8]) -> u16 {
    let exif = match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif,
        Err(e) => {
            debug!("no usable EXIF data: {}", e);
            return 1;
        }
    };
    match exif.get_field(Tag::Orientation, In::PRIMARY).map(|f| &f.value) {
        Some(Value::Short(values)) => values.first().copied().unwrap_or(1),
        _ => 1,
    }
}

/// Decodes an image, bakes its EXIF rotation in and uploads it to the GPU.
pub fn load_slide_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::ReadFile { path: path.to_path_buf(), source })?;

    let extension = extension_of(path);
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(&bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &bytes).map_err(|e| {
        LoadError::Decode { path: path.to_path_buf(), reason: e.to_string() }
    })?;

    // 3 = upside down, 6 = rotated 90 CW, 8 = rotated 90 CCW; flips are ignored
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!(?path, orientation, "applied EXIF rotation");
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| LoadError::Texture { path: path.to_path_buf(), reason: e.to_string() })
}

/// Loads every path, skipping the ones that fail.
pub fn load_slide_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    paths: &[PathBuf],
) -> Vec<(PathBuf, Texture2D)> {
    let mut textures = Vec::with_capacity(paths.len());
    for path in paths {
        match load_slide_texture(rl, thread, path) {
            Ok(texture) => textures.push((path.clone(), texture)),
            Err(e) => warn!("skipping slide: {}", e),
        }
    }
    textures
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"not really an image").unwrap();
    }

    #[test]
    fn collects_images_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.JPG");
        touch(dir.path(), "a.png");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "c.gif");
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let names: Vec<_> = collect_image_paths(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.png", "b.JPG", "c.gif"]);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "readme.md");
        assert!(matches!(collect_image_paths(dir.path()), Err(LoadError::NoImages(_))));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        assert!(matches!(collect_image_paths(&missing), Err(LoadError::ReadDir { .. })));
    }

    #[test]
    fn shuffle_keeps_every_path() {
        let mut paths: Vec<PathBuf> = (0..20).map(|i| PathBuf::from(format!("{i:02}.png"))).collect();
        let original = paths.clone();
        shuffle_paths(&mut paths);
        paths.sort();
        assert_eq!(paths, original);
    }

    #[test]
    fn bytes_without_exif_are_upright() {
        assert_eq!(exif_orientation(b"plainly not a jpeg"), 1);
        assert_eq!(exif_orientation(&[]), 1);
    }
}
