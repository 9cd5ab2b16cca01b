//! Picture selection
//!
//! Pictures are grouped by character: `<root>/<character>/*.png`. A deal uses
//! one picture from each of `pairs` randomly sampled characters, so no two
//! pairs ever look alike.

use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::ConfigError;

/// Card back texture
pub const CARD_BACK: &str = "img/card_back.png";
/// Card front texture, drawn under the picture
pub const CARD_FRONT: &str = "img/card_front.png";

const PICTURE_EXTENSION: &str = "png";

/// Character directories under `root` holding at least one picture, with
/// their pictures. Sorted so the same seed picks the same files.
pub fn picture_sets(root: &Path) -> Result<Vec<Vec<PathBuf>>, ConfigError> {
    let mut dirs: Vec<PathBuf> = std::fs::read_dir(root)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();

    let mut sets = Vec::with_capacity(dirs.len());
    for dir in dirs {
        let pictures = pictures_in(&dir)?;
        if pictures.is_empty() {
            log::debug!("Memory: no pictures in {}, skipping", dir.display());
        } else {
            sets.push(pictures);
        }
    }
    Ok(sets)
}

fn pictures_in(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let mut pictures: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(PICTURE_EXTENSION))
        })
        .collect();
    pictures.sort();
    Ok(pictures)
}

/// One picture per pair, each from a different character.
///
/// Index `i` of the result is the picture for pair id `i`.
pub fn pick_pictures(
    root: &Path,
    pairs: usize,
    rng: &mut impl Rng,
) -> Result<Vec<PathBuf>, ConfigError> {
    let sets = picture_sets(root)?;
    if sets.len() < pairs {
        return Err(ConfigError::InsufficientAssets {
            dir: root.to_path_buf(),
            needed: pairs,
            found: sets.len(),
        });
    }

    let chosen: Vec<&Vec<PathBuf>> = sets.choose_multiple(&mut *rng, pairs).collect();
    let mut pictures = Vec::with_capacity(pairs);
    for set in chosen {
        if let Some(picture) = set.choose(&mut *rng) {
            pictures.push(picture.clone());
        }
    }
    log::debug!(
        "Memory: picked {} pictures from {} sets",
        pictures.len(),
        sets.len()
    );
    Ok(pictures)
}
