// SPDX-License-Identifier: BSD-3-Clause

//! Project catalogue.
//!
//! The root screen shows a fixed, ordered set of projects built once at
//! startup from bundled thumbnail assets. The set never changes while the
//! application runs; modal flows reference projects by index into it.

use crate::io::assets::{self, Thumbnail};
use anyhow::{bail, Result};
use std::path::Path;

/// The thumbnails that must exist for the grid to populate at all, in
/// display order.
const REQUIRED_THUMBNAILS: [(&str, &str); 3] = [
    ("Project A", "thumb_a.png"),
    ("Project B", "thumb_b.png"),
    ("Project C", "thumb_c.png"),
];

/// One grid entry. Immutable after load.
#[derive(Debug, Clone)]
pub struct Project {
    pub title: String,
    pub thumbnail: Thumbnail,
}

/// The fixed, ordered set of projects shown on the root screen.
#[derive(Debug, Clone)]
pub struct ProjectLibrary {
    projects: Vec<Project>,
}

impl ProjectLibrary {
    /// Build the library from the bundled assets directory.
    ///
    /// Fails if any required thumbnail is missing or undecodable, naming
    /// every missing file. The grid is never populated partially: either
    /// all projects load or startup is refused.
    pub fn load(assets_dir: &Path) -> Result<Self> {
        let missing: Vec<&str> = REQUIRED_THUMBNAILS
            .iter()
            .filter(|(_, file)| !assets_dir.join(file).is_file())
            .map(|(_, file)| *file)
            .collect();
        if !missing.is_empty() {
            bail!(
                "missing required thumbnail(s) in {}: {}",
                assets_dir.display(),
                missing.join(", ")
            );
        }

        let mut projects = Vec::with_capacity(REQUIRED_THUMBNAILS.len());
        for (title, file) in REQUIRED_THUMBNAILS {
            let thumbnail = assets::load_thumbnail(&assets_dir.join(file))?;
            projects.push(Project {
                title: title.to_string(),
                thumbnail,
            });
        }
        Ok(Self { projects })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_thumbnail(dir: &Path, name: &str) {
        image::RgbaImage::from_pixel(8, 8, image::Rgba([100, 100, 100, 255]))
            .save(dir.join(name))
            .unwrap();
    }

    #[test]
    fn loads_all_projects_in_display_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["thumb_a.png", "thumb_b.png", "thumb_c.png"] {
            write_thumbnail(dir.path(), name);
        }

        let library = ProjectLibrary::load(dir.path()).unwrap();
        let titles: Vec<&str> = library
            .projects()
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, ["Project A", "Project B", "Project C"]);
    }

    #[test]
    fn one_missing_thumbnail_refuses_the_whole_grid() {
        let dir = tempfile::tempdir().unwrap();
        write_thumbnail(dir.path(), "thumb_a.png");
        write_thumbnail(dir.path(), "thumb_c.png");

        let err = ProjectLibrary::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("thumb_b.png"));
    }

    #[test]
    fn error_names_every_missing_thumbnail() {
        let dir = tempfile::tempdir().unwrap();
        write_thumbnail(dir.path(), "thumb_b.png");

        let err = ProjectLibrary::load(dir.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("thumb_a.png"));
        assert!(message.contains("thumb_c.png"));
    }

    #[test]
    fn undecodable_thumbnail_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["thumb_a.png", "thumb_b.png"] {
            write_thumbnail(dir.path(), name);
        }
        std::fs::write(dir.path().join("thumb_c.png"), b"not a png").unwrap();

        assert!(ProjectLibrary::load(dir.path()).is_err());
    }
}
