//! Shared test harness utilities for inline-icons crates.

use std::fs;
use std::path::{Path, PathBuf};

use inline_icons_config::Config;
use tempfile::TempDir;

/// A heroicons-style asset carrying the default sizing marker.
pub const STAR_SVG: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" class="size-6">"#,
    "\n",
    r#"  <path stroke-linecap="round" d="M12 3l2.5 6h6l-5 4 2 6-5.5-4-5.5 4 2-6-5-4h6z"/>"#,
    "\n</svg>\n",
);

/// Same document as [`STAR_SVG`] after inlining with the default settings.
pub const STAR_INLINE: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" class="inline-icon">"#,
    "\n",
    r#"  <path stroke-linecap="round" d="M12 3l2.5 6h6l-5 4 2 6-5.5-4-5.5 4 2-6-5-4h6z"/>"#,
    "\n</svg>\n",
);

/// Temporary project with an icon directory at the default location.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let project = Project { dir };
        fs::create_dir_all(project.icons_dir()).expect("create icon directory");
        project
    }

    /// Project without an icon directory.
    pub fn without_icons() -> Self {
        Project {
            dir: TempDir::new().expect("tempdir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn icons_dir(&self) -> PathBuf {
        self.root().join("static/icons")
    }

    pub fn with_icon(self, name: &str, svg: &str) -> Self {
        self.add_icon(name, svg);
        self
    }

    pub fn add_icon(&self, name: &str, svg: &str) -> PathBuf {
        let path = self.icons_dir().join(format!("{name}.svg"));
        fs::write(&path, svg).expect("write icon");
        path
    }

    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directory");
        }
        fs::write(&path, contents).expect("write file");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root().join(relative)).expect("read file")
    }

    /// Built-in defaults anchored at the project root.
    pub fn config(&self) -> Config {
        Config::builtin(self.root())
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new()
    }
}
