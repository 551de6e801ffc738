use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use url::Url;

/// The site author, carried into the Atom feed.
#[derive(Clone, Deserialize)]
pub struct Author {
    pub name: String,
    pub email: Option<String>,
}

#[derive(Deserialize)]
struct Project {
    title: String,
    site_root: Url,
    author: Option<Author>,

    #[serde(default)]
    content_directory: Option<PathBuf>,
}

pub struct Config {
    pub title: String,
    pub site_root: Url,
    pub author: Option<Author>,
    pub content_directory: PathBuf,
}

impl Config {
    /// Locates `inkstone.yaml` in `dir` or the nearest ancestor directory
    /// and loads it, so the CLI works from anywhere inside the project.
    pub fn from_directory(dir: &Path) -> Result<Config> {
        let path = dir.join("inkstone.yaml");
        if path.exists() {
            match Config::from_project_file(&path) {
                Ok(config) => Ok(config),
                Err(e) => Err(anyhow!("Loading configuration: {:?}", e)),
            }
        } else {
            match path.parent().and_then(Path::parent) {
                Some(dir) => Config::from_directory(dir),
                None => Err(anyhow!(
                    "Could not find `inkstone.yaml` in any parent directory"
                )),
            }
        }
    }

    pub fn from_project_file(path: &Path) -> Result<Config> {
        let project: Project = serde_yaml::from_reader(open(path, "project")?)?;
        match path.parent() {
            None => Err(anyhow!(
                "Can't get parent directory for provided project file path '{:?}'",
                path
            )),
            Some(project_root) => Ok(Config {
                title: project.title,
                site_root: project.site_root,
                author: project.author,
                content_directory: project_root.join(
                    project
                        .content_directory
                        .unwrap_or_else(|| PathBuf::from("content")),
                ),
            }),
        }
    }
}

fn open(path: &Path, kind: &str) -> Result<File> {
    match File::open(path) {
        Err(e) => Err(anyhow!("Opening {} file `{}`: {}", kind, path.display(), e)),
        Ok(file) => Ok(file),
    }
}
