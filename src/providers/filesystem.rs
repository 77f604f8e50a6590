//! Stylesheets read from a directory on disk

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use super::AssetProvider;
use crate::css::Stylesheet;
use crate::error::{InlinerError, InlinerResult};
use crate::utils::strip_query_and_fragment;

/// Resolves stylesheet names as paths below a root directory.
///
/// `/css/site.css?v=2` and `css/site.css` both read `<root>/css/site.css`.
/// Names that would climb out of the root are refused.
#[derive(Debug, Clone)]
pub struct FilesystemProvider {
    root: PathBuf,
}

impl FilesystemProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a stylesheet name onto a path below the root.
    fn path_for(&self, name: &str) -> InlinerResult<PathBuf> {
        let relative = strip_query_and_fragment(name);
        let mut path = self.root.clone();
        let mut depth = 0usize;

        for component in Path::new(relative).components() {
            match component {
                Component::Normal(part) => {
                    path.push(part);
                    depth += 1;
                }
                Component::ParentDir => {
                    if depth == 0 {
                        return Err(InlinerError::InsecurePath(name.to_string()));
                    }
                    path.pop();
                    depth -= 1;
                }
                Component::CurDir | Component::RootDir => {}
                Component::Prefix(_) => {
                    return Err(InlinerError::InsecurePath(name.to_string()));
                }
            }
        }

        Ok(path)
    }
}

impl Default for FilesystemProvider {
    fn default() -> Self {
        Self::new(".")
    }
}

impl AssetProvider for FilesystemProvider {
    fn find_stylesheet(&self, name: &str) -> InlinerResult<Option<Stylesheet>> {
        let path = self.path_for(name)?;
        match fs::read_to_string(&path) {
            Ok(css) => {
                log::debug!("Loaded stylesheet {name:?} from {}", path.display());
                Ok(Some(Stylesheet::new(path.display().to_string(), &css)))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) if path.is_dir() => {
                log::debug!("Stylesheet {name:?} maps to directory {}: {e}", path.display());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_stay_below_root() {
        let provider = FilesystemProvider::new("/srv/assets");
        assert_eq!(
            provider.path_for("/css/site.css?v=2").unwrap(),
            PathBuf::from("/srv/assets/css/site.css")
        );
        assert_eq!(
            provider.path_for("css/../site.css#x").unwrap(),
            PathBuf::from("/srv/assets/site.css")
        );
        assert!(matches!(
            provider.path_for("../secret.css"),
            Err(InlinerError::InsecurePath(_))
        ));
        assert!(matches!(
            provider.path_for("css/../../secret.css"),
            Err(InlinerError::InsecurePath(_))
        ));
    }
}
