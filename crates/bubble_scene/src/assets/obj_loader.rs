//! Wavefront OBJ model loader

use std::path::Path;

use crate::foundation::math::Vec3;
use super::loader::{AssetError, AssetLoader, LoadedModel};

/// Reads OBJ files with `tobj` and keeps only what the scene needs
#[derive(Debug, Default, Clone, Copy)]
pub struct ObjModelLoader;

impl ObjModelLoader {
    /// Create a loader
    pub fn new() -> Self {
        Self
    }
}

impl AssetLoader for ObjModelLoader {
    fn load(&self, path: &Path) -> Result<LoadedModel, AssetError> {
        let options = tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        };

        let (models, _materials) = tobj::load_obj(path, &options)
            .map_err(|e| AssetError::Parse(format!("{}: {}", path.display(), e)))?;

        let positions: Vec<Vec3> = models
            .iter()
            .flat_map(|model| model.mesh.positions.chunks_exact(3))
            .map(|p| Vec3::new(p[0], p[1], p[2]))
            .collect();

        log::debug!(
            "Parsed {} ({} meshes, {} positions)",
            path.display(),
            models.len(),
            positions.len()
        );

        LoadedModel::from_positions(path.display().to_string(), &positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::fs;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join("bubble_scene_obj_tests");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_triangle_bounds() {
        let path = write_temp(
            "triangle.obj",
            "o tri\nv -1.0 0.0 2.0\nv 3.0 1.0 2.0\nv 0.0 5.0 4.0\nf 1 2 3\n",
        );

        let model = ObjModelLoader::new().load(&path).unwrap();

        assert_eq!(model.vertex_count, 3);
        assert_relative_eq!(model.bounds.min, Vec3::new(-1.0, 0.0, 2.0));
        assert_relative_eq!(model.bounds.max, Vec3::new(3.0, 5.0, 4.0));
    }

    #[test]
    fn test_missing_file_is_parse_error() {
        let result = ObjModelLoader::new().load(Path::new("no/such/model.obj"));
        assert!(matches!(result, Err(AssetError::Parse(_))));
    }
}
