use std::path::Path;

use log::{info, warn};

use super::object::{Mesh, Object};
use crate::config::SceneConfig;
use crate::error::{LayoutError, Result};
use crate::gfx::bounds::{
    corner_markers, tracker, BoundingVolume, BoxInstanceData, CornerMarker, GeometryProvider,
    SelectionBox,
};
use crate::gfx::geometry::{GeometryData, MeshPrimitives};
use crate::gfx::layout::{arrange_with, place_next, Arrangement, StageHelpers};
use crate::gfx::picking::{self, PickResult, Ray};

/// Name tobj gives models that have no `o` or `g` statement.
const TOBJ_DEFAULT_NAME: &str = "unnamed_object";

/// Main scene containing objects, their layout and selection state
pub struct Scene {
    pub config: SceneConfig,
    pub objects: Vec<Object>,
    selection: Vec<usize>,
    arrangement: Option<Arrangement>,
    helpers: StageHelpers,
    primitives: MeshPrimitives,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        let helpers = StageHelpers::new(
            config.empty_unit_size,
            config.empty_overall_size,
            config.arrange.cell_gap,
        );

        Self {
            config,
            objects: Vec::new(),
            selection: Vec::new(),
            arrangement: None,
            helpers,
            primitives: MeshPrimitives::default(),
        }
    }

    /// Loads a 3D object from an OBJ file and places it in the layout.
    ///
    /// Returns the new object's index. Models without any vertices are
    /// rejected with [`LayoutError::NoGeometry`] and never enter the scene.
    pub fn add_object(&mut self, object_path: impl AsRef<Path>) -> Result<usize> {
        let path = object_path.as_ref();
        let (models, _materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )
        .map_err(|source| LayoutError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        let meshes = models
            .iter()
            .map(|m| {
                let mesh = &m.mesh;
                // Use normals from OBJ if available, otherwise calculate them
                let normals = if mesh.normals.len() == mesh.positions.len() {
                    mesh.normals.clone()
                } else {
                    Mesh::calculate_face_normals(&mesh.positions, &mesh.indices)
                };
                Mesh::new(mesh.positions.clone(), normals, mesh.indices.clone())
            })
            .collect();

        let name = models
            .first()
            .map(|m| m.name.clone())
            .filter(|name| !name.is_empty() && name != TOBJ_DEFAULT_NAME)
            .or_else(|| {
                path.file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| "object".to_string());

        info!(
            "loaded '{}' from {} ({} models)",
            name,
            path.display(),
            models.len()
        );
        self.add_prepared_object(Object::new(name, meshes))
    }

    /// Adds a procedurally generated object and places it in the layout.
    pub fn add_object_from_geometry(
        &mut self,
        name: &str,
        geometry: &GeometryData,
    ) -> Result<usize> {
        self.add_prepared_object(Object::new(name, vec![geometry.to_mesh()]))
    }

    /// Adds an already built object and places it in the layout.
    ///
    /// If the scene is arranged and the newcomer fits within the current
    /// unit size it takes the next spiral cell; otherwise the whole scene is
    /// re-arranged.
    pub fn add_prepared_object(&mut self, mut object: Object) -> Result<usize> {
        if !object.mesh_present() {
            warn!("rejecting '{}': no mesh geometry", object.name);
            return Err(LayoutError::NoGeometry { name: object.name });
        }

        let unique = self.ensure_unique_name(&object.name);
        object.set_name(unique);
        self.objects.push(object);
        let index = self.objects.len() - 1;

        let inserted = match (self.arrangement.as_mut(), self.objects.last_mut()) {
            (Some(arrangement), Some(object)) => place_next(object, arrangement)?.is_some(),
            _ => false,
        };

        if inserted {
            self.objects[index].recalculate_bounds()?;
            self.refresh_helpers();
        } else {
            self.arrange()?;
        }

        Ok(index)
    }

    /// Removes an object and re-arranges the remaining ones.
    pub fn remove_object(&mut self, index: usize) -> Result<Object> {
        if index >= self.objects.len() {
            return Err(LayoutError::ObjectIndex(index));
        }

        let object = self.objects.remove(index);
        self.selection.retain(|&i| i != index);
        for i in &mut self.selection {
            if *i > index {
                *i -= 1;
            }
        }

        self.arrange()?;
        Ok(object)
    }

    /// Re-arranges every object on the spiral and refreshes all derived
    /// geometry (cached bounds, grid, lights).
    pub fn arrange(&mut self) -> Result<&Arrangement> {
        let arrangement = arrange_with(&mut self.objects, &self.config.arrange)?;

        for object in &mut self.objects {
            object.recalculate_bounds()?;
        }

        let (unit_size, overall_size) = framing_for(&self.config, Some(&arrangement));
        self.helpers = StageHelpers::new(unit_size, overall_size, self.config.arrange.cell_gap);

        Ok(self.arrangement.insert(arrangement))
    }

    /// Switch between normalized and original object scale and re-arrange.
    pub fn set_keep_original_scale(&mut self, keep: bool) -> Result<&Arrangement> {
        self.config.arrange.keep_original_scale = keep;
        self.arrange()
    }

    fn refresh_helpers(&mut self) {
        let (unit_size, overall_size) = self.framing();
        self.helpers = StageHelpers::new(unit_size, overall_size, self.config.arrange.cell_gap);
    }

    /// `(unit_size, overall_size)` for camera framing.
    ///
    /// Falls back to the configured empty-scene sizes when nothing is loaded.
    pub fn framing(&self) -> (f32, f32) {
        framing_for(&self.config, self.arrangement.as_ref())
    }

    pub fn arrangement(&self) -> Option<&Arrangement> {
        self.arrangement.as_ref()
    }

    pub fn helpers(&self) -> &StageHelpers {
        &self.helpers
    }

    /// Recompute one object's cached world bounds after editing its transform.
    pub fn recalculate_bounds(&mut self, index: usize) -> Result<BoundingVolume> {
        self.objects
            .get_mut(index)
            .ok_or(LayoutError::ObjectIndex(index))?
            .recalculate_bounds()
    }

    // Selection

    /// Select an object. With `additive` the object is appended to the
    /// current selection; otherwise it replaces it. The first selected
    /// object is the current one.
    pub fn select(&mut self, index: usize, additive: bool) -> Result<()> {
        if index >= self.objects.len() {
            return Err(LayoutError::ObjectIndex(index));
        }
        if !additive {
            self.selection.clear();
        }
        if !self.selection.contains(&index) {
            self.selection.push(index);
        }
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn current_selection(&self) -> Option<usize> {
        self.selection.first().copied()
    }

    /// One selection box per selected object, in selection order.
    ///
    /// Objects whose transform changed since their last bounds recompute are
    /// recomputed on the spot.
    pub fn selection_boxes(&mut self) -> Result<Vec<SelectionBox<GeometryData>>> {
        let mut boxes = Vec::with_capacity(self.selection.len());
        for &index in &self.selection {
            let object = self
                .objects
                .get_mut(index)
                .ok_or(LayoutError::ObjectIndex(index))?;
            let volume = match object.bounds() {
                Some(volume) => *volume,
                None => object.recalculate_bounds()?,
            };
            boxes.push(tracker::selection_box_instance(
                &volume,
                self.config.selected_color,
                self.config.other_color,
                &self.primitives,
            ));
        }
        Ok(boxes)
    }

    /// Instance data for all selection boxes; the first is drawn in the
    /// current-selection color.
    pub fn selection_instances(&mut self) -> Result<Vec<BoxInstanceData>> {
        Ok(self
            .selection_boxes()?
            .iter()
            .enumerate()
            .map(|(i, selection)| selection.instance_data(i == 0))
            .collect())
    }

    /// Corner widgets for one object, in corner-index order.
    pub fn corner_markers(&mut self, index: usize) -> Result<[CornerMarker<GeometryData>; 8]> {
        let volume = self.recalculate_bounds(index)?;
        Ok(corner_markers(
            &volume,
            self.config.corner_marker_ratio,
            &self.primitives,
        ))
    }

    /// Closest visible object under `ray`.
    pub fn pick(&self, ray: &Ray) -> Option<PickResult> {
        picking::pick_object(ray, &self.objects)
    }

    // UI helper methods

    /// Gets all object names for UI display
    pub fn get_object_names(&self) -> Vec<String> {
        self.objects.iter().map(|obj| obj.name.clone()).collect()
    }

    /// Gets the total number of objects
    pub fn get_object_count(&self) -> usize {
        self.objects.len()
    }

    /// Gets mutable reference to an object by index
    pub fn get_object_mut(&mut self, index: usize) -> Option<&mut Object> {
        self.objects.get_mut(index)
    }

    /// Gets immutable reference to an object by index
    pub fn get_object(&self, index: usize) -> Option<&Object> {
        self.objects.get(index)
    }

    /// Gets statistics about the scene
    pub fn get_statistics(&self) -> SceneStatistics {
        let (unit_size, overall_size) = self.framing();
        SceneStatistics {
            object_count: self.objects.len(),
            total_triangles: self.objects.iter().map(Object::triangle_count).sum(),
            total_vertices: self.objects.iter().map(Object::vertex_count).sum(),
            unit_size,
            overall_size,
        }
    }

    pub fn ensure_unique_name(&self, desired_name: &str) -> String {
        let mut counter = 0;
        let mut test_name = desired_name.to_string();

        while self.objects.iter().any(|obj| obj.name == test_name) {
            counter += 1;
            test_name = format!("{} ({})", desired_name, counter);
        }

        test_name
    }
}

fn framing_for(config: &SceneConfig, arrangement: Option<&Arrangement>) -> (f32, f32) {
    match arrangement {
        Some(a) if !a.is_empty() => (a.unit_size, a.overall_size),
        _ => (config.empty_unit_size, config.empty_overall_size),
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

/// Scene statistics for debugging and UI display
#[derive(Debug)]
pub struct SceneStatistics {
    pub object_count: usize,
    pub total_triangles: usize,
    pub total_vertices: usize,
    pub unit_size: f32,
    pub overall_size: f32,
}
