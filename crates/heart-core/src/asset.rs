//! glTF binary loading into a single model-group-space mesh.

use crate::constants::{MODEL_OFFSET, MODEL_SCALE};
use crate::error::AssetError;
use crate::mesh::ModelMesh;
use glam::{Mat4, Quat, Vec3, Vec4};

/// Placement of the loaded model inside the model group.
#[inline]
pub fn model_placement() -> Mat4 {
    Mat4::from_scale_rotation_translation(Vec3::splat(MODEL_SCALE), Quat::IDENTITY, MODEL_OFFSET)
}

/// Parse a `.glb` (or embedded `.gltf`) byte slice. Every triangle primitive
/// of the default scene is flattened into one mesh with node transforms and
/// the model placement applied. Images are never decoded, so textures in
/// formats the loader can't read don't block the geometry.
pub fn load_glb(bytes: &[u8]) -> Result<ModelMesh, AssetError> {
    let mut gltf = gltf::Gltf::from_slice(bytes)?;
    let buffers = gltf::import_buffers(&gltf.document, None, gltf.blob.take())?;
    let document = gltf.document;
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or(AssetError::NoScene)?;

    let mut mesh = ModelMesh::default();
    let placement = model_placement();
    for node in scene.nodes() {
        collect_node(&node, placement, &buffers, &mut mesh)?;
    }
    if mesh.is_empty() {
        return Err(AssetError::NoTriangles);
    }
    log::info!(
        "[asset] loaded {} triangles, {} vertices",
        mesh.triangle_count(),
        mesh.positions.len()
    );
    Ok(mesh)
}

fn collect_node(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut ModelMesh,
) -> Result<(), AssetError> {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(gmesh) = node.mesh() {
        for primitive in gmesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                log::warn!(
                    "[asset] skipping {:?} primitive in mesh {:?}",
                    primitive.mode(),
                    gmesh.name()
                );
                continue;
            }
            let reader = primitive.reader(|buffer| Some(&*buffers[buffer.index()]));
            let positions: Vec<Vec3> = reader
                .read_positions()
                .ok_or(AssetError::MissingPositions)?
                .map(Vec3::from)
                .collect();
            let normals: Vec<Vec3> = reader
                .read_normals()
                .map(|it| it.map(Vec3::from).collect())
                .unwrap_or_default();
            let indices: Vec<u32> = match reader.read_indices() {
                Some(ix) => ix.into_u32().collect(),
                None => (0..positions.len() as u32).collect(),
            };
            let base_color = primitive
                .material()
                .pbr_metallic_roughness()
                .base_color_factor();
            let part = ModelMesh::new(positions, normals, indices).with_color(Vec4::from(base_color));
            out.append_transformed(&part, world);
        }
    }
    for child in node.children() {
        collect_node(&child, world, buffers, out)?;
    }
    Ok(())
}
