// Host-side tests for ray casting against the model mesh.

use glam::{Vec3, Vec4};
use heart_core::*;

/// Square of half-size `h` in the plane z = `z`, facing +Z.
fn quad(h: f32, z: f32) -> ModelMesh {
    ModelMesh::new(
        vec![
            Vec3::new(-h, -h, z),
            Vec3::new(h, -h, z),
            Vec3::new(h, h, z),
            Vec3::new(-h, h, z),
        ],
        Vec::new(),
        vec![0, 1, 2, 0, 2, 3],
    )
}

fn neutral_pose() -> ScenePose {
    ScenePose {
        yaw: 0.0,
        pitch: 0.0,
        camera_z: 8.5,
        pulse: 1.0,
    }
}

#[test]
fn ray_triangle_hit_and_miss() {
    let (a, b, c) = (Vec3::ZERO, Vec3::X, Vec3::Y);
    let t = ray_triangle(Vec3::new(0.3, 0.3, 1.0), -Vec3::Z, a, b, c).unwrap();
    assert!((t - 1.0).abs() < 1e-6);
    assert!(ray_triangle(Vec3::new(0.7, 0.7, 1.0), -Vec3::Z, a, b, c).is_none());
    // parallel
    assert!(ray_triangle(Vec3::new(0.3, 0.3, 1.0), Vec3::X, a, b, c).is_none());
    // behind the origin
    assert!(ray_triangle(Vec3::new(0.3, 0.3, 1.0), Vec3::Z, a, b, c).is_none());
}

#[test]
fn center_click_hits_quad_at_origin() {
    let viewport = Viewport::new(800.0, 600.0);
    let hit = pick(&quad(2.0, 0.0), &neutral_pose(), viewport, 400.0, 300.0).unwrap();
    assert!(hit.local.length() < 1e-4, "{:?}", hit.local);
    assert!((hit.distance - 8.5).abs() < 1e-3);
}

#[test]
fn nearest_surface_wins() {
    let viewport = Viewport::new(800.0, 600.0);
    let mut mesh = quad(2.0, 0.0);
    mesh.append_transformed(&quad(2.0, 1.0), glam::Mat4::IDENTITY);
    let hit = pick(&mesh, &neutral_pose(), viewport, 400.0, 300.0).unwrap();
    assert!((hit.local.z - 1.0).abs() < 1e-4);
    assert!(hit.triangle_index >= 2);
}

#[test]
fn clicking_empty_space_misses() {
    let viewport = Viewport::new(800.0, 600.0);
    assert!(pick(&quad(0.5, 0.0), &neutral_pose(), viewport, 5.0, 5.0).is_none());
    assert!(pick(&ModelMesh::default(), &neutral_pose(), viewport, 400.0, 300.0).is_none());
}

#[test]
fn hit_is_reported_in_group_local_space() {
    let viewport = Viewport::new(800.0, 800.0);
    let pose = ScenePose {
        pulse: 1.25,
        ..neutral_pose()
    };
    let hit = pick(&quad(3.0, 0.0), &pose, viewport, 600.0, 400.0).unwrap();
    assert!(hit.local.z.abs() < 1e-4);
    assert!((hit.world.x - hit.local.x * 1.25).abs() < 1e-3);
    assert!(hit.local.x > 0.0);
    assert!(hit.local.y.abs() < 1e-4);
}

#[test]
fn rotated_group_maps_back_through_rotation() {
    let viewport = Viewport::new(800.0, 800.0);
    // quarter turn about Y: local +X now faces the camera
    let pose = ScenePose {
        yaw: -std::f32::consts::FRAC_PI_2,
        ..neutral_pose()
    };
    let wall = ModelMesh::new(
        vec![
            Vec3::new(1.0, -2.0, -2.0),
            Vec3::new(1.0, -2.0, 2.0),
            Vec3::new(1.0, 2.0, 2.0),
            Vec3::new(1.0, 2.0, -2.0),
        ],
        Vec::new(),
        vec![0, 1, 2, 0, 2, 3],
    );
    let hit = pick(&wall, &pose, viewport, 400.0, 400.0).unwrap();
    assert!((hit.local.x - 1.0).abs() < 1e-4);
    assert!(hit.local.z.abs() < 1e-3);
    assert!((hit.world.z - 1.0).abs() < 1e-3);
}

#[test]
fn coordinate_formatting() {
    assert_eq!(format_coord(Vec3::new(1.0, -0.5, 0.25), 3), "[1.000, -0.500, 0.250]");
    assert_eq!(format_coord(Vec3::new(1.234, 0.0, -2.0), 2), "[1.23, 0.00, -2.00]");
}

#[test]
fn appended_meshes_keep_colors_and_bounds() {
    let mut mesh = ModelMesh::default();
    mesh.append_transformed(
        &quad(1.0, 0.0).with_color(Vec4::new(1.0, 0.0, 0.0, 1.0)),
        glam::Mat4::from_translation(Vec3::new(0.0, 0.0, 2.0)),
    );
    assert_eq!(mesh.colors.len(), mesh.positions.len());
    assert_eq!(mesh.colors[0], Vec4::new(1.0, 0.0, 0.0, 1.0));
    let b = mesh.bounds().unwrap();
    assert_eq!(b.min.z, 2.0);
    assert_eq!(b.center(), Vec3::new(0.0, 0.0, 2.0));
}

#[test]
fn appending_grows_existing_bounds() {
    let mut mesh = quad(1.0, 0.0);
    mesh.append_transformed(
        &quad(0.5, 0.0),
        glam::Mat4::from_translation(Vec3::new(3.0, 0.0, -1.0)),
    );
    let b = mesh.bounds().unwrap();
    assert_eq!(b.min, Vec3::new(-1.0, -1.0, -1.0));
    assert_eq!(b.max, Vec3::new(3.5, 1.0, 0.0));

    // nothing appended, nothing changes
    mesh.append_transformed(&ModelMesh::default(), glam::Mat4::IDENTITY);
    assert_eq!(mesh.bounds(), Some(b));
}
