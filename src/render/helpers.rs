use super::pipeline::DEPTH_FORMAT;
use glam::Vec3;

pub fn create_depth_texture(
    device: &wgpu::Device,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth_tex"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = tex.create_view(&wgpu::TextureViewDescriptor::default());
    (tex, view)
}

#[inline]
fn srgb_channel_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB hex bytes to a linear color.
#[inline]
pub fn srgb_to_linear(rgb: [u8; 3]) -> [f32; 3] {
    rgb.map(srgb_channel_to_linear)
}

/// Packs a `(color, intensity, position)` light into direction and color
/// slots. Lights aim at the origin, so the direction toward the light is the
/// normalized position.
pub fn pack_light(light: ([u8; 3], f32, Vec3)) -> ([f32; 4], [f32; 4]) {
    let (rgb, intensity, position) = light;
    let dir = position.normalize_or_zero();
    let [r, g, b] = srgb_to_linear(rgb);
    ([dir.x, dir.y, dir.z, intensity], [r, g, b, 1.0])
}
