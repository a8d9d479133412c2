//! Voxel drawing helpers over a [`FrameBuffer`].
//!
//! Coordinates are `(x, y, z)` with each axis in `[0, edge)`, where the edge
//! length equals the layer count and `z` selects the layer. The channel of a
//! grid position is `x * edge + y`. Out-of-range coordinates, intensities and
//! spectrum values make the affected voxel a silent no-op, so shapes that
//! poke past the cube walls draw their in-range portion and drop the rest.
//!
//! Everything here goes through the buffer's public get/set contract. The
//! RGB helpers rely on the buffer's channel layout and do nothing on a mono
//! buffer; [`set_voxel`] and [`get_voxel`] are the mono pair.

use core::mem;

use crate::color::{GsRgb, SPECTRUM_COLORS, spectrum_from_rgb, spectrum_rgb};
use crate::frame::FrameBuffer;

/// Cube coordinate `(x, y, z)`.
pub type Voxel = (i32, i32, i32);

/// Corner of the cube that oriented shapes grow away from.
///
/// Left corners mirror the x axis, back corners mirror y, top corners
/// mirror z; the shape then extends toward the opposite corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    ForwardBottomRight,
    ForwardBottomLeft,
    BackBottomLeft,
    BackBottomRight,
    ForwardTopRight,
    ForwardTopLeft,
    BackTopLeft,
    BackTopRight,
}

impl Orientation {
    const fn mirrors_x(self) -> bool {
        matches!(
            self,
            Self::ForwardBottomLeft
                | Self::BackBottomLeft
                | Self::ForwardTopLeft
                | Self::BackTopLeft
        )
    }

    const fn mirrors_y(self) -> bool {
        matches!(
            self,
            Self::BackBottomLeft | Self::BackBottomRight | Self::BackTopLeft | Self::BackTopRight
        )
    }

    const fn mirrors_z(self) -> bool {
        matches!(
            self,
            Self::ForwardTopRight | Self::ForwardTopLeft | Self::BackTopLeft | Self::BackTopRight
        )
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn edge_of(layers: usize) -> i32 {
    layers as i32
}

const fn in_cube(edge: i32, x: i32, y: i32, z: i32) -> bool {
    x >= 0 && x < edge && y >= 0 && y < edge && z >= 0 && z < edge
}

// Callers range-check against the edge before converting.
#[allow(clippy::cast_sign_loss)]
const fn to_index(v: i32) -> usize {
    v as usize
}

const fn grid_channel(layers: usize, x: i32, y: i32) -> usize {
    to_index(x) * layers + to_index(y)
}

/// Set one voxel of a mono buffer.
pub fn set_voxel<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    x: i32,
    y: i32,
    z: i32,
    intensity: u16,
) {
    if !in_cube(edge_of(LAYERS), x, y, z) {
        return;
    }
    frame.set(grid_channel(LAYERS, x, y), to_index(z), intensity);
}

/// Read one voxel of a mono buffer, 0 when out of range.
pub fn get_voxel<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &FrameBuffer<LAYERS, LAYER_WORDS>,
    x: i32,
    y: i32,
    z: i32,
) -> u16 {
    if !in_cube(edge_of(LAYERS), x, y, z) {
        return 0;
    }
    frame.get(grid_channel(LAYERS, x, y), to_index(z))
}

/// Set one voxel to a color.
pub fn set_rgb_voxel<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    x: i32,
    y: i32,
    z: i32,
    color: GsRgb,
) {
    if !in_cube(edge_of(LAYERS), x, y, z) {
        return;
    }
    frame.set_rgb(grid_channel(LAYERS, x, y), to_index(z), color);
}

/// Read one voxel's color, off when out of range.
pub fn rgb_voxel<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &FrameBuffer<LAYERS, LAYER_WORDS>,
    x: i32,
    y: i32,
    z: i32,
) -> GsRgb {
    if !in_cube(edge_of(LAYERS), x, y, z) {
        return GsRgb::OFF;
    }
    frame.get_rgb(grid_channel(LAYERS, x, y), to_index(z))
}

/// Turn one voxel off.
pub fn clear_rgb_voxel<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    x: i32,
    y: i32,
    z: i32,
) {
    set_rgb_voxel(frame, x, y, z, GsRgb::OFF);
}

/// Set one voxel to a color-wheel position.
pub fn set_spectrum_voxel<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    x: i32,
    y: i32,
    z: i32,
    spectrum: u16,
) {
    if !in_cube(edge_of(LAYERS), x, y, z) {
        return;
    }
    frame.set_spectrum(grid_channel(LAYERS, x, y), to_index(z), spectrum);
}

/// Read one voxel back as a color-wheel position.
///
/// Lossy: a voxel with equal components (including off) reads as 0.
pub fn voxel_spectrum<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &FrameBuffer<LAYERS, LAYER_WORDS>,
    x: i32,
    y: i32,
    z: i32,
) -> u16 {
    let color = rgb_voxel(frame, x, y, z);
    spectrum_from_rgb(color.r, color.g, color.b)
}

/// Fill the whole cube with a color.
pub fn fill_rgb<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    color: GsRgb,
) {
    frame.set_all_rgb(color);
}

/// Fill the whole cube with a color-wheel position.
pub fn fill_spectrum<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    spectrum: u16,
) {
    if spectrum >= SPECTRUM_COLORS {
        return;
    }
    frame.set_all_rgb(spectrum_rgb(spectrum));
}

/// Fill one horizontal slice with a color-wheel position.
pub fn fill_layer_spectrum<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    z: i32,
    spectrum: u16,
) {
    if z < 0 || z >= edge_of(LAYERS) || spectrum >= SPECTRUM_COLORS {
        return;
    }
    frame.set_all_rgb_on_layer(to_index(z), spectrum_rgb(spectrum));
}

/// Fill the y/z plane at `x` with a color.
pub fn fill_plane_x<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    x: i32,
    color: GsRgb,
) {
    if x < 0 || x >= edge_of(LAYERS) {
        return;
    }
    let base = grid_channel(LAYERS, x, 0);
    for z in 0..LAYERS {
        for channel in base..base + LAYERS {
            frame.set_rgb(channel, z, color);
        }
    }
}

/// Fill the x/z plane at `y` with a color.
pub fn fill_plane_y<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    y: i32,
    color: GsRgb,
) {
    if y < 0 || y >= edge_of(LAYERS) {
        return;
    }
    let first = to_index(y);
    for z in 0..LAYERS {
        for channel in (first..frame.rgb_channels()).step_by(LAYERS) {
            frame.set_rgb(channel, z, color);
        }
    }
}

/// Fill the x/y plane at `z` with a color.
pub fn fill_plane_z<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    z: i32,
    color: GsRgb,
) {
    if z < 0 || z >= edge_of(LAYERS) {
        return;
    }
    let layer = to_index(z);
    for channel in 0..frame.rgb_channels() {
        frame.set_rgb(channel, layer, color);
    }
}

/// Turn the y/z plane at `x` off.
pub fn clear_plane_x<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    x: i32,
) {
    fill_plane_x(frame, x, GsRgb::OFF);
}

/// Turn the x/z plane at `y` off.
pub fn clear_plane_y<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    y: i32,
) {
    fill_plane_y(frame, y, GsRgb::OFF);
}

/// Turn the x/y plane at `z` off.
pub fn clear_plane_z<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    z: i32,
) {
    fill_plane_z(frame, z, GsRgb::OFF);
}

fn copy_voxel<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    from: (usize, usize, usize),
    to: (usize, usize, usize),
) {
    let src = from.0 * LAYERS + from.1;
    let dst = to.0 * LAYERS + to.1;
    if frame.layout().is_rgb() {
        let color = frame.get_rgb(src, from.2);
        frame.set_rgb(dst, to.2, color);
    } else {
        let value = frame.get(src, from.2);
        frame.set(dst, to.2, value);
    }
}

fn blank_voxel<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    at: (usize, usize, usize),
) {
    let channel = at.0 * LAYERS + at.1;
    if frame.layout().is_rgb() {
        frame.set_rgb(channel, at.2, GsRgb::OFF);
    } else {
        frame.set(channel, at.2, 0);
    }
}

/// Shift the cube contents one plane along x; the sign of `direction`
/// selects the way, 0 does nothing. The vacated plane goes dark.
pub fn shift_x<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    direction: i32,
) {
    if direction == 0 {
        return;
    }
    for z in 0..LAYERS {
        if direction > 0 {
            for x in (0..LAYERS).rev() {
                for y in 0..LAYERS {
                    if x == 0 {
                        blank_voxel(frame, (x, y, z));
                    } else {
                        copy_voxel(frame, (x - 1, y, z), (x, y, z));
                    }
                }
            }
        } else {
            for x in 0..LAYERS {
                for y in 0..LAYERS {
                    if x == LAYERS - 1 {
                        blank_voxel(frame, (x, y, z));
                    } else {
                        copy_voxel(frame, (x + 1, y, z), (x, y, z));
                    }
                }
            }
        }
    }
}

/// Shift the cube contents one plane along y.
pub fn shift_y<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    direction: i32,
) {
    if direction == 0 {
        return;
    }
    for z in 0..LAYERS {
        if direction > 0 {
            for x in 0..LAYERS {
                for y in (0..LAYERS).rev() {
                    if y == 0 {
                        blank_voxel(frame, (x, y, z));
                    } else {
                        copy_voxel(frame, (x, y - 1, z), (x, y, z));
                    }
                }
            }
        } else {
            for x in 0..LAYERS {
                for y in 0..LAYERS {
                    if y == LAYERS - 1 {
                        blank_voxel(frame, (x, y, z));
                    } else {
                        copy_voxel(frame, (x, y + 1, z), (x, y, z));
                    }
                }
            }
        }
    }
}

/// Shift the cube contents one layer along z.
pub fn shift_z<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    direction: i32,
) {
    if direction == 0 {
        return;
    }
    if direction > 0 {
        for z in (0..LAYERS).rev() {
            for x in 0..LAYERS {
                for y in 0..LAYERS {
                    if z == 0 {
                        blank_voxel(frame, (x, y, z));
                    } else {
                        copy_voxel(frame, (x, y, z - 1), (x, y, z));
                    }
                }
            }
        }
    } else {
        for z in 0..LAYERS {
            for x in 0..LAYERS {
                for y in 0..LAYERS {
                    if z == LAYERS - 1 {
                        blank_voxel(frame, (x, y, z));
                    } else {
                        copy_voxel(frame, (x, y, z + 1), (x, y, z));
                    }
                }
            }
        }
    }
}

/// Draw a straight line of voxels between two coordinates.
///
/// Steps along the dominant axis and interpolates the other two with
/// truncating float math, so diagonal lines stay one voxel thick.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn rgb_line<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    from: Voxel,
    to: Voxel,
    color: GsRgb,
) {
    let (mut x1, mut y1, mut z1) = from;
    let (mut x2, mut y2, mut z2) = to;
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let dz = (z2 - z1).abs();

    if dx >= dy && dx >= dz {
        if x1 > x2 {
            mem::swap(&mut x1, &mut x2);
            mem::swap(&mut y1, &mut y2);
            mem::swap(&mut z1, &mut z2);
        }
        // Coincident endpoints divide 0/0; the NaN step truncates to 0 and
        // the single voxel still lands.
        let step_y = (y2 - y1) as f32 / (x2 - x1) as f32;
        let step_z = (z2 - z1) as f32 / (x2 - x1) as f32;
        for x in x1..=x2 {
            let y = (step_y * (x - x1) as f32) as i32 + y1;
            let z = (step_z * (x - x1) as f32) as i32 + z1;
            set_rgb_voxel(frame, x, y, z, color);
        }
    } else if dy >= dx && dy >= dz {
        if y1 > y2 {
            mem::swap(&mut x1, &mut x2);
            mem::swap(&mut y1, &mut y2);
            mem::swap(&mut z1, &mut z2);
        }
        let step_x = (x2 - x1) as f32 / (y2 - y1) as f32;
        let step_z = (z2 - z1) as f32 / (y2 - y1) as f32;
        for y in y1..=y2 {
            let x = (step_x * (y - y1) as f32) as i32 + x1;
            let z = (step_z * (y - y1) as f32) as i32 + z1;
            set_rgb_voxel(frame, x, y, z, color);
        }
    } else {
        if z1 > z2 {
            mem::swap(&mut x1, &mut x2);
            mem::swap(&mut y1, &mut y2);
            mem::swap(&mut z1, &mut z2);
        }
        let step_x = (x2 - x1) as f32 / (z2 - z1) as f32;
        let step_y = (y2 - y1) as f32 / (z2 - z1) as f32;
        for z in z1..=z2 {
            let x = (step_x * (z - z1) as f32) as i32 + x1;
            let y = (step_y * (z - z1) as f32) as i32 + y1;
            set_rgb_voxel(frame, x, y, z, color);
        }
    }
}

fn oriented_cube_span(
    edge: i32,
    origin: Voxel,
    orientation: Orientation,
    size: i32,
) -> (Voxel, Voxel) {
    let (mut x, mut y, mut z) = origin;
    let x2 = if orientation.mirrors_x() {
        x = edge - 1 - x;
        x - size
    } else {
        x + size
    };
    let y2 = if orientation.mirrors_y() {
        y = edge - 1 - y;
        y - size
    } else {
        y + size
    };
    let z2 = if orientation.mirrors_z() {
        z = edge - 1 - z;
        z - size
    } else {
        z + size
    };
    ((x, y, z), (x2, y2, z2))
}

fn oriented_box_span(edge: i32, a: Voxel, b: Voxel, orientation: Orientation) -> (Voxel, Voxel) {
    let (mut x, mut y, mut z) = a;
    let (mut x2, mut y2, mut z2) = b;
    if orientation.mirrors_x() {
        x = edge - 1 - x;
        x2 = edge - 1 - x2;
    }
    if orientation.mirrors_y() {
        y = edge - 1 - y;
        y2 = edge - 1 - y2;
    }
    if orientation.mirrors_z() {
        z = edge - 1 - z;
        z2 = edge - 1 - z2;
    }
    ((x, y, z), (x2, y2, z2))
}

// The twelve edges of a rectangular span: bottom square, vertical edges,
// top square.
fn wire_frame<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    a: Voxel,
    b: Voxel,
    color: GsRgb,
) {
    let (x, y, z) = a;
    let (x2, y2, z2) = b;

    rgb_line(frame, (x, y, z), (x2, y, z), color);
    rgb_line(frame, (x, y2, z), (x2, y2, z), color);
    rgb_line(frame, (x, y, z), (x, y2, z), color);
    rgb_line(frame, (x2, y, z), (x2, y2, z), color);

    rgb_line(frame, (x, y, z), (x, y, z2), color);
    rgb_line(frame, (x2, y, z), (x2, y, z2), color);
    rgb_line(frame, (x2, y2, z), (x2, y2, z2), color);
    rgb_line(frame, (x, y2, z), (x, y2, z2), color);

    rgb_line(frame, (x, y, z2), (x2, y, z2), color);
    rgb_line(frame, (x, y2, z2), (x2, y2, z2), color);
    rgb_line(frame, (x, y, z2), (x, y2, z2), color);
    rgb_line(frame, (x2, y, z2), (x2, y2, z2), color);
}

fn solid_box<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    a: Voxel,
    b: Voxel,
    color: GsRgb,
) {
    let (mut x, mut y, mut z) = a;
    let (mut x2, mut y2, mut z2) = b;
    if x > x2 {
        mem::swap(&mut x, &mut x2);
    }
    if y > y2 {
        mem::swap(&mut y, &mut y2);
    }
    if z > z2 {
        mem::swap(&mut z, &mut z2);
    }
    for vz in z..=z2 {
        for vx in x..=x2 {
            for vy in y..=y2 {
                set_rgb_voxel(frame, vx, vy, vz, color);
            }
        }
    }
}

/// Draw a wireframe cube of edge length `size` growing from `origin`
/// away from the orientation corner.
pub fn cube_outline<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    origin: Voxel,
    orientation: Orientation,
    size: i32,
    color: GsRgb,
) {
    let (a, b) = oriented_cube_span(edge_of(LAYERS), origin, orientation, size);
    wire_frame(frame, a, b, color);
}

/// Draw a solid cube of edge length `size` growing from `origin` away
/// from the orientation corner.
pub fn cube_filled<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    origin: Voxel,
    orientation: Orientation,
    size: i32,
    color: GsRgb,
) {
    let (a, b) = oriented_cube_span(edge_of(LAYERS), origin, orientation, size);
    solid_box(frame, a, b, color);
}

/// Draw a wireframe box between two corners, both interpreted from the
/// orientation corner.
pub fn box_outline<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    a: Voxel,
    b: Voxel,
    orientation: Orientation,
    color: GsRgb,
) {
    let (a, b) = oriented_box_span(edge_of(LAYERS), a, b, orientation);
    wire_frame(frame, a, b, color);
}

/// Draw a solid box between two corners, both interpreted from the
/// orientation corner.
pub fn box_filled<const LAYERS: usize, const LAYER_WORDS: usize>(
    frame: &mut FrameBuffer<LAYERS, LAYER_WORDS>,
    a: Voxel,
    b: Voxel,
    orientation: Orientation,
    color: GsRgb,
) {
    let (a, b) = oriented_box_span(edge_of(LAYERS), a, b, orientation);
    solid_box(frame, a, b, color);
}
