pub use kurbo::{Size, Vec2};

/// Index of a node inside a [`crate::scene::graph::SceneGraph`] arena.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Arena slot of this node.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque white, the default node tint.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from RGBA components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from loosely typed integer components, clamping into `0..=255`.
    pub fn from_ints(r: i64, g: i64, b: i64, a: i64) -> Self {
        fn ch(v: i64) -> u8 {
            v.clamp(0, 255) as u8
        }
        Self::rgba(ch(r), ch(g), ch(b), ch(a))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Node orientation.
///
/// Uniform rotation is the common case; a full euler orientation is only produced when the
/// authored X/Y skew angles differ.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    /// Rotation around the view axis, in degrees.
    Angle(f64),
    /// Euler angles in degrees (x, y, z).
    Euler([f64; 3]),
}

impl Default for Rotation {
    fn default() -> Self {
        Self::Angle(0.0)
    }
}

/// Local transform of a target node.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform {
    /// Position relative to the parent's anchor point.
    pub position: Vec2,
    /// Normalized anchor point.
    pub anchor: Vec2,
    /// Scale, with flips folded in as negative factors.
    pub scale: Vec2,
    /// Orientation.
    pub rotation: Rotation,
    /// Content size.
    pub size: Size,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            anchor: Vec2::new(0.5, 0.5),
            scale: Vec2::new(1.0, 1.0),
            rotation: Rotation::default(),
            size: Size::ZERO,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
