//! The seam between the mask and the retained mode ui tree hosting it.
//!
//! The host owns nodes, canvases, images and renderers. The mask only reads
//! snapshots through [`SceneHost`] and hands back a material to bind.

use ::std::{fmt::Debug, hash::Hash};

use crate::{
    camera::OrthographicCamera,
    material::SharedMaterial,
    primitives::RectTransform,
};

/// How a canvas is composited onto the screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderMode {
    /// Drawn on top of everything without a camera.
    ScreenSpaceOverlay,
    ScreenSpaceCamera,
    WorldSpace,
}

/// Snapshot of a canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Canvas {
    pub render_mode: RenderMode,
    pub camera: Option<OrthographicCamera>,
}

impl Canvas {
    pub fn overlay() -> Self {
        Self { render_mode: RenderMode::ScreenSpaceOverlay, camera: None }
    }

    pub fn with_camera(render_mode: RenderMode, camera: OrthographicCamera) -> Self {
        Self { render_mode, camera: Some(camera) }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TextureHandle(u32);

impl TextureHandle {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// The image carried by the mask node. The whole texture is used as the
/// mask.
///
/// The texture is expected to have fully transparent edge texels and a clamp
/// sampler; the mask does not check either.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MaskImage {
    pub texture: TextureHandle,
}

impl MaskImage {
    pub fn new(texture: TextureHandle) -> Self {
        Self { texture }
    }
}

/// Host handle to a drawable element whose material can be replaced.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RenderTarget(u32);

impl RenderTarget {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

pub trait SceneHost {
    type Node: Copy + Eq + Hash + Debug;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Direct children in draw order, inactive ones included.
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    fn canvas(&self, node: Self::Node) -> Option<Canvas>;

    fn rect_transform(&self, node: Self::Node) -> Option<RectTransform>;

    fn mask_image(&self, node: Self::Node) -> Option<MaskImage>;

    fn render_target(&self, node: Self::Node) -> Option<RenderTarget>;

    /// Replaces the material of `target`. `None` restores the host default.
    fn set_material(
        &mut self,
        target: RenderTarget,
        material: Option<SharedMaterial>,
    ) -> anyhow::Result<()>;
}
