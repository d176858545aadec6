use crate::{builder_field, builder_field_into, math::projections::ClipSpace};

pub const DEFAULT_SHADER: &str = "Hidden/UI/AlphaMask";
pub const DEFAULT_TEXTURE_PROPERTY: &str = "_MaskTex";
pub const DEFAULT_MATRIX_PROPERTY: &str = "_MaskMatrix";

/// Fixed for the lifetime of an [`AlphaMask`](crate::AlphaMask).
#[derive(Debug, Clone, PartialEq)]
pub struct MaskSettings {
    /// Shader the shared material is created with.
    pub shader: String,

    /// Uniform receiving the mask texture.
    pub texture_property: String,

    /// Uniform receiving the mask matrix.
    pub matrix_property: String,

    /// Depth convention of the graphics API the material is rendered with.
    pub clip_space: ClipSpace,
}

impl Default for MaskSettings {
    fn default() -> Self {
        Self {
            shader: DEFAULT_SHADER.to_owned(),
            texture_property: DEFAULT_TEXTURE_PROPERTY.to_owned(),
            matrix_property: DEFAULT_MATRIX_PROPERTY.to_owned(),
            clip_space: ClipSpace::default(),
        }
    }
}

impl MaskSettings {
    builder_field_into!(shader, String);
    builder_field_into!(texture_property, String);
    builder_field_into!(matrix_property, String);
    builder_field!(clip_space, ClipSpace);
}
