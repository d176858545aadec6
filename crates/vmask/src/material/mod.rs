use ::std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{mask::MaskSettings, scene::TextureHandle, Mat4};

/// One material instance shared by every masked target. The frame pipeline
/// is single threaded: the mask writes it during update and the renderer
/// reads it afterwards.
pub type SharedMaterial = Rc<RefCell<MaskMaterial>>;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MaskUniforms {
    pub mask_matrix: [[f32; 4]; 4],
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Property {
    Texture(TextureHandle),
    Matrix(Mat4),
}

#[derive(Debug, Clone)]
pub struct MaskMaterial {
    shader: String,
    texture_property: String,
    matrix_property: String,
    properties: HashMap<String, Property>,
    revision: u64,
}

impl MaskMaterial {
    pub fn new(settings: &MaskSettings) -> Self {
        Self {
            shader: settings.shader.clone(),
            texture_property: settings.texture_property.clone(),
            matrix_property: settings.matrix_property.clone(),
            properties: HashMap::new(),
            revision: 0,
        }
    }

    pub fn shared(settings: &MaskSettings) -> SharedMaterial {
        Rc::new(RefCell::new(Self::new(settings)))
    }

    pub fn shader(&self) -> &str {
        &self.shader
    }

    /// Number of times the mask uniforms have been written.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Writes the texture and the matrix together so readers never see one
    /// without the other.
    pub fn set_mask(&mut self, texture: TextureHandle, matrix: Mat4) {
        self.properties.insert(self.texture_property.clone(), Property::Texture(texture));
        self.properties.insert(self.matrix_property.clone(), Property::Matrix(matrix));
        self.revision += 1;
    }

    pub fn texture(&self, name: &str) -> Option<TextureHandle> {
        match self.properties.get(name) {
            Some(Property::Texture(texture)) => Some(*texture),
            _ => None,
        }
    }

    pub fn matrix(&self, name: &str) -> Option<Mat4> {
        match self.properties.get(name) {
            Some(Property::Matrix(matrix)) => Some(*matrix),
            _ => None,
        }
    }

    pub fn mask_texture(&self) -> Option<TextureHandle> {
        self.texture(&self.texture_property)
    }

    pub fn mask_matrix(&self) -> Option<Mat4> {
        self.matrix(&self.matrix_property)
    }

    /// Column major uniform block, ready for upload. Identity until the
    /// first write.
    pub fn uniforms(&self) -> MaskUniforms {
        MaskUniforms {
            mask_matrix: self.mask_matrix().unwrap_or_else(Mat4::identity).into(),
        }
    }
}
