use ::std::{fmt::Debug, hash::Hash};

use log::{debug, trace, warn};

use crate::{
    errors::MaskError,
    mask::{
        bind_material, compute_mask_matrix, compute_viewport_rect, discover_targets,
        MaskSettings,
    },
    material::{MaskMaterial, SharedMaterial},
    scene::{Canvas, MaskImage, RenderMode, RenderTarget, SceneHost},
    Mat4,
};

/// What a successful validity check found.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MaskContext {
    pub canvas: Canvas,
    pub mask_image: MaskImage,
}

/// Applies the mask image of one ui node to every image below it.
///
/// Call [`AlphaMask::update`] once per frame. The root canvas and the target
/// list are resolved lazily and then cached until [`AlphaMask::reset`].
pub struct AlphaMask<N> {
    node: N,
    settings: MaskSettings,
    material: SharedMaterial,
    root_canvas: Option<N>,
    targets: Vec<RenderTarget>,
    destroyed: bool,
}

impl<N> AlphaMask<N>
where
    N: Copy + Eq + Hash + Debug,
{
    pub fn new(node: N, settings: MaskSettings) -> Self {
        let material = MaskMaterial::shared(&settings);
        Self {
            node,
            settings,
            material,
            root_canvas: None,
            targets: Vec::new(),
            destroyed: false,
        }
    }

    pub fn node(&self) -> N {
        self.node
    }

    pub fn settings(&self) -> &MaskSettings {
        &self.settings
    }

    pub fn material(&self) -> &SharedMaterial {
        &self.material
    }

    pub fn targets(&self) -> &[RenderTarget] {
        &self.targets
    }

    pub fn root_canvas(&self) -> Option<N> {
        self.root_canvas
    }

    pub fn is_valid<H>(&mut self, host: &H) -> bool
    where
        H: SceneHost<Node = N>,
    {
        self.check(host).is_ok()
    }

    /// The validity gate. Nothing but the root canvas cache is touched.
    pub fn check<H>(&mut self, host: &H) -> Result<MaskContext, MaskError>
    where
        H: SceneHost<Node = N>,
    {
        let canvas = self.resolve_root_canvas(host)?;
        if canvas.render_mode == RenderMode::ScreenSpaceOverlay {
            return Err(MaskError::OverlayRenderMode);
        }
        let mask_image = host.mask_image(self.node).ok_or(MaskError::MissingMaskImage)?;
        Ok(MaskContext { canvas, mask_image })
    }

    /// Runs one tick and returns the matrix written to the material.
    ///
    /// Any error leaves the material exactly as the last successful tick
    /// left it. Callers that only care about the side effect can ignore it.
    pub fn update<H>(&mut self, host: &mut H) -> Result<Mat4, MaskError>
    where
        H: SceneHost<Node = N>,
    {
        if self.destroyed {
            return Err(MaskError::Destroyed);
        }

        let result = self.apply(host);
        if let Err(err) = &result {
            trace!("skipping alpha mask update for {:?}: {}", self.node, err);
        }
        result
    }

    /// Forgets the root canvas and the target list. They are resolved again
    /// on the next update, which rebinds the material to whatever is below
    /// the mask at that point. Targets that left the subtree keep the
    /// material until the host replaces it.
    pub fn reset(&mut self) {
        debug!("resetting alpha mask for {:?}", self.node);
        self.root_canvas = None;
        self.targets.clear();
    }

    /// Restores the default material on every bound target. Later updates
    /// fail with [`MaskError::Destroyed`].
    pub fn destroy<H>(&mut self, host: &mut H) -> Result<(), MaskError>
    where
        H: SceneHost<Node = N>,
    {
        debug!("destroying alpha mask for {:?}, unbinding {} targets", self.node, self.targets.len());
        self.destroyed = true;
        self.root_canvas = None;

        let mut first_error = None;
        for target in self.targets.drain(..) {
            if let Err(err) = host.set_material(target, None) {
                warn!("unable to unbind the mask material from {:?}: {:#}", target, err);
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }

        match first_error {
            Some(err) => Err(MaskError::MaterialBinding(err)),
            None => Ok(()),
        }
    }
}

impl<N> AlphaMask<N>
where
    N: Copy + Eq + Hash + Debug,
{
    fn apply<H>(&mut self, host: &mut H) -> Result<Mat4, MaskError>
    where
        H: SceneHost<Node = N>,
    {
        let context = self.check(host)?;

        if self.targets.is_empty() {
            let targets = discover_targets(&*host, self.node);
            bind_material(host, &targets, &self.material)?;
            debug!("alpha mask {:?} bound to {} targets", self.node, targets.len());
            self.targets = targets;
        }

        let camera = context.canvas.camera.ok_or(MaskError::MissingCamera)?;
        let rect_transform =
            host.rect_transform(self.node).ok_or(MaskError::MissingRectTransform)?;
        let rect = compute_viewport_rect(&rect_transform, &camera)?;
        if !rect.is_finite() {
            return Err(MaskError::NonFiniteMask);
        }
        if rect.width == 0.0 || rect.height == 0.0 {
            return Err(MaskError::EmptyMaskRect);
        }

        let matrix = compute_mask_matrix(&rect, &camera, self.settings.clip_space);
        if !matrix.iter().all(|value| value.is_finite()) {
            return Err(MaskError::NonFiniteMask);
        }
        self.material.borrow_mut().set_mask(context.mask_image.texture, matrix);
        Ok(matrix)
    }

    /// Outermost canvas on the mask node or its ancestors. The node is
    /// cached, the canvas itself is read fresh every call.
    fn resolve_root_canvas<H>(&mut self, host: &H) -> Result<Canvas, MaskError>
    where
        H: SceneHost<Node = N>,
    {
        if let Some(root) = self.root_canvas {
            if let Some(canvas) = host.canvas(root) {
                return Ok(canvas);
            }
            debug!("root canvas {:?} of alpha mask {:?} is gone", root, self.node);
            self.root_canvas = None;
        }

        let mut outermost = None;
        let mut current = Some(self.node);
        while let Some(node) = current {
            if let Some(canvas) = host.canvas(node) {
                outermost = Some((node, canvas));
            }
            current = host.parent(node);
        }

        let (root, canvas) = outermost.ok_or(MaskError::NoRootCanvas)?;
        debug!("alpha mask {:?} resolved root canvas {:?}", self.node, root);
        if canvas.render_mode == RenderMode::ScreenSpaceOverlay {
            warn!("alpha mask {:?} is under an overlay canvas and will not be applied", self.node);
        }
        self.root_canvas = Some(root);
        Ok(canvas)
    }
}
