use ::std::collections::HashMap;

use anyhow::bail;

use crate::{
    material::SharedMaterial,
    primitives::RectTransform,
    scene::{Canvas, MaskImage, RenderTarget, SceneHost},
};

#[derive(Default)]
struct TestNode {
    parent: Option<usize>,
    children: Vec<usize>,
    active: bool,
    canvas: Option<Canvas>,
    rect_transform: Option<RectTransform>,
    mask_image: Option<MaskImage>,
    render_target: Option<RenderTarget>,
}

/// In-memory ui tree standing in for the host.
#[derive(Default)]
pub(crate) struct TestScene {
    nodes: Vec<TestNode>,
    materials: HashMap<RenderTarget, SharedMaterial>,
    pub set_material_calls: usize,
    /// Binding (not unbinding) fails once this many bindings succeeded.
    pub fail_bindings_after: Option<usize>,
    successful_bindings: usize,
}

impl TestScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, parent: Option<usize>) -> usize {
        let id = self.nodes.len();
        self.nodes.push(TestNode { parent, active: true, ..TestNode::default() });
        if let Some(parent) = parent {
            self.nodes[parent].children.push(id);
        }
        id
    }

    /// A node carrying a drawable image.
    pub fn add_image(&mut self, parent: Option<usize>) -> usize {
        let id = self.add_node(parent);
        self.nodes[id].render_target = Some(RenderTarget::new(id as u32));
        id
    }

    pub fn set_active(&mut self, node: usize, active: bool) {
        self.nodes[node].active = active;
    }

    pub fn is_active(&self, node: usize) -> bool {
        self.nodes[node].active
    }

    pub fn set_canvas(&mut self, node: usize, canvas: Option<Canvas>) {
        self.nodes[node].canvas = canvas;
    }

    pub fn set_rect_transform(&mut self, node: usize, rect_transform: Option<RectTransform>) {
        self.nodes[node].rect_transform = rect_transform;
    }

    pub fn set_mask_image(&mut self, node: usize, mask_image: Option<MaskImage>) {
        self.nodes[node].mask_image = mask_image;
    }

    pub fn target_of(&self, node: usize) -> RenderTarget {
        self.nodes[node].render_target.expect("node has no render target")
    }

    pub fn material_of(&self, node: usize) -> Option<SharedMaterial> {
        self.nodes[node]
            .render_target
            .and_then(|target| self.materials.get(&target).cloned())
    }
}

impl SceneHost for TestScene {
    type Node = usize;

    fn parent(&self, node: usize) -> Option<usize> {
        self.nodes[node].parent
    }

    fn children(&self, node: usize) -> Vec<usize> {
        self.nodes[node].children.clone()
    }

    fn canvas(&self, node: usize) -> Option<Canvas> {
        self.nodes[node].canvas
    }

    fn rect_transform(&self, node: usize) -> Option<RectTransform> {
        self.nodes[node].rect_transform
    }

    fn mask_image(&self, node: usize) -> Option<MaskImage> {
        self.nodes[node].mask_image
    }

    fn render_target(&self, node: usize) -> Option<RenderTarget> {
        self.nodes[node].render_target
    }

    fn set_material(
        &mut self,
        target: RenderTarget,
        material: Option<SharedMaterial>,
    ) -> anyhow::Result<()> {
        self.set_material_calls += 1;
        match material {
            Some(material) => {
                if self.fail_bindings_after.is_some_and(|limit| self.successful_bindings >= limit) {
                    bail!("renderer for {:?} is gone", target);
                }
                self.successful_bindings += 1;
                self.materials.insert(target, material);
            }
            None => {
                self.materials.remove(&target);
            }
        }
        Ok(())
    }
}
