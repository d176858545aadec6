use log::warn;

use crate::{
    material::SharedMaterial,
    scene::{RenderTarget, SceneHost},
};

/// Every render target below `mask_node`, inactive ones included, in depth
/// first pre-order. The mask node's own target is skipped.
pub fn discover_targets<H: SceneHost>(host: &H, mask_node: H::Node) -> Vec<RenderTarget> {
    let mut targets = Vec::new();
    let mut pending = vec![mask_node];

    while let Some(node) = pending.pop() {
        if node != mask_node {
            if let Some(target) = host.render_target(node) {
                targets.push(target);
            }
        }
        pending.extend(host.children(node).into_iter().rev());
    }

    targets
}

/// Binds `material` to every target, or to none of them: when the host
/// refuses one target the ones already bound get their default back.
pub fn bind_material<H: SceneHost>(
    host: &mut H,
    targets: &[RenderTarget],
    material: &SharedMaterial,
) -> anyhow::Result<()> {
    for (index, target) in targets.iter().enumerate() {
        if let Err(err) = host.set_material(*target, Some(material.clone())) {
            for bound in &targets[..index] {
                if let Err(unbind_err) = host.set_material(*bound, None) {
                    warn!("unable to unbind the mask material from {:?}: {:#}", bound, unbind_err);
                }
            }
            return Err(err);
        }
    }
    Ok(())
}
