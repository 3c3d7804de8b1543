//! Registration hook tying factory products to host-side menu creation.

use vim_cmd::Executor;

use crate::tree::{MenuTree, NodeId};

/// Capability of factory products that carry a menu node.
///
/// A product without a menu implements this by returning `None`; the hook
/// then leaves the host untouched.
pub trait HasMenu {
    /// The tree and node to register, when this product carries one.
    fn menu(&self) -> Option<(&MenuTree, NodeId)>;
}

/// Run `factory`, then register its product's menu node with the host.
///
/// This is the sole entry point that triggers host-side menu construction.
/// The wrapper is transparent: the product is returned unchanged, and the
/// node is created exactly once, right after the factory completes. A host
/// failure during creation surfaces as a failure of the factory call itself;
/// commands already issued stay in effect.
pub fn register_menu<P, F>(factory: F, vim: &mut dyn Executor) -> vim_cmd::Result<P>
where
    P: HasMenu,
    F: FnOnce() -> P,
{
    let product = factory();
    if let Some((tree, id)) = product.menu() {
        tree.create(id, vim)?;
    }
    Ok(product)
}
