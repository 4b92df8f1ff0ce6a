use crate::assets::resolver::AssetResolver;
use crate::foundation::core::NodeId;
use crate::foundation::diag::Diagnostics;
use crate::foundation::error::ConvertResult;
use crate::scene::SceneGraph;

/// Collaborators a component initializer may touch.
pub struct InitCtx<'a> {
    pub resolver: &'a mut dyn AssetResolver,
    pub diag: &'a mut Diagnostics,
    /// Asset URL studio resource paths are relative to.
    pub root_url: &'a str,
}

/// Services the node graph builder needs from whoever drives the conversion.
pub trait BuildHost {
    fn init_ctx(&mut self) -> InitCtx<'_>;

    /// Convert the document at `source_path` (relative to the resource root) if necessary and
    /// instantiate its prefab as a detached subtree of `into`.
    ///
    /// `Ok(None)` means the nested document produced no prefab.
    fn instantiate_nested(
        &mut self,
        source_path: &str,
        into: &mut SceneGraph,
    ) -> ConvertResult<Option<NodeId>>;
}
