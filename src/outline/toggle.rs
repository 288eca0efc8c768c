//! Click and hover handling for outline nodes.

use super::state::Flag;
use super::storage::StorageAdapter;
use super::store::OutlineStore;
use super::view::{Icon, NodeRegistry, NodeView};
use crate::error::OutlineError;
use crate::outline::state::OutlineState;

/// Flips outline nodes and keeps their views in sync with the state.
///
/// Views are resolved lazily: node elements may not exist when the outline is
/// loaded, so the first hover or click performs one pass over the registry
/// that brings every resolvable view in line with the loaded state.
#[derive(Debug)]
pub struct ToggleController<S, R> {
    store: OutlineStore<S>,
    registry: R,
    images_initialized: bool,
}

impl<S, R> ToggleController<S, R>
where
    S: StorageAdapter,
    R: NodeRegistry,
{
    pub fn new(store: OutlineStore<S>, registry: R) -> Self {
        Self {
            store,
            registry,
            images_initialized: false,
        }
    }

    /// Flips one node, updates its view, and persists the full state.
    ///
    /// Returns the node's new flag.
    pub fn toggle(&mut self, index: usize) -> Result<Flag, OutlineError> {
        let flag = self
            .store
            .state_mut()
            .flip(index)
            .ok_or_else(|| self.out_of_range(index))?;

        // The first pass already syncs this node to its flipped flag
        self.ensure_images();
        if let Some(view) = self.registry.resolve(index) {
            apply_flag(view, flag);
        }
        self.store.persist();

        tracing::debug!("Outline node {} is now {}", index, flag);
        Ok(flag)
    }

    /// Highlights a node's indicator. No state change, no persistence.
    pub fn hover_enter(&mut self, index: usize) -> Result<Icon, OutlineError> {
        self.set_hover_icon(index, true)
    }

    /// Restores a node's plain indicator. No state change, no persistence.
    pub fn hover_leave(&mut self, index: usize) -> Result<Icon, OutlineError> {
        self.set_hover_icon(index, false)
    }

    pub fn state(&self) -> &OutlineState {
        self.store.state()
    }

    pub fn store(&self) -> &OutlineStore<S> {
        &self.store
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn images_initialized(&self) -> bool {
        self.images_initialized
    }

    fn set_hover_icon(&mut self, index: usize, highlighted: bool) -> Result<Icon, OutlineError> {
        let flag = self
            .store
            .state()
            .flag(index)
            .ok_or_else(|| self.out_of_range(index))?;
        self.ensure_images();

        let icon = icon_for(flag, highlighted);
        if let Some(view) = self.registry.resolve(index) {
            view.set_icon(icon);
        }
        Ok(icon)
    }

    /// First-interaction pass over the registry.
    fn ensure_images(&mut self) {
        if self.images_initialized {
            return;
        }

        let mut resolved = 0usize;
        for (index, flag) in self.store.state().iter() {
            if let Some(view) = self.registry.resolve(index) {
                apply_flag(view, flag);
                resolved += 1;
            }
        }

        tracing::debug!(
            "Resolved {} of {} outline node views",
            resolved,
            self.store.state().section_count()
        );
        self.images_initialized = true;
    }

    fn out_of_range(&self, index: usize) -> OutlineError {
        OutlineError::IndexOutOfRange {
            index,
            section_count: self.store.state().section_count(),
        }
    }
}

fn icon_for(flag: Flag, highlighted: bool) -> Icon {
    match (flag, highlighted) {
        (Flag::Expanded, false) => Icon::Open,
        (Flag::Collapsed, false) => Icon::Closed,
        (Flag::Expanded, true) => Icon::HighlightedOpen,
        (Flag::Collapsed, true) => Icon::HighlightedClosed,
    }
}

fn apply_flag<V: NodeView>(view: &mut V, flag: Flag) {
    match flag {
        Flag::Expanded => view.show(),
        Flag::Collapsed => view.hide(),
    }
    view.set_icon(icon_for(flag, false));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::state::save;
    use crate::outline::storage::MemoryStorage;
    use crate::outline::view::{IndicatorView, VecRegistry};
    use assert2::{check, let_assert};
    use rstest::{fixture, rstest};

    type Controller = ToggleController<MemoryStorage, VecRegistry<IndicatorView>>;

    #[fixture]
    fn controller() -> Controller {
        let store = OutlineStore::open(MemoryStorage::new(), "open", 5);
        ToggleController::new(store, VecRegistry::with_defaults(5))
    }

    fn view(controller: &Controller, index: usize) -> IndicatorView {
        *controller.registry().get(index).expect("registered view")
    }

    #[rstest]
    fn test_toggle_expands_collapsed_node(mut controller: Controller) {
        let_assert!(Ok(flag) = controller.toggle(3));
        check!(flag == Flag::Expanded);
        check!(save(controller.state()) == "_TFTFF");
        check!(view(&controller, 3) == IndicatorView { children_visible: true, icon: Icon::Open });
    }

    #[rstest]
    fn test_toggle_collapses_expanded_node(mut controller: Controller) {
        let_assert!(Ok(flag) = controller.toggle(1));
        check!(flag == Flag::Collapsed);
        check!(view(&controller, 1) == IndicatorView { children_visible: false, icon: Icon::Closed });
    }

    #[rstest]
    fn test_toggle_persists_every_time(mut controller: Controller) {
        controller.toggle(3).unwrap();
        check!(controller.store().storage().get("open").as_deref() == Some("_TFTFF"));
        controller.toggle(3).unwrap();
        check!(controller.store().storage().get("open").as_deref() == Some("_TFFFF"));
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    fn test_toggle_out_of_range(mut controller: Controller, #[case] index: usize) {
        let_assert!(Err(err) = controller.toggle(index));
        check!(err == OutlineError::IndexOutOfRange { index, section_count: 5 });
        check!(save(controller.state()) == "_TFFFF");
        check!(controller.store().storage().get("open").is_none());
        check!(!controller.images_initialized());
    }

    #[rstest]
    fn test_first_interaction_syncs_all_views(mut controller: Controller) {
        check!(!controller.images_initialized());
        controller.hover_enter(4).unwrap();
        check!(controller.images_initialized());

        check!(view(&controller, 1) == IndicatorView { children_visible: true, icon: Icon::Open });
        check!(view(&controller, 2) == IndicatorView { children_visible: false, icon: Icon::Closed });
        check!(view(&controller, 4).icon == Icon::HighlightedClosed);
    }

    #[rstest]
    fn test_first_toggle_syncs_every_view(mut controller: Controller) {
        check!(controller.toggle(2) == Ok(Flag::Expanded));
        check!(controller.images_initialized());
        check!(view(&controller, 1) == IndicatorView { children_visible: true, icon: Icon::Open });
        check!(view(&controller, 2) == IndicatorView { children_visible: true, icon: Icon::Open });
        check!(view(&controller, 5) == IndicatorView { children_visible: false, icon: Icon::Closed });
    }

    #[rstest]
    fn test_hover_does_not_mutate_or_persist(mut controller: Controller) {
        check!(controller.hover_enter(1) == Ok(Icon::HighlightedOpen));
        check!(controller.hover_leave(1) == Ok(Icon::Open));
        check!(controller.hover_enter(2) == Ok(Icon::HighlightedClosed));
        check!(controller.hover_leave(2) == Ok(Icon::Closed));

        check!(save(controller.state()) == "_TFFFF");
        check!(controller.store().storage().get("open").is_none());
    }

    #[test]
    fn test_unresolvable_views_are_skipped() {
        let store = OutlineStore::open(MemoryStorage::new(), "open", 3);
        let mut registry = VecRegistry::new();
        registry.register(2, IndicatorView::default());
        let mut controller = ToggleController::new(store, registry);

        check!(controller.toggle(3) == Ok(Flag::Expanded));
        check!(save(controller.state()) == "_TFT");
        check!(controller.registry().get(3).is_none());
        check!(controller.registry().get(2).map(|v| v.icon) == Some(Icon::Closed));
    }
}
