//! View capabilities for outline nodes.

use std::fmt;

/// Indicator image shown next to an outline node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Open,
    Closed,
    HighlightedOpen,
    HighlightedClosed,
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::HighlightedOpen => "open*",
            Self::HighlightedClosed => "closed*",
        })
    }
}

/// What the toggle controller may do to a node's on-screen representation.
pub trait NodeView {
    /// Show the node's children.
    fn show(&mut self);
    /// Hide the node's children.
    fn hide(&mut self);
    fn set_icon(&mut self, icon: Icon);
}

/// Looks up views by 1-based node index.
///
/// The registry only resolves views it was given; a node whose view is not
/// (yet) available resolves to `None`.
pub trait NodeRegistry {
    type View: NodeView;

    fn resolve(&mut self, index: usize) -> Option<&mut Self::View>;
}

/// A view that records what it was told, for hosts without a real UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorView {
    pub children_visible: bool,
    pub icon: Icon,
}

impl Default for IndicatorView {
    fn default() -> Self {
        Self {
            children_visible: false,
            icon: Icon::Closed,
        }
    }
}

impl NodeView for IndicatorView {
    fn show(&mut self) {
        self.children_visible = true;
    }

    fn hide(&mut self) {
        self.children_visible = false;
    }

    fn set_icon(&mut self, icon: Icon) {
        self.icon = icon;
    }
}

/// Registry over a dense vector of views; slot 0 is node 1.
#[derive(Debug, Clone, Default)]
pub struct VecRegistry<V> {
    views: Vec<Option<V>>,
}

impl<V> VecRegistry<V> {
    pub fn new() -> Self {
        Self { views: Vec::new() }
    }

    /// Registers the view for a 1-based node, replacing any previous one.
    pub fn register(&mut self, index: usize, view: V) {
        let Some(slot) = index.checked_sub(1) else {
            return;
        };
        if self.views.len() <= slot {
            self.views.resize_with(slot + 1, || None);
        }
        self.views[slot] = Some(view);
    }

    pub fn get(&self, index: usize) -> Option<&V> {
        index
            .checked_sub(1)
            .and_then(|slot| self.views.get(slot))
            .and_then(Option::as_ref)
    }
}

impl<V: Default> VecRegistry<V> {
    /// A registry with a default view for every node `1..=count`.
    pub fn with_defaults(count: usize) -> Self {
        Self {
            views: (0..count).map(|_| Some(V::default())).collect(),
        }
    }
}

impl<V: NodeView> NodeRegistry for VecRegistry<V> {
    type View = V;

    fn resolve(&mut self, index: usize) -> Option<&mut V> {
        index
            .checked_sub(1)
            .and_then(|slot| self.views.get_mut(slot))
            .and_then(Option::as_mut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_register_and_resolve() {
        let mut registry = VecRegistry::new();
        registry.register(3, IndicatorView::default());

        check!(registry.resolve(1).is_none());
        check!(registry.resolve(3).is_some());
        check!(registry.resolve(0).is_none());
        check!(registry.resolve(4).is_none());
    }

    #[test]
    fn test_index_zero_is_never_registered() {
        let mut registry = VecRegistry::new();
        registry.register(0, IndicatorView::default());
        check!(registry.get(0).is_none());
        check!(registry.get(1).is_none());
    }

    #[test]
    fn test_indicator_view_records_calls() {
        let mut view = IndicatorView::default();
        view.show();
        view.set_icon(Icon::HighlightedOpen);
        check!(view == IndicatorView { children_visible: true, icon: Icon::HighlightedOpen });
        view.hide();
        check!(!view.children_visible);
    }
}
