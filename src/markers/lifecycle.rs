//! Marker reconciliation
//!
//! Translates cluster groups into native widget markers and guarantees no
//! duplicate or orphaned markers accumulate across rebuilds.

use crate::markers::{MarkerSpec, RenderedKind, RenderedMarker};
use crate::spatial::clustering::ClusterGroup;
use crate::widget::{MapWidget, MarkerHandle};

/// Owns every marker created from cluster groups
///
/// A rebuild removes the full previous marker set before creating any new
/// marker, so the old and new sets are never simultaneously on the widget.
#[derive(Default)]
pub struct MarkerLifecycle {
    rendered: Vec<RenderedMarker>,
}

impl MarkerLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the rendered marker set with one marker per group
    ///
    /// Returns the number of markers created. Widget failures during
    /// removal or creation are logged and swallowed; a marker that fails
    /// to create is simply not shown.
    pub fn rebuild(
        &mut self,
        widget: &mut dyn MapWidget,
        groups: &[ClusterGroup],
        selection: Option<&str>,
    ) -> usize {
        self.clear(widget);

        for group in groups {
            let (spec, kind) = if group.is_singleton() {
                let item = &group.members()[0];
                let selected = selection == Some(item.id.as_str());
                (
                    MarkerSpec::pin(item, selected),
                    RenderedKind::Item { item: item.clone() },
                )
            } else {
                (
                    MarkerSpec::cluster(group),
                    RenderedKind::Cluster {
                        bounds: group.bounds(),
                        count: group.count(),
                    },
                )
            };

            match widget.add_marker(&spec) {
                Ok(handle) => self.rendered.push(RenderedMarker { handle, kind }),
                Err(e) => log::warn!("marker creation failed, skipping: {e}"),
            }
        }

        self.rendered.len()
    }

    /// Removes every rendered marker from the widget
    ///
    /// Destruction never crashes the caller: widget errors (e.g. an
    /// already-detached element) are logged and ignored.
    pub fn clear(&mut self, widget: &mut dyn MapWidget) {
        for marker in self.rendered.drain(..) {
            if let Err(e) = widget.remove_marker(marker.handle) {
                log::debug!("ignoring marker removal failure: {e}");
            }
        }
    }

    /// Looks up the rendered marker behind a widget handle
    pub fn find(&self, handle: MarkerHandle) -> Option<&RenderedMarker> {
        self.rendered.iter().find(|m| m.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.rendered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }
}
