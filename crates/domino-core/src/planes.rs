//! Bookkeeping from tracking anchors to the host's plane handles.

use fnv::FnvHashMap;

use crate::host::SceneHost;
use crate::state::{Anchor, AnchorId};

pub struct PlaneRegistry<P> {
    planes: FnvHashMap<AnchorId, P>,
}

impl<P> Default for PlaneRegistry<P> {
    fn default() -> Self {
        Self {
            planes: FnvHashMap::default(),
        }
    }
}

impl<P> PlaneRegistry<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &AnchorId) -> Option<&P> {
        self.planes.get(id)
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AnchorId, &P)> {
        self.planes.iter()
    }

    /// Create a host plane for a newly detected plane anchor. Returns false
    /// for anchors that are not planes.
    pub fn on_plane_added<H: SceneHost<Plane = P>>(&mut self, host: &mut H, anchor: &Anchor) -> bool {
        let Some(geometry) = anchor.plane_geometry() else {
            return false;
        };
        // A repeated add for a known anchor only refreshes its geometry.
        if let Some(existing) = self.planes.get(&anchor.id) {
            host.update_plane(existing, &geometry);
            return true;
        }
        let plane = host.add_plane(&geometry);
        log::info!(
            "[plane] added {} extent {:.2} x {:.2}",
            anchor.id,
            geometry.extent.x,
            geometry.extent.y
        );
        self.planes.insert(anchor.id.clone(), plane);
        true
    }

    /// Resize and reposition the plane tracked for `anchor`. Unknown anchors
    /// and non-plane anchors are ignored.
    pub fn on_plane_updated<H: SceneHost<Plane = P>>(&mut self, host: &mut H, anchor: &Anchor) -> bool {
        let Some(geometry) = anchor.plane_geometry() else {
            return false;
        };
        let Some(plane) = self.planes.get(&anchor.id) else {
            return false;
        };
        host.update_plane(plane, &geometry);
        log::debug!(
            "[plane] updated {} extent {:.2} x {:.2}",
            anchor.id,
            geometry.extent.x,
            geometry.extent.y
        );
        true
    }

    pub fn on_plane_removed<H: SceneHost<Plane = P>>(&mut self, host: &mut H, id: &AnchorId) -> bool {
        match self.planes.remove(id) {
            Some(plane) => {
                host.remove_plane(plane);
                log::info!("[plane] removed {}", id);
                true
            }
            None => false,
        }
    }
}
