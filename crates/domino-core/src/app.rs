//! The demo's view controller, as an explicit value the host drives.

use glam::Vec2;

use crate::host::Host;
use crate::placement::{Placement, PlacementController, PlacementParams};
use crate::planes::PlaneRegistry;
use crate::scene::{SceneSettings, SessionConfig};
use crate::state::{Anchor, AnchorId};

pub struct DominoApp<H: Host> {
    controller: PlacementController<H::Body>,
    planes: PlaneRegistry<H::Plane>,
    settings: SceneSettings,
    detection_frozen: bool,
}

impl<H: Host> DominoApp<H> {
    /// Build the app and apply the one-time scene setup to `host`.
    pub fn new(host: &mut H, params: PlacementParams, settings: SceneSettings, seed: u64) -> Self {
        host.configure_scene(&settings);
        Self {
            controller: PlacementController::new(params, seed),
            planes: PlaneRegistry::new(),
            settings,
            detection_frozen: false,
        }
    }

    pub fn controller(&self) -> &PlacementController<H::Body> {
        &self.controller
    }

    pub fn planes(&self) -> &PlaneRegistry<H::Plane> {
        &self.planes
    }

    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    pub fn detection_frozen(&self) -> bool {
        self.detection_frozen
    }

    pub fn view_will_appear(&mut self, host: &mut H) {
        host.run_session(&SessionConfig::world_tracking());
        self.detection_frozen = false;
        log::info!("[session] running with horizontal plane detection");
    }

    pub fn view_will_disappear(&mut self, host: &mut H) {
        host.pause_session();
        log::info!("[session] paused");
    }

    pub fn on_anchor_added(&mut self, host: &mut H, anchor: &Anchor) {
        self.planes.on_plane_added(host, anchor);
    }

    pub fn on_anchor_updated(&mut self, host: &mut H, anchor: &Anchor) {
        self.planes.on_plane_updated(host, anchor);
    }

    pub fn on_anchor_removed(&mut self, host: &mut H, id: &AnchorId) {
        self.planes.on_plane_removed(host, id);
    }

    /// Pan gesture update. The first pan of a session stops plane detection
    /// so the floor stays put under the dominoes.
    pub fn on_pan(&mut self, host: &mut H, screen: Vec2) -> Placement {
        if !self.detection_frozen {
            host.run_session(&SessionConfig::frozen());
            self.detection_frozen = true;
            log::info!("[session] plane detection disabled for placement");
        }
        self.controller.on_drag(host, screen)
    }

    pub fn clear_all(&mut self, host: &mut H) {
        self.controller.clear_all(host);
    }

    pub fn start(&mut self, host: &mut H) -> bool {
        self.controller.start(host)
    }
}
