//! Frame-loop controller for the try-on session.
//!
//! `TryOnApp` owns every piece of per-session mutable state: the two
//! trackers, the two smoother instances, the session selection, and the
//! compositor surface. One frame = one `process_frame` call; all work is
//! sequential within it.

use crate::anchors::{self, JewelryKind};
use crate::assets::{AssetCatalog, Tier};
use crate::config::Config;
use crate::landmarks::LandmarkFrame;
use crate::placement::{self, Compositor};
use crate::session::{preferred_facing, CameraFacing, SessionState};
use crate::smoothing::{hand_set::HandSetSmoother, LandmarkSmoother};
use crate::tracking::{Detections, FaceTracker, HandTracker};
use crate::Result;
use image::RgbaImage;
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Main try-on application
pub struct TryOnApp {
    config: Config,
    catalog: AssetCatalog,
    face_tracker: Box<dyn FaceTracker>,
    hand_tracker: Box<dyn HandTracker>,
    face_smoother: Box<dyn LandmarkSmoother>,
    hand_smoother: HandSetSmoother,
    session: SessionState,
    compositor: Compositor,
}

impl TryOnApp {
    /// Create a try-on session around a pair of trackers
    pub fn new(
        config: Config,
        face_tracker: Box<dyn FaceTracker>,
        hand_tracker: Box<dyn HandTracker>,
    ) -> Result<Self> {
        config.validate()?;
        info!(
            "Initializing try-on session ({} smoothing, alpha {})",
            config.smoothing.smoother, config.smoothing.alpha
        );

        let face_smoother = config.create_face_smoother()?;
        let hand_smoother = config.create_hand_smoother()?;
        let catalog = AssetCatalog::new(config.assets.root.clone());
        let compositor = Compositor::new(config.camera.capture_width, config.camera.capture_height);
        let session = SessionState::new(config.camera.facing);

        Ok(Self {
            config,
            catalog,
            face_tracker,
            hand_tracker,
            face_smoother,
            hand_smoother,
            session,
            compositor,
        })
    }

    /// Enter a category: switches to its preferred camera and returns the
    /// selectable variant paths for the selection UI
    pub fn select_category(&mut self, kind: JewelryKind, tier: Option<Tier>) -> Vec<PathBuf> {
        self.set_camera_facing(preferred_facing(kind));
        self.catalog.variant_paths(kind, tier)
    }

    /// Load and activate one jewelry variant.
    ///
    /// A load failure is logged and the selection ignored: the previously
    /// active asset (or none) stays in effect and the frame loop is
    /// unaffected.
    pub fn select_jewelry(&mut self, kind: JewelryKind, tier: Option<Tier>, index: u32) {
        match self.catalog.load(kind, tier, index) {
            Ok(asset) => {
                info!("Activated {kind} variant {index}");
                self.session.activate(kind, asset);
            }
            Err(e) => error!("Ignoring {kind} selection {index}: {e}"),
        }
    }

    /// Remove every active selection
    pub fn clear_jewelry(&mut self) {
        self.session.clear_all();
    }

    /// Switch cameras. Tears down the old source: the epoch advances so
    /// in-flight detector results against it are discarded, and the
    /// smoothed landmark state is dropped since it describes frames from
    /// a camera no longer in use.
    pub fn set_camera_facing(&mut self, facing: CameraFacing) {
        if self.session.set_facing(facing) {
            self.face_smoother.reset();
            self.hand_smoother.reset();
            info!("Camera switched to {facing} (epoch {})", self.session.epoch());
        }
    }

    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Process one camera frame: run both detectors, fold the results into
    /// the smoothed state, and recomposite the overlay surface. Returns
    /// the surface for display.
    pub fn process_frame(&mut self, frame: &RgbaImage) -> Result<&RgbaImage> {
        self.compositor.fit_to(frame.width(), frame.height());
        let detections = self.run_detectors(frame)?;
        self.ingest(detections);
        Ok(self.compositor.surface())
    }

    /// Run the face and hand detectors on a frame. Both must complete
    /// before compositing, which consumes the results jointly.
    fn run_detectors(&mut self, frame: &RgbaImage) -> Result<Detections> {
        let epoch = self.session.epoch();
        let face = self.face_tracker.detect(frame)?;
        let hands = self.hand_tracker.detect(frame)?;
        Ok(Detections { epoch, face, hands })
    }

    /// Fold one frame's detections into the session and recomposite.
    ///
    /// Results tagged with a superseded camera-source epoch are dropped
    /// without touching smoother state or the surface.
    pub fn ingest(&mut self, detections: Detections) {
        if !self.session.is_current(detections.epoch) {
            debug!(
                "Dropping detector results from stale epoch {} (current {})",
                detections.epoch,
                self.session.epoch()
            );
            return;
        }

        let face = self.face_smoother.apply(detections.face.as_ref());
        let hands = self.hand_smoother.apply(&detections.hands);
        self.composite(face.as_ref(), &hands);
    }

    /// Recomposite every active overlay from the current smoothed
    /// landmarks. Categories whose anchors are unavailable this frame are
    /// skipped silently.
    fn composite(&mut self, face: Option<&LandmarkFrame>, hands: &[LandmarkFrame]) {
        self.compositor.clear();
        let width = self.compositor.width();
        let height = self.compositor.height();

        for kind in JewelryKind::ALL {
            let Some(asset) = self.session.active(kind) else {
                continue;
            };
            for anchor in anchors::resolve(kind, face, hands, width, height) {
                let scale = placement::scale_for(kind, &anchor, &self.config.placement);
                let rect = placement::place(asset, &anchor, scale, placement::align_for(kind));
                self.compositor.draw(asset, &rect);
            }
        }
    }

    /// The overlay surface as of the last composited frame
    #[must_use]
    pub fn surface(&self) -> &RgbaImage {
        self.compositor.surface()
    }

    /// Composited still image of a camera frame plus the current overlays
    #[must_use]
    pub fn snapshot(&self, frame: &RgbaImage) -> RgbaImage {
        self.compositor.snapshot_over(frame)
    }

    /// Export a snapshot PNG into `dir`, named
    /// `jewelry-tryon-{timestamp}.png`
    pub fn export_snapshot(&self, frame: &RgbaImage, dir: &Path) -> Result<PathBuf> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| crate::Error::Export(e.to_string()))?
            .as_secs();
        let path = dir.join(snapshot_filename(timestamp));
        self.snapshot(frame).save(&path)?;
        info!("Exported snapshot to {}", path.display());
        Ok(path)
    }
}

/// Export filename for a snapshot taken at `timestamp` (Unix seconds)
#[must_use]
pub fn snapshot_filename(timestamp: u64) -> String {
    format!("jewelry-tryon-{timestamp}.png")
}
