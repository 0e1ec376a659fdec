//! Placement computation and overlay compositing.
//!
//! A [`PlacementRect`] is derived and ephemeral: it is recomputed every
//! frame from the current smoothed landmarks and the active assets, and is
//! never cached across frames.

use crate::anchors::{Anchor, JewelryKind};
use crate::assets::JewelryAsset;
use crate::config::PlacementConfig;
use crate::constants::EPSILON;
use image::{imageops, Rgba, RgbaImage};
use imageproc::geometric_transformations::{rotate_about_center, Interpolation};

/// Vertical anchoring of an overlay relative to its anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    /// Top edge sits at the anchor (overlay hangs below it)
    Top,
    /// Overlay is vertically centered on the anchor
    Center,
}

/// How each category hangs from its anchor
#[must_use]
pub fn align_for(kind: JewelryKind) -> VerticalAlign {
    match kind {
        JewelryKind::Earrings | JewelryKind::Necklaces => VerticalAlign::Top,
        JewelryKind::Bracelet | JewelryKind::Ring => VerticalAlign::Center,
    }
}

/// Overlay scale factor for one category at one anchor.
///
/// Rings follow the visible hand size when size-aware scaling is enabled;
/// every other category uses its fixed configured factor.
#[must_use]
pub fn scale_for(kind: JewelryKind, anchor: &Anchor, config: &PlacementConfig) -> f32 {
    match kind {
        JewelryKind::Earrings => config.earring_scale,
        JewelryKind::Necklaces => config.necklace_scale,
        JewelryKind::Bracelet => config.bracelet_scale,
        JewelryKind::Ring => match anchor.hand_span {
            Some(span) if config.size_aware_ring && config.reference_hand_span > 0.0 => {
                config.ring_scale * (span / config.reference_hand_span)
            }
            _ => config.ring_scale,
        },
    }
}

/// Destination box for one overlay draw, in surface pixels.
///
/// Center-based so rotated and axis-aligned placements share one
/// representation; `rotation` is applied about the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRect {
    pub cx: f32,
    pub cy: f32,
    pub width: f32,
    pub height: f32,
    pub rotation: f32,
}

impl PlacementRect {
    /// Left edge of the unrotated box
    #[must_use]
    pub fn left(&self) -> f32 {
        self.cx - self.width / 2.0
    }

    /// Top edge of the unrotated box
    #[must_use]
    pub fn top(&self) -> f32 {
        self.cy - self.height / 2.0
    }
}

/// Compute the draw rectangle for an asset at an anchor
#[must_use]
pub fn place(asset: &JewelryAsset, anchor: &Anchor, scale: f32, align: VerticalAlign) -> PlacementRect {
    let width = asset.width() as f32 * scale;
    let height = asset.height() as f32 * scale;
    let cy = match align {
        VerticalAlign::Top => anchor.y + height / 2.0,
        VerticalAlign::Center => anchor.y,
    };
    PlacementRect {
        cx: anchor.x,
        cy,
        width,
        height,
        rotation: anchor.rotation,
    }
}

/// Owns the overlay surface and composites sprites onto it
pub struct Compositor {
    surface: RgbaImage,
}

impl Compositor {
    /// Create a transparent surface of the given size
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            surface: RgbaImage::new(width, height),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    /// Resize the surface to the negotiated video dimensions.
    /// Drops all content; a resize only happens between frames.
    pub fn fit_to(&mut self, width: u32, height: u32) {
        if self.surface.dimensions() != (width, height) {
            self.surface = RgbaImage::new(width, height);
        }
    }

    /// Clear the previous frame's content. Must run before the first draw
    /// of every frame so overlays never accumulate into trails.
    pub fn clear(&mut self) {
        for pixel in self.surface.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }

    /// Composite one asset into its placement rectangle.
    ///
    /// Degenerate rectangles are skipped silently; draws overhanging the
    /// surface edge are clipped. Rotation is applied to this sprite alone
    /// and cannot leak into later draws.
    pub fn draw(&mut self, asset: &JewelryAsset, rect: &PlacementRect) {
        if rect.width < 1.0 || rect.height < 1.0 {
            return;
        }

        let target_w = rect.width.round() as u32;
        let target_h = rect.height.round() as u32;
        let mut sprite = imageops::resize(asset.image(), target_w, target_h, imageops::FilterType::Triangle);

        if rect.rotation.abs() > EPSILON {
            sprite = rotate_sprite(&sprite, rect.rotation);
        }

        let left = (rect.cx - sprite.width() as f32 / 2.0).round() as i64;
        let top = (rect.cy - sprite.height() as f32 / 2.0).round() as i64;
        imageops::overlay(&mut self.surface, &sprite, left, top);
    }

    /// The composited overlay surface for the current frame
    #[must_use]
    pub fn surface(&self) -> &RgbaImage {
        &self.surface
    }

    /// Flatten the overlay onto a camera frame, producing the exportable
    /// still image
    #[must_use]
    pub fn snapshot_over(&self, frame: &RgbaImage) -> RgbaImage {
        let mut out = frame.clone();
        imageops::overlay(&mut out, &self.surface, 0, 0);
        out
    }
}

/// Rotate a sprite about its center without clipping its corners.
///
/// The sprite is padded into a square as wide as its diagonal first;
/// `rotate_about_center` alone keeps the input dimensions and would cut
/// the corners off a non-square sprite.
fn rotate_sprite(sprite: &RgbaImage, angle: f32) -> RgbaImage {
    let (w, h) = sprite.dimensions();
    let side = (w as f32).hypot(h as f32).ceil() as u32;
    let mut padded = RgbaImage::new(side, side);
    imageops::overlay(
        &mut padded,
        sprite,
        i64::from((side - w) / 2),
        i64::from((side - h) / 2),
    );
    rotate_about_center(&padded, angle, Interpolation::Bilinear, Rgba([0, 0, 0, 0]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchors::Anchor;

    fn opaque_asset(width: u32, height: u32) -> JewelryAsset {
        JewelryAsset::from_image(RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255])))
    }

    fn anchor_at(x: f32, y: f32) -> Anchor {
        Anchor {
            x,
            y,
            rotation: 0.0,
            hand_span: None,
        }
    }

    fn count_opaque(surface: &RgbaImage) -> usize {
        surface.pixels().filter(|p| p[3] > 0).count()
    }

    #[test]
    fn test_place_top_aligned() {
        let asset = opaque_asset(100, 50);
        let rect = place(&asset, &anchor_at(40.0, 30.0), 0.1, VerticalAlign::Top);
        assert_eq!(rect.width, 10.0);
        assert_eq!(rect.height, 5.0);
        assert_eq!(rect.left(), 35.0);
        assert_eq!(rect.top(), 30.0);
    }

    #[test]
    fn test_place_center_aligned() {
        let asset = opaque_asset(100, 50);
        let rect = place(&asset, &anchor_at(40.0, 30.0), 0.1, VerticalAlign::Center);
        assert_eq!(rect.left(), 35.0);
        assert_eq!(rect.top(), 27.5);
    }

    #[test]
    fn test_scale_for_fixed_categories() {
        let config = PlacementConfig::default();
        let anchor = anchor_at(0.0, 0.0);
        assert_eq!(scale_for(JewelryKind::Earrings, &anchor, &config), 0.07);
        assert_eq!(scale_for(JewelryKind::Necklaces, &anchor, &config), 0.18);
        assert_eq!(scale_for(JewelryKind::Bracelet, &anchor, &config), 0.15);
    }

    #[test]
    fn test_ring_scale_follows_hand_span() {
        let config = PlacementConfig::default();
        let mut anchor = anchor_at(0.0, 0.0);
        anchor.hand_span = Some(config.reference_hand_span);
        assert!((scale_for(JewelryKind::Ring, &anchor, &config) - config.ring_scale).abs() < 1e-6);

        anchor.hand_span = Some(config.reference_hand_span * 2.0);
        assert!((scale_for(JewelryKind::Ring, &anchor, &config) - config.ring_scale * 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_ring_scale_constant_when_size_aware_disabled() {
        let config = PlacementConfig {
            size_aware_ring: false,
            ..PlacementConfig::default()
        };
        let mut anchor = anchor_at(0.0, 0.0);
        anchor.hand_span = Some(500.0);
        assert_eq!(scale_for(JewelryKind::Ring, &anchor, &config), config.ring_scale);
    }

    #[test]
    fn test_draw_composites_at_rect() {
        let mut compositor = Compositor::new(100, 100);
        let asset = opaque_asset(100, 100);
        let rect = place(&asset, &anchor_at(50.0, 50.0), 0.1, VerticalAlign::Center);
        compositor.draw(&asset, &rect);

        assert_eq!(compositor.surface().get_pixel(50, 50), &Rgba([255, 0, 0, 255]));
        assert_eq!(count_opaque(compositor.surface()), 100);
        // Outside the placement rect stays clear
        assert_eq!(compositor.surface().get_pixel(10, 10)[3], 0);
    }

    #[test]
    fn test_degenerate_rect_skipped() {
        let mut compositor = Compositor::new(50, 50);
        let asset = opaque_asset(10, 10);
        let rect = PlacementRect {
            cx: 25.0,
            cy: 25.0,
            width: 0.4,
            height: 0.4,
            rotation: 0.0,
        };
        compositor.draw(&asset, &rect);
        assert_eq!(count_opaque(compositor.surface()), 0);
    }

    #[test]
    fn test_offscreen_draw_is_clipped_not_fatal() {
        let mut compositor = Compositor::new(50, 50);
        let asset = opaque_asset(20, 20);
        let rect = PlacementRect {
            cx: 0.0,
            cy: 0.0,
            width: 20.0,
            height: 20.0,
            rotation: 0.0,
        };
        compositor.draw(&asset, &rect);
        // Only the on-surface quadrant lands
        assert_eq!(count_opaque(compositor.surface()), 100);
    }

    #[test]
    fn test_clear_removes_previous_frame() {
        let mut compositor = Compositor::new(50, 50);
        let asset = opaque_asset(10, 10);
        let rect = place(&asset, &anchor_at(25.0, 25.0), 1.0, VerticalAlign::Center);
        compositor.draw(&asset, &rect);
        assert!(count_opaque(compositor.surface()) > 0);

        compositor.clear();
        assert_eq!(count_opaque(compositor.surface()), 0);
    }

    #[test]
    fn test_rotation_does_not_leak_between_draws() {
        let mut compositor = Compositor::new(200, 200);
        let wide = opaque_asset(40, 4);

        // A rotated draw first...
        let rotated = PlacementRect {
            cx: 50.0,
            cy: 50.0,
            width: 40.0,
            height: 4.0,
            rotation: std::f32::consts::FRAC_PI_4,
        };
        compositor.draw(&wide, &rotated);

        // ...must not affect the axis-aligned draw that follows
        let straight = PlacementRect {
            cx: 150.0,
            cy: 150.0,
            width: 40.0,
            height: 4.0,
            rotation: 0.0,
        };
        compositor.draw(&wide, &straight);

        // The second sprite spans its full unrotated width on one row
        let row = 150;
        let filled = (0..200).filter(|&x| compositor.surface().get_pixel(x, row)[3] > 0).count();
        assert!(filled >= 38, "expected an unrotated horizontal bar, got {filled} pixels");
    }

    #[test]
    fn test_rotated_sprite_keeps_its_corners() {
        let mut compositor = Compositor::new(200, 200);
        let wide = opaque_asset(60, 6);
        let rect = PlacementRect {
            cx: 100.0,
            cy: 100.0,
            width: 60.0,
            height: 6.0,
            rotation: std::f32::consts::FRAC_PI_2,
        };
        compositor.draw(&wide, &rect);

        // Rotated a quarter turn, the bar is now vertical and roughly full length
        let column_filled = (0..200)
            .filter(|&y| compositor.surface().get_pixel(100, y)[3] > 0)
            .count();
        assert!(column_filled >= 55, "rotated bar truncated to {column_filled} pixels");
    }

    #[test]
    fn test_snapshot_over_flattens_onto_frame() {
        let mut compositor = Compositor::new(10, 10);
        let asset = opaque_asset(2, 2);
        let rect = place(&asset, &anchor_at(5.0, 5.0), 1.0, VerticalAlign::Center);
        compositor.draw(&asset, &rect);

        let frame = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 255, 255]));
        let snapshot = compositor.snapshot_over(&frame);
        assert_eq!(snapshot.get_pixel(5, 5), &Rgba([255, 0, 0, 255]));
        assert_eq!(snapshot.get_pixel(0, 0), &Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_fit_to_resizes_surface() {
        let mut compositor = Compositor::new(10, 10);
        compositor.fit_to(1280, 720);
        assert_eq!((compositor.width(), compositor.height()), (1280, 720));
    }
}
