//! Virtual jewelry try-on library for overlaying jewelry on camera frames.
//!
//! This library provides the per-frame core of a jewelry try-on
//! application:
//! - Exponential smoothing of face/hand landmark sequences to reduce jitter
//! - Anchor-point resolution per jewelry category (earrings, necklaces,
//!   bracelets, rings)
//! - Placement-rectangle computation and overlay compositing onto an RGBA
//!   surface
//! - Session state for the active selection and camera source
//!
//! Landmark detection itself is external: any face/hand tracker that
//! produces the fixed index scheme in [`landmarks`] plugs in behind the
//! [`tracking::FaceTracker`] and [`tracking::HandTracker`] traits.
//!
//! The per-frame pipeline is: tracker output → smoother → anchor resolver
//! → compositor, once per video frame.
//!
//! # Examples
//!
//! ## Smoothing and anchor resolution
//!
//! ```
//! use jewelry_tryon::anchors::{self, JewelryKind};
//! use jewelry_tryon::landmarks::{Landmark, LandmarkFrame};
//! use jewelry_tryon::smoothing::{create_smoother, LandmarkSmoother};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut smoother = create_smoother("exponential", 0.2)?;
//!
//! // A face frame as delivered by the tracker (468 normalized points)
//! let raw: LandmarkFrame = vec![Landmark::new(0.5, 0.5, 0.0); 468];
//! let smoothed = smoother.apply(Some(&raw)).expect("detection present");
//!
//! // Earrings resolve to two biased anchors in surface pixels
//! let anchors = anchors::resolve(JewelryKind::Earrings, Some(&smoothed), &[], 1280, 720);
//! assert_eq!(anchors.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Compositing an overlay
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use jewelry_tryon::anchors::Anchor;
//! use jewelry_tryon::assets::JewelryAsset;
//! use jewelry_tryon::placement::{place, Compositor, VerticalAlign};
//!
//! let asset = JewelryAsset::from_image(RgbaImage::from_pixel(100, 100, Rgba([255, 215, 0, 255])));
//! let anchor = Anchor { x: 320.0, y: 240.0, rotation: 0.0, hand_span: None };
//!
//! let mut compositor = Compositor::new(640, 480);
//! compositor.clear();
//! let rect = place(&asset, &anchor, 0.07, VerticalAlign::Center);
//! compositor.draw(&asset, &rect);
//! assert!(compositor.surface().get_pixel(320, 240)[3] > 0);
//! ```
//!
//! ## Driving a full session
//!
//! ```no_run
//! use image::RgbaImage;
//! use jewelry_tryon::anchors::JewelryKind;
//! use jewelry_tryon::app::TryOnApp;
//! use jewelry_tryon::config::Config;
//! use jewelry_tryon::tracking::{ScriptedFaceTracker, ScriptedHandTracker, TrackedScene};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scene = TrackedScene::from_file("fixtures/hand.yaml")?;
//! let mut app = TryOnApp::new(
//!     Config::default(),
//!     Box::new(ScriptedFaceTracker::repeating(scene.face, 30)),
//!     Box::new(ScriptedHandTracker::repeating(scene.hands, 30)),
//! )?;
//!
//! app.select_category(JewelryKind::Ring, None);
//! app.select_jewelry(JewelryKind::Ring, None, 3);
//!
//! let frame = image::open("photo.png")?.to_rgba8();
//! for _ in 0..30 {
//!     app.process_frame(&frame)?;
//! }
//! app.export_snapshot(&frame, std::path::Path::new("."))?;
//! # Ok(())
//! # }
//! ```

/// Landmark types and the external trackers' fixed index scheme
pub mod landmarks;

/// Landmark smoothing for jitter reduction
pub mod smoothing;

/// Anchor resolution from landmarks to pixel-space placement origins
pub mod anchors;

/// Placement computation and overlay compositing
pub mod placement;

/// Jewelry asset store and variant catalog
pub mod assets;

/// Session state: active selection and camera source
pub mod session;

/// Tracking collaborator contract and scripted fixtures
pub mod tracking;

/// Frame-loop controller
pub mod app;

/// Error types and result handling
pub mod error;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
