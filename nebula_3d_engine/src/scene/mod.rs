//! Scene graph
//!
//! Units (Model placements with kinematic state) keyed by stable
//! `SportKey` handles, the per-tick kinematic integrator that advances
//! them inside a toroidal bounded space, and the rasterizer that draws
//! a scene into a Camera.

mod unit;
mod scene;
mod updater;
mod drawer;

pub use scene::{Scene, SportKey};
pub use unit::{Pose, Sport, Unit};

pub(crate) use drawer::render_scene;
pub(crate) use updater::{integrate_sport, Bounds};
