//! Platform-independent carousel state machine.
//!
//! The controller owns a [`clock::ProgressClock`], an [`selector::ActiveSelector`],
//! an [`arbiter::InteractionArbiter`] and a [`router::NavigationRouter`], and is
//! driven by a host that calls [`controller::CarouselController::tick`] once per
//! animation frame.

#![cfg_attr(not(test), no_std)]

pub mod arbiter;
pub mod clock;
pub mod controller;
pub mod input;
pub mod layout;
pub mod render;
pub mod router;
pub mod selector;
pub mod settings;
