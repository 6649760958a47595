// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Host orientation handling.
//!
//! The viewer forces the host display into portrait while it is visible
//! and puts the previous setting back when it goes away. The setting is
//! held through an RAII guard so restoration happens on every exit
//! path, unwinding ones included.

use egui::Vec2;

/// Window geometry applied while portrait orientation is forced.
const PORTRAIT_INNER_SIZE: Vec2 = Vec2 { x: 480.0, y: 800.0 };
const LANDSCAPE_INNER_SIZE: Vec2 = Vec2 { x: 800.0, y: 480.0 };

/// A host preferred-orientation setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// No preference; the user controls the window shape.
    Unspecified,
    Portrait,
    Landscape,
}

/// Read/write access to the host's preferred-orientation setting.
pub trait OrientationHost {
    fn preferred(&self) -> Orientation;
    fn set_preferred(&mut self, orientation: Orientation);
}

/// Scoped orientation override.
///
/// Records the setting in force at acquisition, applies the forced one,
/// and restores the prior setting exactly when dropped.
pub struct OrientationLock<H: OrientationHost> {
    host: H,
    prior: Orientation,
}

impl<H: OrientationHost> OrientationLock<H> {
    pub fn acquire(mut host: H, forced: Orientation) -> Self {
        let prior = host.preferred();
        log::info!("forcing orientation {:?} (was {:?})", forced, prior);
        host.set_preferred(forced);
        Self { host, prior }
    }
}

impl<H: OrientationHost> Drop for OrientationLock<H> {
    fn drop(&mut self) {
        log::info!("restoring orientation {:?}", self.prior);
        self.host.set_preferred(self.prior);
    }
}

/// Production host backed by the egui viewport.
///
/// Desktop windows have no orientation sensor, so a forced orientation
/// maps to a fixed inner size with resizing disabled; `Unspecified`
/// hands the window shape back to the user.
pub struct ViewportHost {
    ctx: egui::Context,
    preferred: Orientation,
}

impl ViewportHost {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            preferred: Orientation::Unspecified,
        }
    }
}

impl OrientationHost for ViewportHost {
    fn preferred(&self) -> Orientation {
        self.preferred
    }

    fn set_preferred(&mut self, orientation: Orientation) {
        self.preferred = orientation;
        match orientation {
            Orientation::Portrait => {
                self.ctx
                    .send_viewport_cmd(egui::ViewportCommand::InnerSize(PORTRAIT_INNER_SIZE));
                self.ctx
                    .send_viewport_cmd(egui::ViewportCommand::Resizable(false));
            }
            Orientation::Landscape => {
                self.ctx
                    .send_viewport_cmd(egui::ViewportCommand::InnerSize(LANDSCAPE_INNER_SIZE));
                self.ctx
                    .send_viewport_cmd(egui::ViewportCommand::Resizable(false));
            }
            Orientation::Unspecified => {
                self.ctx
                    .send_viewport_cmd(egui::ViewportCommand::Resizable(true));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone)]
    struct MockHost(Rc<RefCell<Orientation>>);

    impl MockHost {
        fn new(initial: Orientation) -> Self {
            Self(Rc::new(RefCell::new(initial)))
        }

        fn setting(&self) -> Orientation {
            *self.0.borrow()
        }
    }

    impl OrientationHost for MockHost {
        fn preferred(&self) -> Orientation {
            *self.0.borrow()
        }

        fn set_preferred(&mut self, orientation: Orientation) {
            *self.0.borrow_mut() = orientation;
        }
    }

    #[test]
    fn test_forces_and_restores() {
        let host = MockHost::new(Orientation::Unspecified);
        {
            let _lock = OrientationLock::acquire(host.clone(), Orientation::Portrait);
            assert_eq!(host.setting(), Orientation::Portrait);
        }
        assert_eq!(host.setting(), Orientation::Unspecified);
    }

    #[test]
    fn test_restores_prior_setting_exactly() {
        let host = MockHost::new(Orientation::Landscape);
        {
            let _lock = OrientationLock::acquire(host.clone(), Orientation::Portrait);
            assert_eq!(host.setting(), Orientation::Portrait);
        }
        assert_eq!(host.setting(), Orientation::Landscape);
    }

    #[test]
    fn test_restores_on_unwind() {
        let host = MockHost::new(Orientation::Unspecified);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _lock = OrientationLock::acquire(host.clone(), Orientation::Portrait);
            panic!("screen torn down abnormally");
        }));
        assert!(result.is_err());
        assert_eq!(host.setting(), Orientation::Unspecified);
    }
}
