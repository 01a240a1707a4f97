//! Popup state machine and the page-wide shared popup layer.
//!
//! One popup layer exists per page no matter how many configurator
//! widgets are mounted; widgets coordinate through it instead of each
//! owning an overlay. The layer is a plain value so tests instantiate
//! isolated ones.

pub mod placement;

use crate::model::{Configuration, GroupKind, Hotspot, HotspotKind};
use placement::{GridMetrics, Point, Size, place_anchored};

/// Delay between picking an option and the popup closing, so the
/// highlighted pick registers visually before the popup goes away.
pub const CLOSE_DELAY_MS: u32 = 300;

/// Identity of a mounted widget instance for layer ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetId(pub u32);

/// The two full-image centered popup variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenteredView {
    TopAngle,
    QrCode,
}

impl CenteredView {
    pub fn heading(self) -> &'static str {
        match self {
            CenteredView::TopAngle => "Top Angle View",
            CenteredView::QrCode => "Scan QR code to open in AR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PopupState {
    #[default]
    Closed,
    /// Option grid anchored near a hotspot.
    Anchored {
        hotspot: usize,
        at: Point,
        size: Size,
        group: GroupKind,
        title: String,
    },
    /// Full-image view centered over a dimming overlay.
    Centered {
        view: CenteredView,
        image_url: String,
    },
}

/// What activating a hotspot should do, resolved against the widget's
/// configuration before any state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    Options { group: GroupKind, title: String },
    Image { view: CenteredView, url: String },
    Ignored(&'static str),
}

/// Resolve a hotspot activation. Selector hotspots match their name
/// case-insensitively against "cabinet" then "shell" (first match wins)
/// and need the group enabled and non-empty; image hotspots need their
/// image URL. Everything else is ignored with a reason for the caller to
/// log.
pub fn activation_for(config: &Configuration, hotspot: &Hotspot) -> Activation {
    match hotspot.kind {
        HotspotKind::Selector => {
            let name = hotspot.name.to_lowercase();
            let group = if name.contains("cabinet") && config.enable_cabinet_options {
                GroupKind::Cabinet
            } else if name.contains("shell") && config.enable_shell_options {
                GroupKind::Shell
            } else {
                return Activation::Ignored("no enabled option group matches the hotspot name");
            };
            if config.options_len(group) == 0 {
                return Activation::Ignored("matched option group is empty");
            }
            Activation::Options {
                group,
                title: config.section_title(group).to_string(),
            }
        }
        HotspotKind::TopAngle => match hotspot.top_angle_url.as_deref() {
            Some(url) if !url.is_empty() => Activation::Image {
                view: CenteredView::TopAngle,
                url: url.to_string(),
            },
            _ => Activation::Ignored("top-angle hotspot has no image configured"),
        },
        HotspotKind::QrCode => match hotspot.qr_code_url.as_deref() {
            Some(url) if !url.is_empty() => Activation::Image {
                view: CenteredView::QrCode,
                url: url.to_string(),
            },
            _ => Activation::Ignored("QR hotspot has no image configured"),
        },
    }
}

// ── PopupLayer ──────────────────────────────────────────────────────────

/// The shared popup surface. At most one popup is ever open; opening a
/// new one replaces whatever is up, whichever widget owned it.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupLayer {
    state: PopupState,
    owner: Option<WidgetId>,
    generation: u64,
}

impl Default for PopupLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl PopupLayer {
    pub fn new() -> Self {
        Self {
            state: PopupState::Closed,
            owner: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> &PopupState {
        &self.state
    }

    pub fn owner(&self) -> Option<WidgetId> {
        self.owner
    }

    /// Bumped on every open and close; delayed close timers capture it so
    /// a timer firing after the popup already changed is a no-op.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_open(&self) -> bool {
        self.state != PopupState::Closed
    }

    pub fn owned_by(&self, widget: WidgetId) -> bool {
        self.is_open() && self.owner == Some(widget)
    }

    /// Activate a hotspot for `widget`: compute placement and open the
    /// resulting popup, replacing any open one. An ignored activation is
    /// returned as `Err(reason)` and changes nothing.
    pub fn activate(
        &mut self,
        widget: WidgetId,
        config: &Configuration,
        hotspot: usize,
        anchor: Point,
        viewport: Size,
    ) -> Result<(), &'static str> {
        let spot = config.hotspots.get(hotspot).ok_or("hotspot index out of range")?;
        match activation_for(config, spot) {
            Activation::Options { group, title } => {
                let grid = GridMetrics::for_viewport(viewport.w);
                let size = grid.popup_size(config.options_len(group));
                let at = place_anchored(anchor, size, viewport);
                self.open(widget, PopupState::Anchored { hotspot, at, size, group, title });
                Ok(())
            }
            Activation::Image { view, url } => {
                self.open(widget, PopupState::Centered { view, image_url: url });
                Ok(())
            }
            Activation::Ignored(reason) => Err(reason),
        }
    }

    /// Open `state` for `widget`. Always closes first, so rapid repeated
    /// activation can never stack popups.
    pub fn open(&mut self, widget: WidgetId, state: PopupState) {
        self.close();
        if state != PopupState::Closed {
            self.state = state;
            self.owner = Some(widget);
        }
    }

    pub fn close(&mut self) {
        self.state = PopupState::Closed;
        self.owner = None;
        self.generation += 1;
    }

    /// Close only if the popup has not changed since `generation` was
    /// captured. Used by the post-selection close timer.
    pub fn close_if(&mut self, generation: u64) {
        if self.generation == generation {
            self.close();
        }
    }

    /// Resize invalidates anchored geometry and the grid metrics alike,
    /// so whatever is open closes.
    pub fn resized(&mut self) {
        self.close();
    }

    /// Re-place an anchored popup after scroll moved its hotspot. Never
    /// changes the popup kind and leaves centered popups alone.
    pub fn scrolled(&mut self, anchor: Point, viewport: Size) {
        if let PopupState::Anchored { at, size, .. } = &mut self.state {
            *at = place_anchored(anchor, *size, viewport);
        }
    }

    /// Widget teardown: drop the popup only if this widget owns it.
    pub fn release(&mut self, widget: WidgetId) {
        if self.owner == Some(widget) {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::placement::{MARGIN, Point, Size};
    use super::*;
    use crate::model::HotspotKind;
    use crate::model::fixtures::spa_config;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    const VIEWPORT: Size = Size::new(1280.0, 800.0);
    const W1: WidgetId = WidgetId(1);
    const W2: WidgetId = WidgetId(2);

    fn anchor() -> Point {
        Point::new(300.0, 400.0)
    }

    #[test]
    fn selector_hotspot_opens_anchored_options() {
        let config = spa_config();
        let mut layer = PopupLayer::new();
        layer.activate(W1, &config, 0, anchor(), VIEWPORT).unwrap();
        match layer.state() {
            PopupState::Anchored { group, title, at, .. } => {
                assert_eq!(*group, GroupKind::Cabinet);
                assert_eq!(title, "Cabinets");
                assert!(at.y >= MARGIN);
            }
            other => panic!("expected anchored popup, got {other:?}"),
        }
        assert_eq!(layer.owner(), Some(W1));
    }

    #[test]
    fn hotspot_name_match_is_case_insensitive_substring() {
        let mut config = spa_config();
        config.hotspots[1].name = "Pick your SHELL finish".to_string();
        match activation_for(&config, &config.hotspots[1]) {
            Activation::Options { group, .. } => assert_eq!(group, GroupKind::Shell),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unmatched_or_disabled_hotspot_is_ignored() {
        let mut config = spa_config();
        config.hotspots[0].name = "Lighting".to_string();
        assert!(matches!(
            activation_for(&config, &config.hotspots[0]),
            Activation::Ignored(_)
        ));

        config.hotspots[0].name = "Cabinet Colors".to_string();
        config.enable_cabinet_options = false;
        assert!(matches!(
            activation_for(&config, &config.hotspots[0]),
            Activation::Ignored(_)
        ));
    }

    #[test]
    fn empty_group_is_ignored() {
        let mut config = spa_config();
        config.cabinet_options.clear();
        assert!(matches!(
            activation_for(&config, &config.hotspots[0]),
            Activation::Ignored(_)
        ));
    }

    #[test]
    fn top_angle_without_image_stays_closed() {
        let mut config = spa_config();
        config.hotspots[0].kind = HotspotKind::TopAngle;
        config.hotspots[0].top_angle_url = None;
        let mut layer = PopupLayer::new();
        assert!(layer.activate(W1, &config, 0, anchor(), VIEWPORT).is_err());
        assert_eq!(*layer.state(), PopupState::Closed);
    }

    #[test]
    fn top_angle_with_image_opens_centered() {
        let mut config = spa_config();
        config.hotspots[0].kind = HotspotKind::TopAngle;
        config.hotspots[0].top_angle_url = Some("top.jpg".to_string());
        let mut layer = PopupLayer::new();
        layer.activate(W1, &config, 0, anchor(), VIEWPORT).unwrap();
        assert_eq!(
            *layer.state(),
            PopupState::Centered {
                view: CenteredView::TopAngle,
                image_url: "top.jpg".to_string()
            }
        );
    }

    #[test]
    fn second_widget_takes_over_the_layer() {
        // Two widgets, one shared surface.
        let config = spa_config();
        let mut layer = PopupLayer::new();
        layer.activate(W1, &config, 0, anchor(), VIEWPORT).unwrap();
        layer.activate(W2, &config, 1, anchor(), VIEWPORT).unwrap();
        assert_eq!(layer.owner(), Some(W2));
        assert!(matches!(
            layer.state(),
            PopupState::Anchored { group: GroupKind::Shell, .. }
        ));
    }

    #[test]
    fn release_only_clears_own_popup() {
        let config = spa_config();
        let mut layer = PopupLayer::new();
        layer.activate(W2, &config, 0, anchor(), VIEWPORT).unwrap();
        layer.release(W1);
        assert!(layer.is_open());
        layer.release(W2);
        assert!(!layer.is_open());
    }

    #[test]
    fn stale_close_timer_is_a_no_op() {
        let config = spa_config();
        let mut layer = PopupLayer::new();
        layer.activate(W1, &config, 0, anchor(), VIEWPORT).unwrap();
        let stale = layer.generation();
        layer.activate(W1, &config, 1, anchor(), VIEWPORT).unwrap();
        layer.close_if(stale);
        assert!(layer.is_open(), "newer popup must survive the stale timer");
        let current = layer.generation();
        layer.close_if(current);
        assert!(!layer.is_open());
    }

    #[test]
    fn scroll_moves_the_anchor_but_keeps_the_kind() {
        let config = spa_config();
        let mut layer = PopupLayer::new();
        layer.activate(W1, &config, 0, anchor(), VIEWPORT).unwrap();
        let before = layer.state().clone();
        layer.scrolled(Point::new(600.0, 200.0), VIEWPORT);
        match (&before, layer.state()) {
            (
                PopupState::Anchored { group: g1, size: s1, .. },
                PopupState::Anchored { group: g2, size: s2, at, .. },
            ) => {
                assert_eq!(g1, g2);
                assert_eq!(s1, s2);
                assert_eq!(at.x, 630.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn resize_closes_anchored_and_centered_popups() {
        let config = spa_config();
        let mut layer = PopupLayer::new();
        layer.activate(W1, &config, 0, anchor(), VIEWPORT).unwrap();
        layer.resized();
        assert_eq!(*layer.state(), PopupState::Closed);
        assert_eq!(layer.owner(), None);

        let mut config = spa_config();
        config.hotspots[0].kind = HotspotKind::TopAngle;
        config.hotspots[0].top_angle_url = Some("top.jpg".to_string());
        layer.activate(W1, &config, 0, anchor(), VIEWPORT).unwrap();
        layer.resized();
        assert!(!layer.is_open());
    }

    #[test]
    fn scroll_leaves_centered_popups_alone() {
        let mut config = spa_config();
        config.hotspots[0].kind = HotspotKind::QrCode;
        config.hotspots[0].qr_code_url = Some("qr.png".to_string());
        let mut layer = PopupLayer::new();
        layer.activate(W1, &config, 0, anchor(), VIEWPORT).unwrap();
        let before = layer.state().clone();
        layer.scrolled(Point::new(0.0, 0.0), VIEWPORT);
        assert_eq!(*layer.state(), before);
    }

    #[test]
    fn at_most_one_popup_over_random_event_sequences() {
        let mut config = spa_config();
        config.hotspots.push(crate::model::Hotspot {
            name: "Top View".to_string(),
            kind: HotspotKind::TopAngle,
            x_percent: 50.0,
            y_percent: 10.0,
            top_angle_url: Some("top.jpg".to_string()),
            qr_code_url: None,
        });
        let mut rng = SmallRng::seed_from_u64(42);
        let mut layer = PopupLayer::new();
        for _ in 0..2000 {
            match rng.random_range(0..5u8) {
                0 | 1 => {
                    let widget = WidgetId(rng.random_range(1..4));
                    let hotspot = rng.random_range(0..config.hotspots.len());
                    let at = Point::new(
                        rng.random_range(0.0..VIEWPORT.w),
                        rng.random_range(0.0..VIEWPORT.h),
                    );
                    let _ = layer.activate(widget, &config, hotspot, at, VIEWPORT);
                }
                2 => layer.close(),
                3 => layer.scrolled(Point::new(100.0, 100.0), VIEWPORT),
                _ => layer.release(WidgetId(rng.random_range(1..4))),
            }
            // Invariant: an open popup always has exactly one owner.
            assert_eq!(layer.is_open(), layer.owner().is_some());
        }
    }
}
