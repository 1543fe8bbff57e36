//! Popup placement and target highlighting for the active tutorial step.

use std::rc::Rc;

use safar_core::{Dispose, Rect, Size};

use crate::{Placement, Target, TutorialStep};

/// Space between the target and the popup.
pub const POPUP_GAP: f32 = 12.0;
/// Minimum distance between the popup and the viewport edge.
pub const VIEWPORT_MARGIN: f32 = 16.0;

/// Finds where a target currently is on screen.
pub trait TargetLocator {
    fn locate(&self, target: &Target) -> Option<Rect>;
}

/// Applies and removes the temporary highlight on a target.
pub trait Highlighter {
    fn apply(&self, target: &Target);
    fn clear(&self, target: &Target);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayLayout {
    pub popup: Rect,
    /// Resolved target rect, if any; used for the spotlight cut-out.
    pub target: Option<Rect>,
    /// Placement actually used after flipping and fallback.
    pub placement: Placement,
}

fn centered(popup: Size, viewport: Size) -> Rect {
    Rect::new(
        (viewport.width - popup.width) / 2.0,
        (viewport.height - popup.height) / 2.0,
        popup.width,
        popup.height,
    )
}

fn beside(target: Rect, popup: Size, placement: Placement) -> Rect {
    let c = target.center();
    let (x, y) = match placement {
        Placement::Top => (c.x - popup.width / 2.0, target.y - popup.height - POPUP_GAP),
        Placement::Bottom => (c.x - popup.width / 2.0, target.bottom() + POPUP_GAP),
        Placement::Left => (target.x - popup.width - POPUP_GAP, c.y - popup.height / 2.0),
        Placement::Right => (target.right() + POPUP_GAP, c.y - popup.height / 2.0),
        Placement::Center => (c.x - popup.width / 2.0, c.y - popup.height / 2.0),
    };
    Rect::new(x, y, popup.width, popup.height)
}

fn fits(r: &Rect, viewport: Size) -> bool {
    r.x >= VIEWPORT_MARGIN
        && r.y >= VIEWPORT_MARGIN
        && r.right() <= viewport.width - VIEWPORT_MARGIN
        && r.bottom() <= viewport.height - VIEWPORT_MARGIN
}

fn opposite(p: Placement) -> Placement {
    match p {
        Placement::Top => Placement::Bottom,
        Placement::Bottom => Placement::Top,
        Placement::Left => Placement::Right,
        Placement::Right => Placement::Left,
        Placement::Center => Placement::Center,
    }
}

/// Positions a popup of size `popup` next to `target` inside `viewport`.
///
/// `Center`, or a target that could not be resolved, centers the popup in the
/// viewport. If the preferred side does not fit but the opposite side does,
/// the popup flips. The result is always clamped to the viewport margin.
pub fn layout_popup(
    target: Option<Rect>,
    preferred: Placement,
    popup: Size,
    viewport: Size,
) -> OverlayLayout {
    let Some(t) = target.filter(|_| preferred != Placement::Center) else {
        return OverlayLayout {
            popup: centered(popup, viewport).clamp_within(viewport, VIEWPORT_MARGIN),
            target,
            placement: Placement::Center,
        };
    };

    let mut placement = preferred;
    let mut rect = beside(t, popup, preferred);
    if !fits(&rect, viewport) {
        let flipped = beside(t, popup, opposite(preferred));
        if fits(&flipped, viewport) {
            placement = opposite(preferred);
            rect = flipped;
        }
    }
    OverlayLayout {
        popup: rect.clamp_within(viewport, VIEWPORT_MARGIN),
        target: Some(t),
        placement,
    }
}

/// Highlights `target` until the returned guard runs.
pub fn highlight(highlighter: Rc<dyn Highlighter>, target: Target) -> Dispose {
    highlighter.apply(&target);
    Dispose::new(move || highlighter.clear(&target))
}

/// The on-screen overlay: owns the current highlight and lays out the popup.
pub struct TutorialOverlay {
    highlighter: Rc<dyn Highlighter>,
    active: Option<Dispose>,
    layout: Option<OverlayLayout>,
}

impl TutorialOverlay {
    pub fn new(highlighter: Rc<dyn Highlighter>) -> Self {
        Self {
            highlighter,
            active: None,
            layout: None,
        }
    }

    pub fn layout(&self) -> Option<OverlayLayout> {
        self.layout
    }

    /// Moves the overlay to `step`, replacing the previous highlight.
    pub fn show_step(
        &mut self,
        step: &TutorialStep,
        locator: &dyn TargetLocator,
        popup: Size,
        viewport: Size,
    ) -> OverlayLayout {
        self.clear_highlight();
        let rect = step.target.as_ref().and_then(|t| locator.locate(t));
        match (step.target, rect) {
            (Some(t), Some(_)) => {
                self.active = Some(highlight(self.highlighter.clone(), t));
            }
            (Some(t), None) => {
                log::debug!("tutorial target {} not found, centering", t.selector());
            }
            _ => {}
        }
        let layout = layout_popup(rect, step.placement, popup, viewport);
        self.layout = Some(layout);
        layout
    }

    pub fn hide(&mut self) {
        self.clear_highlight();
        self.layout = None;
    }

    fn clear_highlight(&mut self) {
        if let Some(d) = self.active.take() {
            d.run();
        }
    }
}

impl Drop for TutorialOverlay {
    fn drop(&mut self) {
        self.clear_highlight();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StepId;
    use safar_navigation::Screen;
    use std::cell::RefCell;
    use std::collections::HashMap;

    const PHONE: Size = Size::new(390.0, 844.0);
    const POPUP: Size = Size::new(300.0, 160.0);

    #[derive(Default)]
    struct Marks(RefCell<Vec<Target>>);
    impl Highlighter for Marks {
        fn apply(&self, target: &Target) {
            self.0.borrow_mut().push(*target);
        }
        fn clear(&self, target: &Target) {
            self.0.borrow_mut().retain(|t| t != target);
        }
    }

    struct Map(HashMap<Target, Rect>);
    impl TargetLocator for Map {
        fn locate(&self, target: &Target) -> Option<Rect> {
            self.0.get(target).copied()
        }
    }

    fn step_at(target: Option<Target>, placement: Placement) -> TutorialStep {
        TutorialStep {
            id: StepId::RidePickup,
            screen: Screen::Home,
            target,
            placement,
            title_key: "t",
            description_key: "d",
        }
    }

    #[test]
    fn bottom_placement_sits_below_target() {
        let target = Rect::new(20.0, 100.0, 350.0, 48.0);
        let l = layout_popup(Some(target), Placement::Bottom, POPUP, PHONE);
        assert_eq!(l.placement, Placement::Bottom);
        assert_eq!(l.popup, Rect::new(45.0, 160.0, 300.0, 160.0));
    }

    #[test]
    fn top_flips_to_bottom_near_the_top_edge() {
        let target = Rect::new(20.0, 40.0, 350.0, 48.0);
        let l = layout_popup(Some(target), Placement::Top, POPUP, PHONE);
        assert_eq!(l.placement, Placement::Bottom);
        assert_eq!(l.popup.y, 40.0 + 48.0 + POPUP_GAP);
    }

    #[test]
    fn popup_is_clamped_into_viewport() {
        let target = Rect::new(330.0, 400.0, 40.0, 40.0);
        let l = layout_popup(Some(target), Placement::Right, POPUP, PHONE);
        assert!(l.popup.x >= VIEWPORT_MARGIN);
        assert!(l.popup.right() <= PHONE.width - VIEWPORT_MARGIN);
    }

    #[test]
    fn missing_target_centers_without_error() {
        let l = layout_popup(None, Placement::Bottom, POPUP, PHONE);
        assert_eq!(l.placement, Placement::Center);
        assert_eq!(l.popup, Rect::new(45.0, 342.0, 300.0, 160.0));
    }

    #[test]
    fn highlight_moves_with_the_step_and_clears_on_hide() {
        let marks = Rc::new(Marks::default());
        let mut overlay = TutorialOverlay::new(marks.clone());
        let pickup = Target::Id("pickup-input");
        let dest = Target::Id("destination-input");
        let map = Map(HashMap::from([
            (pickup, Rect::new(20.0, 100.0, 350.0, 48.0)),
            (dest, Rect::new(20.0, 160.0, 350.0, 48.0)),
        ]));

        overlay.show_step(&step_at(Some(pickup), Placement::Bottom), &map, POPUP, PHONE);
        assert_eq!(*marks.0.borrow(), vec![pickup]);

        overlay.show_step(&step_at(Some(dest), Placement::Bottom), &map, POPUP, PHONE);
        assert_eq!(*marks.0.borrow(), vec![dest]);

        let missing = Target::Selector(".nowhere");
        let l = overlay.show_step(&step_at(Some(missing), Placement::Top), &map, POPUP, PHONE);
        assert_eq!(l.placement, Placement::Center);
        assert!(marks.0.borrow().is_empty());

        overlay.show_step(&step_at(Some(pickup), Placement::Bottom), &map, POPUP, PHONE);
        drop(overlay);
        assert!(marks.0.borrow().is_empty());
    }
}
