use std::rc::Rc;

use yew::Reducible;

/// Horizontal travel, in pixels, past which a release sends the card away.
pub const SWIPE_THRESHOLD: f64 = 80.0;
/// Degrees of tilt per pixel of horizontal drag.
pub const DRAG_ROTATION: f64 = 0.08;
/// Must match the `transition` duration on `.swipe-card`.
pub const EXIT_DURATION_MS: u32 = 300;

const EXIT_TRAVEL_X: f64 = 260.0;
const EXIT_TRAVEL_Y: f64 = 40.0;
const EXIT_TILT: f64 = 25.0;

pub type CardId = usize;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Stacking order of the cards. Index 0 is the front card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardRing {
    order: Vec<CardId>,
}

impl CardRing {
    pub fn new(len: usize) -> Self {
        Self {
            order: (0..len).collect(),
        }
    }

    pub fn front(&self) -> Option<CardId> {
        self.order.first().copied()
    }

    pub fn order(&self) -> &[CardId] {
        &self.order
    }

    pub fn rotate_front_to_back(&mut self) {
        if !self.order.is_empty() {
            self.order.rotate_left(1);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub card: CardId,
    pub origin: Point,
    pub delta: Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExitToken(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    fn of(dx: f64) -> Self {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    }

    pub fn sign(&self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExitState {
    pub card: CardId,
    pub direction: Direction,
    pub token: ExitToken,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselAction {
    Press(Point),
    Move(Point),
    Release,
    FinishExit(ExitToken),
}

/// Swipeable card stack. Idle when neither `drag` nor `exit` is set.
#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    ring: CardRing,
    drag: Option<DragState>,
    exit: Option<ExitState>,
    issued: u64,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            ring: CardRing::new(len),
            drag: None,
            exit: None,
            issued: 0,
        }
    }

    pub fn ring(&self) -> &CardRing {
        &self.ring
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn exit(&self) -> Option<&ExitState> {
        self.exit.as_ref()
    }

    pub fn pending_exit(&self) -> Option<ExitToken> {
        self.exit.map(|exit| exit.token)
    }

    pub fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Press(point) => self.press(point),
            CarouselAction::Move(point) => self.move_to(point),
            CarouselAction::Release => self.release(),
            CarouselAction::FinishExit(token) => self.finish_exit(token),
        }
    }

    fn press(&mut self, point: Point) {
        if self.exit.is_some() {
            return;
        }
        let Some(card) = self.ring.front() else {
            return;
        };
        self.drag = Some(DragState {
            card,
            origin: point,
            delta: Point::default(),
        });
    }

    fn move_to(&mut self, point: Point) {
        if let Some(drag) = self.drag.as_mut() {
            drag.delta = Point::new(point.x - drag.origin.x, point.y - drag.origin.y);
        }
    }

    fn release(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        if drag.delta.x.abs() > SWIPE_THRESHOLD {
            self.issued += 1;
            self.exit = Some(ExitState {
                card: drag.card,
                direction: Direction::of(drag.delta.x),
                token: ExitToken(self.issued),
            });
        }
    }

    fn finish_exit(&mut self, token: ExitToken) {
        let Some(exit) = self.exit else {
            return;
        };
        if exit.token != token {
            return;
        }
        if self.ring.front() == Some(exit.card) {
            self.ring.rotate_front_to_back();
        }
        self.exit = None;
    }

    /// Inline transform for `card`, given its place in the stack.
    pub fn transform_for(&self, card: CardId) -> CardTransform {
        let depth = self
            .ring
            .order()
            .iter()
            .position(|id| *id == card)
            .unwrap_or(0);
        if depth > 0 {
            return card_transform(depth, None, None);
        }
        let drag = self.drag.filter(|drag| drag.card == card && self.exit.is_none());
        let exit = self.exit.filter(|exit| exit.card == card);
        card_transform(0, drag.as_ref(), exit.as_ref())
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate_deg: f64,
    pub scale: f64,
    pub opacity: f64,
    pub brightness: f64,
    pub z_index: i32,
}

impl CardTransform {
    fn neutral(depth: usize) -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            rotate_deg: 0.0,
            scale: 1.0,
            opacity: 1.0,
            brightness: 1.0,
            z_index: 10 - depth as i32,
        }
    }

    pub fn to_style(&self) -> String {
        format!(
            "transform: scale({}) translate({}px, {}px) rotate({}deg); opacity: {}; filter: brightness({}); z-index: {};",
            self.scale,
            self.translate_x,
            self.translate_y,
            self.rotate_deg,
            self.opacity,
            self.brightness,
            self.z_index,
        )
    }
}

/// Layout of a card at stack `depth` (0 is the front card). Only the front
/// card follows the drag or flies off on exit; the rest fan out behind it.
pub fn card_transform(depth: usize, drag: Option<&DragState>, exit: Option<&ExitState>) -> CardTransform {
    let mut transform = CardTransform::neutral(depth);

    if depth > 0 {
        let d = depth as f64;
        transform.scale = 1.0 - d * 0.04;
        transform.translate_x = d * 20.0;
        transform.translate_y = d * -25.0;
        transform.rotate_deg = d * 3.0;
        transform.opacity = 1.0 - d * 0.08;
        transform.brightness = 1.0 - d * 0.15;
        return transform;
    }

    if let Some(exit) = exit {
        let sign = exit.direction.sign();
        transform.translate_x = EXIT_TRAVEL_X * sign;
        transform.translate_y = EXIT_TRAVEL_Y;
        transform.rotate_deg = EXIT_TILT * sign;
        transform.opacity = 0.0;
    } else if let Some(drag) = drag {
        transform.translate_x = drag.delta.x;
        transform.translate_y = drag.delta.y;
        transform.rotate_deg = drag.delta.x * DRAG_ROTATION;
    }

    transform
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(carousel: &mut Carousel, dx: f64) {
        carousel.apply(CarouselAction::Press(Point::new(100.0, 200.0)));
        carousel.apply(CarouselAction::Move(Point::new(100.0 + dx / 2.0, 205.0)));
        carousel.apply(CarouselAction::Move(Point::new(100.0 + dx, 210.0)));
        carousel.apply(CarouselAction::Release);
    }

    #[test]
    fn long_swipe_rotates_front_card_to_back_after_exit() {
        let mut carousel = Carousel::new(3);
        swipe(&mut carousel, 120.0);

        let exit = *carousel.exit().unwrap();
        assert_eq!(exit.card, 0);
        assert_eq!(exit.direction, Direction::Right);
        assert!(carousel.drag().is_none());
        assert_eq!(carousel.ring().order(), &[0, 1, 2]);

        carousel.apply(CarouselAction::FinishExit(exit.token));
        assert_eq!(carousel.ring().order(), &[1, 2, 0]);
        assert!(carousel.exit().is_none());
    }

    #[test]
    fn short_swipe_snaps_back() {
        let mut carousel = Carousel::new(3);
        swipe(&mut carousel, 50.0);
        assert_eq!(carousel.ring().order(), &[0, 1, 2]);
        assert!(carousel.exit().is_none());
        assert!(carousel.drag().is_none());
        assert_eq!(carousel.transform_for(0), card_transform(0, None, None));
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut carousel = Carousel::new(3);
        swipe(&mut carousel, -80.0);
        assert!(carousel.exit().is_none());

        swipe(&mut carousel, -81.0);
        assert_eq!(carousel.exit().unwrap().direction, Direction::Left);
    }

    #[test]
    fn press_is_ignored_while_exiting() {
        let mut carousel = Carousel::new(3);
        swipe(&mut carousel, 150.0);
        carousel.apply(CarouselAction::Press(Point::new(0.0, 0.0)));
        assert!(carousel.drag().is_none());
    }

    #[test]
    fn move_without_press_does_nothing() {
        let mut carousel = Carousel::new(3);
        carousel.apply(CarouselAction::Move(Point::new(500.0, 0.0)));
        carousel.apply(CarouselAction::Release);
        assert_eq!(carousel, Carousel::new(3));
    }

    #[test]
    fn drag_delta_is_relative_to_origin() {
        let mut carousel = Carousel::new(3);
        carousel.apply(CarouselAction::Press(Point::new(40.0, 60.0)));
        carousel.apply(CarouselAction::Move(Point::new(90.0, 45.0)));
        let drag = carousel.drag().unwrap();
        assert_eq!(drag.card, 0);
        assert_eq!(drag.delta, Point::new(50.0, -15.0));

        let front = carousel.transform_for(0);
        assert_eq!(front.translate_x, 50.0);
        assert_eq!(front.translate_y, -15.0);
        assert!((front.rotate_deg - 4.0).abs() < 1e-9);
    }

    #[test]
    fn stale_token_is_ignored() {
        let mut carousel = Carousel::new(3);
        swipe(&mut carousel, 120.0);
        let first = carousel.pending_exit().unwrap();
        carousel.apply(CarouselAction::FinishExit(first));
        assert_eq!(carousel.ring().order(), &[1, 2, 0]);

        // A second timer for the same exit must not rotate again.
        carousel.apply(CarouselAction::FinishExit(first));
        assert_eq!(carousel.ring().order(), &[1, 2, 0]);

        swipe(&mut carousel, -120.0);
        carousel.apply(CarouselAction::FinishExit(first));
        assert_eq!(carousel.ring().order(), &[1, 2, 0]);
        assert!(carousel.exit().is_some());
    }

    #[test]
    fn ring_stays_a_permutation() {
        let mut carousel = Carousel::new(4);
        for i in 0..9 {
            swipe(&mut carousel, if i % 2 == 0 { 200.0 } else { -200.0 });
            if let Some(token) = carousel.pending_exit() {
                carousel.apply(CarouselAction::FinishExit(token));
            }
            let mut sorted = carousel.ring().order().to_vec();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![0, 1, 2, 3]);
        }
        assert_eq!(carousel.ring().order(), &[1, 2, 3, 0]);
    }

    #[test]
    fn exiting_card_flies_off_and_fades() {
        let mut carousel = Carousel::new(3);
        swipe(&mut carousel, -100.0);
        let front = carousel.transform_for(0);
        assert_eq!(front.translate_x, -260.0);
        assert_eq!(front.translate_y, 40.0);
        assert_eq!(front.rotate_deg, -25.0);
        assert_eq!(front.opacity, 0.0);
    }

    #[test]
    fn back_cards_fan_out_by_depth() {
        let t = card_transform(2, None, None);
        assert!((t.scale - 0.92).abs() < 1e-9);
        assert_eq!(t.translate_x, 40.0);
        assert_eq!(t.translate_y, -50.0);
        assert_eq!(t.rotate_deg, 6.0);
        assert!((t.opacity - 0.84).abs() < 1e-9);
        assert!((t.brightness - 0.7).abs() < 1e-9);
        assert_eq!(t.z_index, 8);
    }

    #[test]
    fn back_cards_ignore_drag() {
        let drag = DragState {
            card: 1,
            origin: Point::default(),
            delta: Point::new(300.0, 0.0),
        };
        assert_eq!(card_transform(1, Some(&drag), None), card_transform(1, None, None));
    }

    #[test]
    fn reducer_keeps_state_when_nothing_changes() {
        let state = Rc::new(Carousel::new(3));
        let next = state.clone().reduce(CarouselAction::Release);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
