//! Line shape classification and scores
//!
//! A nine-cell window is matched against a fixed table of stone/gap
//! templates. The table is walked in one fixed order and the first
//! family that matches decides the shape, so a window never scores as
//! two shapes at once. Both the templates and the walk order are the
//! scoring contract; changing either changes how the computer plays.

use super::window::{Token, Window};

/// Shape scores per direction
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - immediate win
    pub const FIVE: i32 = 1_000_000;
    /// Live four: _PPPP_ (completes either way)
    pub const LIVE_FOUR: i32 = 100_000;
    /// Rush four: four with exactly one way to complete
    pub const RUSH_FOUR: i32 = 10_000;
    /// Live three: _PPP_ (promotes to a four either way)
    pub const LIVE_THREE: i32 = 5_000;
    /// Sleep three: three with one open route
    pub const SLEEP_THREE: i32 = 1_000;
    /// Live two: __PP__ (room on both sides)
    pub const LIVE_TWO: i32 = 500;
    /// Sleep two: two with one open route
    pub const SLEEP_TWO: i32 = 100;
    /// Live one: _P_
    pub const LIVE_ONE: i32 = 50;
    /// Sleep one: a lone stone with one open neighbor
    pub const SLEEP_ONE: i32 = 10;
}

/// Shape classes a window can match, strongest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Five,
    LiveFour,
    RushFour,
    LiveThree,
    SleepThree,
    LiveTwo,
    SleepTwo,
    LiveOne,
    SleepOne,
}

impl Shape {
    /// Score this shape contributes for one direction
    #[inline]
    pub const fn score(self) -> i32 {
        match self {
            Shape::Five => PatternScore::FIVE,
            Shape::LiveFour => PatternScore::LIVE_FOUR,
            Shape::RushFour => PatternScore::RUSH_FOUR,
            Shape::LiveThree => PatternScore::LIVE_THREE,
            Shape::SleepThree => PatternScore::SLEEP_THREE,
            Shape::LiveTwo => PatternScore::LIVE_TWO,
            Shape::SleepTwo => PatternScore::SLEEP_TWO,
            Shape::LiveOne => PatternScore::LIVE_ONE,
            Shape::SleepOne => PatternScore::SLEEP_ONE,
        }
    }
}

const P: Token = Token::Own;
const E: Token = Token::Empty;

const FIVE: &[Token] = &[P, P, P, P, P];
const LIVE_FOUR: &[Token] = &[E, P, P, P, P, E];
const FOUR: &[Token] = &[P, P, P, P];
const FOUR_OPEN_LEFT: &[Token] = &[E, P, P, P, P];
const FOUR_OPEN_RIGHT: &[Token] = &[P, P, P, P, E];
const LIVE_THREE: &[Token] = &[E, P, P, P, E];
const LIVE_TWO: &[Token] = &[E, E, P, P, E, E];
const SLEEP_THREES: [&[Token]; 4] = [
    &[E, P, P, P],
    &[P, P, P, E],
    &[E, P, E, P, P, E],
    &[E, P, P, E, P, E],
];
const SLEEP_TWOS: [&[Token]; 3] = [
    &[E, P, P],
    &[P, P, E],
    &[E, P, E, P, E],
];
const LIVE_ONE: &[Token] = &[E, P, E];
const SLEEP_ONES: [&[Token]; 2] = [&[E, P], &[P, E]];

/// True when `pattern` occurs as a contiguous run inside `window`
#[inline]
fn contains(window: &[Token], pattern: &[Token]) -> bool {
    window.windows(pattern.len()).any(|run| run == pattern)
}

#[inline]
fn contains_any(window: &[Token], patterns: &[&[Token]]) -> bool {
    patterns.iter().any(|pattern| contains(window, pattern))
}

/// Classify the strongest shape in a window.
///
/// Rules run top to bottom; the first hit wins. Live two sits above
/// sleep three on purpose even though it scores less. A four with both
/// ends blocked matches nothing and scores zero.
pub fn classify(window: &Window) -> Option<Shape> {
    if contains(window, FIVE) {
        return Some(Shape::Five);
    }
    if contains(window, LIVE_FOUR) {
        return Some(Shape::LiveFour);
    }
    if contains(window, FOUR)
        && (contains(window, FOUR_OPEN_LEFT) || contains(window, FOUR_OPEN_RIGHT))
    {
        return Some(Shape::RushFour);
    }
    if contains(window, LIVE_THREE) {
        return Some(Shape::LiveThree);
    }
    if contains(window, LIVE_TWO) {
        return Some(Shape::LiveTwo);
    }
    if contains_any(window, &SLEEP_THREES) {
        return Some(Shape::SleepThree);
    }
    if contains_any(window, &SLEEP_TWOS) {
        return Some(Shape::SleepTwo);
    }
    if contains(window, LIVE_ONE) {
        return Some(Shape::LiveOne);
    }
    if contains_any(window, &SLEEP_ONES) {
        return Some(Shape::SleepOne);
    }
    None
}

/// Score of a window: the matched shape's score, zero otherwise
#[inline]
#[must_use]
pub fn score_window(window: &Window) -> i32 {
    classify(window).map_or(0, Shape::score)
}
