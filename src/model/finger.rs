// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Hands and fingers.
//!
//! A finger is one digit on one of three "hands": right, left, or the
//! ambiguous either-hand used when a note could be played by both.

use std::fmt;

use super::note::Color;

/// Hue for notes played with the right hand
pub const RIGHT_HUE: u8 = 141;
/// Hue for notes played with the left hand
pub const LEFT_HUE: u8 = 0;
/// Hue for notes that could be played with either hand
pub const EITHER_HUE: u8 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Right,
    Left,
    Either,
}

impl Hand {
    /// The opposite hand (Either has no opposite)
    pub fn other(self) -> Self {
        match self {
            Hand::Right => Hand::Left,
            Hand::Left => Hand::Right,
            Hand::Either => Hand::Either,
        }
    }

    /// Whether this hand is a real hand rather than the ambiguous marker
    pub fn is_resolved(self) -> bool {
        self != Hand::Either
    }

    /// Color a note played with this hand is painted with
    pub fn color(self) -> Color {
        let hue = match self {
            Hand::Right => RIGHT_HUE,
            Hand::Left => LEFT_HUE,
            Hand::Either => EITHER_HUE,
        };
        Color::new(hue as i32, 255, 255)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hand::Right => write!(f, "right"),
            Hand::Left => write!(f, "left"),
            Hand::Either => write!(f, "either"),
        }
    }
}

/// Digit of a hand. `Any` means the digit was not decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Digit {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
    Any,
}

/// A finger on a hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    RightThumb,
    RightIndex,
    RightMiddle,
    RightRing,
    RightPinky,
    RightAny,
    LeftThumb,
    LeftIndex,
    LeftMiddle,
    LeftRing,
    LeftPinky,
    LeftAny,
    EitherThumb,
    EitherIndex,
    EitherMiddle,
    EitherRing,
    EitherPinky,
    EitherAny,
}

impl Finger {
    /// Compose a finger from a hand and a digit
    pub fn new(hand: Hand, digit: Digit) -> Self {
        use Finger::*;
        match (hand, digit) {
            (Hand::Right, Digit::Thumb) => RightThumb,
            (Hand::Right, Digit::Index) => RightIndex,
            (Hand::Right, Digit::Middle) => RightMiddle,
            (Hand::Right, Digit::Ring) => RightRing,
            (Hand::Right, Digit::Pinky) => RightPinky,
            (Hand::Right, Digit::Any) => RightAny,
            (Hand::Left, Digit::Thumb) => LeftThumb,
            (Hand::Left, Digit::Index) => LeftIndex,
            (Hand::Left, Digit::Middle) => LeftMiddle,
            (Hand::Left, Digit::Ring) => LeftRing,
            (Hand::Left, Digit::Pinky) => LeftPinky,
            (Hand::Left, Digit::Any) => LeftAny,
            (Hand::Either, Digit::Thumb) => EitherThumb,
            (Hand::Either, Digit::Index) => EitherIndex,
            (Hand::Either, Digit::Middle) => EitherMiddle,
            (Hand::Either, Digit::Ring) => EitherRing,
            (Hand::Either, Digit::Pinky) => EitherPinky,
            (Hand::Either, Digit::Any) => EitherAny,
        }
    }

    /// Undecided digit on the given hand
    pub fn any(hand: Hand) -> Self {
        Finger::new(hand, Digit::Any)
    }

    pub fn hand(self) -> Hand {
        use Finger::*;
        match self {
            RightThumb | RightIndex | RightMiddle | RightRing | RightPinky | RightAny => {
                Hand::Right
            }
            LeftThumb | LeftIndex | LeftMiddle | LeftRing | LeftPinky | LeftAny => Hand::Left,
            EitherThumb | EitherIndex | EitherMiddle | EitherRing | EitherPinky | EitherAny => {
                Hand::Either
            }
        }
    }

    pub fn digit(self) -> Digit {
        use Finger::*;
        match self {
            RightThumb | LeftThumb | EitherThumb => Digit::Thumb,
            RightIndex | LeftIndex | EitherIndex => Digit::Index,
            RightMiddle | LeftMiddle | EitherMiddle => Digit::Middle,
            RightRing | LeftRing | EitherRing => Digit::Ring,
            RightPinky | LeftPinky | EitherPinky => Digit::Pinky,
            RightAny | LeftAny | EitherAny => Digit::Any,
        }
    }

    /// Same digit moved onto another hand
    pub fn on_hand(self, hand: Hand) -> Self {
        Finger::new(hand, self.digit())
    }
}
