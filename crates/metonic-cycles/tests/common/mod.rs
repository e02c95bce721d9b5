#![allow(dead_code)]

use metonic_core::{Cycle, Segment};

pub fn cycle(text: &str) -> Cycle {
    text.parse().unwrap()
}

pub fn segment(text: &str) -> Segment {
    text.parse().unwrap()
}

pub fn rendered<T: ToString>(items: &[T]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}
