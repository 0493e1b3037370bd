use crate::value_objects::{DiceSpec, MIN_FACE};

/// Simulate one roll of `spec`.
///
/// `next_below(bound)` must return a value in `[0, bound)`. It is called
/// exactly `count` times, always with `sides` as the bound; zero dice return
/// the modifier without touching the source.
pub fn roll<F>(spec: &DiceSpec, mut next_below: F) -> i64
where
    F: FnMut(i32) -> i32,
{
    let modifier = i64::from(spec.modifier());
    if spec.is_constant() {
        return modifier;
    }

    let faces: i64 = (0..spec.count())
        .map(|_| i64::from(next_below(spec.sides())) + i64::from(MIN_FACE))
        .sum();
    faces + modifier
}
