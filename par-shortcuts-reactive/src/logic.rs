//! Boolean combinators over computed values.

use crate::computed::Computed;

/// Logical AND of all `conditions`. An empty set is `true`.
///
/// Evaluation short-circuits at the first `false` condition.
pub fn logic_and<I>(conditions: I) -> Computed<bool>
where
    I: IntoIterator<Item = Computed<bool>>,
{
    let conditions: Vec<Computed<bool>> = conditions.into_iter().collect();
    Computed::new(move || conditions.iter().all(Computed::get))
}

/// Logical NOT of `condition`.
pub fn logic_not(condition: Computed<bool>) -> Computed<bool> {
    Computed::new(move || !condition.get())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Signal;

    #[test]
    fn test_and_empty_is_true() {
        assert!(logic_and(Vec::new()).get());
    }

    #[test]
    fn test_and_tracks_every_input() {
        let a = Signal::new(true);
        let b = Signal::new(true);
        let both = logic_and([Computed::from(a.clone()), Computed::from(b.clone())]);
        assert!(both.get());
        b.set(false);
        assert!(!both.get());
        b.set(true);
        a.set(false);
        assert!(!both.get());
    }

    #[test]
    fn test_not() {
        let focused = Signal::new(false);
        let free = logic_not(Computed::from(focused.clone()));
        assert!(free.get());
        focused.set(true);
        assert!(!free.get());
    }
}
