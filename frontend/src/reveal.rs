//! Staggered fade/slide-in sequencing.
//!
//! Each animated element runs through `Hidden -> Revealing -> Revealed` exactly
//! once. Mount-triggered groups start every item relative to the moment the
//! group is activated; viewport-triggered items start relative to their own
//! first intersection. Either way item `i` waits `i * stagger` before it starts.

/// Length of a single item's transition, independent of group size.
pub const REVEAL_DURATION_MS: u32 = 500;
pub const DEFAULT_STAGGER_MS: u32 = 100;
/// Vertical offset of the pre-transition state.
pub const REVEAL_OFFSET_PX: u32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    OnMount,
    OnViewportEntry,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Hidden,
    Revealing,
    Revealed,
}

impl Phase {
    /// Inline style for an element in this phase.
    pub fn style(self) -> String {
        let transition = format!(
            "transition: opacity {d}ms ease-out, transform {d}ms ease-out;",
            d = REVEAL_DURATION_MS
        );
        match self {
            Phase::Hidden => format!(
                "opacity: 0; transform: translateY({}px); {}",
                REVEAL_OFFSET_PX, transition
            ),
            Phase::Revealing | Phase::Revealed => {
                format!("opacity: 1; transform: translateY(0); {}", transition)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    /// The trigger fired and the item's stagger delay elapsed.
    Start,
    /// The fixed-duration transition completed.
    Finish,
}

/// Per-element reveal state machine. Transitions that do not apply to the
/// current phase are ignored, so nothing ever returns to `Hidden`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
    phase: Phase,
}

impl Reveal {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the next state, or `None` when the action does not apply.
    pub fn apply(&self, action: RevealAction) -> Option<Reveal> {
        let phase = match (self.phase, action) {
            (Phase::Hidden, RevealAction::Start) => Phase::Revealing,
            (Phase::Revealing, RevealAction::Finish) => Phase::Revealed,
            _ => return None,
        };
        Some(Reveal { phase })
    }
}

/// A set of elements revealed together with a per-item stagger.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationGroup<T> {
    pub trigger: Trigger,
    pub stagger_ms: u32,
    pub items: Vec<T>,
}

impl<T> AnimationGroup<T> {
    pub fn on_mount(items: impl IntoIterator<Item = T>) -> Self {
        Self::new(Trigger::OnMount, items)
    }

    pub fn on_viewport_entry(items: impl IntoIterator<Item = T>) -> Self {
        Self::new(Trigger::OnViewportEntry, items)
    }

    fn new(trigger: Trigger, items: impl IntoIterator<Item = T>) -> Self {
        Self {
            trigger,
            stagger_ms: DEFAULT_STAGGER_MS,
            items: items.into_iter().collect(),
        }
    }

    /// Delay between the trigger firing and item `index` starting.
    pub fn delay_for(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        index.saturating_mul(self.stagger_ms)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, u32, &T)> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(move |(i, item)| (i, self.delay_for(i), item))
    }
}

#[cfg(test)]
impl<T> AnimationGroup<T> {
    pub fn with_stagger(mut self, stagger_ms: u32) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    /// Start/finish times of every item, in milliseconds, for a group whose
    /// trigger fires at `activated_at`. Viewport groups fire per item, so
    /// this is what a group that enters the viewport all at once looks like.
    pub fn timeline(&self, activated_at: u64) -> Vec<(u64, u64)> {
        (0..self.items.len())
            .map(|i| {
                let start = activated_at + u64::from(self.delay_for(i));
                (start, start + u64::from(REVEAL_DURATION_MS))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn walks_hidden_revealing_revealed() {
        let hidden = Reveal::default();
        assert_eq!(hidden.phase(), Phase::Hidden);

        let revealing = hidden.apply(RevealAction::Start).unwrap();
        assert_eq!(revealing.phase(), Phase::Revealing);

        let revealed = revealing.apply(RevealAction::Finish).unwrap();
        assert_eq!(revealed.phase(), Phase::Revealed);
    }

    #[test]
    fn revealed_is_terminal() {
        let revealed = Reveal::default()
            .apply(RevealAction::Start)
            .and_then(|r| r.apply(RevealAction::Finish))
            .unwrap();
        assert_eq!(revealed.apply(RevealAction::Start), None);
        assert_eq!(revealed.apply(RevealAction::Finish), None);
    }

    #[test]
    fn cannot_finish_before_starting() {
        assert_eq!(Reveal::default().apply(RevealAction::Finish), None);
    }

    #[test]
    fn hidden_style_is_offset_and_transparent() {
        let style = Phase::Hidden.style();
        assert!(style.starts_with("opacity: 0; transform: translateY(20px);"));
        assert!(style.contains("opacity 500ms"));
        assert!(Phase::Revealing.style().starts_with("opacity: 1;"));
        assert_eq!(Phase::Revealing.style(), Phase::Revealed.style());
    }

    #[test]
    fn default_stagger_is_100ms() {
        let group = AnimationGroup::on_mount(["a", "b", "c", "d"]);
        assert_eq!(group.trigger, Trigger::OnMount);
        let delays: Vec<u32> = group.iter().map(|(_, delay, _)| delay).collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
    }

    #[test]
    fn duration_does_not_depend_on_group_size() {
        let small = AnimationGroup::on_viewport_entry(0..2).timeline(0);
        let large = AnimationGroup::on_viewport_entry(0..20).timeline(0);
        assert!(small
            .iter()
            .chain(large.iter())
            .all(|(start, end)| end - start == u64::from(REVEAL_DURATION_MS)));
    }

    proptest! {
        #[test]
        fn item_starts_at_index_times_stagger(
            n in 0usize..64,
            stagger in 0u32..1_000,
            activated_at in 0u64..100_000,
        ) {
            let group = AnimationGroup::on_mount(0..n).with_stagger(stagger);
            let timeline = group.timeline(activated_at);
            prop_assert_eq!(timeline.len(), n);
            for (i, delay, _) in group.iter() {
                prop_assert_eq!(delay, i as u32 * stagger);
            }
            for (i, (start, _)) in timeline.into_iter().enumerate() {
                prop_assert_eq!(start, activated_at + i as u64 * u64::from(stagger));
            }
        }

        #[test]
        fn no_action_sequence_returns_to_hidden(
            actions in proptest::collection::vec(prop_oneof![
                Just(RevealAction::Start),
                Just(RevealAction::Finish),
            ], 0..32),
        ) {
            let mut reveal = Reveal::default();
            let mut left_hidden = false;
            for action in actions {
                if let Some(next) = reveal.apply(action) {
                    reveal = next;
                }
                left_hidden |= reveal.phase() != Phase::Hidden;
                if left_hidden {
                    prop_assert_ne!(reveal.phase(), Phase::Hidden);
                }
            }
        }
    }
}
