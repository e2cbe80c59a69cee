//! Playback timing of animation sets.

use proptest::prelude::*;
use save_editor::animation::{AnimationClip, AnimationSet, ClipSelector, Frame, Repeat};
use save_editor::render::{Placeholder, RecordingCanvas};
use save_editor::AnimationError;

fn clip(prefix: &str, frame_count: usize, speed_ms: u32) -> AnimationClip<Placeholder> {
    let frames = (0..frame_count)
        .map(|i| Frame::new(Placeholder::new(format!("{prefix}{i}"), 8, 8)))
        .collect();
    AnimationClip::new(frames, speed_ms, Repeat::Infinite).unwrap()
}

#[test]
fn remainder_is_carried_between_advances() {
    let mut set = AnimationSet::with_clips([("idle", clip("idle", 4, 50))]);

    assert_eq!(set.advance(120).unwrap(), 2);
    assert_eq!(set.elapsed_ms(), 20);
    assert_eq!(set.advance(40).unwrap(), 1);
    assert_eq!(set.elapsed_ms(), 10);
    assert_eq!(set.advance(10).unwrap(), 0);

    assert_eq!(set.current().unwrap().current_index(), 3);
    assert_eq!(set.elapsed_ms(), 20);
}

#[test]
fn ordinal_selection_is_clamped() {
    let mut set = AnimationSet::with_clips([
        ("freddy", clip("freddy", 2, 40)),
        ("bonnie", clip("bonnie", 2, 40)),
        ("chica", clip("chica", 2, 40)),
    ]);

    set.set_active(ClipSelector::Ordinal(42), true).unwrap();
    assert_eq!(set.active_name(), Some("chica"));
    set.set_active(ClipSelector::Ordinal(0), true).unwrap();
    assert_eq!(set.active_name(), Some("freddy"));
}

#[test]
fn empty_set_reports_errors() {
    let mut set: AnimationSet<Placeholder> = AnimationSet::new();
    assert_eq!(set.set_active(ClipSelector::Ordinal(0), true), Err(AnimationError::NoClips));
    assert_eq!(set.advance(16), Err(AnimationError::NoneSelected));

    let mut canvas = RecordingCanvas::new();
    assert!(set.render_target(&mut canvas, Default::default()).is_err());
    assert!(canvas.commands.is_empty());
}

#[test]
fn switching_with_reset_restarts_clip() {
    let mut set = AnimationSet::with_clips([
        ("freddy", clip("freddy", 4, 10)),
        ("bonnie", clip("bonnie", 4, 10)),
    ]);
    set.advance(20).unwrap();
    set.set_active("bonnie", false).unwrap();
    set.set_active("freddy", false).unwrap();
    assert_eq!(set.current().unwrap().current_index(), 2);

    set.set_active("freddy", true).unwrap();
    assert_eq!(set.current().unwrap().current_index(), 0);
}

proptest! {
    #[test]
    fn chunked_advance_matches_single_advance(
        speed in 1u32..200,
        frame_count in 1usize..10,
        deltas in proptest::collection::vec(0u64..500, 0..40),
    ) {
        let mut chunked = AnimationSet::with_clips([("a", clip("a", frame_count, speed))]);
        let mut single = AnimationSet::with_clips([("a", clip("a", frame_count, speed))]);

        let mut stepped = 0;
        for delta in &deltas {
            stepped += chunked.advance(*delta).unwrap();
        }
        let total: u64 = deltas.iter().sum();
        let single_stepped = single.advance(total).unwrap();

        prop_assert_eq!(stepped, single_stepped);
        prop_assert_eq!(chunked.elapsed_ms(), single.elapsed_ms());
        prop_assert!(chunked.elapsed_ms() < u64::from(speed));
        prop_assert_eq!(
            chunked.current().unwrap().current_index(),
            single.current().unwrap().current_index()
        );
    }
}
