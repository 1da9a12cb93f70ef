#![no_main]

use std::time::Duration;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use scrim_core::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use scrim_render::frame::{HitData, HitId, HitRegion};
use scrim_widgets::{BACKDROP_HIT, Backdrop, BackdropAction, BackdropState};

#[derive(Debug, Arbitrary)]
enum Step {
    Down { on_surface: bool },
    Up { on_surface: bool },
    Drag { on_surface: bool },
    Move,
    Scroll,
    Show,
    Hide,
    Tick { millis: u16 },
}

#[derive(Debug, Arbitrary)]
struct Script {
    fade_in_ms: u16,
    fade_out_ms: u16,
    steps: Vec<Step>,
}

fn surface_hit(id: HitId, on_surface: bool) -> Option<(HitId, HitRegion, HitData)> {
    on_surface.then_some((id, BACKDROP_HIT, 0))
}

fuzz_target!(|script: Script| {
    let hit_id = HitId::new(7);
    let backdrop: Backdrop = Backdrop::new()
        .hit_id(hit_id)
        .fade_in(Duration::from_millis(u64::from(script.fade_in_ms)))
        .fade_out(Duration::from_millis(u64::from(script.fade_out_ms)));
    let mut state = BackdropState::new();

    // Shadow copy of the press discipline: a left-down on the surface arms,
    // a left-up fires only while armed and on the surface, and any left-up
    // disarms.
    let mut armed = false;
    let mut last_generation = state.keyframe_generation();

    for step in &script.steps {
        match step {
            Step::Down { on_surface } => {
                let hit = surface_hit(hit_id, *on_surface);
                let action = backdrop.handle_event(&mut state, &Event::left_down(1, 1), hit);
                assert_eq!(action, None, "a press never fires on button-down");
                armed = *on_surface;
            }
            Step::Up { on_surface } => {
                let hit = surface_hit(hit_id, *on_surface);
                let action = backdrop.handle_event(&mut state, &Event::left_up(1, 1), hit);
                if armed && *on_surface {
                    assert_eq!(action, Some(BackdropAction::Pressed));
                } else {
                    assert_eq!(action, None);
                }
                armed = false;
            }
            Step::Drag { on_surface } => {
                let event = Event::Mouse(MouseEvent::new(
                    MouseEventKind::Drag(MouseButton::Left),
                    1,
                    1,
                ));
                let hit = surface_hit(hit_id, *on_surface);
                let action = backdrop.handle_event(&mut state, &event, hit);
                assert_eq!(action, None, "drags never fire a press");
            }
            Step::Move => {
                let event = Event::Mouse(MouseEvent::new(MouseEventKind::Moved, 1, 1));
                let action = backdrop.handle_event(&mut state, &event, None);
                assert_eq!(action, None);
            }
            Step::Scroll => {
                let event = Event::Mouse(MouseEvent::new(MouseEventKind::ScrollUp, 1, 1));
                let action = backdrop.handle_event(&mut state, &event, None);
                assert_eq!(action, None);
            }
            Step::Show => state.show(),
            Step::Hide => state.hide(),
            Step::Tick { millis } => {
                state.tick(
                    Duration::from_millis(u64::from(*millis)),
                    backdrop.fade_config(),
                );
            }
        }

        let opacity = state.opacity(0.72, backdrop.fade_config());
        assert!(
            (0.0..=1.0).contains(&opacity),
            "opacity left [0, 1]: {opacity}"
        );

        let generation = state.keyframe_generation();
        assert!(generation >= last_generation, "generation went backwards");
        last_generation = generation;
    }
});
