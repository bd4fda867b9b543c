//! Scripted drag demo: grabs an opened sheet, drags it down past the
//! half-open midpoint, releases, and runs the frame loop until the spring
//! settles.

use std::cell::RefCell;
use std::rc::Rc;

use cabinet::prelude::*;
use log::info;

const FRAME: f32 = 1.0 / 60.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let animator = Rc::new(RefCell::new(FrameAnimator::new()));
    let mut sheet = CabinetSheet::new(568.0, SheetState::Opened, animator.clone());

    info!(
        "sheet starts {:?} at offset {}",
        sheet.current_state(),
        sheet.offset()
    );

    sheet.handle_event(GestureEvent::began());
    for _ in 0..8 {
        sheet.handle_event(GestureEvent::moved_with_velocity(32.0, 480.0));
    }
    sheet.handle_event(GestureEvent::ended(12.0));

    info!(
        "released at offset {}: committed {:?}, settling toward {}",
        sheet.offset(),
        sheet.current_state(),
        sheet.anchors().offset_for(sheet.current_state())
    );

    for frame in 0..2_000 {
        let update = animator.borrow_mut().tick(FRAME);
        if let Some(offset) = update.offset {
            sheet.sync_offset(offset);
            if frame % 30 == 0 {
                info!("frame {frame}: offset {offset:.1} dimming {:.2}", update.dimming);
            }
        }
        if update.primary_finished {
            sheet.settle_finished();
            info!(
                "settled after {} frames: {:?} at offset {}",
                frame + 1,
                sheet.current_state(),
                sheet.offset()
            );
            break;
        }
    }

    assert_eq!(sheet.phase(), DragPhase::Idle);
}
