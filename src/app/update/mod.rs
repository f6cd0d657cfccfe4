use showcase_core::{LockTicket, SettleTicket};

mod core;
mod covers;
mod gestures;
mod navigation;
mod playback;
mod viewport;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    /// Release the gesture lock once the ticket's cooldown has elapsed.
    ScheduleUnlock(LockTicket),
    /// Apply the pending width after the resize debounce.
    ScheduleViewportSettle(SettleTicket),
    LoadCover {
        url: String,
    },
    QuitSafely,
}
