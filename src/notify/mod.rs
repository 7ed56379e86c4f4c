//! Rate-limited actor notifications
//!
//! The tool logic reports state changes as structured notices; the host
//! renders them as chat text. Repeated notices of the same class to the
//! same actor are suppressed inside a cooldown window so a held toggle
//! key does not flood the chat.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::tool::state::ModeChange;
use crate::world::view::ActorId;

/// Throttling key: notices of the same class share one cooldown slot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageClass {
    ModeChange,
    ToolDeactivated,
}

/// A user-visible state change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    /// The toggle cycle advanced
    Mode(ModeChange),
    /// The tool switched itself off on low charge
    Deactivated,
}

impl Notice {
    pub fn class(&self) -> MessageClass {
        match self {
            Notice::Mode(_) => MessageClass::ModeChange,
            Notice::Deactivated => MessageClass::ToolDeactivated,
        }
    }
}

/// Sink for notices, implemented by the host
pub trait Notifier {
    fn notify(&mut self, actor: ActorId, notice: Notice);
}

/// Notifier that drops everything (headless hosts)
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _actor: ActorId, _notice: Notice) {}
}

/// Per-(actor, class) cooldown in front of a host sink
pub struct RateLimitedNotifier<S: Notifier> {
    sink: S,
    cooldown: Duration,
    last_sent: HashMap<(ActorId, MessageClass), Instant>,
}

impl<S: Notifier> RateLimitedNotifier<S> {
    pub fn new(sink: S, cooldown: Duration) -> Self {
        Self {
            sink,
            cooldown,
            last_sent: HashMap::new(),
        }
    }

    /// Access the wrapped sink
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: Notifier> Notifier for RateLimitedNotifier<S> {
    fn notify(&mut self, actor: ActorId, notice: Notice) {
        let key = (actor, notice.class());
        let now = Instant::now();
        if let Some(last) = self.last_sent.get(&key) {
            if now.duration_since(*last) < self.cooldown {
                log::trace!("suppressed {:?} notice for {:?}", notice.class(), actor);
                return;
            }
        }
        self.last_sent.insert(key, now);
        self.sink.notify(actor, notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::state::AreaMode;

    /// Records every notice it receives
    #[derive(Default)]
    struct RecordingNotifier {
        notices: Vec<(ActorId, Notice)>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&mut self, actor: ActorId, notice: Notice) {
            self.notices.push((actor, notice));
        }
    }

    #[test]
    fn test_suppresses_repeat_within_cooldown() {
        let mut notifier =
            RateLimitedNotifier::new(RecordingNotifier::default(), Duration::from_secs(10));
        let actor = ActorId(1);

        notifier.notify(actor, Notice::Mode(ModeChange::SwitchedOn(AreaMode::Small)));
        notifier.notify(actor, Notice::Mode(ModeChange::ModeChanged(AreaMode::Large)));
        assert_eq!(notifier.sink().notices.len(), 1);
    }

    #[test]
    fn test_passes_after_cooldown() {
        // Zero cooldown means every notice is due
        let mut notifier =
            RateLimitedNotifier::new(RecordingNotifier::default(), Duration::ZERO);
        let actor = ActorId(1);

        notifier.notify(actor, Notice::Mode(ModeChange::SwitchedOff));
        notifier.notify(actor, Notice::Mode(ModeChange::SwitchedOn(AreaMode::Small)));
        assert_eq!(notifier.sink().notices.len(), 2);
    }

    #[test]
    fn test_classes_throttle_independently() {
        let mut notifier =
            RateLimitedNotifier::new(RecordingNotifier::default(), Duration::from_secs(10));
        let actor = ActorId(1);

        notifier.notify(actor, Notice::Mode(ModeChange::SwitchedOff));
        notifier.notify(actor, Notice::Deactivated);
        assert_eq!(notifier.sink().notices.len(), 2);
    }

    #[test]
    fn test_actors_throttle_independently() {
        let mut notifier =
            RateLimitedNotifier::new(RecordingNotifier::default(), Duration::from_secs(10));

        notifier.notify(ActorId(1), Notice::Deactivated);
        notifier.notify(ActorId(2), Notice::Deactivated);
        assert_eq!(notifier.sink().notices.len(), 2);
    }
}
