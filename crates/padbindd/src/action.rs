use std::sync::Arc;

use crossbeam_channel::Sender;
use padbind_control::KeyCombo;
use padbind_gamepad::{KeyEvent, KeyEventKind, KeyTarget};
use padbind_profile::{ActionSpec, Macros};

/// Work queued by the handler for the runner.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
    KeyPress(Box<str>),
    KeyRelease(Box<str>),
    KeyTap(KeyCombo),
    Macros(Arc<Macros>),
    Shell(Box<str>),
    Log(Box<str>),
}

impl From<&ActionSpec> for Action {
    fn from(spec: &ActionSpec) -> Self {
        match spec {
            ActionSpec::Keystroke(combo) => Action::KeyTap(combo.clone()),
            ActionSpec::Macros(macros) => Action::Macros(Arc::clone(macros)),
            ActionSpec::Shell(command) => Action::Shell(command.clone()),
            ActionSpec::Log(message) => Action::Log(message.clone()),
        }
    }
}

/// Forwards key events from the handler into the action queue.
pub(crate) struct ChannelTarget {
    tx: Sender<Action>,
}

impl ChannelTarget {
    pub fn new(tx: Sender<Action>) -> Self {
        Self { tx }
    }
}

impl KeyTarget for ChannelTarget {
    fn key_event(&mut self, event: &KeyEvent) {
        let action = match event.kind {
            KeyEventKind::Down => Action::KeyPress(event.key.clone()),
            KeyEventKind::Up => Action::KeyRelease(event.key.clone()),
        };
        let _ = self.tx.send(action);
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::unbounded;
    use padbind_control::Key;

    use super::*;

    #[test]
    fn specs_convert_to_actions() {
        let combo = KeyCombo::from_key(Key::Return);
        assert_eq!(
            Action::from(&ActionSpec::Keystroke(combo.clone())),
            Action::KeyTap(combo)
        );
        assert_eq!(
            Action::from(&ActionSpec::Shell("echo hi".into())),
            Action::Shell("echo hi".into())
        );
        assert_eq!(
            Action::from(&ActionSpec::Log("hello".into())),
            Action::Log("hello".into())
        );
    }

    #[test]
    fn channel_target_queues_key_edges() {
        let (tx, rx) = unbounded();
        let mut target = ChannelTarget::new(tx);

        target.key_event(&KeyEvent::down("space"));
        target.key_event(&KeyEvent::up("space"));

        let actions: Vec<Action> = rx.try_iter().collect();
        assert_eq!(
            actions,
            [
                Action::KeyPress("space".into()),
                Action::KeyRelease("space".into())
            ]
        );
    }
}
