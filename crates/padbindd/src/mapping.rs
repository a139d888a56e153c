use crossbeam_channel::Sender;
use padbind_handler::{AxisBinding, ButtonBinding, DeviceIndex, GamepadMapping};
use padbind_profile::{ActionSpec, AxisProfile, ButtonProfile, GamepadProfile};

use crate::action::Action;
use crate::print_info;

/// Turn profile entries into handler mappings whose callbacks queue actions.
pub(crate) fn build_mappings(gamepads: &[GamepadProfile], tx: &Sender<Action>) -> Vec<GamepadMapping> {
    gamepads.iter().map(|gamepad| build_mapping(gamepad, tx)).collect()
}

fn build_mapping(gamepad: &GamepadProfile, tx: &Sender<Action>) -> GamepadMapping {
    let identifier = gamepad.identifier.clone();
    let mut mapping = GamepadMapping::new(gamepad.identifier.clone())
        .debug(gamepad.debug)
        .on_connect(device_sender(tx, gamepad.on_connect.as_ref(), identifier.clone(), "connected"))
        .on_disconnect(device_sender(tx, gamepad.on_disconnect.as_ref(), identifier, "disconnected"));

    for button in &gamepad.buttons {
        mapping = mapping.button(build_button(button, tx));
    }
    for axis in &gamepad.axes {
        mapping = mapping.axis(build_axis(axis, tx));
    }
    mapping
}

fn build_button(button: &ButtonProfile, tx: &Sender<Action>) -> ButtonBinding {
    let mut binding = ButtonBinding::new(button.index);
    if let Some(key) = &button.key {
        binding = binding.key(key.clone());
    }
    if let Some(throttle) = button.throttle {
        binding = binding.throttle(throttle);
    }
    if let Some(spec) = &button.on_click {
        binding = binding.on_click(sender(tx, spec));
    }
    if let Some(spec) = &button.on_press {
        binding = binding.on_press(sender(tx, spec));
    }
    if let Some(spec) = &button.on_hold {
        binding = binding.on_hold(sender(tx, spec));
    }
    if let Some(spec) = &button.on_release {
        binding = binding.on_release(sender(tx, spec));
    }
    binding
}

fn build_axis(axis: &AxisProfile, tx: &Sender<Action>) -> AxisBinding {
    let mut binding = AxisBinding::new(axis.index);
    if let Some(threshold) = axis.positive_threshold {
        binding = binding.positive_threshold(threshold);
    }
    if let Some(threshold) = axis.negative_threshold {
        binding = binding.negative_threshold(threshold);
    }
    if let Some(throttle) = axis.throttle {
        binding = binding.throttle(throttle);
    }
    if let Some(spec) = &axis.on_positive {
        binding = binding.on_positive(sender(tx, spec));
    }
    if let Some(spec) = &axis.on_negative {
        binding = binding.on_negative(sender(tx, spec));
    }
    if let Some(spec) = &axis.on_neutral {
        binding = binding.on_neutral(sender(tx, spec));
    }
    binding
}

fn sender(tx: &Sender<Action>, spec: &ActionSpec) -> impl Fn() + 'static {
    let tx = tx.clone();
    let action = Action::from(spec);
    move || {
        let _ = tx.send(action.clone());
    }
}

fn device_sender(
    tx: &Sender<Action>,
    spec: Option<&ActionSpec>,
    identifier: Box<str>,
    change: &'static str,
) -> impl Fn(DeviceIndex) + 'static {
    let tx = tx.clone();
    let action = spec.map(Action::from);
    move |index| {
        print_info!("gamepad {index} {change} (mapping \"{identifier}\")");
        if let Some(action) = &action {
            let _ = tx.send(action.clone());
        }
    }
}
