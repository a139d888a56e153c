use std::sync::Arc;
use std::time::Duration;

use padbind_control::KeyCombo;

use crate::profile::{ActionSpec, AxisProfile, ButtonProfile, GamepadProfile, Profile};

use super::profile::{ProfileV1, ProfileV1Action, ProfileV1Axis, ProfileV1Button, ProfileV1Gamepad};
use super::Error;

impl ProfileV1 {
    pub(crate) fn into_profile(self) -> Result<Profile, Error> {
        let gamepads = self
            .gamepads
            .into_iter()
            .map(parse_gamepad)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Profile {
            options: self.options,
            shell: self.shell,
            gamepads,
        })
    }
}

fn parse_gamepad(raw: ProfileV1Gamepad) -> Result<GamepadProfile, Error> {
    let context = format!("gamepad \"{}\"", raw.identifier);

    let buttons = raw
        .buttons
        .into_iter()
        .map(|button| parse_button(button, &context))
        .collect::<Result<Vec<_>, _>>()?;
    let axes = raw
        .axes
        .into_iter()
        .map(|axis| parse_axis(axis, &context))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GamepadProfile {
        on_connect: parse_optional_action(raw.on_connect, &context, "on_connect")?,
        on_disconnect: parse_optional_action(raw.on_disconnect, &context, "on_disconnect")?,
        identifier: raw.identifier.into(),
        debug: raw.debug,
        buttons,
        axes,
    })
}

fn parse_button(raw: ProfileV1Button, parent: &str) -> Result<ButtonProfile, Error> {
    let context = format!("{parent} button {}", raw.index);
    if let Some(key) = &raw.key {
        parse_combo(key, &context)?;
    }

    Ok(ButtonProfile {
        index: raw.index,
        key: raw.key.map(Into::into),
        throttle: raw.throttle_ms.map(Duration::from_millis),
        on_click: parse_optional_action(raw.on_click, &context, "on_click")?,
        on_press: parse_optional_action(raw.on_press, &context, "on_press")?,
        on_hold: parse_optional_action(raw.on_hold, &context, "on_hold")?,
        on_release: parse_optional_action(raw.on_release, &context, "on_release")?,
    })
}

fn parse_axis(raw: ProfileV1Axis, parent: &str) -> Result<AxisProfile, Error> {
    let context = format!("{parent} axis {}", raw.index);

    Ok(AxisProfile {
        index: raw.index,
        positive_threshold: raw.positive_threshold,
        negative_threshold: raw.negative_threshold,
        throttle: raw.throttle_ms.map(Duration::from_millis),
        on_positive: parse_optional_action(raw.on_positive, &context, "on_positive")?,
        on_negative: parse_optional_action(raw.on_negative, &context, "on_negative")?,
        on_neutral: parse_optional_action(raw.on_neutral, &context, "on_neutral")?,
    })
}

fn parse_optional_action(
    raw: Option<ProfileV1Action>,
    context: &str,
    trigger: &str,
) -> Result<Option<ActionSpec>, Error> {
    raw.map(|action| parse_action(action, &format!("{context} {trigger}")))
        .transpose()
}

fn parse_action(raw: ProfileV1Action, context: &str) -> Result<ActionSpec, Error> {
    match (raw.keystroke, raw.macros, raw.shell, raw.log) {
        (Some(keystroke), None, None, None) => {
            Ok(ActionSpec::Keystroke(parse_combo(&keystroke, context)?))
        }
        (None, Some(macros), None, None) if !macros.is_empty() => {
            let combos = macros
                .iter()
                .map(|combo| parse_combo(combo, context))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ActionSpec::Macros(Arc::new(combos)))
        }
        (None, None, Some(shell), None) => Ok(ActionSpec::Shell(shell.into())),
        (None, None, None, Some(message)) => Ok(ActionSpec::Log(message.into())),
        _ => Err(Error::InvalidActions(context.to_string())),
    }
}

fn parse_combo(input: &str, context: &str) -> Result<KeyCombo, Error> {
    input
        .parse::<KeyCombo>()
        .map_err(|e| Error::KeyParse(context.to_string(), e))
}

#[cfg(test)]
mod tests {
    use padbind_control::Key;

    use super::*;

    fn parse(yaml: &str) -> Result<Profile, Error> {
        let raw: ProfileV1 = serde_yaml::from_str(yaml).unwrap();
        raw.into_profile()
    }

    const FULL: &str = r#"
version: 1
options:
  default_action_throttle_ms: 250
  list_available_gamepads: true
shell: /bin/sh
gamepads:
  - identifier: "Xbox"
    debug: true
    on_connect: { log: "xbox connected" }
    buttons:
      - index: 0
        key: "enter"
        throttle_ms: 200
        on_click: { keystroke: "cmd+c" }
        on_press: { macros: ["a", "b"] }
        on_hold: { shell: "echo hold" }
        on_release: { log: "released" }
    axes:
      - index: 1
        positive_threshold: 0.5
        negative_threshold: -0.5
        on_positive: { keystroke: "arrow_down" }
  - identifier: "PS4"
"#;

    #[test]
    fn parses_full_profile() {
        let profile = parse(FULL).unwrap();

        assert_eq!(profile.options.default_action_throttle_ms, 250);
        assert!(profile.options.list_available_gamepads);
        assert_eq!(profile.shell.as_deref(), Some("/bin/sh"));
        assert_eq!(profile.gamepads.len(), 2);

        let xbox = &profile.gamepads[0];
        assert_eq!(&*xbox.identifier, "Xbox");
        assert!(xbox.debug);
        assert_eq!(xbox.on_connect, Some(ActionSpec::Log("xbox connected".into())));
        assert_eq!(xbox.on_disconnect, None);

        let button = &xbox.buttons[0];
        assert_eq!(button.key.as_deref(), Some("enter"));
        assert_eq!(button.throttle, Some(Duration::from_millis(200)));
        assert_eq!(button.on_click, Some(ActionSpec::Keystroke("cmd+c".parse().unwrap())));
        assert_eq!(
            button.on_press,
            Some(ActionSpec::Macros(Arc::new(vec![
                KeyCombo::from_key(Key::Unicode('a')),
                KeyCombo::from_key(Key::Unicode('b')),
            ])))
        );
        assert_eq!(button.on_hold, Some(ActionSpec::Shell("echo hold".into())));

        let axis = &xbox.axes[0];
        assert_eq!(axis.positive_threshold, Some(0.5));
        assert_eq!(axis.negative_threshold, Some(-0.5));
        assert_eq!(axis.throttle, None);
        assert!(axis.on_negative.is_none());

        assert_eq!(&*profile.gamepads[1].identifier, "PS4");
    }

    #[test]
    fn action_with_two_kinds_is_rejected() {
        let yaml = r#"
version: 1
gamepads:
  - identifier: "Xbox"
    buttons:
      - index: 0
        on_click: { keystroke: "a", log: "a" }
"#;
        let err = parse(yaml).unwrap_err();
        assert!(matches!(err, Error::InvalidActions(ref ctx) if ctx.contains("button 0 on_click")));
    }

    #[test]
    fn empty_action_is_rejected() {
        let yaml = r#"
version: 1
gamepads:
  - identifier: "Xbox"
    on_connect: {}
"#;
        assert!(matches!(parse(yaml), Err(Error::InvalidActions(_))));
    }

    #[test]
    fn empty_macros_are_rejected() {
        let yaml = r#"
version: 1
gamepads:
  - identifier: "Xbox"
    axes:
      - index: 0
        on_neutral: { macros: [] }
"#;
        assert!(matches!(parse(yaml), Err(Error::InvalidActions(_))));
    }

    #[test]
    fn unknown_key_name_is_rejected() {
        let yaml = r#"
version: 1
gamepads:
  - identifier: "Xbox"
    buttons:
      - index: 3
        key: "hyper_turbo"
"#;
        let err = parse(yaml).unwrap_err();
        assert!(matches!(err, Error::KeyParse(ref ctx, _) if ctx.ends_with("button 3")));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let yaml = r#"
version: 1
gamepads:
  - identifier: "Xbox"
    buttons:
      - index: 0
        on_tap: { log: "tap" }
"#;
        assert!(serde_yaml::from_str::<ProfileV1>(yaml).is_err());
    }
}
