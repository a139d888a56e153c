use std::path::Path;

use serde::Deserialize;

use crate::{v1::ProfileV1, Profile, ProfileError};

/// Parse yaml profile.
pub fn parse_profile(input: &str) -> Result<Profile, ProfileError> {
    let version = parse_version(input)?;
    match version {
        1 => {
            let profile: ProfileV1 = serde_yaml::from_str(input)?;
            let profile = profile.into_profile()?;
            Ok(profile)
        }
        _ => Err(ProfileError::UnsupportedVersion(version)),
    }
}

/// Read and parse a yaml profile from disk.
pub fn load_profile(path: impl AsRef<Path>) -> Result<Profile, ProfileError> {
    let input = std::fs::read_to_string(path)?;
    parse_profile(&input)
}

/// A profile with a version.
#[derive(Debug, Clone, Deserialize)]
struct VersionedProfile {
    version: u8,
}

/// Parse the version of yaml profile.
fn parse_version(input: &str) -> Result<u8, ProfileError> {
    let raw: VersionedProfile = serde_yaml::from_str(input)?;
    Ok(raw.version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_profile_yaml_error_when_version_missing() {
        let yaml = "gamepads: []\n";
        assert!(matches!(
            parse_profile(yaml),
            Err(ProfileError::YamlDeserializeError(_))
        ));
    }

    #[test]
    fn parse_profile_rejects_unknown_version() {
        let yaml = "version: 2\ngamepads: []\n";
        assert!(matches!(
            parse_profile(yaml),
            Err(ProfileError::UnsupportedVersion(2))
        ));
    }

    #[test]
    fn parse_profile_accepts_empty_v1() {
        let profile = parse_profile("version: 1\n").unwrap();
        assert!(profile.gamepads.is_empty());
        assert!(profile.shell.is_none());
    }

    #[test]
    fn example_profile_parses() {
        let profile = parse_profile(include_str!("../../../padbind.example.yaml")).unwrap();
        assert_eq!(profile.gamepads.len(), 2);
        assert_eq!(&*profile.gamepads[0].identifier, "Xbox");
        assert_eq!(&*profile.gamepads[1].identifier, "");
        assert_eq!(profile.options.default_action_throttle_ms, 300);
        assert!(profile.options.throttle_hold);
    }

    #[test]
    fn load_profile_reports_missing_file() {
        let path = std::env::temp_dir().join("padbind-profile-does-not-exist.yaml");
        assert!(matches!(
            load_profile(path),
            Err(ProfileError::PathError(_))
        ));
    }

    #[test]
    fn load_profile_reads_file() {
        let path = std::env::temp_dir()
            .join(format!("padbind-profile-{}.yaml", std::process::id()));
        std::fs::write(&path, "version: 1\nshell: /bin/bash\n").unwrap();

        let profile = load_profile(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(profile.unwrap().shell.as_deref(), Some("/bin/bash"));
    }
}
