use std::path::PathBuf;

use crate::ProfileError;

const DEFAULT_CONFIG_PROFILE_PATH: &str = ".config/padbind/profile.yaml";
const DEFAULT_HOME_PROFILE_PATH: &str = ".padbind.yaml";

/// Resolve a profile path to an absolute path.
///
/// Without a path, the default locations under `$HOME` are tried in order.
/// A relative path is resolved against the current directory.
pub fn resolve_profile(target_path: Option<&str>) -> Result<PathBuf, ProfileError> {
    let Some(target_path) = target_path else {
        let config_path = home_path(DEFAULT_CONFIG_PROFILE_PATH)?;
        if config_path.exists() {
            return Ok(config_path);
        }

        let home_profile = home_path(DEFAULT_HOME_PROFILE_PATH)?;
        if home_profile.exists() {
            return Ok(home_profile);
        }

        return Err(ProfileError::ProfileNotFound(
            config_path.display().to_string(),
        ));
    };

    let path = PathBuf::from(target_path);
    if !path.exists() {
        return Err(ProfileError::ProfileNotFound(target_path.to_string()));
    }
    if path.is_absolute() {
        return Ok(path);
    }

    Ok(path.canonicalize()?)
}

fn home_path(reference_path: &str) -> Result<PathBuf, ProfileError> {
    std::env::var("HOME")
        .map(|home| PathBuf::from(home).join(reference_path))
        .map_err(|_| ProfileError::EnvVarNotSet("HOME".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_explicit_path_is_not_found() {
        let result = resolve_profile(Some("/definitely/not/here/padbind.yaml"));
        assert!(matches!(result, Err(ProfileError::ProfileNotFound(_))));
    }

    #[test]
    fn existing_absolute_path_is_returned() {
        let dir = std::env::temp_dir();
        let resolved = resolve_profile(dir.to_str()).unwrap();
        assert_eq!(resolved, dir);
    }
}
