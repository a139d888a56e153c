use padbind_gamepad::DeviceIndex;

use crate::mapping::GamepadMapping;

/// A device matched to a declared mapping.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    /// Position of the mapping in declaration order.
    pub mapping_index: usize,
    pub mapping: &'a GamepadMapping,
    pub device: DeviceIndex,
}

/// Find the mapping for a device.
///
/// The first mapping, in declaration order, whose identifier is a substring
/// of `device_id` wins, even when later ones match too.
pub fn resolve<'a>(
    device_id: &str,
    device: DeviceIndex,
    mappings: &'a [GamepadMapping],
) -> Option<Resolved<'a>> {
    mappings
        .iter()
        .enumerate()
        .find(|(_, mapping)| device_id.contains(mapping.identifier()))
        .map(|(mapping_index, mapping)| Resolved {
            mapping_index,
            mapping,
            device,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mappings(ids: &[&str]) -> Vec<GamepadMapping> {
        ids.iter().map(|id| GamepadMapping::new(*id)).collect()
    }

    #[test]
    fn matches_by_substring() {
        let mappings = mappings(&["PS4", "Xbox"]);
        let resolved = resolve("Xbox Wireless Controller", 0, &mappings).unwrap();
        assert_eq!(resolved.mapping_index, 1);
        assert_eq!(resolved.mapping.identifier(), "Xbox");
        assert_eq!(resolved.device, 0);
    }

    #[test]
    fn first_match_wins() {
        let mappings = mappings(&["Wireless", "Xbox"]);
        let resolved = resolve("Xbox Wireless Controller", 3, &mappings).unwrap();
        assert_eq!(resolved.mapping.identifier(), "Wireless");
        assert_eq!(resolved.device, 3);
    }

    #[test]
    fn no_match_leaves_device_unbound() {
        let mappings = mappings(&["PS4", "Xbox"]);
        assert!(resolve("8BitDo Pro 2", 0, &mappings).is_none());
        assert!(resolve("8BitDo Pro 2", 0, &[]).is_none());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let mappings = mappings(&["xbox"]);
        assert!(resolve("Xbox Wireless Controller", 0, &mappings).is_none());
    }
}
