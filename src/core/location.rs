//! Conventional destinations for a generated mise configuration.

use std::fmt;

use serde::Serialize;

/// Separator between path and description in menu labels.
pub const LABEL_SEPARATOR: &str = " - ";

/// A place mise looks for configuration, relative to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutputLocation {
    /// Relative file path
    pub path: &'static str,

    /// What this location is for
    pub description: &'static str,
}

/// Output locations in menu order.
pub const OUTPUT_LOCATIONS: [OutputLocation; 6] = [
    OutputLocation { path: "mise.toml", description: "Standard configuration file" },
    OutputLocation {
        path: "mise.local.toml",
        description: "Local config (not committed to source control)",
    },
    OutputLocation { path: "mise/config.toml", description: "Configuration in mise subdirectory" },
    OutputLocation {
        path: ".config/mise.toml",
        description: "Configuration in .config directory",
    },
    OutputLocation {
        path: ".config/mise/config.toml",
        description: "Configuration in .config/mise subdirectory",
    },
    OutputLocation {
        path: ".config/mise/conf.d/custom.toml",
        description: "Configuration in conf.d directory (alphabetical loading)",
    },
];

impl OutputLocation {
    /// Menu label: `path - description`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OutputLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{LABEL_SEPARATOR}{}", self.path, self.description)
    }
}

/// Menu labels for every output location, in order.
pub fn location_labels() -> Vec<String> {
    OUTPUT_LOCATIONS.iter().map(OutputLocation::label).collect()
}

/// Extract the path portion of a menu label.
pub fn path_from_label(label: &str) -> &str {
    label.split(LABEL_SEPARATOR).next().unwrap_or(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order_is_stable() {
        let paths: Vec<_> = OUTPUT_LOCATIONS.iter().map(|l| l.path).collect();
        assert_eq!(
            paths,
            vec![
                "mise.toml",
                "mise.local.toml",
                "mise/config.toml",
                ".config/mise.toml",
                ".config/mise/config.toml",
                ".config/mise/conf.d/custom.toml",
            ]
        );
    }

    #[test]
    fn test_label_format() {
        assert_eq!(
            OUTPUT_LOCATIONS[1].label(),
            "mise.local.toml - Local config (not committed to source control)"
        );
    }

    #[test]
    fn test_path_from_label_round_trips_every_entry() {
        for (label, location) in location_labels().iter().zip(OUTPUT_LOCATIONS.iter()) {
            assert_eq!(path_from_label(label), location.path);
        }
    }

    #[test]
    fn test_path_from_label_without_separator() {
        assert_eq!(path_from_label("custom.toml"), "custom.toml");
    }
}
