//! Framework configuration.
//!
//! Each framework carries a display title, a subtitle, and a recommended
//! maximum page count for the combined PDF. The recommendation is a soft
//! threshold: exceeding it triggers an interactive confirmation, never a
//! hard failure.
//!
//! Known frameworks live in a static table; anything else falls back to a
//! generic entry derived from the directory name.

/// Per-framework settings for the combined PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkConfig {
    /// Display title used on the PDF title page.
    pub title: String,
    /// Subtitle shown under the title.
    pub subtitle: String,
    /// Soft ceiling on page count before the operator is asked to confirm.
    pub recommended_max: usize,
}

/// Recommendation applied to frameworks absent from the table.
pub const DEFAULT_RECOMMENDED_MAX: usize = 100;

/// (directory name, title, subtitle, recommended max)
const FRAMEWORKS: &[(&str, &str, &str, usize)] = &[
    (
        "swift",
        "Swift Standard Library",
        "Complete API Reference",
        500,
    ),
    (
        "swiftui",
        "SwiftUI Framework",
        "Declarative UI Framework for Apple Platforms",
        300,
    ),
    ("uikit", "UIKit Framework", "iOS UI Framework", 400),
    (
        "foundation",
        "Foundation Framework",
        "Essential Data Types and Collections",
        400,
    ),
    (
        "coredata",
        "Core Data Framework",
        "Object Graph and Persistence Framework",
        200,
    ),
    (
        "combine",
        "Combine Framework",
        "Declarative Swift API for Processing Values Over Time",
        150,
    ),
    (
        "swiftdata",
        "SwiftData Framework",
        "Modern Data Modeling and Management",
        100,
    ),
    (
        "coreml",
        "Core ML Framework",
        "Machine Learning on Apple Platforms",
        200,
    ),
    ("mapkit", "MapKit Framework", "Maps and Location Services", 150),
    (
        "avfoundation",
        "AVFoundation Framework",
        "Audio and Video Processing",
        250,
    ),
];

/// Resolve the configuration for a framework, falling back to a generic
/// entry (capitalized name, "Documentation") when it is not in the table.
pub fn lookup(name: &str) -> FrameworkConfig {
    FRAMEWORKS
        .iter()
        .find(|(key, ..)| *key == name)
        .map(|&(_, title, subtitle, recommended_max)| FrameworkConfig {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            recommended_max,
        })
        .unwrap_or_else(|| FrameworkConfig {
            title: capitalize(name),
            subtitle: "Documentation".to_string(),
            recommended_max: DEFAULT_RECOMMENDED_MAX,
        })
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_framework_uses_table_entry() {
        let config = lookup("swiftui");
        assert_eq!(config.title, "SwiftUI Framework");
        assert_eq!(
            config.subtitle,
            "Declarative UI Framework for Apple Platforms"
        );
        assert_eq!(config.recommended_max, 300);
    }

    #[test]
    fn unknown_framework_falls_back_to_generic() {
        let config = lookup("demo");
        assert_eq!(config.title, "Demo");
        assert_eq!(config.subtitle, "Documentation");
        assert_eq!(config.recommended_max, DEFAULT_RECOMMENDED_MAX);
    }

    #[test]
    fn fallback_title_capitalizes_first_letter_only() {
        assert_eq!(lookup("metal").title, "Metal");
        assert_eq!(lookup("realityKit").title, "RealityKit");
    }

    #[test]
    fn empty_name_yields_empty_title() {
        let config = lookup("");
        assert_eq!(config.title, "");
        assert_eq!(config.recommended_max, DEFAULT_RECOMMENDED_MAX);
    }
}
