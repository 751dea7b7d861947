//! Named color palettes and the style-key lookup.

use image::Rgb;

/// A named fill palette: a start and end color for the module gradient.
///
/// Identical `start` and `end` mark a monochrome entry, rendered as a solid
/// fill rather than a gradient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylePalette {
    pub key: &'static str,
    pub name: &'static str,
    pub start: Rgb<u8>,
    pub end: Rgb<u8>,
}

/// The fixed palette table, in menu order.
pub static STYLES: [StylePalette; 4] = [
    StylePalette {
        key: "1",
        name: "Classic",
        start: Rgb([0, 0, 0]),
        end: Rgb([0, 0, 0]),
    },
    StylePalette {
        key: "2",
        name: "Navy→Teal",
        start: Rgb([10, 25, 77]),
        end: Rgb([14, 203, 180]),
    },
    StylePalette {
        key: "3",
        name: "Purple→Gold",
        start: Rgb([88, 24, 69]),
        end: Rgb([255, 193, 7]),
    },
    StylePalette {
        key: "4",
        name: "Sunset",
        start: Rgb([255, 94, 98]),
        end: Rgb([255, 195, 113]),
    },
];

/// Key of the palette used when the selector is blank or unknown.
pub const DEFAULT_STYLE_KEY: &str = "2";

/// Looks up a palette by key, falling back to the default entry.
///
/// Never fails: any input that is not an exact key match resolves to the
/// palette named by [`DEFAULT_STYLE_KEY`].
///
/// # Example
///
/// ```
/// use fbqr::style::resolve;
///
/// assert_eq!(resolve("1").name, "Classic");
/// assert_eq!(resolve("nope").key, "2");
/// ```
pub fn resolve(key: &str) -> &'static StylePalette {
    STYLES.iter().find(|s| s.key == key).unwrap_or(&STYLES[1])
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_keys() {
        assert_eq!(resolve("1").name, "Classic");
        assert_eq!(resolve("2").name, "Navy→Teal");
        assert_eq!(resolve("3").name, "Purple→Gold");
        assert_eq!(resolve("4").name, "Sunset");
    }

    #[test]
    fn test_unknown_keys_resolve_to_default() {
        let default = resolve(DEFAULT_STYLE_KEY);
        for key in ["9", "", "abc", "22"] {
            assert_eq!(resolve(key), default, "key {key:?}");
        }
    }

    #[test]
    fn test_default_key_names_a_table_entry() {
        assert!(STYLES.iter().any(|s| s.key == DEFAULT_STYLE_KEY));
    }

    #[test]
    fn test_classic_is_monochrome() {
        let classic = resolve("1");
        assert_eq!(classic.start, classic.end);
    }
}
