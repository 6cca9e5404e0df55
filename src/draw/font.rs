//! Font descriptor for UI text rendering.

/// Font configuration for UI labels.
///
/// Describes which font to use, including family name and weight. Sizes are
/// supplied per label in pixels.
#[derive(Debug, Clone)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Monospace", "JetBrains Mono")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light")
    pub weight: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            weight: "normal".to_string(),
        }
    }
}

impl FontDescriptor {
    /// Creates a new font descriptor with the specified parameters.
    pub fn new(family: String, weight: String) -> Self {
        Self { family, weight }
    }

    /// Converts this descriptor to a Pango font description string without a size.
    ///
    /// Format: "Family Weight", e.g. "Sans Bold" or "Monospace".
    pub fn to_pango_string(&self) -> String {
        let mut parts = vec![self.family.clone()];

        if !self.weight.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.weight));
        }

        parts.join(" ")
    }

    /// Builds a Pango font description whose size is `pixels` device pixels tall.
    pub fn to_pango(&self, pixels: f64) -> pango::FontDescription {
        let mut desc = pango::FontDescription::from_string(&self.to_pango_string());
        desc.set_absolute_size(pixels * pango::SCALE as f64);
        desc
    }
}

/// Capitalizes the first letter of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
