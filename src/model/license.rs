//! License metadata and static warning analysis
//!
//! The pattern table is an immutable compile-time constant; analysis is a
//! pure function over it. A `LicenseInfo` is applied to a tileset as one
//! atomic value, so results arriving from an external fetch can never leave
//! the tileset with a partially updated license.

/// Restriction classes detected in license text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseWarning {
    /// License restricts commercial use
    NonCommercial,
    /// License prohibits derivative works
    NoDerivatives,
    /// Derivatives must carry the same license (informational)
    ShareAlike,
    /// License text present but not recognized
    Unknown,
    /// No license information found at all
    Missing,
}

// Ordered: more specific patterns (by-nc-sa) must precede their prefixes
// (by-nc). First match wins.
const LICENSE_PATTERNS: &[(&str, &[LicenseWarning], Option<&str>)] = &[
    // Public domain / very permissive
    ("cc0", &[], Some("Public Domain (CC0)")),
    ("public domain", &[], Some("Public Domain")),
    ("unlicense", &[], Some("Unlicense (Public Domain)")),
    // Attribution only
    ("cc by 4", &[], Some("CC BY 4.0")),
    ("cc by 3", &[], Some("CC BY 3.0")),
    ("cc-by-4", &[], Some("CC BY 4.0")),
    ("cc-by-3", &[], Some("CC BY 3.0")),
    // Share-alike
    ("cc by-sa", &[LicenseWarning::ShareAlike], Some("CC BY-SA")),
    ("cc-by-sa", &[LicenseWarning::ShareAlike], Some("CC BY-SA")),
    // Non-commercial combinations
    (
        "cc by-nc-sa",
        &[LicenseWarning::NonCommercial, LicenseWarning::ShareAlike],
        Some("CC BY-NC-SA"),
    ),
    (
        "cc by-nc-nd",
        &[LicenseWarning::NonCommercial, LicenseWarning::NoDerivatives],
        Some("CC BY-NC-ND"),
    ),
    ("cc by-nc", &[LicenseWarning::NonCommercial], Some("CC BY-NC")),
    ("cc-by-nc", &[LicenseWarning::NonCommercial], Some("CC BY-NC")),
    ("-nc-", &[LicenseWarning::NonCommercial], None),
    ("non-commercial", &[LicenseWarning::NonCommercial], None),
    ("noncommercial", &[LicenseWarning::NonCommercial], None),
    // No derivatives
    ("cc by-nd", &[LicenseWarning::NoDerivatives], Some("CC BY-ND")),
    ("cc-by-nd", &[LicenseWarning::NoDerivatives], Some("CC BY-ND")),
    ("-nd", &[LicenseWarning::NoDerivatives], None),
    ("no derivatives", &[LicenseWarning::NoDerivatives], None),
    ("no-derivatives", &[LicenseWarning::NoDerivatives], None),
    // Other recognized licenses
    ("mit", &[], Some("MIT License")),
    ("apache", &[], Some("Apache License")),
    ("bsd", &[], Some("BSD License")),
    ("lgpl", &[LicenseWarning::ShareAlike], Some("LGPL")),
    ("gpl", &[LicenseWarning::ShareAlike], Some("GPL")),
    ("ofl", &[], Some("SIL Open Font License")),
];

/// License and attribution metadata for a tileset's source image
#[derive(Debug, Clone, Default)]
pub struct LicenseInfo {
    /// Raw license text, as found or entered
    pub license_text: String,
    /// URL of the license terms
    pub license_url: String,
    /// Original author of the source artwork
    pub author: String,
    /// URL the source artwork was obtained from
    pub source_url: String,
    /// Canonical license name when the text was recognized
    pub normalized_name: Option<String>,
    /// Warnings detected during analysis
    pub warnings: Vec<LicenseWarning>,
}

impl LicenseInfo {
    /// Build license info from its raw fields and analyze the text
    pub fn new(license_text: &str, license_url: &str, author: &str, source_url: &str) -> Self {
        let mut info = Self {
            license_text: license_text.to_string(),
            license_url: license_url.to_string(),
            author: author.to_string(),
            source_url: source_url.to_string(),
            normalized_name: None,
            warnings: Vec::new(),
        };
        info.analyze();
        info
    }

    // Pure lookup over the static table; first matching pattern wins.
    fn analyze(&mut self) {
        if self.license_text.is_empty() {
            self.warnings = vec![LicenseWarning::Missing];
            return;
        }

        let text_lower = self.license_text.to_lowercase();
        for (pattern, warnings, name) in LICENSE_PATTERNS {
            if text_lower.contains(pattern) {
                self.warnings = warnings.to_vec();
                if self.normalized_name.is_none() {
                    self.normalized_name = name.map(ToString::to_string);
                }
                return;
            }
        }

        self.warnings = vec![LicenseWarning::Unknown];
    }

    /// Whether none of the meaningful fields is filled in
    pub fn is_empty(&self) -> bool {
        self.license_text.is_empty() && self.license_url.is_empty() && self.author.is_empty()
    }

    /// Whether any warning deserves the user's attention
    pub fn has_warnings(&self) -> bool {
        self.warnings.iter().any(|w| {
            matches!(
                w,
                LicenseWarning::NonCommercial
                    | LicenseWarning::NoDerivatives
                    | LicenseWarning::Unknown
                    | LicenseWarning::Missing
            )
        })
    }

    /// Whether a warning outright blocks derivative works
    pub fn has_blocking_warnings(&self) -> bool {
        self.warnings.contains(&LicenseWarning::NoDerivatives)
    }

    /// Short display name: normalized, truncated raw text, or a placeholder
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.normalized_name {
            return name.clone();
        }
        if self.license_text.is_empty() {
            return "No license specified".to_string();
        }
        if self.license_text.chars().count() > 50 {
            let prefix: String = self.license_text.chars().take(47).collect();
            return format!("{prefix}...");
        }
        self.license_text.clone()
    }

    /// Human-readable explanation of every active warning
    pub fn warning_message(&self) -> String {
        let mut messages = Vec::new();

        if self.warnings.contains(&LicenseWarning::NoDerivatives) {
            messages.push(
                "NO DERIVATIVES: This license prohibits creating derivative works. \
                 Splitting and using these tiles may violate the license.",
            );
        }
        if self.warnings.contains(&LicenseWarning::NonCommercial) {
            messages.push(
                "NON-COMMERCIAL: This license restricts commercial use. \
                 Ensure your intended use complies.",
            );
        }
        if self.warnings.contains(&LicenseWarning::ShareAlike) {
            messages.push("SHARE-ALIKE: Derivatives must use the same license.");
        }
        if self.warnings.contains(&LicenseWarning::Unknown) {
            messages.push(
                "UNKNOWN LICENSE: Could not parse license terms. Please verify manually.",
            );
        }
        if self.warnings.contains(&LicenseWarning::Missing) {
            messages.push(
                "NO LICENSE: No license information found. \
                 Assume all rights reserved unless you can verify otherwise.",
            );
        }

        messages.join("\n\n")
    }
}
