//! Column offset resolution for the search results table.
//!
//! The results table grows an optional "Plugin Filename" column for plugin
//! crashes, which shifts every column after it. [`ColumnLayout`] is read once
//! from header cell [`PLUGIN_HEADER_INDEX`] when a result collection is
//! queried and is then shared, unchanged, by every row of that collection.
//! Row accessors never hardcode a position: they ask the layout.

/// Header cell inspected to detect the optional column
pub const PLUGIN_HEADER_INDEX: usize = 2;

/// Header text marking the optional column
pub const PLUGIN_HEADER_TEXT: &str = "Plugin Filename";

/// A data field of a search result row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultField {
    /// Rank in the result list
    Rank,
    /// Crash signature
    Signature,
    /// Plugin filename (only exists in the plugin layout)
    PluginFilename,
    /// Total number of crashes
    NumberOfCrashes,
    /// Windows crash count
    Win,
    /// Mac crash count
    Mac,
    /// Linux crash count
    Lin,
    /// Associated bug ids
    BugzillaIds,
}

impl ResultField {
    /// Every field, in table order
    pub const ALL: [Self; 8] = [
        Self::Rank,
        Self::Signature,
        Self::PluginFilename,
        Self::NumberOfCrashes,
        Self::Win,
        Self::Mac,
        Self::Lin,
        Self::BugzillaIds,
    ];

    /// Position of the field when the plugin header is detected
    #[must_use]
    pub const fn base_index(&self) -> usize {
        match self {
            Self::Rank => 0,
            Self::Signature => 1,
            Self::PluginFilename | Self::NumberOfCrashes => 2,
            Self::Win => 3,
            Self::Mac => 4,
            Self::Lin => 5,
            Self::BugzillaIds => 6,
        }
    }

    /// Whether the field sits after the optional column and therefore shifts
    #[must_use]
    pub const fn is_shifted(&self) -> bool {
        !matches!(self, Self::Rank | Self::Signature | Self::PluginFilename)
    }

    /// Column label used in diagnostics
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rank => "rank",
            Self::Signature => "signature",
            Self::PluginFilename => "plugin filename",
            Self::NumberOfCrashes => "number of crashes",
            Self::Win => "win",
            Self::Mac => "mac",
            Self::Lin => "lin",
            Self::BugzillaIds => "bugzilla ids",
        }
    }
}

/// Resolved layout of one results table rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColumnLayout {
    plugin_filename_present: bool,
}

impl ColumnLayout {
    /// Layout for an explicit flag
    #[must_use]
    pub const fn new(plugin_filename_present: bool) -> Self {
        Self {
            plugin_filename_present,
        }
    }

    /// Resolve the layout from the text of header cell [`PLUGIN_HEADER_INDEX`]
    #[must_use]
    pub fn from_header_text(text: &str) -> Self {
        Self::new(text == PLUGIN_HEADER_TEXT)
    }

    /// Whether the plugin header was detected
    #[must_use]
    pub const fn plugin_filename_present(&self) -> bool {
        self.plugin_filename_present
    }

    /// Offset added to every shifted field
    #[must_use]
    pub const fn offset(&self) -> usize {
        if self.plugin_filename_present {
            0
        } else {
            1
        }
    }

    /// Cell index holding `field` in this layout
    #[must_use]
    pub const fn column(&self, field: ResultField) -> usize {
        if field.is_shifted() {
            field.base_index() + self.offset()
        } else {
            field.base_index()
        }
    }
}
