use crate::tier::ViewportTier;

/// Display value of one menu section list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionDisplay {
    Shown,
    Hidden,
}

impl SectionDisplay {
    /// CSS `display` token used for persistence.
    pub fn token(&self) -> &'static str {
        match self {
            SectionDisplay::Shown => "block",
            SectionDisplay::Hidden => "none",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "block" => Some(SectionDisplay::Shown),
            "none" => Some(SectionDisplay::Hidden),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SectionDisplay::Shown => SectionDisplay::Hidden,
            SectionDisplay::Hidden => SectionDisplay::Shown,
        }
    }

    pub fn arrow(&self) -> ArrowDirection {
        match self {
            SectionDisplay::Shown => ArrowDirection::Up,
            SectionDisplay::Hidden => ArrowDirection::Down,
        }
    }
}

/// Vertical chevron shown next to an expandable entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Up,
    Down,
}

impl ArrowDirection {
    pub fn toggled(&self) -> Self {
        match self {
            ArrowDirection::Up => ArrowDirection::Down,
            ArrowDirection::Down => ArrowDirection::Up,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ArrowDirection::Up => "bi-chevron-up",
            ArrowDirection::Down => "bi-chevron-down",
        }
    }
}

/// Whole-widget mode, dictated by the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMode {
    /// Sections render as hover pop-ups; arrows are inert.
    Collapsed,
    /// Sections render inline following their persisted display.
    Expanded,
}

/// Where the menu root is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPlacement {
    Sidebar,
    Topnav,
}

impl MenuPlacement {
    pub fn for_tier(tier: ViewportTier) -> Self {
        if tier.is_mobile() {
            MenuPlacement::Topnav
        } else {
            MenuPlacement::Sidebar
        }
    }
}

/// Decode the persisted section displays.
///
/// A missing value or any unknown token yields all sections hidden. A valid
/// sequence whose length differs from `count` is truncated or padded with
/// hidden sections, so markup changes never shift indexes out of range.
pub fn parse_displays(raw: Option<&str>, count: usize) -> Vec<SectionDisplay> {
    let parsed = raw.filter(|raw| !raw.is_empty()).and_then(|raw| {
        raw.split(',')
            .map(SectionDisplay::from_token)
            .collect::<Option<Vec<_>>>()
    });

    let mut displays = match parsed {
        Some(displays) => displays,
        None => {
            if let Some(raw) = raw {
                log::debug!("ignoring malformed menu sections {raw:?}");
            }
            Vec::new()
        },
    };
    displays.resize(count, SectionDisplay::Hidden);
    displays
}

pub fn encode_displays(displays: &[SectionDisplay]) -> String {
    displays
        .iter()
        .map(SectionDisplay::token)
        .collect::<Vec<_>>()
        .join(",")
}
