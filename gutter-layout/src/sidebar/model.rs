use crate::tier::ViewportTier;

/// Container state of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarMode {
    Collapsed,
    Expanded,
}

impl SidebarMode {
    pub fn from_collapsed(collapsed: bool) -> Self {
        if collapsed {
            SidebarMode::Collapsed
        } else {
            SidebarMode::Expanded
        }
    }

    /// CSS class assigned to the sidebar container.
    pub fn class(&self) -> &'static str {
        match self {
            SidebarMode::Collapsed => "collapsed",
            SidebarMode::Expanded => "expanded",
        }
    }
}

/// Direction of the toggle button glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    /// Points left: pressing collapses the sidebar.
    Left,
    /// Points right: pressing expands the sidebar.
    Right,
}

impl ToggleIcon {
    pub fn from_collapsed(collapsed: bool) -> Self {
        if collapsed {
            ToggleIcon::Right
        } else {
            ToggleIcon::Left
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ToggleIcon::Left => "bi bi-arrow-left-circle",
            ToggleIcon::Right => "bi bi-arrow-right-circle",
        }
    }
}

/// Collapse state of the sidebar and its optional lock.
///
/// `lock = Some(v)` pins `collapsed = v` on every non-mobile tier. While the
/// viewport is mobile `collapsed` is forced to `false`; the value held just
/// before entering mobile is stashed and restored on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    collapsed: bool,
    lock: Option<bool>,
    stashed: Option<bool>,
}

impl SidebarState {
    /// Derive the state of a freshly constructed sidebar.
    pub fn initial(tier: ViewportTier, lock: Option<bool>) -> Self {
        let collapsed = match (tier, lock) {
            (ViewportTier::Mobile, _) => false,
            (_, Some(locked)) => locked,
            (tier, None) => tier != ViewportTier::Large,
        };

        Self {
            collapsed,
            lock,
            stashed: None,
        }
    }

    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn lock(&self) -> Option<bool> {
        self.lock
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    /// Collapse value the sidebar holds outside the mobile tier.
    pub fn resting_collapsed(&self) -> bool {
        self.stashed.unwrap_or(self.collapsed)
    }

    pub fn mode(&self) -> SidebarMode {
        SidebarMode::from_collapsed(self.collapsed)
    }

    pub fn icon(&self) -> ToggleIcon {
        ToggleIcon::from_collapsed(self.collapsed)
    }

    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn set_lock(&mut self, lock: Option<bool>) {
        self.lock = lock;
    }

    /// Reconcile `collapsed` with a tier transition.
    ///
    /// Precedence: mobile override, then lock, then the tier default
    /// (small collapses, large expands, medium keeps the current value).
    pub fn reconcile(&mut self, tier: ViewportTier, previous: ViewportTier) {
        if tier.is_mobile() {
            if !previous.is_mobile() {
                self.stashed = Some(self.collapsed);
            }
            self.collapsed = false;
            return;
        }

        if let Some(stashed) = self.stashed.take() {
            self.collapsed = stashed;
        }

        if let Some(locked) = self.lock {
            self.collapsed = locked;
            return;
        }

        match tier {
            ViewportTier::Small => self.collapsed = true,
            ViewportTier::Large => self.collapsed = false,
            ViewportTier::Medium | ViewportTier::Mobile => {},
        }
    }
}

/// Decode a persisted lock. Anything but `"true"`/`"false"` means unlocked.
pub fn parse_lock(raw: Option<&str>) -> Option<bool> {
    match raw? {
        "true" => Some(true),
        "false" => Some(false),
        other => {
            log::debug!("ignoring malformed sidebar lock {other:?}");
            None
        },
    }
}

pub fn encode_lock(collapsed: bool) -> &'static str {
    if collapsed { "true" } else { "false" }
}
