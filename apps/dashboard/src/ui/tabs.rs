/// A tab inside a tab container. `target` is the id of the panel it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub label: String,
    pub target: String,
}

impl Tab {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// One tab container: exactly one active tab, at most one active panel.
///
/// Containers are independent; a page with two tab strips holds two sets.
#[derive(Debug, Clone)]
pub struct TabSet {
    tabs: Vec<Tab>,
    panels: Vec<String>,
    active_tab: Option<usize>,
    active_panel: Option<usize>,
}

impl TabSet {
    /// Starts with the first tab active.
    pub fn new(tabs: Vec<Tab>, panels: Vec<String>) -> Self {
        let mut set = Self {
            tabs,
            panels,
            active_tab: None,
            active_panel: None,
        };
        set.activate(0);
        set
    }

    /// Activates the tab at `index` and shows the panel whose id matches its
    /// target. A target with no matching panel leaves every panel hidden.
    /// Returns false, changing nothing, if there is no such tab.
    pub fn activate(&mut self, index: usize) -> bool {
        let Some(tab) = self.tabs.get(index) else {
            return false;
        };
        self.active_panel = self.panels.iter().position(|p| *p == tab.target);
        self.active_tab = Some(index);
        true
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_tab.and_then(|i| self.tabs.get(i))
    }

    pub fn active_panel(&self) -> Option<&str> {
        self.active_panel
            .and_then(|i| self.panels.get(i))
            .map(String::as_str)
    }

    pub fn is_panel_active(&self, id: &str) -> bool {
        self.active_panel() == Some(id)
    }
}
