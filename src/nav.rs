//! Navigation shell state: menu tree, expand/collapse, scroll-spy and copy
//! feedback. All of it is owned by the shell, one instance per window.

use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::constants::nav::COPY_CONFIRMATION_MS;

pub const CONFIGURATOR_ROUTE: &str = "/configurator";
pub const HOME_ROUTE: &str = "/introduction";

#[derive(Debug)]
pub enum NavEntry {
    Link {
        label: &'static str,
        route: &'static str,
    },
    Group {
        id: &'static str,
        label: &'static str,
        children: &'static [NavEntry],
    },
}

pub static MENU: &[NavEntry] = &[
    NavEntry::Link { label: "Introduction", route: "/introduction" },
    NavEntry::Group {
        id: "product",
        label: "Product",
        children: &[
            NavEntry::Link { label: "Challenges", route: "/challenges" },
            NavEntry::Link { label: "Features", route: "/features" },
            NavEntry::Link { label: "Pricing", route: "/pricing" },
        ],
    },
    NavEntry::Group {
        id: "technical",
        label: "Technical",
        children: &[
            NavEntry::Link { label: "Security", route: "/security" },
            NavEntry::Link { label: "API & Integrations", route: "/api" },
        ],
    },
    NavEntry::Group {
        id: "sales",
        label: "Sales tools",
        children: &[NavEntry::Link { label: "Solution configurator", route: CONFIGURATOR_ROUTE }],
    },
];

/// Id of the group that contains `route`, if any
fn group_of(entries: &'static [NavEntry], route: &str) -> Option<&'static str> {
    entries.iter().find_map(|entry| match entry {
        NavEntry::Link { .. } => None,
        NavEntry::Group { id, children, .. } => {
            let direct = children
                .iter()
                .any(|child| matches!(child, NavEntry::Link { route: r, .. } if *r == route));
            if direct { Some(*id) } else { group_of(children, route) }
        }
    })
}

/// Sidebar state: current route and which groups are open
#[derive(Debug, Clone)]
pub struct NavState {
    active_route: String,
    expanded: HashSet<&'static str>,
}

impl NavState {
    pub fn new(route: &str) -> Self {
        let mut state = Self {
            active_route: String::new(),
            expanded: HashSet::new(),
        };
        state.navigate(route);
        state
    }

    pub fn active_route(&self) -> &str {
        &self.active_route
    }

    /// Switch pages; the group holding the target is opened
    pub fn navigate(&mut self, route: &str) {
        if let Some(group) = group_of(MENU, route) {
            self.expanded.insert(group);
        }
        if self.active_route != route {
            debug!(from = %self.active_route, to = route, "navigate");
            self.active_route = route.to_string();
        }
    }

    pub fn toggle_group(&mut self, id: &'static str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id);
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(HOME_ROUTE)
    }
}

/// Index of the heading the reader is currently in.
///
/// `tops` are heading positions in the same coordinates as `viewport_top`.
/// The active heading is the last one at or above `viewport_top + margin`;
/// before the first heading is reached, the first one is active.
pub fn active_heading(tops: &[f32], viewport_top: f32, margin: f32) -> Option<usize> {
    if tops.is_empty() {
        return None;
    }
    let limit = viewport_top + margin;
    Some(tops.iter().rposition(|top| *top <= limit).unwrap_or(0))
}

/// Scroll-spy and jump requests for one page's table of contents, keyed by
/// section anchor
#[derive(Debug, Clone, Default)]
pub struct TocState {
    route: String,
    active: Option<&'static str>,
    pending_jump: Option<&'static str>,
}

impl TocState {
    /// Forget per-page state when the page changes
    pub fn sync_route(&mut self, route: &str) {
        if self.route != route {
            self.route = route.to_string();
            self.active = None;
            self.pending_jump = None;
        }
    }

    pub fn active(&self) -> Option<&'static str> {
        self.active
    }

    /// `headings` are (anchor, top) pairs in page order
    pub fn observe(&mut self, headings: &[(&'static str, f32)], viewport_top: f32, margin: f32) {
        let tops: Vec<f32> = headings.iter().map(|(_, top)| *top).collect();
        self.active = active_heading(&tops, viewport_top, margin).map(|i| headings[i].0);
    }

    pub fn request_jump(&mut self, anchor: &'static str) {
        self.pending_jump = Some(anchor);
        self.active = Some(anchor);
    }

    /// The anchor to scroll to this frame, if any; consumed on read
    pub fn take_jump(&mut self) -> Option<&'static str> {
        self.pending_jump.take()
    }
}

/// "Copied" confirmation for code blocks; expires on its own
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyFeedback {
    copied: Option<(usize, Instant)>,
}

impl CopyFeedback {
    pub fn record(&mut self, block: usize, now: Instant) {
        self.copied = Some((block, now));
    }

    /// Whether `block` should still show the confirmation at `now`
    pub fn is_active(&self, block: usize, now: Instant) -> bool {
        matches!(self.copied, Some((b, at)) if b == block && now.duration_since(at) < Self::window())
    }

    /// Time left until the confirmation disappears, for scheduling a repaint
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let (_, at) = self.copied?;
        Self::window().checked_sub(now.duration_since(at)).filter(|d| !d.is_zero())
    }

    fn window() -> Duration {
        Duration::from_millis(COPY_CONFIRMATION_MS)
    }
}
