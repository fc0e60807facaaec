use std::fmt::Write;

use serde::Serialize;

use crate::path::{Path, PathSet, ShortestPath};

/// Classifies the query that produced a route summary.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteOutputKind {
    Fastest,
    Tied,
    Reachable,
}

impl RouteOutputKind {
    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            RouteOutputKind::Fastest => "Fastest route",
            RouteOutputKind::Tied => "Tied fastest routes",
            RouteOutputKind::Reachable => "Path",
        }
    }
}

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Structured representation of a query result that front ends can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub kind: RouteOutputKind,
    pub start: String,
    pub goal: String,
    /// Travel time, absent for reachability results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    pub routes: Vec<Path>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub truncated: bool,
}

impl RouteSummary {
    pub fn from_shortest(start: &str, goal: &str, shortest: &ShortestPath) -> Self {
        Self {
            kind: RouteOutputKind::Fastest,
            start: start.to_string(),
            goal: goal.to_string(),
            cost: Some(shortest.cost),
            routes: vec![shortest.path.clone()],
            truncated: false,
        }
    }

    pub fn from_path_set(start: &str, goal: &str, set: &PathSet) -> Self {
        Self {
            kind: RouteOutputKind::Tied,
            start: start.to_string(),
            goal: goal.to_string(),
            cost: Some(set.cost),
            routes: set.paths.clone(),
            truncated: set.truncated,
        }
    }

    pub fn from_reachability(start: &str, goal: &str, path: &Path) -> Self {
        Self {
            kind: RouteOutputKind::Reachable,
            start: start.to_string(),
            goal: goal.to_string(),
            cost: None,
            routes: vec![path.clone()],
            truncated: false,
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn headline(&self) -> String {
        match self.cost {
            Some(cost) => format!("{} -> {} (time: {})", self.start, self.goal, format_time(cost)),
            None => format!("{} -> {}", self.start, self.goal),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{}: {}", self.kind.label(), self.headline());

        if self.routes.len() == 1 {
            for (index, step) in self.routes[0].steps().iter().enumerate() {
                let _ = writeln!(buffer, "{:>3}: {}", index, step);
            }
        } else {
            for (index, route) in self.routes.iter().enumerate() {
                let _ = writeln!(
                    buffer,
                    "{:>3}. {} ({} hops)",
                    index + 1,
                    route,
                    route.hop_count()
                );
            }
        }

        if self.truncated {
            let _ = writeln!(
                buffer,
                "(showing the first {} tied routes)",
                self.routes.len()
            );
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "**{}**: _{}_", self.kind.label(), self.headline());
        for route in &self.routes {
            let joined = route
                .steps()
                .iter()
                .map(|step| format!("**{step}**"))
                .collect::<Vec<_>>()
                .join(" → ");
            let _ = writeln!(buffer, "* {joined}");
        }
        buffer
    }
}

/// Format a travel time without a trailing `.0` for whole numbers.
pub fn format_time(time: f64) -> String {
    if time.fract() == 0.0 && time.abs() < 1e15 {
        format!("{}", time as i64)
    } else {
        format!("{time}")
    }
}
