//! Text formatting for everything the CLI prints.
//!
//! Functions here build strings and never write; [`Terminal`] does the
//! writing. Multi-line views end without a trailing newline.
//!
//! [`Terminal`]: crate::terminal::Terminal

use colored::Colorize;
use rad_gateway::NodeStatus;
use rad_types::{Person, Profile, Project};

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Error,
    Warning,
    Info,
    Success,
}

impl Status {
    fn glyph(self) -> String {
        match self {
            Self::Error => "x".red().to_string(),
            Self::Warning => "!".bright_yellow().to_string(),
            Self::Info => "i".blue().to_string(),
            Self::Success => "✓".green().to_string(),
        }
    }
}

/// One status line: glyph, space, message.
pub fn status_line(status: Status, message: &str) -> String {
    format!("{} {}", status.glyph(), message)
}

/// Welcome banner shown by `rad auth`.
pub fn intro() -> String {
    "🌱 Welcome to Radicle CLI!".magenta().bold().to_string()
}

fn active_entry(label: &str, marker: &str) -> String {
    format!(
        "{}{}{}",
        " ⊙ ".bright_yellow(),
        label,
        format!(" ({})", marker).as_str().bright_yellow()
    )
}

fn entry(label: &str) -> String {
    format!(" ⋅ {}", label)
}

fn field(name: &str, value: &str) -> String {
    format!("  ⋅ {} -> {}", name, value)
}

// =============================================================================
// Lists
// =============================================================================

/// Profile identifiers, marking the active one.
///
/// Entries are compared by identifier. With no active profile nothing is
/// marked.
pub fn profile_list(profiles: &[Profile], active: Option<&Profile>) -> String {
    let mut lines = vec!["- Profiles:".to_string()];
    for profile in profiles {
        if active.is_some_and(|a| a.same_as(profile)) {
            lines.push(active_entry(&profile.id, "active"));
        } else {
            lines.push(entry(&profile.id));
        }
    }
    lines.join("\n")
}

/// Project names, marking the project named `current`.
///
/// Only the first project whose name equals `current` is marked; later
/// entries with the same name are listed plainly.
pub fn project_list(projects: &[Project], current: Option<&str>) -> String {
    let mut lines = vec!["- Projects:".to_string()];
    let marked = current.and_then(|name| projects.iter().position(|p| p.name() == name));
    for (idx, project) in projects.iter().enumerate() {
        if Some(idx) == marked {
            lines.push(active_entry(project.name(), "current"));
        } else {
            lines.push(entry(project.name()));
        }
    }
    lines.join("\n")
}

// =============================================================================
// Detail views
// =============================================================================

pub fn profile(profile: &Profile, person: &Person) -> String {
    [
        "- Profile:".to_string(),
        field("Name", person.name()),
        field("Id  ", &profile.id),
        field("URN ", &person.urn),
    ]
    .join("\n")
}

pub fn project(project: &Project) -> String {
    let mut lines = vec![
        "- Project:".to_string(),
        field("Name", project.name()),
        field("URN ", &project.urn),
    ];
    if let Some(branch) = project.default_branch() {
        lines.push(field("Head", branch));
    }
    lines.join("\n")
}

/// State of the local node.
pub fn node_status(status: &NodeStatus) -> String {
    let mut lines = vec!["- Node:".to_string()];
    if let Some(pid) = status.pid {
        lines.push(field("PID   ", &pid.to_string()));
    }
    if let Some(uptime) = status.uptime_secs {
        lines.push(field("Uptime", &format_uptime(uptime)));
    }
    if let Some(listen) = &status.listen {
        lines.push(field("Listen", listen));
    }
    if let Some(log) = &status.stderr_log {
        lines.push(field("Log   ", &log.display().to_string()));
    }
    lines.join("\n")
}

/// Format seconds as `1h 2m 3s`, dropping leading zero units.
pub fn format_uptime(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    fn profiles(ids: &[&str]) -> Vec<Profile> {
        ids.iter().map(|id| Profile::new(*id)).collect()
    }

    fn projects(names: &[&str]) -> Vec<Project> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Project::new(format!("rad:git:{}", i), *name))
            .collect()
    }

    #[test]
    fn test_status_lines() {
        plain();
        assert_eq!(status_line(Status::Error, "boom"), "x boom");
        assert_eq!(status_line(Status::Warning, "hm"), "! hm");
        assert_eq!(status_line(Status::Info, "fyi"), "i fyi");
        assert_eq!(status_line(Status::Success, "done"), "✓ done");
    }

    #[test]
    fn test_profile_list_marks_active() {
        plain();
        let list = profiles(&["a1", "b2", "c3"]);
        let active = Profile::new("b2");
        let out = profile_list(&list, Some(&active));
        assert_eq!(out, "- Profiles:\n ⋅ a1\n ⊙ b2 (active)\n ⋅ c3");
        assert_eq!(out.matches("(active)").count(), 1);
    }

    #[test]
    fn test_profile_list_without_match() {
        plain();
        let list = profiles(&["a1", "b2"]);
        let out = profile_list(&list, Some(&Profile::new("zz")));
        assert!(!out.contains("(active)"));
        assert!(!profile_list(&list, None).contains("(active)"));
    }

    #[test]
    fn test_project_list_marks_current() {
        plain();
        let list = projects(&["alpha", "beta"]);
        let out = project_list(&list, Some("beta"));
        assert_eq!(out, "- Projects:\n ⋅ alpha\n ⊙ beta (current)");
    }

    #[test]
    fn test_project_list_marks_first_of_duplicates() {
        plain();
        let list = projects(&["beta", "alpha", "beta"]);
        let out = project_list(&list, Some("beta"));
        assert_eq!(out, "- Projects:\n ⊙ beta (current)\n ⋅ alpha\n ⋅ beta");
    }

    #[test]
    fn test_project_list_without_match() {
        plain();
        let list = projects(&["alpha"]);
        assert!(!project_list(&list, Some("gamma")).contains("(current)"));
        assert!(!project_list(&list, None).contains("(current)"));
        assert_eq!(project_list(&[], Some("alpha")), "- Projects:");
    }

    #[test]
    fn test_profile_detail() {
        plain();
        let profile = Profile::new("abc123");
        let person = Person::new("rad:git:hnrk", "alice");
        assert_eq!(
            super::profile(&profile, &person),
            "- Profile:\n  ⋅ Name -> alice\n  ⋅ Id   -> abc123\n  ⋅ URN  -> rad:git:hnrk"
        );
    }

    #[test]
    fn test_project_detail() {
        plain();
        let project = Project::new("rad:git:q1", "heartwood").with_default_branch("main");
        assert_eq!(
            super::project(&project),
            "- Project:\n  ⋅ Name -> heartwood\n  ⋅ URN  -> rad:git:q1\n  ⋅ Head -> main"
        );
    }

    #[test]
    fn test_node_status_view() {
        plain();
        let status = NodeStatus {
            running: true,
            pid: Some(42),
            uptime_secs: Some(3725),
            listen: Some("0.0.0.0:8778".into()),
            stderr_log: None,
        };
        let out = node_status(&status);
        assert!(out.contains("  ⋅ PID    -> 42"));
        assert!(out.contains("  ⋅ Uptime -> 1h 2m 5s"));
        assert!(out.contains("  ⋅ Listen -> 0.0.0.0:8778"));
        assert!(!out.contains("Log"));
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0), "0s");
        assert_eq!(format_uptime(61), "1m 1s");
        assert_eq!(format_uptime(3600), "1h 0m 0s");
    }
}
