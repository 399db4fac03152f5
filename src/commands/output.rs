//! Terminal rendering of a [`PanelView`]

use std::fmt::Write;

use console::style;

use crate::session::ReplayReport;
use crate::view::{Affordance, GroupView, PanelView, SearchView, SectionView};

/// Draw the panel as indented, styled text
pub fn render_panel(panel: &PanelView) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}",
        style("Match Criteria").bold(),
        style(format!("[{}]", panel.variant)).dim()
    );
    if panel.collapsed {
        let _ = writeln!(out, "  {}", style("(collapsed)").dim());
        return out;
    }

    for section in &panel.sections {
        render_section(&mut out, section);
    }

    if let Some(explorer) = &panel.explorer {
        let _ = writeln!(
            out,
            "\n{} {} {}",
            style("Explorer:").bold(),
            explorer.category,
            style(format!("({})", explorer.qualifier_label)).dim()
        );
        for group in &explorer.groups {
            let marker = if explorer.selected.as_ref() == Some(group) { "›" } else { " " };
            let _ = writeln!(out, "  {} {}", style(marker).cyan(), group);
        }
    }

    if let Some(editor) = &panel.boolean_editor {
        let _ = writeln!(out, "\n{}", style(&editor.title).bold());
        for (i, group) in editor.expression.or_groups.iter().enumerate() {
            let terms: Vec<String> = group
                .terms()
                .iter()
                .map(|t| {
                    if t.is_empty() {
                        style(editor.term_placeholder.as_str()).dim().to_string()
                    } else {
                        t.clone()
                    }
                })
                .collect();
            let joiner = if i == 0 { "   " } else { "AND" };
            let _ = writeln!(out, "  {} {}", style(joiner).dim(), terms.join(" or "));
        }
        let _ = writeln!(out, "  {}", style(format!("+ {}", editor.add_or_label)).dim());
    }
    out
}

fn render_section(out: &mut String, section: &SectionView) {
    let bar = if section.highlighted {
        style("▌").blue().to_string()
    } else {
        " ".to_string()
    };
    let _ = writeln!(
        out,
        "\n{}{}{}",
        bar,
        style(&section.title).bold(),
        affordances(&section.header)
    );

    for group in &section.groups {
        render_group(out, group);
    }
    if let Some(placeholder) = &section.placeholder {
        let _ = writeln!(out, "   {}", style(format!("+ {placeholder}")).dim());
    }
    if !section.footer.is_empty() {
        let _ = writeln!(out, "  {}", affordances(&section.footer));
    }
    for boolean in &section.booleans {
        let _ = writeln!(
            out,
            "   {} {}",
            style(format!("{}:", boolean.label)).cyan(),
            boolean.expression
        );
    }
    if let Some(search) = &section.search {
        render_search(out, search);
    }
}

fn render_group(out: &mut String, group: &GroupView) {
    let arrow = if group.menu_open { "▴" } else { "▾" };
    let _ = writeln!(
        out,
        "   {} {}",
        style(format!("{} {arrow}", group.tier_label)).yellow(),
        style(&group.caption).dim()
    );
    let mut chips: Vec<String> = group
        .chips
        .iter()
        .map(|chip| match chip.time_qualifier {
            Some(time) => format!("[{} · {} ×]", chip.label, time),
            None => format!("[{} ×]", chip.label),
        })
        .collect();
    if group.trailing_add {
        chips.push("[+]".to_string());
    }
    let _ = writeln!(out, "     {}", style(chips.join(" ")).blue());
}

fn render_search(out: &mut String, search: &SearchView) {
    let options: Vec<String> = search.options.iter().map(ToString::to_string).collect();
    let _ = writeln!(
        out,
        "   {} {} {}",
        style("⌕").cyan(),
        style(&search.placeholder).dim(),
        style(format!("[{} ▾ {}]", search.qualifier, options.join("/"))).yellow()
    );
    let _ = writeln!(out, "     {}", style(&search.header).underlined());
    for item in &search.items {
        let _ = writeln!(out, "     {item}");
    }
    if !search.actions.is_empty() {
        let _ = writeln!(out, "    {}", affordances(&search.actions));
    }
}

fn affordances(actions: &[Affordance]) -> String {
    actions
        .iter()
        .map(|a| format!("  {}", style(format!("[{}]", a.label())).cyan()))
        .collect()
}

/// One line per replayed step, failures first-class
pub fn render_report(report: &ReplayReport) -> String {
    let mut out = String::new();
    for step in &report.steps {
        match &step.error {
            None => {
                let _ = writeln!(out, "{} {:>3} {}", style("✓").green(), step.index, step.action);
            }
            Some(err) => {
                let _ = writeln!(
                    out,
                    "{} {:>3} {} {}",
                    style("✗").red(),
                    step.index,
                    step.action,
                    style(err).red()
                );
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{Action, FilterPanel};
    use crate::session::StepRecord;
    use crate::view::Variant;

    fn plain(s: &str) -> String {
        console::strip_ansi_codes(s).into_owned()
    }

    #[test]
    fn test_render_selected_chips() {
        let mut panel = FilterPanel::default();
        panel
            .dispatch(Action::Select {
                category: "Skills".into(),
                label: "Go".into(),
                qualifier: None,
            })
            .unwrap();

        let text = plain(&render_panel(&panel.render().unwrap()));
        assert!(text.contains("Match Criteria [V2]"));
        assert!(text.contains("Must have ▾ current skills"));
        assert!(text.contains("[Go ×] [+]"));
        assert!(text.contains("+ Location, region, remote, etc"));
    }

    #[test]
    fn test_render_collapsed() {
        let mut panel = FilterPanel::default();
        panel.dispatch(Action::ToggleCollapsed).unwrap();
        let text = plain(&render_panel(&panel.render().unwrap()));
        assert!(text.contains("(collapsed)"));
        assert!(!text.contains("Skills"));
    }

    #[test]
    fn test_render_priority_chip_recency() {
        let mut panel = FilterPanel::new(
            crate::catalog::CategoryCatalog::builtin(),
            Variant::V5,
            Default::default(),
        );
        panel
            .dispatch(Action::Select {
                category: "Skills".into(),
                label: "Rust".into(),
                qualifier: None,
            })
            .unwrap();
        let text = plain(&render_panel(&panel.render().unwrap()));
        assert!(text.contains("[Rust · Current ×]"));
    }

    #[test]
    fn test_render_report() {
        let report = ReplayReport {
            steps: vec![
                StepRecord {
                    index: 0,
                    action: "select",
                    error: None,
                },
                StepRecord {
                    index: 1,
                    action: "remove",
                    error: Some("unknown category: Hobbies".into()),
                },
            ],
        };
        let text = plain(&render_report(&report));
        assert!(text.contains("✓   0 select"));
        assert!(text.contains("✗   1 remove unknown category: Hobbies"));
    }
}
