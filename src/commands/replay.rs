//! `criteria replay`: run a session script and show the resulting panel

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use console::style;
use serde_json::json;

use super::output::{render_panel, render_report};
use crate::config::Config;
use crate::panel::FilterPanel;
use crate::session::{replay, SessionScript};
use crate::view::Variant;

/// Options for the replay command
#[derive(Debug, Clone)]
pub struct ReplayOptions {
    pub script: PathBuf,
    /// Overrides the script's and the config's variant
    pub variant: Option<Variant>,
    /// Record rejected actions and continue
    pub keep_going: bool,
    pub json: bool,
}

/// Execute the replay command
pub fn execute_replay(config: &Config, options: ReplayOptions) -> Result<()> {
    let mut script = SessionScript::load(&options.script)
        .with_context(|| format!("failed to load {}", options.script.display()))?;
    if options.variant.is_some() {
        script.variant = options.variant;
    }

    let mut panel = FilterPanel::new(config.catalog()?, config.variant, config.close_delays);
    let report = replay(&mut panel, &script, options.keep_going)?;

    if options.json {
        let out = json!({
            "steps": report.steps,
            "snapshot": panel.snapshot(),
            "view": panel.render()?,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", render_report(&report));
        println!();
        print!("{}", render_panel(&panel.render()?));
    }

    let failed = report.failed().count();
    if failed > 0 {
        bail!("{failed} of {} step(s) rejected", report.steps.len());
    }
    if !options.json {
        println!(
            "\n{} {} step(s) applied",
            style("✓").green(),
            report.applied()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_replay_json_script() {
        let dir = TempDir::new().unwrap();
        let script = write_script(
            &dir,
            "session.json",
            r#"{"actions":[{"action":"select","category":"Skills","label":"Go"}]}"#,
        );
        execute_replay(
            &Config::default(),
            ReplayOptions {
                script,
                variant: None,
                keep_going: false,
                json: true,
            },
        )
        .unwrap();
    }

    #[test]
    fn test_replay_reports_rejections() {
        let dir = TempDir::new().unwrap();
        let script = write_script(
            &dir,
            "session.yml",
            "actions:\n  - action: select\n    category: Hobbies\n    label: Chess\n",
        );
        let options = ReplayOptions {
            script,
            variant: Some(Variant::V3),
            keep_going: true,
            json: false,
        };
        let err = execute_replay(&Config::default(), options).unwrap_err();
        assert!(err.to_string().contains("1 of 1"));
    }

    #[test]
    fn test_missing_script() {
        let options = ReplayOptions {
            script: PathBuf::from("does-not-exist.json"),
            variant: None,
            keep_going: false,
            json: false,
        };
        let err = execute_replay(&Config::default(), options).unwrap_err();
        assert!(err.to_string().contains("failed to load"));
    }
}
