use std::path::Path;

use anyhow::Result;
use codeinsight::config::Config;
use codeinsight::IngestStore;

use crate::ui::context::UiContext;
use crate::ui::theme::{colors, icon, icons, icons_ascii, paint};

pub fn cmd_repos(dir: Option<&Path>, latest: bool, ui: &UiContext, config: &Config) -> Result<()> {
    let store = IngestStore::new(dir.map_or_else(|| config.ingest_dir(), Path::to_path_buf));

    if latest {
        let id = store.latest()?;
        if ui.json {
            crate::ui::json::emit(serde_json::json!({
                "event": "latest",
                "repository_id": id,
                "dir": store.dir().display().to_string(),
            }))?;
        } else {
            println!("{}", id);
        }
        return Ok(());
    }

    let repos = store.list()?;

    if ui.json {
        let items: Vec<serde_json::Value> = repos
            .iter()
            .map(|repo| {
                serde_json::json!({
                    "repository_id": repo.id,
                    "content": repo.content_path.display().to_string(),
                    "processed_at": repo.metadata.as_ref().and_then(|m| m.processed_at.clone()),
                    "content_length": repo.metadata.as_ref().map(|m| m.stats.content_length),
                })
            })
            .collect();
        crate::ui::json::emit(serde_json::json!({
            "event": "repos",
            "dir": store.dir().display().to_string(),
            "count": items.len(),
            "repositories": items,
        }))?;
        return Ok(());
    }

    if repos.is_empty() {
        println!("No ingested repositories found in {}", store.dir().display());
        return Ok(());
    }

    println!(
        "{}",
        paint(
            &format!("{} repositories in {}", repos.len(), store.dir().display()),
            colors::INFO,
            ui.color
        )
    );
    let repo_icon = icon(ui.unicode, icons::REPO, icons_ascii::REPO);
    for repo in &repos {
        let processed = repo
            .metadata
            .as_ref()
            .and_then(|m| m.processed_at())
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        let size = repo
            .metadata
            .as_ref()
            .map(|m| format!("{} bytes", m.stats.content_length))
            .unwrap_or_default();
        println!(
            "{} {}  {}  {}",
            repo_icon,
            repo.id,
            paint(&processed, colors::DIM, ui.color),
            paint(&size, colors::DIM, ui.color)
        );
    }
    Ok(())
}
