pub mod api;
pub mod chart;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod errors;
pub mod series;
pub mod services;
pub mod stats;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::chart::ChartKind;
use crate::cli::{Cli, Command};
use crate::config::settings::AppConfig;
use crate::data::{DataStore, SiteData};
use crate::services::rendering::{Page, PageRenderer};
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: Option<u16>, data_dir: Option<PathBuf>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new().with_port(port).with_data_dir(data_dir);
        let service = ServerService::new(config);
        service.run().await
    })
}

pub fn handle_render(page: &str, key: Option<&str>, kind: Option<&str>, data_dir: Option<PathBuf>) -> Result<()> {
    let page = Page::parse(page, key)?;
    let kind = kind.map(str::parse::<ChartKind>).transpose()?;

    let config = AppConfig::new().with_data_dir(data_dir);
    let data = SiteData::load(&DataStore::new(&config.data.data_dir))?;
    let renderer = PageRenderer::new(data, config.tables);

    let mut rendered = renderer.render_page(&page)?;
    if let Some(kind) = kind {
        rendered.plan.retain_kind(kind);
    }
    println!("{}", serde_json::to_string_pretty(&rendered.plan)?);
    Ok(())
}

pub fn handle_predict(team_a: &str, team_b: &str, data_dir: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::new().with_data_dir(data_dir);
    let data = SiteData::load(&DataStore::new(&config.data.data_dir))?;

    let prediction = stats::predict(&data.teams, team_a, team_b)?;
    println!("{}", serde_json::to_string_pretty(&prediction)?);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
