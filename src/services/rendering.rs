use log::info;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::chart::{
    render, render_placeholder, to_chart_spec, ChartKind, ChartOptions, ChartSpec, Margin, Placeholder,
    RenderConfig, RenderSurface, RenderedChart,
};
use crate::config::ranges::{pool_bar_fields, pool_raw_fields, radar_fields};
use crate::config::settings::ReferenceTables;
use crate::data::SiteData;
use crate::domain::{Entity, Player, Pool};
use crate::errors::ChartError;
use crate::series::{
    build_bar_series, build_geo_series, build_pie_series, build_radar_series, build_stat_bar_series,
    CategoricalSeries, Category, Datasets, StatBar,
};
use crate::stats::coerce_field;

pub const WORLD_MAP_TARGET: &str = "world-map";
pub const POOL_BAR_TARGET: &str = "barPlot";
pub const POOL_RAW_TARGET: &str = "rawPlot";
pub const STAT_CHART_TARGET: &str = "stat-chart";
pub const PIE_CHART_TARGET: &str = "pie-chart";

pub fn radar_target(team: &str) -> String {
    format!("team-{}-plot", team)
}

/// A page of the site that carries charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Pool(String),
    Player(String),
}

impl Page {
    pub fn parse(name: &str, key: Option<&str>) -> Result<Self, ChartError> {
        let key = key.map(str::to_string);
        match name {
            "home" => Ok(Page::Home),
            "pool" => key.map(Page::Pool).ok_or_else(|| ChartError::MissingPageKey(name.to_string())),
            "player" => key.map(Page::Player).ok_or_else(|| ChartError::MissingPageKey(name.to_string())),
            _ => Err(ChartError::UnknownPage(name.to_string())),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Home => write!(f, "home"),
            Page::Pool(key) => write!(f, "pool {}", key),
            Page::Player(id) => write!(f, "player {}", id),
        }
    }
}

/// One instruction for the browser: draw a chart or show a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum RenderCommand {
    Plot {
        target: String,
        spec: ChartSpec,
        /// Clicking a point opens the detail page of its entity
        navigable: bool,
    },
    Placeholder {
        target: String,
        #[serde(flatten)]
        placeholder: Placeholder,
    },
}

impl RenderCommand {
    pub fn target(&self) -> &str {
        match self {
            RenderCommand::Plot { target, .. } | RenderCommand::Placeholder { target, .. } => target,
        }
    }
}

/// Render surface that records what a page should draw.
///
/// Only the containers the page declares can be drawn into. A later draw into
/// the same container replaces the earlier one.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenderPlan {
    #[serde(skip)]
    containers: BTreeSet<String>,
    #[serde(skip)]
    navigable: BTreeSet<String>,
    commands: Vec<RenderCommand>,
}

impl RenderPlan {
    pub fn new<I, S>(containers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            containers: containers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn command(&self, target: &str) -> Option<&RenderCommand> {
        self.commands.iter().find(|c| c.target() == target)
    }

    /// Keeps only plots of `kind`; placeholders are dropped.
    pub fn retain_kind(&mut self, kind: ChartKind) {
        self.commands.retain(|c| match c {
            RenderCommand::Plot { spec, .. } => spec.kind() == kind,
            RenderCommand::Placeholder { .. } => false,
        });
    }

    /// Must be called before drawing into `target`.
    fn mark_navigable(&mut self, target: &str) {
        self.navigable.insert(target.to_string());
    }

    fn replace(&mut self, command: RenderCommand) {
        self.commands.retain(|c| c.target() != command.target());
        self.commands.push(command);
    }
}

impl RenderSurface for RenderPlan {
    fn has_target(&self, target: &str) -> bool {
        self.containers.contains(target)
    }

    fn draw(&mut self, target: &str, spec: &ChartSpec) {
        let navigable = self.navigable.contains(target);
        self.replace(RenderCommand::Plot {
            target: target.to_string(),
            spec: spec.clone(),
            navigable,
        });
    }

    fn show_placeholder(&mut self, target: &str, placeholder: &Placeholder) {
        self.replace(RenderCommand::Placeholder {
            target: target.to_string(),
            placeholder: placeholder.clone(),
        });
    }
}

/// Result of rendering a page: what to draw plus handles for click binding.
#[derive(Debug)]
pub struct RenderedPage {
    pub plan: RenderPlan,
    pub charts: Vec<RenderedChart>,
}

impl RenderedPage {
    /// Chart drawn into `target` that navigates on click.
    pub fn navigable_chart(&mut self, target: &str) -> Option<&mut RenderedChart> {
        if !self.plan.navigable.contains(target) {
            return None;
        }
        self.charts.iter_mut().find(|c| c.target() == target)
    }
}

/// Builds the charts of each page from the loaded site data
pub struct PageRenderer {
    data: SiteData,
    datasets: Datasets,
    tables: ReferenceTables,
}

impl PageRenderer {
    pub fn new(data: SiteData, tables: ReferenceTables) -> Self {
        let datasets = data.datasets();
        Self { data, datasets, tables }
    }

    pub fn data(&self) -> &SiteData {
        &self.data
    }

    /// Containers declared by the page template
    pub fn containers(&self, page: &Page) -> Result<BTreeSet<String>, ChartError> {
        let mut containers = BTreeSet::new();
        match page {
            Page::Home => {
                containers.insert(WORLD_MAP_TARGET.to_string());
            }
            Page::Pool(key) => {
                let pool = self.pool(key)?;
                containers.insert(POOL_BAR_TARGET.to_string());
                containers.insert(POOL_RAW_TARGET.to_string());
                containers.extend(pool.teams.iter().map(|t| radar_target(&t.name)));
            }
            Page::Player(id) => {
                self.player(id)?;
                containers.insert(STAT_CHART_TARGET.to_string());
                containers.insert(PIE_CHART_TARGET.to_string());
            }
        }
        Ok(containers)
    }

    /// Renders `page` into a fresh plan with the page's own containers.
    pub fn render_page(&self, page: &Page) -> Result<RenderedPage, ChartError> {
        let mut plan = RenderPlan::new(self.containers(page)?);
        let charts = self.render_into(page, &mut plan)?;
        info!("Rendered {} ({} commands)", page, plan.commands().len());
        Ok(RenderedPage { plan, charts })
    }

    pub fn render_into(&self, page: &Page, plan: &mut RenderPlan) -> Result<Vec<RenderedChart>, ChartError> {
        match page {
            Page::Home => self.render_home(plan),
            Page::Pool(key) => self.render_pool(key, plan),
            Page::Player(id) => self.render_player(id, plan),
        }
    }

    pub fn pool(&self, key: &str) -> Result<&Pool, ChartError> {
        self.data
            .pools
            .get(&key.to_uppercase())
            .ok_or_else(|| ChartError::PoolNotFound(key.to_string()))
    }

    fn player(&self, id: &str) -> Result<&Player, ChartError> {
        self.data
            .players
            .get(id)
            .ok_or_else(|| ChartError::PlayerNotFound(id.to_string()))
    }

    // --- Home ---

    fn render_home(&self, plan: &mut RenderPlan) -> Result<Vec<RenderedChart>, ChartError> {
        let series = build_geo_series(&self.data.pools, &self.tables.ranks, &self.tables.aliases);
        let title = match self.tables.ranks.as_of() {
            Some(date) => format!("WBC participants by world ranking ({})", date.format("%Y-%m-%d")),
            None => "WBC participants by world ranking".to_string(),
        };
        let options = ChartOptions::titled(title);
        let spec = to_chart_spec(&[series], ChartKind::Choropleth, &options)?;

        plan.mark_navigable(WORLD_MAP_TARGET);
        Ok(render(plan, WORLD_MAP_TARGET, &spec).into_iter().collect())
    }

    // --- Pool ---

    fn render_pool(&self, key: &str, plan: &mut RenderPlan) -> Result<Vec<RenderedChart>, ChartError> {
        let teams = &self.pool(key)?.teams;
        let mut charts = Vec::new();

        charts.extend(self.render_pool_bars(teams, plan)?);
        charts.extend(self.render_pool_raw(teams, plan)?);
        charts.extend(self.render_pool_radars(teams, plan)?);
        Ok(charts)
    }

    fn render_pool_bars(&self, teams: &[Entity], plan: &mut RenderPlan) -> Result<Option<RenderedChart>, ChartError> {
        let series = build_bar_series(teams, &self.datasets, &pool_bar_fields(), &self.tables.aliases);
        let mut options = ChartOptions::titled("Team pitching vs hitting strength")
            .axis_titles("Team", "Strength score (0-100)");
        options.autosize = Some(true);
        let spec = to_chart_spec(&series, ChartKind::Bar, &options)?;

        plan.mark_navigable(POOL_BAR_TARGET);
        Ok(render(plan, POOL_BAR_TARGET, &spec))
    }

    fn render_pool_raw(&self, teams: &[Entity], plan: &mut RenderPlan) -> Result<Option<RenderedChart>, ChartError> {
        let series = build_bar_series(teams, &self.datasets, &pool_raw_fields(), &self.tables.aliases);
        let options = ChartOptions::titled("Team ERA and OPS")
            .axis_titles("Team", "ERA")
            .secondary_axis("OPS");
        let spec = to_chart_spec(&series, ChartKind::Bar, &options)?;

        Ok(render(plan, POOL_RAW_TARGET, &spec))
    }

    fn render_pool_radars(&self, teams: &[Entity], plan: &mut RenderPlan) -> Result<Vec<RenderedChart>, ChartError> {
        let all_series = build_radar_series(teams, &self.datasets, &radar_fields(), &self.tables.aliases);
        let mut options = ChartOptions::titled("Team pitching and hitting profile").legend(true);
        options.autosize = Some(true);

        let mut charts = Vec::new();
        for series in all_series {
            let target = radar_target(series.name());
            let spec = to_chart_spec(std::slice::from_ref(&series), ChartKind::Radar, &options)?;
            charts.extend(render(plan, &target, &spec));
        }
        Ok(charts)
    }

    // --- Player ---

    fn render_player(&self, id: &str, plan: &mut RenderPlan) -> Result<Vec<RenderedChart>, ChartError> {
        let player = self.player(id)?;
        let mut charts = Vec::new();

        let series = build_stat_bar_series(stat_chart_title(player), id, &player_stat_bars(player));
        let mut options = ChartOptions::titled(stat_chart_title(player))
            .margin(Margin { t: 40, b: 40, l: 40, r: 20 })
            .render_config(RenderConfig::compact());
        options.y_axis_title = Some("Value".to_string());
        options.show_values = true;
        let spec = to_chart_spec(&[series], ChartKind::Bar, &options)?;
        charts.extend(render(plan, STAT_CHART_TARGET, &spec));

        match build_pie_series(pie_chart_title(player), &player_outcomes(player), id) {
            CategoricalSeries::Data(series) => {
                let options = ChartOptions::titled(pie_chart_title(player))
                    .legend(true)
                    .margin(Margin::uniform(60))
                    .render_config(RenderConfig::compact());
                let spec = to_chart_spec(&[series], ChartKind::Pie, &options)?;
                charts.extend(render(plan, PIE_CHART_TARGET, &spec));
            }
            CategoricalSeries::NoData => {
                render_placeholder(plan, PIE_CHART_TARGET, &no_data_placeholder(player));
            }
        }
        Ok(charts)
    }
}

fn stat_chart_title(player: &Player) -> &'static str {
    if player.is_batter() {
        "Slash line & OPS"
    } else {
        "Key pitching stats"
    }
}

fn pie_chart_title(player: &Player) -> &'static str {
    if player.is_batter() {
        "Plate appearance outcomes"
    } else {
        "Strikeouts vs walks"
    }
}

fn player_stat_bars(player: &Player) -> Vec<StatBar> {
    let stat = |field: &str| coerce_field(Some(&player.stats), field);
    if player.is_batter() {
        vec![
            StatBar::new("AVG", stat("avg"), "#1f77b4"),
            StatBar::new("OBP", stat("obp"), "#1f77b4"),
            StatBar::new("SLG", stat("slg"), "#1f77b4"),
            StatBar::new("OPS", stat("ops"), "#2ca02c"),
        ]
    } else {
        vec![
            StatBar::new("WHIP", stat("whip"), "#ff7f0e"),
            StatBar::new("ERA", stat("era"), "#d62728"),
        ]
    }
}

fn player_outcomes(player: &Player) -> Vec<Category> {
    let stat = |field: &str| coerce_field(Some(&player.stats), field);
    if player.is_batter() {
        vec![
            Category::new("Single", stat("1b"), "#1f77b4"),
            Category::new("Double", stat("2b"), "#2ca02c"),
            Category::new("Triple", stat("3b"), "#9467bd"),
            Category::new("Home run", stat("hr"), "#d62728"),
            Category::new("Out", stat("out"), "#7f7f7f"),
        ]
    } else {
        vec![
            Category::new("Strikeout (SO)", stat("so"), "#ff7f0e"),
            Category::new("Walk (BB)", stat("bb"), "#1f77b4"),
        ]
    }
}

fn no_data_placeholder(player: &Player) -> Placeholder {
    let message = if player.is_batter() {
        "No hits or outs recorded"
    } else {
        "No strikeouts or walks recorded"
    };
    Placeholder::new("No data", message)
}
