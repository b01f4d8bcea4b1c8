use clap::Parser;
use haarlike::io::{load_channel_image, save_channel};
use haarlike::{
    Bound, Channel, Guess, IntegralImage, PatternKind, RecenterConfig, RecenterOutcome,
    WeightMatrix,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Haar-like feature extraction (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output, including per-iteration recentering steps.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
enum ChannelConfig {
    Red,
    Green,
    Blue,
    Gray,
}

impl From<ChannelConfig> for Channel {
    fn from(value: ChannelConfig) -> Self {
        match value {
            ChannelConfig::Red => Channel::Red,
            ChannelConfig::Green => Channel::Green,
            ChannelConfig::Blue => Channel::Blue,
            ChannelConfig::Gray => Channel::Gray,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
enum PatternConfig {
    Horizontal,
    Vertical,
    Diagonal,
    Inner3,
    Inner4,
    Inner5,
    DynamicHorizontal(usize),
    DynamicVertical(usize),
    /// Explicit weight rows.
    Custom(Vec<Vec<i32>>),
}

impl PatternConfig {
    fn label(&self) -> String {
        match self {
            PatternConfig::Horizontal => "horizontal".into(),
            PatternConfig::Vertical => "vertical".into(),
            PatternConfig::Diagonal => "diagonal".into(),
            PatternConfig::Inner3 => "inner3".into(),
            PatternConfig::Inner4 => "inner4".into(),
            PatternConfig::Inner5 => "inner5".into(),
            PatternConfig::DynamicHorizontal(n) => format!("dynamic_horizontal_{n}"),
            PatternConfig::DynamicVertical(n) => format!("dynamic_vertical_{n}"),
            PatternConfig::Custom(rows) => {
                format!("custom_{}x{}", rows.len(), rows.first().map_or(0, Vec::len))
            }
        }
    }

    fn to_matrix(&self) -> haarlike::HaarResult<WeightMatrix> {
        let kind = match self {
            PatternConfig::Horizontal => PatternKind::Horizontal,
            PatternConfig::Vertical => PatternKind::Vertical,
            PatternConfig::Diagonal => PatternKind::Diagonal,
            PatternConfig::Inner3 => PatternKind::Inner3,
            PatternConfig::Inner4 => PatternKind::Inner4,
            PatternConfig::Inner5 => PatternKind::Inner5,
            PatternConfig::DynamicHorizontal(n) => PatternKind::DynamicHorizontal(*n),
            PatternConfig::DynamicVertical(n) => PatternKind::DynamicVertical(*n),
            PatternConfig::Custom(rows) => return WeightMatrix::new(rows.clone()),
        };
        kind.to_matrix()
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RecenterJson {
    enabled: bool,
    channel: ChannelConfig,
    max_iterations: usize,
    threshold: i32,
    max_axis_steps: usize,
}

impl Default for RecenterJson {
    fn default() -> Self {
        let cfg = RecenterConfig::default();
        Self {
            enabled: false,
            channel: ChannelConfig::Gray,
            max_iterations: 10,
            threshold: cfg.threshold,
            max_axis_steps: cfg.max_axis_steps,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    image_path: String,
    output_path: Option<String>,
    invert: bool,
    channels: Vec<ChannelConfig>,
    patterns: Vec<PatternConfig>,
    /// `[x0, y0, x1, y1]` with inclusive corners.
    bounds: Vec<[i32; 4]>,
    guess: bool,
    recenter: RecenterJson,
    /// When set, each evaluated bound is cropped and its channels saved here.
    extract_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_path: String::new(),
            output_path: None,
            invert: false,
            channels: vec![ChannelConfig::Red, ChannelConfig::Green, ChannelConfig::Blue],
            patterns: vec![PatternConfig::Horizontal, PatternConfig::Vertical],
            bounds: Vec::new(),
            guess: false,
            recenter: RecenterJson::default(),
            extract_dir: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct BoundRecord {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}

impl From<Bound> for BoundRecord {
    fn from(value: Bound) -> Self {
        Self {
            x0: value.left().get(),
            y0: value.top().get(),
            x1: value.right().get(),
            y1: value.bottom().get(),
        }
    }
}

#[derive(Debug, Serialize)]
struct RecenterRecord {
    bound: BoundRecord,
    iterations: usize,
    converged: bool,
}

impl From<RecenterOutcome> for RecenterRecord {
    fn from(value: RecenterOutcome) -> Self {
        Self {
            bound: value.bound.into(),
            iterations: value.iterations,
            converged: value.converged,
        }
    }
}

#[derive(Debug, Serialize)]
struct FeatureRecord {
    pattern: String,
    channel: ChannelConfig,
    value: i64,
}

#[derive(Debug, Serialize)]
struct GuessRecord {
    values: [i64; 3],
    accepted: bool,
}

impl From<Guess> for GuessRecord {
    fn from(value: Guess) -> Self {
        Self {
            values: value.values,
            accepted: value.accepted,
        }
    }
}

#[derive(Debug, Serialize)]
struct BoundReport {
    input: BoundRecord,
    recentered: Option<RecenterRecord>,
    features: Vec<FeatureRecord>,
    guess: Option<GuessRecord>,
}

#[derive(Debug, Serialize)]
struct Output {
    width: usize,
    height: usize,
    bounds: Vec<BoundReport>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("haarlike=debug".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.image_path.is_empty() {
        return Err("image_path must be set in the config".into());
    }
    if config.bounds.is_empty() {
        return Err("bounds must list at least one [x0, y0, x1, y1] entry".into());
    }

    let mut image = load_channel_image(&config.image_path)?;
    if config.invert {
        image = image.invert();
    }
    let integral = IntegralImage::from_image(&image)?;

    let patterns = config
        .patterns
        .iter()
        .map(|p| p.to_matrix().map(|m| (p.label(), m)))
        .collect::<Result<Vec<_>, _>>()?;
    let recenter_cfg = RecenterConfig {
        threshold: config.recenter.threshold,
        max_axis_steps: config.recenter.max_axis_steps,
    };

    let mut reports = Vec::with_capacity(config.bounds.len());
    for (idx, &[x0, y0, x1, y1]) in config.bounds.iter().enumerate() {
        let input = Bound::from_coords(x0, y0, x1, y1);

        let recentered = config.recenter.enabled.then(|| {
            integral.recenter_with(
                config.recenter.channel.into(),
                &input,
                config.recenter.max_iterations,
                &recenter_cfg,
            )
        });
        let bound = recentered.map_or(input, |out| out.bound);

        let mut features = Vec::with_capacity(patterns.len() * config.channels.len());
        for (label, pattern) in &patterns {
            for &channel in &config.channels {
                features.push(FeatureRecord {
                    pattern: label.clone(),
                    channel,
                    value: integral.apply_feature(channel.into(), &bound, pattern),
                });
            }
        }

        if let Some(dir) = &config.extract_dir {
            save_extracts(&image, &bound, Path::new(dir), idx)?;
        }

        reports.push(BoundReport {
            input: input.into(),
            recentered: recentered.map(RecenterRecord::from),
            features,
            guess: config.guess.then(|| integral.guess(&bound).into()),
        });
    }

    let output = Output {
        width: integral.width(),
        height: integral.height(),
        bounds: reports,
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}

fn save_extracts(
    image: &haarlike::ChannelImage,
    bound: &Bound,
    dir: &Path,
    idx: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(dir)?;
    let cropped = image.crop(bound)?;
    for channel in Channel::COLORS {
        save_channel(&cropped, channel, dir.join(format!("{idx}_{channel}.png")))?;
    }
    Ok(())
}
