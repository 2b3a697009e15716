mod error;
mod export;

use clap::{Parser, Subcommand};
use error::{AppError, AppResult};
use export::ExportFormat;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use wf_project::WellProject;
use wf_pvt::{FluidCharacterization, PvtModel, SweepDefinition, SweepSpacing, pressure_sweep};
use wf_traverse::{ProductionRates, TraverseError, TraverseProgressEvent, run_traverse_with};

#[derive(Parser)]
#[command(name = "wf-cli")]
#[command(about = "WellFlow CLI - Black-oil PVT and tubing pressure traverse", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and values
    Validate {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
    },
    /// Run the pressure traverse
    Run {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
        /// Export the profile (CSV, or JSON for a .json path)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Suppress the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
    /// Tabulate PVT properties over a pressure range at fixed temperature
    Pvt {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
        /// First pressure [psia]
        #[arg(long, default_value_t = 14.7)]
        from: f64,
        /// Last pressure [psia]
        #[arg(long, default_value_t = 5000.0)]
        to: f64,
        /// Number of pressures
        #[arg(long, default_value_t = 20)]
        points: usize,
        /// Temperature [°F], defaults to the wellhead temperature
        #[arg(long)]
        temperature: Option<f64>,
        /// Space pressures logarithmically
        #[arg(long)]
        log: bool,
    },
    /// Write the reference well project
    Init {
        /// Destination YAML file
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Run {
            project_path,
            output,
            quiet,
        } => cmd_run(&project_path, output.as_deref(), quiet),
        Commands::Pvt {
            project_path,
            from,
            to,
            points,
            temperature,
            log,
        } => cmd_pvt(&project_path, from, to, points, temperature, log),
        Commands::Init { path, force } => cmd_init(&path, force),
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = wf_project::load(project_path)?;
    println!("✓ Project is valid: {}", project.name);
    println!(
        "  {} ft of {:.3} in tubing, {} segments",
        project.well.tubing_depth,
        project.well.tubing_inner_diameter,
        project.well.number_of_segments
    );
    Ok(())
}

fn cmd_run(project_path: &Path, output: Option<&Path>, quiet: bool) -> AppResult<()> {
    let project = wf_project::load(project_path)?;
    let options = project.options();
    println!("Running traverse for: {}", project.name);

    let started = Instant::now();
    let mut last_emit = Instant::now();
    let mut last_fraction = -1.0f64;
    let mut render = |event: TraverseProgressEvent| {
        let emit_now = (event.fraction_complete - last_fraction).abs() >= 0.005
            || last_emit.elapsed().as_millis() >= 100;
        if emit_now {
            render_cli_progress(&event, started.elapsed().as_secs_f64());
            last_fraction = event.fraction_complete;
            last_emit = Instant::now();
        }
    };
    let progress: Option<&mut dyn FnMut(TraverseProgressEvent)> =
        if quiet { None } else { Some(&mut render) };
    let result = run_traverse_with(&project.well, &options, progress);
    if !quiet {
        clear_progress_line();
    }
    let profile = result?;
    let elapsed = started.elapsed().as_secs_f64();

    let wellhead = profile.wellhead();
    let bottom = profile.bottomhole();
    println!("✓ Traverse completed in {:.3}s", elapsed);
    println!("  Segments:        {}", profile.number_of_segments());
    println!("  Segment length:  {:.3} ft", profile.segment_length());
    println!(
        "  Wellhead:        {:.2} psia, {:.2} °F, {:.3} lbm/ft³",
        wellhead.pressure, wellhead.temperature, wellhead.density
    );
    println!(
        "  Bottomhole:      {:.2} psia, {:.2} °F at {:.1} ft",
        bottom.pressure, bottom.temperature, bottom.depth
    );
    println!(
        "  Mean gradient:   {:.4} psi/ft",
        profile.mean_pressure_gradient()
    );
    println!("  Max iterations:  {}", profile.max_iterations());

    if let Some(path) = output {
        let content = match ExportFormat::from_path(path) {
            ExportFormat::Csv => export::profile_csv(&profile),
            ExportFormat::Json => export::profile_json(&profile)?,
        };
        write_file(path, &content)?;
        println!("✓ Exported {} points to {}", profile.len(), path.display());
    }

    Ok(())
}

fn cmd_pvt(
    project_path: &Path,
    from: f64,
    to: f64,
    points: usize,
    temperature: Option<f64>,
    log: bool,
) -> AppResult<()> {
    let project = wf_project::load(project_path)?;
    let fluid = fluid_from_project(&project)?;
    let model = project.options().model();
    let spacing = if log {
        SweepSpacing::Logarithmic
    } else {
        SweepSpacing::Linear
    };
    let definition = SweepDefinition::new(from, to, points, spacing)?;
    let t = temperature.unwrap_or(project.well.wellhead_temperature);

    let sweep = pressure_sweep(&model, &fluid, &definition, t)?;
    println!("Model: {}", model.name());
    println!(
        "Bubble point: {:.2} psia",
        model.bubble_point(&fluid, t)?
    );
    print!("{}", export::sweep_table(&sweep));
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::AlreadyExists(path.to_path_buf()));
    }
    let project = WellProject::reference();
    wf_project::save_yaml(path, &project)?;
    println!("✓ Wrote reference project to {}", path.display());
    Ok(())
}

fn fluid_from_project(project: &WellProject) -> AppResult<FluidCharacterization> {
    let rates = ProductionRates::from_config(&project.well)?;
    FluidCharacterization::new(
        project.well.surface_fluid(),
        rates.producing_gor,
        rates.water_oil_ratio,
    )
    .map_err(|e| {
        AppError::Traverse(TraverseError::InvalidConfiguration {
            what: e.to_string(),
        })
    })
}

fn write_file(path: &Path, content: &str) -> AppResult<()> {
    std::fs::write(path, content).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(120));
    let _ = io::stdout().flush();
}

fn render_cli_progress(event: &TraverseProgressEvent, elapsed_s: f64) {
    let width = 28usize;
    let filled = ((event.fraction_complete * width as f64).round() as usize).min(width);
    let bar = format!(
        "{}{}",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled))
    );
    print!(
        "\r[{}] {:>6.2}%  segment={}/{}  depth={:.1}ft  p={:.2}psia  iter={}  elapsed={:.1}s",
        bar,
        event.fraction_complete * 100.0,
        event.segment,
        event.number_of_segments,
        event.depth,
        event.pressure,
        event.iterations,
        elapsed_s
    );
    let _ = io::stdout().flush();
}
