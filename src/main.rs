use anyhow::Ok;
use clap::Parser;
use plate_planner::{
    format::fmt_num,
    implement::{CONNECTOR_BAR_WEIGHT, DEFAULT_SIDE_LENGTH, DUMBBELL_BAR_WEIGHT, Implement},
    loading_mode::LoadingMode,
    plan::Plan,
    plate::Plate,
};

/// List every symmetric way to load dumbbells or a connecting bar.
#[derive(Parser)]
struct Args {
    /// Plate kind as <weight>:<thickness>:<count>[:<label>], repeatable.
    /// Uses a sample inventory when omitted.
    #[arg(short, long = "plate", value_parser = clap::value_parser!(Plate))]
    plates: Vec<Plate>,

    /// Only show these loading modes (pair, connector, single).
    #[arg(short, long, value_parser = clap::value_parser!(LoadingMode))]
    mode: Vec<LoadingMode>,

    /// Usable length per side of a dumbbell, in cm. Also used for a single dumbbell.
    #[arg(long, default_value_t = DEFAULT_SIDE_LENGTH)]
    pair_length: f64,

    /// Usable length per side of the connecting bar, in cm.
    #[arg(long, default_value_t = DEFAULT_SIDE_LENGTH)]
    connector_length: f64,

    /// Weight of one dumbbell handle, in kg.
    #[arg(long, default_value_t = DUMBBELL_BAR_WEIGHT)]
    pair_bar: f64,

    /// Weight of the connecting bar, in kg.
    #[arg(long, default_value_t = CONNECTOR_BAR_WEIGHT)]
    connector_bar: f64,

    /// Also list the unloaded bar.
    #[arg(long)]
    include_zero: bool,

    /// Show at most this many loadings per mode.
    #[arg(long)]
    limit: Option<usize>,
}

impl Args {
    fn implements(&self) -> Vec<Implement> {
        LoadingMode::ALL
            .into_iter()
            .filter(|mode| self.mode.is_empty() || self.mode.contains(mode))
            .map(|mode| match mode {
                LoadingMode::Pair | LoadingMode::Single => {
                    Implement::new(mode, self.pair_length, self.pair_bar)
                }
                LoadingMode::Connector => {
                    Implement::new(mode, self.connector_length, self.connector_bar)
                }
            })
            .collect()
    }
}

fn main() -> anyhow::Result<()> {
    let _ = env_logger::builder().try_init();
    let args = Args::parse();

    let implements = args.implements();
    let mut plates = match args.plates.is_empty() {
        true => Plate::sample_inventory(),
        false => args.plates,
    };
    Plate::sort_for_display(&mut plates);

    println!("Plates:");
    for plate in &plates {
        println!("  - {plate}");
    }

    let plan = Plan::build(plates, &implements, args.include_zero)?;

    for section in plan.sections() {
        let implement = section.implement();
        println!();
        println!(
            "{implement}: {} loadings, {} distinct weights",
            section.combo_count(),
            section.distinct_weights()
        );
        for combo in section
            .results()
            .iter()
            .take(args.limit.unwrap_or(usize::MAX))
        {
            println!(
                "  - {combo} | with bar {} kg",
                implement.loaded_formula(combo)
            );
        }
    }

    if let Some(section) = plan.first_non_empty() {
        let weights = section.weights();
        println!();
        println!(
            "Heaviest {}: {} kg",
            section.implement().mode(),
            weights.first().map_or_else(|| "0".to_string(), |w| fmt_num(*w))
        );
    }

    Ok(())
}
