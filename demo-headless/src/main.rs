use clap::{Parser, ValueEnum};
use podostemum_core::{
    apply_daily_update, evaluate_days, AttenuationParams, Celsius, Degrees, Grams, Limitation,
    Meters, OrganParams, PhotoParams, PolarPolicy, RespirationParams, ScenarioConfig,
    SiteConfig, TemperatureResponse,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Daily light and carbon budget for a submerged riverweed
#[derive(Parser, Debug)]
#[command(name = "podostemum-demo")]
#[command(about = "Podostemum ceratophyllum light and growth budget", long_about = None)]
struct Args {
    /// JSON scenario file; overrides every site and organ flag below
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Latitude in degrees (negative = south)
    #[arg(short, long, default_value_t = 34.0, allow_hyphen_values = true)]
    latitude: f64,

    /// First Julian day (1-365)
    #[arg(long, default_value_t = 1)]
    day_start: u32,

    /// Last Julian day (inclusive)
    #[arg(long, default_value_t = 365)]
    day_end: u32,

    /// What to do when the sun never rises or never sets
    #[arg(long, value_enum, default_value_t = PolarArg::Clamp)]
    polar: PolarArg,

    /// Tissue depth below the surface in meters
    #[arg(short, long, default_value_t = 0.3)]
    depth: f64,

    /// Water extinction coefficient K (1/m)
    #[arg(short, long, default_value_t = 1.0)]
    k: f64,

    /// Fraction of PAR reflected at the surface (0-1)
    #[arg(long, default_value_t = 0.1)]
    prop_reflect: f64,

    /// Maximum photosynthetic rate (mg C / g / h / µE)
    #[arg(long, default_value_t = 0.005)]
    pmax: f64,

    /// Photosynthetic biomass in grams
    #[arg(long, default_value_t = 2.0)]
    pbiomass: f64,

    /// Grams of glucose per gram of new biomass
    #[arg(long, default_value_t = 1.5)]
    glucose_req: f64,

    /// Light half-saturation Hi (µE); omit for no light limitation
    #[arg(long)]
    hi: Option<f64>,

    /// Water temperature (°C); omit for no temperature limitation
    #[arg(short, long, allow_hyphen_values = true)]
    temp: Option<f64>,

    /// Maintenance coefficient km' at 25 °C (1/day)
    #[arg(long, default_value_t = 0.0225)]
    km_prime: f64,

    /// Live tissue weight (g)
    #[arg(long, default_value_t = 2.0)]
    live: f64,

    /// Total tissue weight (g)
    #[arg(long, default_value_t = 2.0)]
    total: f64,

    /// Report starting biomass (total weight) plus the cumulative net budget;
    /// organ parameters stay fixed across days
    #[arg(long)]
    track_biomass: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolarArg {
    Clamp,
    Reject,
}

impl From<PolarArg> for PolarPolicy {
    fn from(p: PolarArg) -> Self {
        match p {
            PolarArg::Clamp => PolarPolicy::Clamp,
            PolarArg::Reject => PolarPolicy::Reject,
        }
    }
}

impl Args {
    fn scenario(&self) -> Result<ScenarioConfig, String> {
        if let Some(path) = &self.scenario {
            info!("Loading scenario from {}", path.display());
            return ScenarioConfig::load(path).map_err(|e| format!("{}: {e}", path.display()));
        }

        // Water temperature drives both assimilation and respiration.
        let water_temp = self.temp.unwrap_or(Celsius::RESPIRATION_REFERENCE.value());
        let organ = OrganParams {
            name: "thallus".to_string(),
            depth: Meters::new(self.depth),
            attenuation: AttenuationParams {
                prop_reflect: self.prop_reflect,
                ..AttenuationParams::water(self.k)
            },
            photo: PhotoParams {
                light: Limitation::from_half_saturation(self.hi),
                temperature: self.temp.map_or(TemperatureResponse::Unlimited, |t| {
                    TemperatureResponse::hill(Celsius::new(t))
                }),
                ..PhotoParams::unlimited(self.pmax, Grams::new(self.pbiomass), self.glucose_req)
            },
            respiration: RespirationParams {
                km_prime: self.km_prime,
                temp: Celsius::new(water_temp),
                live_weight: Grams::new(self.live),
                total_weight: Grams::new(self.total),
                glucose_req: self.glucose_req,
            },
        };
        let config = ScenarioConfig {
            site: SiteConfig {
                latitude: Degrees::new(self.latitude),
                day_start: self.day_start,
                day_end: self.day_end,
                polar_policy: self.polar.into(),
            },
            organs: vec![organ],
        };
        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();
    let config = match args.scenario() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid scenario: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("=== Podostemum Light & Carbon Budget ===\n");
    println!(
        "Latitude: {}, days {}..={}, {} organ(s): {}",
        config.site.latitude,
        config.site.day_start,
        config.site.day_end,
        config.organs.len(),
        config
            .organs
            .iter()
            .map(|o| o.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!();

    let reports = evaluate_days(
        &config.site.days(),
        config.site.polar_policy,
        &config.organs,
    );

    println!(" Day | Daylength(h) | PAR noon | PAR mid | PAR late | Gross(g) |  Resp(g) |   Net(g)");
    println!("-----|--------------|----------|---------|----------|----------|----------|---------");

    let mut totals = (Grams::default(), Grams::default(), Grams::default());
    let mut warnings = 0_usize;
    let mut biomass = config
        .organs
        .iter()
        .fold(Grams::default(), |acc, o| acc + o.respiration.total_weight);

    for (day, report) in config.site.days().iter().zip(reports) {
        let report = match report {
            Ok(report) => report,
            Err(e) => {
                error!("Day {}: {e}", day.julian_day);
                return ExitCode::FAILURE;
            }
        };
        warnings += report.diagnostics.len();
        let (site, plant) = (&report.value.site, &report.value.plant);
        totals.0 = totals.0 + plant.gross;
        totals.1 = totals.1 + plant.respiration;
        totals.2 = totals.2 + plant.net;

        println!(
            "{:4} | {:12.3} | {:8.1} | {:7.1} | {:8.1} | {:8.5} | {:8.5} | {:8.5}",
            day.julian_day,
            site.geometry.daylength.value(),
            site.surface.near_noon(),
            site.surface.mid_afternoon(),
            site.surface.late_afternoon(),
            plant.gross.value(),
            plant.respiration.value(),
            plant.net.value()
        );

        if args.track_biomass {
            biomass = match apply_daily_update(biomass, plant.net, &[]) {
                Ok(next) => next,
                Err(e) => {
                    error!("Day {}: {e}", day.julian_day);
                    return ExitCode::FAILURE;
                }
            };
        }
    }

    println!("\n=== Summary ===");
    println!("Total gross assimilation: {:.4} g", totals.0.value());
    println!("Total respiration:        {:.4} g", totals.1.value());
    println!("Net carbon budget:        {:.4} g", totals.2.value());
    if args.track_biomass {
        println!("Start + cumulative net:   {:.4} g", biomass.value());
    }
    println!("Warnings:                 {warnings}");

    ExitCode::SUCCESS
}
