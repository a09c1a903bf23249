//! Command line interface for the FastFolio optimization demo.
use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use fastfolio_analysis::ComparisonReport;
use fastfolio_analysis::charts::{AllocationBreakdown, ScalingProjection};
use fastfolio_analysis::comparison::{ComparisonSummary, PerformanceEstimate};
use fastfolio_domain::enums::{InvestmentHorizon, OptimizationMethod, RiskTolerance};
use fastfolio_domain::limits;
use fastfolio_domain::value_objects::outcome::OptimizationResult;
use fastfolio_domain::value_objects::request::OptimizationRequest;
use fastfolio_simulation::runner::{Pacing, SimulationRunner};
use std::io::{self, Write};
use tracing::info;

#[derive(Parser)]
#[command(name = "fastfolio")]
#[command(about = "Portfolio optimization performance comparison demo", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run both optimization methods and compare the results
    Compare {
        /// Number of assets in the portfolio (100-1000, step 50)
        #[arg(short, long, default_value_t = limits::BASELINE_ASSETS, value_parser = parse_asset_count)]
        assets: u32,

        /// Risk tolerance (display only)
        #[arg(short, long, value_enum, default_value_t = RiskArg::Moderate)]
        risk: RiskArg,

        /// Investment horizon (display only)
        #[arg(long, value_enum, default_value_t = HorizonArg::MediumTerm)]
        horizon: HorizonArg,

        /// Skip the simulated computation delay
        #[arg(long)]
        instant: bool,

        /// Print the full report as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Print the theoretical scaling projection without running anything
    Projection {
        /// Asset count to mark as the current selection
        #[arg(short, long, default_value_t = limits::BASELINE_ASSETS, value_parser = parse_asset_count)]
        assets: u32,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RiskArg {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl From<RiskArg> for RiskTolerance {
    fn from(arg: RiskArg) -> Self {
        match arg {
            RiskArg::VeryLow => Self::VeryLow,
            RiskArg::Low => Self::Low,
            RiskArg::Moderate => Self::Moderate,
            RiskArg::High => Self::High,
            RiskArg::VeryHigh => Self::VeryHigh,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HorizonArg {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl From<HorizonArg> for InvestmentHorizon {
    fn from(arg: HorizonArg) -> Self {
        match arg {
            HorizonArg::ShortTerm => Self::ShortTerm,
            HorizonArg::MediumTerm => Self::MediumTerm,
            HorizonArg::LongTerm => Self::LongTerm,
        }
    }
}

fn parse_asset_count(raw: &str) -> Result<u32, String> {
    let value: u32 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if !(limits::MIN_ASSETS..=limits::MAX_ASSETS).contains(&value) {
        return Err(format!(
            "asset count must be between {} and {}",
            limits::MIN_ASSETS,
            limits::MAX_ASSETS
        ));
    }
    if value % limits::ASSET_STEP != 0 {
        return Err(format!(
            "asset count must be a multiple of {}",
            limits::ASSET_STEP
        ));
    }
    Ok(value)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            assets,
            risk,
            horizon,
            instant,
            json,
        } => run_compare(assets, risk.into(), horizon.into(), instant, json),
        Commands::Projection { assets } => {
            print_projection(&ScalingProjection::for_current(assets));
            Ok(())
        }
    }
}

fn run_compare(
    assets: u32,
    risk: RiskTolerance,
    horizon: InvestmentHorizon,
    instant: bool,
    json: bool,
) -> Result<()> {
    let pacing = if instant {
        Pacing::Instant
    } else {
        Pacing::RealTime
    };
    let runner = SimulationRunner::new().with_pacing(pacing);

    if !json {
        print_header(assets, risk, horizon);
    }

    info!(assets, "running optimization comparison");

    let standard = run_method(&runner, OptimizationMethod::Standard, assets, json)?;
    let fast = run_method(&runner, OptimizationMethod::Fast, assets, json)?;

    let report = ComparisonReport::build(assets, standard, fast)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_result_panel(&report.standard, OptimizationMethod::Standard);
    print_result_panel(&report.fast, OptimizationMethod::Fast);
    print_summary(&report.summary);
    print_projection(&report.scaling_projection);
    for allocation in &report.allocations {
        print_allocation(allocation);
    }

    Ok(())
}

fn run_method(
    runner: &SimulationRunner,
    method: OptimizationMethod,
    assets: u32,
    quiet: bool,
) -> Result<OptimizationResult> {
    let request = OptimizationRequest::new(method, assets);

    let mut on_progress = |percent: u8| {
        if !quiet {
            print!("\r⏳ {}: {percent:>3}% complete", method.label());
            io::stdout().flush().ok();
        }
    };
    let result = runner.run(&request, &mut on_progress)?;
    if !quiet {
        println!();
    }

    Ok(result)
}

fn print_header(assets: u32, risk: RiskTolerance, horizon: InvestmentHorizon) {
    println!(
        "💼 FastPortfolio™ Optimization — Live Demo | {}",
        Local::now().format("%B %d, %Y")
    );
    println!();
    println!("Portfolio Size:     {} assets{}", assets, baseline_note(assets));
    println!(
        "Risk Tolerance:     {} ({}% of scale)",
        risk.label(),
        risk.scale_percentage()
    );
    println!("Investment Horizon: {}", horizon.label());

    let estimate = PerformanceEstimate::for_assets(assets);
    println!();
    println!(
        "⚡ Estimated speedup: {:.1}x ({:.1}s saved, {:.1}% reduction)",
        estimate.speedup, estimate.time_saved_seconds, estimate.time_saved_percentage
    );
    println!();
}

fn baseline_note(assets: u32) -> String {
    if assets == limits::BASELINE_ASSETS {
        " (baseline portfolio)".to_string()
    } else {
        format!(
            " ({:+} from baseline)",
            i64::from(assets) - i64::from(limits::BASELINE_ASSETS)
        )
    }
}

fn print_result_panel(result: &OptimizationResult, method: OptimizationMethod) {
    println!("\n📊 {} Results", method.label());
    println!("════════════════════════════════════");
    println!("Computation Time: {:>9.2}s", result.computation_time_seconds);
    println!("Theoretical Time: {:>9.2}s", result.theoretical_time_seconds);
    println!("Expected Return:  {:>9}%", result.expected_return);
    println!("Volatility:       {:>9}%", result.volatility);
    println!("Sharpe Ratio:     {:>9}", result.sharpe_ratio);
    println!("════════════════════════════════════");
}

fn print_summary(summary: &ComparisonSummary) {
    println!("\n🏁 Performance Comparison");
    println!("════════════════════════════════════");
    println!("Return Enhancement: +{}%", summary.return_difference);
    println!("Risk Reduction:     -{}%", summary.volatility_difference);
    println!("Sharpe Improvement: +{}", summary.sharpe_difference);
    println!(
        "Speed Improvement:  {:.1}x faster ({:.1}s saved)",
        summary.speedup, summary.time_saved_seconds
    );
    println!("════════════════════════════════════");
}

fn print_projection(projection: &ScalingProjection) {
    println!("\n📈 Scaling Projection");
    println!("{:<10} | {:>12} | {:>12}", "Assets", "Standard (s)", "Fast (s)");
    println!("{}", "-".repeat(40));

    for (standard, fast) in projection.standard.iter().zip(&projection.fast) {
        let marker = if standard.asset_count == projection.current_assets {
            "  ← current"
        } else {
            ""
        };
        println!(
            "{:<10} | {:>12.2} | {:>12.2}{marker}",
            standard.asset_count, standard.seconds, fast.seconds
        );
    }

    println!("{}", "-".repeat(40));
    println!("Current selection: {} assets", projection.current_assets);
    println!("Projected gap at 1,000 assets: {:.1}x", projection.gap_at_max);
}

fn print_allocation(allocation: &AllocationBreakdown) {
    println!(
        "\n🥧 Top {} Holdings — {}",
        allocation.holdings.len(),
        allocation.method.label()
    );
    println!("{:<10} | {:>9}", "Asset", "Weight");
    println!("{}", "-".repeat(24));
    for holding in &allocation.holdings {
        println!("{:<10} | {:>8.2}%", holding.label, holding.share_percentage);
    }
}
