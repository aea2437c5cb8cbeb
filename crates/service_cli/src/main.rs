//! mcprice - Monte Carlo option pricing from the command line.
//!
//! Selects a stochastic model and a payoff, runs the simulation once and
//! prints the discounted price (plus standard error with `--json`).
//!
//! # Examples
//!
//! ```text
//! mcprice --model gbm --payoff vanilla --kind call --strike 100 --maturity 1
//! mcprice --model heston --payoff asian --averaging geometric --kind put
//! mcprice --model binomial --payoff american --kind put --json
//! ```
//!
//! Logging is controlled through `RUST_LOG` (e.g. `RUST_LOG=debug`).

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pricer_models::models::{
    BinomialModel, BinomialParams, GbmModel, GbmParams, HestonModel, HestonParams, LsvModel,
    PathModel,
};
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer, PricingResult};
use pricer_pricing::payoff::{
    AmericanApproxPayoff, AsianPayoff, AveragingKind, DigitalPayoff, LookbackPayoff, OptionKind,
    Payoff, VanillaPayoff,
};

/// Stochastic model driving the simulation.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModelChoice {
    /// Geometric Brownian motion, exact log-space stepping.
    Gbm,
    /// Heston stochastic volatility, full-truncation Euler.
    Heston,
    /// Local-stochastic volatility: Heston variance with a CEV local factor.
    Lsv,
    /// Cox-Ross-Rubinstein binomial lattice realisation.
    Binomial,
}

/// Contract family to price.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum PayoffChoice {
    /// European option on the terminal price.
    Vanilla,
    /// Cash-or-nothing option.
    Digital,
    /// Average-price option.
    Asian,
    /// Floating-strike lookback option.
    Lookback,
    /// American option approximated by the path-wise maximum intrinsic.
    American,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindChoice {
    Call,
    Put,
}

impl From<KindChoice> for OptionKind {
    fn from(kind: KindChoice) -> Self {
        match kind {
            KindChoice::Call => OptionKind::Call,
            KindChoice::Put => OptionKind::Put,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AveragingChoice {
    Arithmetic,
    Geometric,
}

impl From<AveragingChoice> for AveragingKind {
    fn from(averaging: AveragingChoice) -> Self {
        match averaging {
            AveragingChoice::Arithmetic => AveragingKind::Arithmetic,
            AveragingChoice::Geometric => AveragingKind::Geometric,
        }
    }
}

/// Monte Carlo option pricer.
#[derive(Parser, Debug)]
#[command(name = "mcprice")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Stochastic model
    #[arg(long, value_enum, default_value_t = ModelChoice::Gbm)]
    model: ModelChoice,

    /// Payoff family
    #[arg(long, value_enum, default_value_t = PayoffChoice::Vanilla)]
    payoff: PayoffChoice,

    /// Call or put
    #[arg(long, value_enum, default_value_t = KindChoice::Call)]
    kind: KindChoice,

    /// Averaging convention for Asian payoffs
    #[arg(long, value_enum, default_value_t = AveragingChoice::Arithmetic)]
    averaging: AveragingChoice,

    /// Strike price (ignored by lookback)
    #[arg(long, default_value_t = 100.0)]
    strike: f64,

    /// Time to expiry in years
    #[arg(long, default_value_t = 1.0)]
    maturity: f64,

    /// Cash payout for digital payoffs
    #[arg(long, default_value_t = 1.0)]
    payout: f64,

    /// Risk-free rate (annualised)
    #[arg(long, default_value_t = 0.05)]
    rate: f64,

    /// Volatility (GBM and binomial)
    #[arg(long, default_value_t = 0.2)]
    volatility: f64,

    /// Heston mean-reversion speed
    #[arg(long, default_value_t = 1.5)]
    kappa: f64,

    /// Heston long-run variance
    #[arg(long, default_value_t = 0.04)]
    theta: f64,

    /// Heston vol-of-vol
    #[arg(long, default_value_t = 0.3)]
    xi: f64,

    /// Heston price/variance correlation
    #[arg(long, default_value_t = -0.7, allow_hyphen_values = true)]
    rho: f64,

    /// CEV exponent for the LSV local factor (s/spot)^(beta - 1)
    #[arg(long, default_value_t = 0.8)]
    lsv_beta: f64,

    /// Number of simulation paths
    #[arg(long, default_value_t = 10_000)]
    paths: usize,

    /// Number of time steps per path
    #[arg(long, default_value_t = 252)]
    steps: usize,

    /// Initial asset price
    #[arg(long, default_value_t = 100.0)]
    spot: f64,

    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Emit a JSON object with price and standard error
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = MonteCarloConfig::builder()
        .n_paths(cli.paths)
        .n_steps(cli.steps)
        .spot(cli.spot)
        .build()
        .context("invalid simulation configuration")?;

    let result = run(&cli, config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{:.6}", result.price);
    }
    Ok(())
}

/// Dispatches on the model choice, then prices with the selected payoff.
fn run(cli: &Cli, config: MonteCarloConfig) -> Result<PricingResult> {
    info!(model = ?cli.model, payoff = ?cli.payoff, "pricing request");

    match cli.model {
        ModelChoice::Gbm => {
            let params = GbmParams::new(cli.rate, cli.volatility)?;
            price_with_model(cli, GbmModel::new(params, cli.seed), config)
        }
        ModelChoice::Heston => {
            let params = heston_params(cli)?;
            price_with_model(cli, HestonModel::new(params, cli.seed), config)
        }
        ModelChoice::Lsv => {
            let params = heston_params(cli)?;
            let spot = config.spot();
            let beta = cli.lsv_beta;
            // CEV-style shape: unity at the spot, damped above for beta < 1.
            let local_vol = move |s: f64, _t: f64| (s / spot).powf(beta - 1.0);
            price_with_model(cli, LsvModel::new(params, local_vol, cli.seed), config)
        }
        ModelChoice::Binomial => {
            let params = BinomialParams::new(cli.rate, cli.volatility, cli.steps)?;
            price_with_model(cli, BinomialModel::new(params, cli.seed), config)
        }
    }
}

fn heston_params(cli: &Cli) -> Result<HestonParams> {
    HestonParams::new(cli.rate, cli.kappa, cli.theta, cli.xi, cli.rho)
        .context("invalid Heston parameters")
}

/// Dispatches on the payoff choice and runs the pricer once.
fn price_with_model<M: PathModel>(
    cli: &Cli,
    model: M,
    config: MonteCarloConfig,
) -> Result<PricingResult> {
    let kind = OptionKind::from(cli.kind);
    match cli.payoff {
        PayoffChoice::Vanilla => {
            let payoff = VanillaPayoff::new(kind, cli.strike, cli.maturity)?;
            price(model, payoff, config)
        }
        PayoffChoice::Digital => {
            let payoff = DigitalPayoff::new(kind, cli.strike, cli.maturity)?
                .with_payout(cli.payout)?;
            price(model, payoff, config)
        }
        PayoffChoice::Asian => {
            let payoff = AsianPayoff::new(kind, cli.averaging.into(), cli.strike, cli.maturity)?;
            price(model, payoff, config)
        }
        PayoffChoice::Lookback => {
            let payoff = LookbackPayoff::new(kind, cli.maturity)?;
            price(model, payoff, config)
        }
        PayoffChoice::American => {
            let payoff = AmericanApproxPayoff::new(kind, cli.strike, cli.maturity)?;
            price(model, payoff, config)
        }
    }
}

fn price<M: PathModel, P: Payoff>(
    model: M,
    payoff: P,
    config: MonteCarloConfig,
) -> Result<PricingResult> {
    let mut pricer = MonteCarloPricer::new(model, payoff, config);
    pricer.price().context("pricing run failed")
}
