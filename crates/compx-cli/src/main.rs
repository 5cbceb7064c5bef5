mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;

use compx_core::{ComplexNumber, Part};

#[derive(Parser)]
#[command(
    name = "compx",
    version,
    about = "Complex number calculator with rounded equality"
)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Decimal places used by equality checks (0-13), overrides the config
    #[arg(long, global = true)]
    round: Option<u32>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Euclidean norm sqrt(re² + im²)
    Magnitude(Unary),

    /// Angle from the positive real axis, atan2(im, re)
    Argument(Unary),

    /// Flip the sign of the imaginary part
    Conjugate(Unary),

    /// Negate both parts
    Negate(Unary),

    /// Floor both parts to integers
    Gaussian(Unary),

    /// Convert to a real number (fails if im != 0)
    ToReal(Unary),

    /// Floor both parts to a number of decimal places
    Round {
        #[command(flatten)]
        value: Unary,

        /// Decimal places to keep
        places: u32,
    },

    /// Add one to the selected part(s)
    Inc {
        #[command(flatten)]
        value: Unary,

        /// real, imaginary or both
        #[arg(short, long, default_value = "both")]
        part: Part,
    },

    /// Subtract one from the selected part(s)
    Dec {
        #[command(flatten)]
        value: Unary,

        /// real, imaginary or both
        #[arg(short, long, default_value = "both")]
        part: Part,
    },

    /// a + b (b is real when its imaginary part is omitted)
    Add(Binary),

    /// a - b
    Sub(Binary),

    /// a * b
    Mul(Binary),

    /// a / b
    Div(Binary),

    /// Gaussian remainder a - b·floor(a/b)
    Rem(ComplexPair),

    /// Whether a divides b
    Divides(ComplexPair),

    /// Rounded equality a == b
    Eq(Binary),

    /// The imaginary unit
    I,

    /// Show the active config path and precision
    Config,
}

#[derive(Args)]
struct Unary {
    /// Real part
    #[arg(allow_negative_numbers = true)]
    re: f64,

    /// Imaginary part
    #[arg(allow_negative_numbers = true)]
    im: f64,
}

impl Unary {
    fn complex(&self) -> ComplexNumber {
        ComplexNumber::new(self.re, self.im)
    }
}

#[derive(Args)]
struct Binary {
    #[arg(allow_negative_numbers = true)]
    re: f64,

    #[arg(allow_negative_numbers = true)]
    im: f64,

    /// Real part of the right operand
    #[arg(allow_negative_numbers = true)]
    rhs_re: f64,

    /// Imaginary part of the right operand; omit for a real operand
    #[arg(allow_negative_numbers = true)]
    rhs_im: Option<f64>,
}

impl Binary {
    fn lhs(&self) -> ComplexNumber {
        ComplexNumber::new(self.re, self.im)
    }
}

#[derive(Args)]
struct ComplexPair {
    #[arg(allow_negative_numbers = true)]
    re: f64,

    #[arg(allow_negative_numbers = true)]
    im: f64,

    #[arg(allow_negative_numbers = true)]
    rhs_re: f64,

    #[arg(allow_negative_numbers = true)]
    rhs_im: f64,
}

impl ComplexPair {
    fn operands(&self) -> (ComplexNumber, ComplexNumber) {
        (
            ComplexNumber::new(self.re, self.im),
            ComplexNumber::new(self.rhs_re, self.rhs_im),
        )
    }
}

#[derive(Debug, PartialEq)]
enum Output {
    Number(f64),
    Complex(ComplexNumber),
    Bool(bool),
    Text(String),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    configure(cli.config.as_deref(), cli.round)?;

    let output = run(cli.command, cli.config.as_deref())?;
    println!("{}", render(&output, cli.json)?);
    Ok(())
}

/// Apply the config file, then let `--round` override its precision.
fn configure(config_path: Option<&Path>, round: Option<u32>) -> Result<()> {
    let config = config::load_config(config_path)?;
    config.apply()?;
    if let Some(places) = round {
        compx_core::set_default_round(places).context("invalid --round")?;
    }
    Ok(())
}

fn run(command: Commands, config_path: Option<&Path>) -> Result<Output> {
    let output = match command {
        Commands::Magnitude(v) => Output::Number(v.complex().magnitude()),
        Commands::Argument(v) => Output::Number(v.complex().argument()),
        Commands::Conjugate(v) => Output::Complex(v.complex().conjugate()),
        Commands::Negate(v) => Output::Complex(-v.complex()),
        Commands::Gaussian(v) => Output::Complex(v.complex().round_to_gaussian_integer()),
        Commands::ToReal(v) => Output::Number(v.complex().to_real()?),
        Commands::Round { value, places } => Output::Complex(value.complex().round(places)),
        Commands::Inc { value, part } => Output::Complex(value.complex().inc(part)),
        Commands::Dec { value, part } => Output::Complex(value.complex().dec(part)),
        Commands::Add(b) => Output::Complex(match b.rhs_im {
            Some(im) => b.lhs() + ComplexNumber::new(b.rhs_re, im),
            None => b.lhs() + b.rhs_re,
        }),
        Commands::Sub(b) => Output::Complex(match b.rhs_im {
            Some(im) => b.lhs() - ComplexNumber::new(b.rhs_re, im),
            None => b.lhs() - b.rhs_re,
        }),
        Commands::Mul(b) => Output::Complex(match b.rhs_im {
            Some(im) => b.lhs() * ComplexNumber::new(b.rhs_re, im),
            None => b.lhs() * b.rhs_re,
        }),
        Commands::Div(b) => Output::Complex(match b.rhs_im {
            Some(im) => b.lhs() / ComplexNumber::new(b.rhs_re, im),
            None => b.lhs() / b.rhs_re,
        }),
        Commands::Rem(p) => {
            let (a, b) = p.operands();
            Output::Complex(a % b)
        }
        Commands::Divides(p) => {
            let (a, b) = p.operands();
            Output::Bool(a.divides(b))
        }
        Commands::Eq(b) => Output::Bool(match b.rhs_im {
            Some(im) => b.lhs() == ComplexNumber::new(b.rhs_re, im),
            None => b.lhs() == b.rhs_re,
        }),
        Commands::I => Output::Complex(compx_core::i()),
        Commands::Config => Output::Text(format!(
            "config: {}\ndefault_round: {}",
            config::show_config_path(config_path),
            compx_core::default_round()
        )),
    };
    tracing::debug!(?output, "evaluated");
    Ok(output)
}

fn render(output: &Output, as_json: bool) -> Result<String> {
    if as_json {
        let value = match output {
            Output::Number(n) => json!({ "value": n }),
            Output::Complex(z) => serde_json::to_value(z)?,
            Output::Bool(b) => json!({ "value": b }),
            Output::Text(t) => json!({ "value": t }),
        };
        return Ok(serde_json::to_string_pretty(&value)?);
    }
    Ok(match output {
        Output::Number(n) => n.to_string(),
        Output::Complex(z) => z.to_string(),
        Output::Bool(b) => b.to_string(),
        Output::Text(t) => t.clone(),
    })
}
