//! 명령줄 인자 정의.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::bridge::BridgePolicy;

#[derive(Debug, Parser)]
#[command(name = "unitswap", version)]
#[command(about = "Volume, mass, density and concentration unit converter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Display language (auto, ko, en)
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// Decimal places in printed results
    #[arg(long, global = true)]
    pub decimals: Option<usize>,

    /// Path to config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// 밀도 보조 입력. 값을 직접 주거나 물질 프리셋 이름을 준다.
#[derive(Debug, Clone, Args)]
pub struct DensityOpts {
    /// Density value
    #[arg(long, allow_negative_numbers = true)]
    pub density: Option<f64>,

    /// Unit of --density
    #[arg(long, default_value = "g/mL")]
    pub density_unit: String,

    /// Substance preset instead of an explicit density (water, oil, honey, ...)
    #[arg(long, conflicts_with = "density")]
    pub substance: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BridgeArg {
    Never,
    Culinary,
}

impl From<BridgeArg> for BridgePolicy {
    fn from(value: BridgeArg) -> Self {
        match value {
            BridgeArg::Never => BridgePolicy::Never,
            BridgeArg::Culinary => BridgePolicy::CulinaryUnits,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert between volume units
    Volume {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
        #[command(flatten)]
        density: DensityOpts,
        /// Culinary density-bridge policy (defaults to the config setting)
        #[arg(long, value_enum)]
        bridge: Option<BridgeArg>,
    },

    /// Convert between mass units
    Mass {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },

    /// Convert between density units
    Density {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },

    /// Convert between concentration units (M and mM need --mw)
    Concentration {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
        /// Molecular weight in g/mol
        #[arg(long, allow_negative_numbers = true)]
        mw: Option<f64>,
    },

    /// Convert a volume to a mass through a density
    VolumeToMass {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        volume_unit: String,
        mass_unit: String,
        #[command(flatten)]
        density: DensityOpts,
    },

    /// Convert a mass to a volume through a density
    MassToVolume {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        mass_unit: String,
        volume_unit: String,
        #[command(flatten)]
        density: DensityOpts,
    },

    /// List unit tables (all domains, or one of volume, mass, density, concentration)
    Units { domain: Option<String> },

    /// List substance density presets
    Substances,

    /// Menu-driven interactive mode (default)
    Interactive,
}
