use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use ziwei_base::{
    Branch, CalendarFact, Chart, ChartOptions, DEFAULT_MINOR_YEARS, GuidanceTable,
    MAX_MINOR_YEARS, Sex, Stem, ZiweiError, explain_records, parse_lunar_day, parse_lunar_month,
};
use ziwei_config::{CONFIG_FILE_NAME, ZiweiConfig, init_tracing, load, load_or_default};

#[derive(Parser)]
#[command(name = "ziwei", about = "Purple Star Astrology chart CLI")]
struct Cli {
    /// Config file (defaults to ./ziwei.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

/// Birth data shared by every subcommand.
#[derive(Args)]
struct Birth {
    /// Sexagenary year label, e.g. 甲子
    #[arg(long)]
    year_label: String,
    /// Lunar month: 1-12, 正月, 冬月, 臘月 ...
    #[arg(long)]
    lunar_month: String,
    /// Lunar day: 1-30, 初一 ... 三十
    #[arg(long)]
    lunar_day: String,
    /// Clock hour (0-23)
    #[arg(long)]
    hour: u8,
    /// Clock minute (0-59)
    #[arg(long, default_value = "0")]
    minute: u8,
    /// M/F, male/female or 男/女
    #[arg(long)]
    sex: String,
    /// Lunar year number, carried through to the output
    #[arg(long)]
    lunar_year: Option<i32>,
    /// Birth month is a leap month
    #[arg(long)]
    leap: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Natal chart
    Chart {
        #[command(flatten)]
        birth: Birth,
    },
    /// Rotate the natal chart so a branch becomes 命宮
    Taichi {
        #[command(flatten)]
        birth: Birth,
        /// Branch glyph or pinyin, e.g. 午 or wu
        #[arg(long)]
        branch: String,
    },
    /// Four transformations of a stem on the natal chart
    Sihua {
        #[command(flatten)]
        birth: Birth,
        /// Stem glyph or pinyin, e.g. 庚 or geng
        #[arg(long)]
        stem: String,
    },
    /// Ten-year limits
    MajorLimits {
        #[command(flatten)]
        birth: Birth,
        /// Only the period containing this age
        #[arg(long)]
        age: Option<u32>,
    },
    /// One-year limits
    MinorLimits {
        #[command(flatten)]
        birth: Birth,
        /// Only this age
        #[arg(long, conflicts_with = "years")]
        age: Option<u32>,
        /// Ages 1..=years (at most 120)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_MINOR_YEARS as i64))]
        years: Option<u32>,
    },
    /// Annual fortune
    Annual {
        #[command(flatten)]
        birth: Birth,
        #[arg(long)]
        year: i32,
        /// Year label for the cyclic_label anchor
        #[arg(long)]
        annual_label: Option<String>,
    },
    /// Monthly fortune
    Monthly {
        #[command(flatten)]
        birth: Birth,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u8,
        #[arg(long)]
        annual_label: Option<String>,
    },
    /// Daily fortune
    Daily {
        #[command(flatten)]
        birth: Birth,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u8,
        #[arg(long)]
        day: u8,
        #[arg(long)]
        annual_label: Option<String>,
    },
    /// Time divination for a question asked at the given time
    Divine {
        #[command(flatten)]
        birth: Birth,
        #[arg(long)]
        at_hour: u8,
        #[arg(long)]
        at_minute: u8,
    },
}

fn require<T>(result: Result<T, ZiweiError>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn require_config(path: Option<&Path>) -> ZiweiConfig {
    let loaded = match path {
        Some(p) => load(p),
        None => load_or_default(Some(Path::new(CONFIG_FILE_NAME))),
    };
    loaded.unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}");
        std::process::exit(1);
    })
}

fn require_guidance(config: &ZiweiConfig) -> GuidanceTable {
    config.guidance_table().unwrap_or_else(|e| {
        eprintln!("Invalid explanations in config: {e}");
        std::process::exit(1);
    })
}

fn require_sex(s: &str) -> Sex {
    require(s.parse())
}

fn require_branch(s: &str) -> Branch {
    require(s.parse())
}

fn require_stem(s: &str) -> Stem {
    require(s.parse())
}

fn require_chart(birth: &Birth, options: ChartOptions) -> Chart {
    let month = require(parse_lunar_month(&birth.lunar_month));
    let day = require(parse_lunar_day(&birth.lunar_day));
    let mut fact = CalendarFact::new(&birth.year_label, month, day, birth.hour, birth.minute)
        .with_leap_month(birth.leap);
    if let Some(y) = birth.lunar_year {
        fact = fact.with_lunar_year(y);
    }
    let sex = require_sex(&birth.sex);
    require(Chart::new(&fact, sex, options))
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let config = require_config(cli.config.as_deref());
    if let Err(e) = init_tracing(&config.log) {
        eprintln!("Logging disabled: {e}");
    }
    debug!(options = ?config.chart, "configuration resolved");
    let options = config.chart;

    match cli.command {
        Commands::Chart { birth } => {
            let chart = require_chart(&birth, options);
            print_json(chart.natal());
        }

        Commands::Taichi { birth, branch } => {
            let mut chart = require_chart(&birth, options);
            let mapping = chart.taichi(require_branch(&branch));
            print_json(&serde_json::json!({
                "mapping": mapping,
                "ring": chart.ring(),
            }));
        }

        Commands::Sihua { birth, stem } => {
            let mut chart = require_chart(&birth, options);
            let records = chart.apply_stem(require_stem(&stem));
            let guidance = require_guidance(&config);
            print_json(&serde_json::json!({
                "records": records,
                "explanations": explain_records(&records, &guidance),
                "ring": chart.ring(),
            }));
        }

        Commands::MajorLimits { birth, age } => {
            let chart = require_chart(&birth, options);
            let limits = chart.major_limits();
            match age {
                Some(age) => match limits.current(age) {
                    Some(period) => print_json(period),
                    None => {
                        eprintln!(
                            "Age {age} is outside the major limits ({}-{})",
                            limits.start_age,
                            limits.start_age + 119
                        );
                        std::process::exit(1);
                    }
                },
                None => print_json(&limits),
            }
        }

        Commands::MinorLimits { birth, age, years } => {
            let chart = require_chart(&birth, options);
            match age {
                Some(age) => print_json(&require(chart.minor_limit(age))),
                None => print_json(&require(
                    chart.minor_limits(years.unwrap_or(DEFAULT_MINOR_YEARS)),
                )),
            }
        }

        Commands::Annual {
            birth,
            year,
            annual_label,
        } => {
            let chart = require_chart(&birth, options);
            print_json(&require(chart.annual(year, annual_label.as_deref())));
        }

        Commands::Monthly {
            birth,
            year,
            month,
            annual_label,
        } => {
            let chart = require_chart(&birth, options);
            print_json(&require(chart.monthly(
                year,
                annual_label.as_deref(),
                month,
            )));
        }

        Commands::Daily {
            birth,
            year,
            month,
            day,
            annual_label,
        } => {
            let chart = require_chart(&birth, options);
            print_json(&require(chart.daily(
                year,
                annual_label.as_deref(),
                month,
                day,
            )));
        }

        Commands::Divine {
            birth,
            at_hour,
            at_minute,
        } => {
            let chart = require_chart(&birth, options);
            let divination = require(chart.divine(at_hour, at_minute));
            let guidance = require_guidance(&config);
            print_json(&serde_json::json!({
                "divination": divination,
                "explanations": explain_records(&divination.records, &guidance),
            }));
        }
    }
}
