use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};
use eng_fmt::FormatEng;
use hullres_core::prelude::*;

#[derive(Args)]
pub struct CurveArgs {
    /// Wetted surface area method tag (see `hullres methods`)
    #[arg(short, long)]
    pub method: String,

    /// Hull parameter file (yaml, json or bin)
    #[arg(long)]
    pub hull: Option<PathBuf>,

    /// Hull field as KEY=VALUE, with KEY one of L, B, d, delta, W, V.
    /// Overrides the value from `--hull`.
    #[arg(short, long = "field", value_parser = parse_key_val)]
    pub fields: Vec<(String, String)>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write the curve to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Reject unknown method tags instead of using zero surface area
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
    Yaml,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, found {s:?}"))?;
    Ok((key.trim().to_string(), value.to_string()))
}

pub fn execute(args: CurveArgs) -> anyhow::Result<()> {
    let form: HashMap<String, String> = args.fields.into_iter().collect();
    let params = match &args.hull {
        Some(path) => {
            let mut params = HullParameters::from_file(path, false)
                .with_context(|| format!("Failed to load hull parameters from {path:?}"))?;
            params.apply_form(&form)?;
            params
        }
        None => HullParameters::from_form(&form)?,
    };
    log::debug!("{params:?}");

    let curve = if args.strict {
        calc_resistance_curve_strict(&args.method, &params)?
    } else {
        calc_resistance_curve(&args.method, &params)
    };
    curve.ensure_finite()?;
    log::info!(
        "method {:?}: wetted surface area {} m^2",
        args.method,
        curve.surface_area.get::<si::square_meter>()
    );

    let rendered = render(&curve, args.format)?;
    match &args.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Could not write curve to {path:?}"))?,
        None => print!("{rendered}"),
    }
    Ok(())
}

fn render(curve: &ResistanceCurve, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Table => render_table(curve)?,
        OutputFormat::Csv => {
            let mut buf = Vec::new();
            curve.to_csv_writer(&mut buf)?;
            String::from_utf8(buf)?
        }
        OutputFormat::Json => curve.to_str("json")?,
        OutputFormat::Yaml => curve.to_str("yaml")?,
    })
}

fn render_table(curve: &ResistanceCurve) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "# method: {}, wetted surface area: {} m^2",
        curve.method,
        curve
            .surface_area
            .get::<si::square_meter>()
            .format_eng(Some(5))
    )?;
    writeln!(out, "{:>12}  {:>16}", "speed (m/s)", "resistance (N)")?;
    for sample in curve.samples() {
        writeln!(
            out,
            "{:>12.4}  {:>16}",
            sample.speed.get::<si::meter_per_second>(),
            sample.resistance.get::<si::newton>().format_eng(Some(5))
        )?;
    }
    Ok(out)
}
