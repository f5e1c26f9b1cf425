use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use geoprofile::profile::profile;
use geoprofile::synth::{draw_points, Pattern, ReplayToken, SynthCfg};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod config;
mod input;
mod output;
mod provenance;

use provenance::{write_sidecar, Provenance};

#[derive(Parser)]
#[command(name = "geoprofile")]
#[command(about = "Spatial central tendency and dispersion for planar event points")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Profile a CSV of planar points (x, y[, year, weight, kind]) and write JSON
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// JSON file with configuration overrides
        #[arg(long)]
        cfg: Option<PathBuf>,
    },
    /// Write a synthetic point CSV
    Synth {
        #[arg(long, value_enum, default_value_t = PatternKind::Uniform)]
        pattern: PatternKind,
        #[arg(long, default_value_t = 200)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Half side length of the sampling square (meters); grid spacing for `grid`
        #[arg(long, default_value_t = 5000.0)]
        extent: f64,
        /// Attach random years from this inclusive range, e.g. `2015:2024`
        #[arg(long, value_parser = parse_years)]
        years: Option<(i32, i32)>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print version, code revision and the effective configuration
    Report {
        #[arg(long)]
        cfg: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PatternKind {
    Uniform,
    Clustered,
    Grid,
}

fn parse_years(s: &str) -> Result<(i32, i32), String> {
    let (a, b) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FROM:TO, got {s:?}"))?;
    let from = a.trim().parse().map_err(|e| format!("bad year {a:?}: {e}"))?;
    let to = b.trim().parse().map_err(|e| format!("bad year {b:?}: {e}"))?;
    Ok((from, to))
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { input, out, cfg } => run(&input, &out, cfg.as_deref(), cmd.tag),
        Action::Synth {
            pattern,
            count,
            seed,
            extent,
            years,
            out,
        } => synth(pattern, count, seed, extent, years, &out, cmd.tag),
        Action::Report { cfg } => report(cfg.as_deref()),
    }
}

fn run(input: &Path, out: &Path, cfg_path: Option<&Path>, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "run");
    let cfg = config::load_cfg(cfg_path)?;
    let points = input::read_points(input)?;
    let result = profile(&points, &cfg);
    if let Some(nni) = &result.nni {
        tracing::info!(
            count = result.count,
            nni = nni.index,
            class = %nni.classification,
            "profiled"
        );
    } else {
        tracing::info!(count = result.count, "profiled (too few points for NNI)");
    }

    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&output::profile_json(&result))?)
        .with_context(|| format!("writing {}", out.display()))?;
    write_sidecar(
        out,
        Provenance {
            params: serde_json::json!({
                "command": "run",
                "input": input.to_string_lossy(),
                "cfg_file": cfg_path.map(|p| p.to_string_lossy().into_owned()),
                "points": points.len(),
            }),
            cfg: config::cfg_json(&cfg),
            tag,
        },
    )?;
    Ok(())
}

fn synth(
    kind: PatternKind,
    count: usize,
    seed: u64,
    extent: f64,
    years: Option<(i32, i32)>,
    out: &Path,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(?kind, count, seed, extent, out = %out.display(), "synth");
    let pattern = match kind {
        PatternKind::Uniform => Pattern::Uniform {
            half_extent: extent,
        },
        PatternKind::Clustered => Pattern::Clustered {
            clusters: 4,
            half_extent: extent,
            spread: extent * 0.05,
        },
        PatternKind::Grid => Pattern::Grid { spacing: extent },
    };
    let points = draw_points(
        SynthCfg {
            pattern,
            count,
            years,
        },
        ReplayToken { seed, index: 0 },
    );
    input::write_points(out, &points)?;
    write_sidecar(
        out,
        Provenance {
            params: serde_json::json!({
                "command": "synth",
                "pattern": format!("{kind:?}").to_lowercase(),
                "count": count,
                "seed": seed,
                "extent": extent,
                "years": years,
            }),
            cfg: serde_json::Value::Null,
            tag,
        },
    )?;
    Ok(())
}

fn report(cfg_path: Option<&Path>) -> Result<()> {
    let cfg = config::load_cfg(cfg_path)?;
    let obj = serde_json::json!({
        "engine_version": geoprofile::VERSION,
        "code_rev": provenance::current_git_rev(),
        "cfg": config::cfg_json(&cfg),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn years_range_parsing() {
        assert_eq!(parse_years("2015:2024"), Ok((2015, 2024)));
        assert_eq!(parse_years(" 2020 : 2018 "), Ok((2020, 2018)));
        assert!(parse_years("2015").is_err());
        assert!(parse_years("a:b").is_err());
    }

    #[test]
    fn synth_then_run_writes_profile_and_sidecars() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("pts.csv");
        let json = dir.path().join("out/profile.json");
        synth(
            PatternKind::Clustered,
            60,
            5,
            3000.0,
            Some((2018, 2024)),
            &csv,
            None,
        )
        .unwrap();
        assert!(dir.path().join("pts.provenance.json").exists());

        run(&csv, &json, None, Some("demo".to_string())).unwrap();
        let v: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&json).unwrap()).unwrap();
        assert_eq!(v["count"], 60);
        assert!(v["fermat"]["radius"].as_f64().unwrap() > 0.0);
        let prov: serde_json::Value = serde_json::from_slice(
            &std::fs::read(dir.path().join("out/profile.provenance.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(prov["tag"], "demo");
        assert_eq!(prov["params"]["points"], 60);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cmd::command().debug_assert();
    }
}
