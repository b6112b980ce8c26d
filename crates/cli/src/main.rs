//! punfinder CLI: generate puns on a word from stock phrases.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{ArgAction, Parser};
use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

use punfinder_core::config;
use punfinder_core::pun::ranking::{filter_min_quality, shuffle_puns, sort_puns, truncate_puns};
use punfinder_core::{PhoneticIndex, PunCandidate, PunError, Quality, WarningPolicy};

#[derive(Parser, Debug)]
#[command(
    name = "punfinder",
    about = "Generate a list of puns from a word",
    version,
    arg_required_else_help = true
)]
struct Cli {
    /// Word(s) to make puns from
    words: Vec<String>,

    /// Dictionary directory
    #[arg(short = 'd', long = "dicts")]
    dict_dir: Option<PathBuf>,

    /// Phrase directory
    #[arg(short = 'p', long = "phrases")]
    phrase_dir: Option<PathBuf>,

    /// List extra info about each pun
    #[arg(short, long)]
    list: bool,

    /// Limit the number of puns (0 for no limit)
    #[arg(short, long, default_value_t = 0)]
    max: usize,

    /// Randomise the order of puns
    #[arg(short, long)]
    random: bool,

    /// RNG seed for reproducible random order
    #[arg(long)]
    seed: Option<u64>,

    /// Coloured output (ANSI)
    #[arg(short, long = "colour", visible_alias = "color")]
    colour: bool,

    /// Only output puns of at least this quality (0-3)
    #[arg(short = 't', long = "quality", default_value_t = 0,
          value_parser = clap::value_parser!(u8).range(0..=3))]
    min_quality: u8,

    /// Don't print warnings
    #[arg(short, long)]
    quiet: bool,

    /// Verbose output, repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Output the phonemes for the word, no puns
    #[arg(short, long)]
    word: bool,

    /// Just check the files for errors, no puns
    #[arg(short = 'j', long = "check")]
    check: bool,

    /// Output puns as JSON
    #[arg(long)]
    json: bool,
}

// ─── Main ────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(cli, &mut std::io::stdout()) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

// ─── Helpers ─────────────────────────────────────────────────────

/// Load every file in the dictionary and phrase directories.
fn load_index(cli: &Cli) -> Result<PhoneticIndex> {
    let policy = if cli.quiet {
        WarningPolicy::Quiet
    } else {
        WarningPolicy::Warn
    };
    let mut index = PhoneticIndex::new(policy);

    let dict_dir = cli.dict_dir.clone().unwrap_or_else(config::dict_dir);
    let phrase_dir = cli.phrase_dir.clone().unwrap_or_else(config::phrase_dir);
    validate_dir(&dict_dir)?;
    validate_dir(&phrase_dir)?;

    index.load_word_dir(&dict_dir)?;
    index.load_phrase_dir(&phrase_dir)?;

    log::info!("Loaded {} words", index.word_count());
    log::info!("Loaded {} phrases", index.phrase_count());
    Ok(index)
}

fn validate_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        bail!("not a valid directory: {}", dir.display());
    }
    Ok(())
}

/// Display line for a pun, with details when `list` is set.
fn format_pun(pun: &PunCandidate, list: bool) -> String {
    if list {
        format!(
            "{} (replaced: '{}', origin: {}, quality: {})",
            pun.text, pun.replaced, pun.origin, pun.quality
        )
    } else {
        pun.text.clone()
    }
}

fn tier_colour(quality: Quality) -> Color {
    match quality {
        Quality::Rhyme => Color::Green,
        Quality::Similar => Color::Yellow,
        Quality::Partial => Color::Red,
        Quality::None => Color::Reset,
    }
}

fn print_puns(out: &mut impl Write, puns: &[PunCandidate], list: bool, colour: bool) -> Result<()> {
    for pun in puns {
        let line = format_pun(pun, list);
        if colour {
            execute!(
                out,
                SetForegroundColor(tier_colour(pun.quality)),
                Print(line),
                ResetColor,
                Print("\n")
            )?;
        } else {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

// ─── Runner ──────────────────────────────────────────────────────

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let target = cli.words.join(" ");
    if target.trim().chars().count() <= 1 && !cli.check {
        bail!("please specify a word to generate puns from");
    }

    let index = load_index(&cli)?;
    if cli.check {
        return Ok(());
    }

    let mut puns = Vec::new();
    for word in target.split_whitespace() {
        let phonemes = index.target_phonemes(word);
        if phonemes.is_empty() {
            return Err(PunError::UnknownTarget(word.to_string()).into());
        }
        if cli.word {
            writeln!(out, "Pronunciation of {} is {:?}", word, phonemes)?;
            continue;
        }
        puns.extend(index.generate_puns(word)?);
    }
    if cli.word {
        return Ok(());
    }

    let min = Quality::try_from(cli.min_quality).map_err(anyhow::Error::msg)?;
    let mut puns = filter_min_quality(puns, min);
    sort_puns(&mut puns);
    if cli.random {
        shuffle_puns(&mut puns, cli.seed);
    }
    truncate_puns(&mut puns, cli.max);
    log::info!("Generated {} puns", puns.len());

    if cli.json {
        let values: Vec<serde_json::Value> = puns.iter().map(|p| p.to_json_value()).collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&values)?)?;
        return Ok(());
    }
    print_puns(out, &puns, cli.list, cli.colour)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pun(quality: Quality) -> PunCandidate {
        PunCandidate {
            text: "The bat sat on the mat".into(),
            quality,
            origin: "nursery".into(),
            replaced: "cat".into(),
            source_file: "phrases/rhymes.txt".into(),
        }
    }

    #[test]
    fn test_parse_short_flags_combined() {
        let cli = Cli::try_parse_from(["punfinder", "-lqr", "-vv", "-m", "5", "bat"]).unwrap();
        assert!(cli.list);
        assert!(cli.quiet);
        assert!(cli.random);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.max, 5);
        assert_eq!(cli.words, vec!["bat"]);
    }

    #[test]
    fn test_parse_color_alias() {
        let cli = Cli::try_parse_from(["punfinder", "--color", "bat"]).unwrap();
        assert!(cli.colour);
        let cli = Cli::try_parse_from(["punfinder", "--colour", "bat"]).unwrap();
        assert!(cli.colour);
    }

    #[test]
    fn test_parse_quality_range() {
        let cli = Cli::try_parse_from(["punfinder", "-t", "2", "bat"]).unwrap();
        assert_eq!(cli.min_quality, 2);
        assert!(Cli::try_parse_from(["punfinder", "-t", "4", "bat"]).is_err());
    }

    #[test]
    fn test_format_pun_plain_and_list() {
        assert_eq!(format_pun(&pun(Quality::Rhyme), false), "The bat sat on the mat");
        assert_eq!(
            format_pun(&pun(Quality::Rhyme), true),
            "The bat sat on the mat (replaced: 'cat', origin: nursery, quality: 3)"
        );
    }

    #[test]
    fn test_print_puns_monochrome() {
        let mut out = Vec::new();
        print_puns(&mut out, &[pun(Quality::Similar)], false, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "The bat sat on the mat\n");
    }

    #[test]
    fn test_print_puns_colour_wraps_line() {
        let mut out = Vec::new();
        print_puns(&mut out, &[pun(Quality::Rhyme)], false, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("The bat sat on the mat"));
        assert!(text.starts_with("\x1b["));
    }

    #[test]
    fn test_validate_dir() {
        assert!(validate_dir(Path::new("/nonexistent/punfinder")).is_err());
        assert!(validate_dir(&std::env::temp_dir()).is_ok());
    }

    const WORDS: &str = ";;; fixture\n\
        BAT B AE1 T\nBET B EH1 T\nCAT K AE1 T\nSAT S AE1 T\nMAT M AE1 T\n\
        THE DH AH0\nON AA1 N\nIT IH1 T\n";

    // The Similar match comes first in the file so ordering is observable.
    const PHRASES: &str = "Bet on it\n# nursery\nThe cat sat on the mat\n";

    fn fixture() -> tempfile::TempDir {
        let root = tempfile::tempdir().unwrap();
        let dicts = root.path().join("dicts");
        let phrases = root.path().join("phrases");
        std::fs::create_dir_all(&dicts).unwrap();
        std::fs::create_dir_all(&phrases).unwrap();
        std::fs::write(dicts.join("words.dict"), WORDS).unwrap();
        std::fs::write(phrases.join("phrases.txt"), PHRASES).unwrap();
        root
    }

    /// Run the CLI against the fixture directories, capturing output.
    fn run_with(args: &[&str]) -> (Result<()>, String) {
        let root = fixture();
        let dicts = root.path().join("dicts");
        let phrases = root.path().join("phrases");
        let mut argv = vec![
            "punfinder".to_string(),
            "-q".to_string(),
            "-d".to_string(),
            dicts.to_string_lossy().to_string(),
            "-p".to_string(),
            phrases.to_string_lossy().to_string(),
        ];
        argv.extend(args.iter().map(|a| a.to_string()));
        let cli = Cli::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        let result = run(cli, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn lines(output: &str) -> Vec<&str> {
        output.lines().collect()
    }

    #[test]
    fn test_no_arguments_prints_help() {
        let err = Cli::try_parse_from(["punfinder"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
        assert!(Cli::try_parse_from(["punfinder", "-j"]).is_ok());
    }

    #[test]
    fn test_run_ranks_best_first() {
        let (result, output) = run_with(&["bat"]);
        result.unwrap();
        assert_eq!(lines(&output), vec!["The bat sat on the mat", "Bat on it"]);
    }

    #[test]
    fn test_run_unknown_target_stops() {
        let (result, output) = run_with(&["xyzzy"]);
        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<PunError>(),
            Some(&PunError::UnknownTarget("xyzzy".to_string()))
        );
        assert!(output.is_empty());
    }

    #[test]
    fn test_run_rejects_short_target() {
        let (result, _) = run_with(&["b"]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("please specify a word"));
    }

    #[test]
    fn test_run_check_needs_no_word_and_generates_nothing() {
        let (result, output) = run_with(&["-j"]);
        result.unwrap();
        assert!(output.is_empty());

        let (result, output) = run_with(&["-j", "bat"]);
        result.unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_run_word_prints_pronunciation_only() {
        let (result, output) = run_with(&["-w", "bat"]);
        result.unwrap();
        assert_eq!(
            lines(&output),
            vec![r#"Pronunciation of bat is ["B", "AE1", "T"]"#]
        );
    }

    #[test]
    fn test_run_json_emits_array() {
        let (result, output) = run_with(&["--json", "bat"]);
        result.unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let puns = value.as_array().unwrap();
        assert_eq!(puns.len(), 2);
        assert_eq!(puns[0]["pun"], "The bat sat on the mat");
        assert_eq!(puns[0]["quality"], 3);
        assert_eq!(puns[0]["origin"], "nursery");
        assert_eq!(puns[1]["quality"], 2);
    }

    #[test]
    fn test_run_min_quality_filters() {
        let (result, output) = run_with(&["-t", "3", "bat"]);
        result.unwrap();
        assert_eq!(lines(&output), vec!["The bat sat on the mat"]);

        let (result, output) = run_with(&["-t", "2", "bat"]);
        result.unwrap();
        assert_eq!(lines(&output).len(), 2);
    }

    #[test]
    fn test_run_max_truncates_after_sorting() {
        let (result, output) = run_with(&["-m", "1", "bat"]);
        result.unwrap();
        assert_eq!(lines(&output), vec!["The bat sat on the mat"]);
    }
}
