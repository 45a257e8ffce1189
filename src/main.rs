use std::io::{self, Write};
use std::path::PathBuf;
use std::{env, process};

use zfind::kernel::services::adapters::{ensure_settings_file, load_settings};
use zfind::kernel::{Document, SearchController, TextDocument};

mod logging;

const USAGE: &str =
    "usage: zfind <pattern> <file> [--case-sensitive] [--literal] [--goto N] [--next K]";

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    pattern: String,
    path: PathBuf,
    case_sensitive: bool,
    literal: bool,
    goto: Option<usize>,
    next: usize,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut positional = Vec::new();
    let mut parsed = Args::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--case-sensitive" => parsed.case_sensitive = true,
            "--literal" => parsed.literal = true,
            "--goto" => parsed.goto = Some(parse_count(&arg, args.next())?),
            "--next" => parsed.next = parse_count(&arg, args.next())?,
            "-h" | "--help" => return Err(String::new()),
            _ if arg.starts_with("--") => return Err(format!("unknown option: {arg}")),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    match (positional.next(), positional.next(), positional.next()) {
        (Some(pattern), Some(path), None) => {
            parsed.pattern = pattern;
            parsed.path = PathBuf::from(path);
            Ok(parsed)
        }
        _ => Err("expected <pattern> and <file>".to_string()),
    }
}

fn parse_count(flag: &str, value: Option<String>) -> Result<usize, String> {
    let value = value.ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .parse::<usize>()
        .map_err(|_| format!("{flag}: not a number: {value}"))
}

fn report(controller: &SearchController, out: &mut impl Write) -> io::Result<()> {
    if let Some(err) = controller.last_error() {
        writeln!(out, "error: {err}")?;
    }
    writeln!(out, "matches: {}", controller.size())?;

    let Some(doc) = controller.document() else {
        return Ok(());
    };
    let index = controller.match_index();
    for (i, m) in index.matches().iter().enumerate() {
        let marker = if i == index.active_match_index() { '*' } else { ' ' };
        let text: String = doc
            .block(m.block_index)
            .map(|block| block.text.chars().skip(m.start).take(m.len()).collect())
            .unwrap_or_default();
        writeln!(
            out,
            "{marker} {}:{}  {text}",
            m.block_index + 1,
            m.start + 1
        )?;
    }

    if controller.size() > 0 {
        writeln!(
            out,
            "active: {}/{} cursor: {}",
            controller.highlight_index(),
            controller.size(),
            controller.cursor_position()
        )?;
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let _logging = logging::init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            if !msg.is_empty() {
                eprintln!("zfind: {msg}");
            }
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "settings file unavailable");
    }
    let settings = load_settings().unwrap_or_default();
    let mut controller: SearchController = SearchController::with_settings(&settings);
    if args.case_sensitive {
        controller.set_case_sensitive(true);
    }
    if args.literal {
        controller.set_use_regex(false);
    }

    let text = std::fs::read_to_string(&args.path)?;
    tracing::info!(path = %args.path.display(), chars = text.chars().count(), "document loaded");
    controller.attach_document(TextDocument::from(text.as_str()));
    controller.set_pattern(&args.pattern);

    if let Some(n) = args.goto {
        controller.go_to_highlight_index(n);
    }
    for _ in 0..args.next {
        controller.go_to_next();
    }

    let stdout = io::stdout();
    report(&controller, &mut stdout.lock())
}
