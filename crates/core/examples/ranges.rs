use std::{fmt::Write as _, fs, path::PathBuf};

use clap::Parser;
use typeskip::{
    Language as LanguageInner, LineIndex, OffsetRange, RegionBlanker, type_ranges,
    type_ranges_with,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Language {
    Ts,
    Tsx,
}

impl From<Language> for LanguageInner {
    fn from(value: Language) -> Self {
        match value {
            Language::Ts => LanguageInner::TypeScript,
            Language::Tsx => LanguageInner::TypeScriptReact,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ranges")]
#[command(about = "Print the type-annotation ranges of a TypeScript file given its blanked copy", long_about = None)]
struct Args {
    /// Path to the original source file
    input: PathBuf,

    /// Path to the blanked copy of the source file
    blanked: Option<PathBuf>,

    /// Blank these UTF-16 regions instead of reading a blanked file (e.g. "5..13,20..24")
    #[arg(long, conflicts_with = "blanked")]
    regions: Option<String>,

    /// Print line:character positions instead of UTF-16 offsets
    #[arg(long, short)]
    positions: bool,

    /// Output path for the range list (defaults to stdout)
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// Override language instead of inferring from file extension
    #[arg(long, short)]
    language: Option<Language>,
}

fn parse_regions(list: &str) -> Result<Vec<OffsetRange>, Box<dyn std::error::Error + Send + Sync>> {
    let mut out = Vec::new();
    for part in list.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (start, end) = part
            .split_once("..")
            .ok_or_else(|| format!("region must look like start..end: {part}"))?;
        out.push(OffsetRange::new(start.parse()?, end.parse()?));
    }
    Ok(out)
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    let language: Option<LanguageInner> = match args.language {
        Some(lang) => Some(lang.into()),
        None => args.input.to_str().and_then(LanguageInner::from_path),
    };
    if language.is_none() {
        return Err(std::io::Error::other(format!(
            "not a TypeScript file and --language not provided: {}",
            args.input.display()
        ))
        .into());
    }

    let source = fs::read_to_string(&args.input)?;

    let ranges = match (&args.blanked, &args.regions) {
        (Some(blanked), _) => {
            let blanked = fs::read_to_string(blanked)?;
            type_ranges(&source, &blanked)?
        }
        (None, Some(list)) => {
            let blanker = RegionBlanker::new(parse_regions(list)?);
            type_ranges_with(&blanker, &source)?
        }
        (None, None) => {
            return Err(std::io::Error::other("provide a blanked file or --regions").into());
        }
    };

    let mut out = String::new();
    if args.positions {
        let index = LineIndex::new(&source);
        for r in &ranges {
            let p = index.range_at(*r);
            writeln!(
                out,
                "{}:{}-{}:{}",
                p.start.line + 1,
                p.start.character + 1,
                p.end.line + 1,
                p.end.character + 1
            )?;
        }
    } else {
        for r in &ranges {
            writeln!(out, "{r}")?;
        }
    }

    match &args.out {
        None => {
            print!("{out}");
        }
        Some(path) => {
            fs::write(path, out)?;
        }
    }

    Ok(())
}
