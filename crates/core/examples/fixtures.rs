use std::{fmt::Write as _, fs, path::PathBuf};

use clap::Parser;
use typeskip::{Language, OffsetRange, type_ranges};

#[derive(Parser, Debug)]
#[command(name = "fixtures")]
#[command(about = "Create or validate fixture range files", long_about = None)]
struct Args {
    /// Write fixtures instead of validating them
    #[arg(long, short)]
    write: bool,

    /// Path to the fixtures directory (defaults to "./fixtures")
    #[arg(long, default_value = "fixtures")]
    dir: PathBuf,
}

fn render_ranges(ranges: &[OffsetRange]) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    for r in ranges {
        writeln!(out, "{r}")?;
    }
    Ok(out)
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    // Read all original sources in the fixtures directory
    let entries = fs::read_dir(&args.dir)?;

    let mut input_files = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or("invalid filename")?;

        // Skip blanked copies and files without supported extensions
        if filename.contains(".blank.") {
            continue;
        }

        if Language::from_path(filename).is_some() {
            input_files.push(path);
        }
    }

    input_files.sort();

    let mut mismatches = Vec::new();
    if args.write {
        println!("Creating fixtures...");
    } else {
        println!("Validating fixtures...");
    }

    for input_path in &input_files {
        let filename = input_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or("invalid filename")?;
        let (basename, extension) = filename
            .rsplit_once('.')
            .ok_or("filename missing extension")?;

        let blank_path = args.dir.join(format!("{basename}.blank.{extension}"));
        let ranges_path = args.dir.join(format!("{basename}.ranges"));

        if !blank_path.exists() {
            mismatches.push(format!(
                "{filename}: missing blanked file {}",
                blank_path.display()
            ));
            continue;
        }

        let source = fs::read_to_string(input_path)?;
        let blanked = fs::read_to_string(&blank_path)?;
        let rendered = render_ranges(&type_ranges(&source, &blanked)?)?;

        if args.write {
            fs::write(&ranges_path, &rendered)?;
            println!("  Created {}", ranges_path.display());
            continue;
        }

        if ranges_path.exists() {
            let expected = fs::read_to_string(&ranges_path)?;
            if rendered != expected {
                mismatches.push(format!("{filename}: ranges mismatch"));
            } else {
                println!("  ✓ {filename}");
            }
        } else {
            mismatches.push(format!(
                "{filename}: missing ranges file {}",
                ranges_path.display()
            ));
        }
    }

    if !mismatches.is_empty() {
        eprintln!("\nFixture errors:");
        for mismatch in &mismatches {
            eprintln!("  ✗ {mismatch}");
        }
        return Err(format!("{} fixture error(s)", mismatches.len()).into());
    }

    if args.write {
        println!("Done creating {} fixtures.", input_files.len());
    } else {
        println!(
            "\nAll {} fixtures validated successfully!",
            input_files.len()
        );
    }

    Ok(())
}
