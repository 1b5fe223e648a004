use crate::config::Config;
use crate::dictionary::word_list::{read_terms, WordList};
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

const DICTIONARY_EXTENSION: &str = "fst";

pub struct DictionaryInfo {
    pub name: String,
    pub path: PathBuf,
    pub word_count: usize,
    pub size_bytes: u64,
}

fn data_dir() -> Result<PathBuf> {
    Config::data_dir().context("Failed to get data directory")
}

pub fn list_dictionaries() -> Result<()> {
    let data_dir = data_dir()?;
    let installed = installed_dictionaries(&data_dir)?;

    if installed.is_empty() {
        println!("{}", "No dictionaries installed.".yellow());
        println!(
            "Run {} to compile one; the embedded word lists are used until then.",
            "identok dict build <WORDLIST>".cyan()
        );
        return Ok(());
    }

    println!("{}", "Installed dictionaries:".bold());
    println!();

    for info in &installed {
        println!(
            "  {} {} ({}, {})",
            "✓".green(),
            info.name.cyan().bold(),
            format!("{} words", info.word_count).dimmed(),
            format!("{}KB", info.size_bytes / 1024).dimmed()
        );
    }

    println!();
    println!(
        "Data directory: {}",
        data_dir.display().to_string().dimmed()
    );

    Ok(())
}

/// Compile a text word list into `<data_dir>/<name>.fst`
pub fn build_dictionary(wordlist: &Path, name: Option<&str>) -> Result<()> {
    let name = match name {
        Some(name) => name.to_string(),
        None => wordlist
            .file_stem()
            .and_then(|s| s.to_str())
            .context("Cannot derive a dictionary name from the word list path")?
            .to_string(),
    };

    println!(
        "{} dictionary {} from {}...",
        "Building".cyan().bold(),
        name.yellow(),
        wordlist.display().to_string().dimmed()
    );

    let data_dir = data_dir()?;
    let (path, count) = build_into(&data_dir, wordlist, &name)?;

    println!("Found {} words", count.to_string().yellow());
    println!(
        "{} Dictionary installed: {}",
        "✓".green().bold(),
        path.display().to_string().cyan()
    );

    Ok(())
}

pub fn show_info(name: &str) -> Result<()> {
    let data_dir = data_dir()?;

    match dictionary_info(&data_dir, name)? {
        Some(info) => {
            println!("{}", format!("Dictionary: {}", info.name).bold());
            println!("  Path: {}", info.path.display());
            println!("  Size: {} KB", info.size_bytes / 1024);
            println!("  Format: FST (Finite State Transducer)");
            println!("  Words: {}", info.word_count);
        }
        None => {
            println!(
                "{} Dictionary {} not found.",
                "✗".red().bold(),
                name.yellow()
            );
            println!(
                "Run {} to compile it.",
                format!("identok dict build <WORDLIST> --name {}", name).cyan()
            );
        }
    }

    Ok(())
}

fn build_into(data_dir: &Path, wordlist: &Path, name: &str) -> Result<(PathBuf, usize)> {
    let words = read_terms(wordlist)
        .with_context(|| format!("Failed to read word list: {}", wordlist.display()))?;
    if words.is_empty() {
        anyhow::bail!("Word list {} contains no words", wordlist.display());
    }

    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    let path = data_dir.join(format!("{}.{}", name, DICTIONARY_EXTENSION));
    let count = WordList::build_fst_file(&words, &path)
        .with_context(|| format!("Failed to build dictionary: {}", path.display()))?;

    Ok((path, count))
}

fn dictionary_info(data_dir: &Path, name: &str) -> Result<Option<DictionaryInfo>> {
    let path = data_dir.join(format!("{}.{}", name, DICTIONARY_EXTENSION));
    if !path.exists() {
        return Ok(None);
    }

    let metadata = fs::metadata(&path)?;
    let list = WordList::load_fst(name, &path)
        .with_context(|| format!("Failed to load dictionary: {}", path.display()))?;

    Ok(Some(DictionaryInfo {
        name: name.to_string(),
        word_count: list.len(),
        size_bytes: metadata.len(),
        path,
    }))
}

fn installed_dictionaries(data_dir: &Path) -> Result<Vec<DictionaryInfo>> {
    if !data_dir.exists() {
        return Ok(Vec::new());
    }

    let mut installed = Vec::new();
    for entry in fs::read_dir(data_dir)? {
        let path = entry?.path();

        if path.extension().and_then(|s| s.to_str()) != Some(DICTIONARY_EXTENSION) {
            continue;
        }
        if let Some(name) = path.file_stem().and_then(|s| s.to_str()) {
            if let Some(info) = dictionary_info(data_dir, name)? {
                installed.push(info);
            }
        }
    }

    installed.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(installed)
}
