//! List and tags command handlers.

use anyhow::{Context, Result};
use std::collections::BTreeSet;

use crate::cli::app::App;
use crate::cli::output::{NoteListing, Output, OutputFormat, TagListing, hashtags};
use crate::cli::{ListArgs, TagsArgs};
use crate::infra::{deleted_dir, read_note_header, scan_notes_directory};

pub fn handle_list(args: &ListArgs, app: &App) -> Result<()> {
    // Filter by tags (AND logic)
    let mut notes: Vec<NoteListing> = if args.deleted {
        let mut deleted = deleted_listings(app)?;
        deleted.retain(|n| args.tags.iter().all(|tag| n.tags.contains(tag)));
        deleted
    } else {
        app.index()
            .notes()
            .iter()
            .filter(|(_, note)| args.tags.iter().all(|tag| note.has_tag(tag)))
            .map(|(path, note)| NoteListing {
                name: note.name().to_string(),
                path: path.display().to_string(),
                tags: note.tags().to_vec(),
            })
            .collect()
    };

    notes.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes found.");
            } else {
                for note in &notes {
                    if note.tags.is_empty() {
                        println!("{}", note.name);
                    } else {
                        println!("{}  {}", note.name, hashtags(&note.tags));
                    }
                    println!("    {}", note.path);
                }
                println!();
                println!("{} note(s)", notes.len());
            }
        }
        OutputFormat::Json => {
            let output = Output::new(notes);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Paths => {
            for note in &notes {
                println!("{}", note.path);
            }
        }
    }

    Ok(())
}

/// Reads the notes sitting in the deleted directory.
///
/// Files whose header no longer parses are listed under their file name.
fn deleted_listings(app: &App) -> Result<Vec<NoteListing>> {
    let dir = deleted_dir(app.index().notes_dir());
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let files = scan_notes_directory(&dir, app.index().ext())
        .with_context(|| format!("failed to scan {}", dir.display()))?;

    Ok(files
        .map(|path| {
            let (name, tags) = match read_note_header(&path) {
                Ok(header) => header.into_parts(),
                Err(_) => (
                    path.file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_default(),
                    Vec::new(),
                ),
            };
            NoteListing {
                name,
                path: path.display().to_string(),
                tags,
            }
        })
        .collect())
}

pub fn handle_tags(args: &TagsArgs, app: &App) -> Result<()> {
    let tags = app.index().tags();

    match args.format {
        OutputFormat::Human => {
            if tags.is_empty() {
                println!("No tags found.");
            } else {
                for (tag, paths) in tags {
                    if args.counts {
                        println!("#{} ({})", tag, paths.len());
                    } else {
                        println!("#{}", tag);
                    }
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<TagListing> = tags
                .iter()
                .map(|(tag, paths)| TagListing {
                    name: tag.clone(),
                    count: args.counts.then_some(paths.len()),
                })
                .collect();
            let out = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Paths => {
            let tagged: BTreeSet<_> = tags.values().flatten().collect();
            for path in tagged {
                println!("{}", path.display());
            }
        }
    }
    Ok(())
}
