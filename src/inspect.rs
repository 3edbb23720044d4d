use anyhow::Result;
use console::{Emoji, style};
use indicatif::HumanBytes;
use serde_json::json;

use crate::cli::Args;
use crate::preview::TorrentPreview;
use crate::tree::{FileTree, NodeId};

static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "i ");
static FILES: Emoji<'_, '_> = Emoji("📁 ", "f ");
static TRACKERS: Emoji<'_, '_> = Emoji("📡 ", "t ");
static MAGNET: Emoji<'_, '_> = Emoji("🧲 ", "m ");

/// Render a finished preview to stdout according to the CLI flags.
pub fn print_preview(preview: &TorrentPreview, args: &Args) -> Result<()> {
    if args.magnet {
        println!("{}", preview.magnet_uri);
        return Ok(());
    }

    if args.json {
        let doc = json!({
            "metadata": preview.metadata,
            "torrent size": preview.source_len,
            "magnet": preview.magnet_uri,
            "tree": tree_to_json(&preview.tree, preview.tree.root(), args.show_padding),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    let metadata = &preview.metadata;

    println!("{} {}", INFO, style("Torrent Metadata:").bold());
    println!("{:<15} {}", style("Name:").bold(), style(&metadata.name).cyan());
    println!("{:<15} {}", style("BTIH:").bold(), metadata.info_hash_hex());

    if let Some(comment) = &metadata.comment {
        println!("{:<15} {}", style("Comment:").bold(), comment);
    }

    if let Some(created_by) = &metadata.created_by {
        println!("{:<15} {}", style("Created By:").bold(), created_by);
    }

    if let Some(date) = metadata.creation_date {
        let datetime = chrono::DateTime::from_timestamp(date, 0)
            .map(|dt| dt.to_string())
            .unwrap_or_else(|| date.to_string());
        println!("{:<15} {}", style("Date:").bold(), datetime);
    }

    println!(
        "{:<15} {}",
        style("Total Size:").bold(),
        style(HumanBytes(metadata.total_size())).green()
    );
    println!(
        "{:<15} {}",
        style("Torrent Size:").bold(),
        HumanBytes(preview.source_len)
    );
    println!(
        "{:<15} {}",
        style("Piece Size:").bold(),
        style(HumanBytes(metadata.piece_length)).yellow()
    );
    println!("{:<15} {}", style("Piece Count:").bold(), metadata.piece_count());

    let mut files_line = format!("{} files", metadata.file_count());
    if metadata.padding_count() > 0 {
        files_line += &format!(" ({} padding)", metadata.padding_count());
    }
    println!("{:<15} {}", style("File Count:").bold(), files_line);

    if !metadata.trackers.is_empty() {
        println!("\n{} {}", TRACKERS, style("Trackers:").bold());
        for tracker in &metadata.trackers {
            println!("  - {}", style(tracker).underlined());
        }
    }

    println!("\n{} {}", FILES, style("Files:").bold());
    print_tree(&preview.tree, preview.tree.root(), 0, args);

    println!("\n{} {}", MAGNET, style("Magnet:").bold());
    println!("{}", preview.magnet_uri);

    Ok(())
}

fn print_tree(tree: &FileTree, id: NodeId, level: usize, args: &Args) {
    if args.depth.is_some_and(|max| level >= max) {
        return;
    }

    let children: Vec<NodeId> = if args.show_padding {
        tree.children(id).collect()
    } else {
        tree.visible_children(id).collect()
    };

    for child in children {
        let node = tree.node(child);
        let indent = "  ".repeat(level + 1);

        if node.is_folder {
            println!("{}{}/", indent, style(&node.name).cyan());
            print_tree(tree, child, level + 1, args);
        } else {
            let mut line = format!("{}{:<40} {}", indent, node.name, style(HumanBytes(node.size)).dim());
            if node.is_padding {
                line += &format!(" {}", style("(padding)").dim());
            }
            println!("{}", line);
        }
    }
}

fn tree_to_json(tree: &FileTree, id: NodeId, show_padding: bool) -> serde_json::Value {
    let node = tree.node(id);

    if node.is_folder {
        let children: Vec<serde_json::Value> = if show_padding {
            tree.children(id)
                .map(|c| tree_to_json(tree, c, show_padding))
                .collect()
        } else {
            tree.visible_children(id)
                .map(|c| tree_to_json(tree, c, show_padding))
                .collect()
        };
        json!({
            "name": node.name,
            "folder": true,
            "children": children,
        })
    } else {
        let mut leaf = json!({
            "name": node.name,
            "size": node.size,
        });
        if node.is_padding {
            leaf["padding"] = json!(true);
        }
        if let Some(md5) = &node.md5sum {
            leaf["md5sum"] = json!(md5);
        }
        leaf
    }
}
