//! Display functions for command results

use super::formatters::{create_progress_bar, level_label, mask_word};
use crate::commands::{CorpusSummary, SettingsReport};
use crate::core::Card;
use colored::Colorize;

/// Print a card, with answers or with letter hints
pub fn print_card(card: &Card, reveal: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "First Letter = {}   Difficulty: {}",
        card.first_letter.to_string().bright_yellow().bold(),
        level_label(card.level)
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, entry) in card.words.iter().enumerate() {
        println!("\n{} {}", format!("Word {}:", i + 1).bold(), entry.definition);
        if reveal {
            println!("   {}", entry.word.green().bold());
        } else {
            println!("   {}", mask_word(&entry.word).bright_black());
        }
    }
    println!();
}

/// Print a corpus summary
pub fn print_summary(summary: &CorpusSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CORPUS SUMMARY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 Format:   {}", summary.format);
    match summary.windows {
        None => println!("   Cards:    {}", summary.total),
        Some(_) => println!("   Entries:  {}", summary.total),
    }
    println!("   Words:    {}", summary.words);

    if let Some(windows) = summary.windows {
        println!("   Playable windows: {}", format!("{windows}").bright_yellow());
    }

    if !summary.per_level.is_empty() {
        println!("\n📈 {}", "Levels:".bright_cyan().bold());
        for &(level, count) in &summary.per_level {
            let pct = if summary.total > 0 {
                count as f64 / summary.total as f64 * 100.0
            } else {
                0.0
            };
            let bar = create_progress_bar(count as f64, summary.total as f64, 30);
            println!(
                "   {:<13} {} {count:4} ({pct:5.1}%)",
                level_label(Some(level)),
                bar.green()
            );
        }
    }

    let letters: String = summary.letters.iter().collect();
    println!("\n🔤 Letters:  {}", letters.bright_white());
}

/// Print the settings command result
pub fn print_settings(report: &SettingsReport) {
    let state = if report.easy_mode {
        "on".green().bold()
    } else {
        "off".yellow().bold()
    };

    println!("Easy mode: {state}{}", if report.changed { " (updated)" } else { "" });
    match &report.location {
        Some(location) => println!("Settings file: {location}"),
        None => println!("Settings are not saved (in-memory store)"),
    }
}
