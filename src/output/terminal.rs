// Colored terminal output for filter runs.
//
// main.rs collects results and hands them here; nothing in this module
// decides anything, it only prints.

use colored::Colorize;

use crate::analysis::traits::SentimentResult;
use crate::collection::Categories;
use crate::filter::Verdict;
use crate::message::Message;
use crate::policy::categorize::{
    CONTAINS_INAPPROPRIATE, CONTAINS_KEYWORD, NO_INAPPROPRIATE, NO_KEYWORD,
};

const PREVIEW_CHARS: usize = 100;

/// Display the outcome of running a MessageFilter over a batch.
pub fn display_verdicts(results: &[(Message, Verdict)]) {
    if results.is_empty() {
        println!("No messages to filter.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Filter Results ({} messages) ===", results.len()).bold()
    );
    println!();

    println!(
        "  {:<8}  {:>7}  {:<7}  {}",
        "Verdict".dimmed(),
        "Score".dimmed(),
        "Keyword".dimmed(),
        "Message".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for (message, verdict) in results {
        let label = if verdict.accepted {
            "accept".green().bold()
        } else {
            "reject".red()
        };
        let keyword = if verdict.contains_keyword { "yes" } else { "no" };
        println!(
            "  {:<8}  {:>7.1}  {:<7}  {}",
            label,
            verdict.sentiment,
            keyword,
            super::preview(&message.content, PREVIEW_CHARS)
        );
    }

    let accepted = results.iter().filter(|(_, v)| v.accepted).count();
    println!();
    println!(
        "  {} accepted, {} rejected",
        accepted.to_string().green(),
        (results.len() - accepted).to_string().red()
    );
}

/// Display category buckets in the order they were first seen.
pub fn display_categories(categories: &Categories<'_>) {
    if categories.is_empty() {
        println!("No messages to categorize.");
        return;
    }

    for (label, messages) in categories {
        println!("\n{} ({})", colorize_label(label), messages.len());
        for message in messages {
            println!("  - {}", super::preview(&message.content, PREVIEW_CHARS).dimmed());
        }
    }
    println!();
}

/// Display a list of messages, e.g. the survivors of a selection or censoring.
pub fn display_messages(title: &str, messages: &[&Message]) {
    println!("\n{}", format!("=== {title} ({}) ===", messages.len()).bold());
    for message in messages {
        match &message.category {
            Some(category) => println!(
                "  [{}] {}",
                category.cyan(),
                super::preview(&message.content, PREVIEW_CHARS)
            ),
            None => println!("  {}", super::preview(&message.content, PREVIEW_CHARS)),
        }
    }
    println!();
}

/// Display the breakdown of a single sentiment score.
pub fn display_sentiment(text: &str, tokens: &[String], result: &SentimentResult) {
    println!("\n{}", "=== Sentiment ===".bold());
    println!("  Text: {}", super::preview(text, PREVIEW_CHARS).dimmed());
    println!("  Tokens: {}", tokens.join(" | ").dimmed());

    let score = format!("{:.1}", result.score);
    let score = if result.score > 0.0 {
        score.green()
    } else if result.score < 0.0 {
        score.red()
    } else {
        score.normal()
    };
    println!("  Score: {}  (comparative {:.3})", score, result.comparative);

    if !result.positive.is_empty() {
        println!("  Positive: {}", result.positive.join(", ").green());
    }
    if !result.negative.is_empty() {
        println!("  Negative: {}", result.negative.join(", ").red());
    }
}

/// Colorize a category label.
fn colorize_label(label: &str) -> colored::ColoredString {
    match label {
        "positive" | NO_INAPPROPRIATE => label.green().bold(),
        "negative" | CONTAINS_INAPPROPRIATE => label.red().bold(),
        "neutral" => label.yellow().bold(),
        CONTAINS_KEYWORD => label.cyan().bold(),
        NO_KEYWORD => label.dimmed(),
        _ => label.bold(),
    }
}
