use std::cell::Cell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing::info;

use chatsieve::analysis::denylist::Denylist;
use chatsieve::analysis::lexicon::AfinnScorer;
use chatsieve::analysis::tokenizer::WordTokenizer;
use chatsieve::analysis::traits::Tokenizer;
use chatsieve::config::Config;
use chatsieve::filter::censor::CENSOR_DENYLIST;
use chatsieve::filter::options::validate_sentiment_range;
use chatsieve::output::terminal;
use chatsieve::policy::{categorize, filters};
use chatsieve::{with_censor, Message, MessageFilter};

/// Chatsieve: keyword, sentiment, and denylist filtering for chat messages.
///
/// Messages are read one per line from --input or stdin. A line starting
/// with `{` is a JSON message object; anything else is the message text.
#[derive(Parser)]
#[command(name = "chatsieve", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Accept or reject each message by keyword and sentiment range
    Check {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        filter: FilterArgs,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Keep only the messages matching every given condition
    Select {
        #[command(flatten)]
        input: InputArgs,

        /// Keep messages containing any of these keywords
        #[arg(long, value_delimiter = ',')]
        keyword: Vec<String>,

        /// Keep messages in any of these categories
        #[arg(long, value_delimiter = ',')]
        category: Vec<String>,

        /// Keep messages scoring at least this much
        #[arg(long, allow_hyphen_values = true)]
        min_sentiment: Option<f64>,

        /// Keep messages scoring at most this much
        #[arg(long, allow_hyphen_values = true)]
        max_sentiment: Option<f64>,

        /// Drop messages containing denylisted words
        #[arg(long)]
        clean: bool,

        #[command(flatten)]
        deny: DenyArgs,
    },

    /// Bucket messages by sentiment, keyword presence, or denylisted words
    Categorize {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, value_enum, default_value = "sentiment")]
        by: CategorizeBy,

        /// Keywords for --by keyword (default: CHATSIEVE_KEYWORDS)
        #[arg(long, value_delimiter = ',')]
        keywords: Vec<String>,

        #[command(flatten)]
        deny: DenyArgs,

        /// Print buckets as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mask words with asterisks
    Censor {
        #[command(flatten)]
        input: InputArgs,

        /// Word to mask (repeatable)
        #[arg(long = "word")]
        words: Vec<String>,

        /// Also mask every denylisted word
        #[arg(long)]
        denylist: bool,

        #[command(flatten)]
        deny: DenyArgs,
    },

    /// Show the sentiment breakdown of a piece of text
    Score {
        /// The text to score
        text: String,

        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args)]
struct InputArgs {
    /// Read messages from this file instead of stdin
    #[arg(long, short)]
    input: Option<PathBuf>,
}

#[derive(clap::Args)]
struct FilterArgs {
    /// Keywords to accept on (default: CHATSIEVE_KEYWORDS)
    #[arg(long, value_delimiter = ',')]
    keywords: Vec<String>,

    /// Lowest accepted sentiment score (default: CHATSIEVE_MIN_SENTIMENT or 0)
    #[arg(long, allow_hyphen_values = true)]
    min_sentiment: Option<f64>,

    /// Highest accepted sentiment score (default: CHATSIEVE_MAX_SENTIMENT or 10)
    #[arg(long, allow_hyphen_values = true)]
    max_sentiment: Option<f64>,
}

#[derive(clap::Args)]
struct DenyArgs {
    /// Denylisted words (added to CHATSIEVE_DENYLIST, if set)
    #[arg(long, value_delimiter = ',')]
    deny: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum CategorizeBy {
    Sentiment,
    Keyword,
    Inappropriate,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chatsieve=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Check {
            input,
            filter,
            json,
        } => {
            let messages = read_messages(input.input.as_deref())?;

            let mut options = config.filter_options();
            if !filter.keywords.is_empty() {
                options.keywords = filter.keywords;
            }
            if let Some(min) = filter.min_sentiment {
                options.min_sentiment = min;
            }
            if let Some(max) = filter.max_sentiment {
                options.max_sentiment = max;
            }
            if options.keywords.is_empty() {
                println!(
                    "{}",
                    "No keywords configured: every message will be rejected. \
                     Pass --keywords or set CHATSIEVE_KEYWORDS."
                        .yellow()
                );
            }

            let accepted = Rc::new(Cell::new(0usize));
            let rejected = Rc::new(Cell::new(0usize));
            let (accept_count, reject_count) = (accepted.clone(), rejected.clone());

            let mut message_filter = MessageFilter::builder()
                .options(options)
                .on_accept(move |_| accept_count.set(accept_count.get() + 1))
                .on_reject(move |_| reject_count.set(reject_count.get() + 1))
                .build()?;

            let mut results = Vec::with_capacity(messages.len());
            for message in messages {
                let verdict = message_filter.filter(&message)?;
                results.push((message, verdict));
            }

            info!(
                accepted = accepted.get(),
                rejected = rejected.get(),
                "Filter run complete"
            );

            if json {
                let rows: Vec<serde_json::Value> = results
                    .iter()
                    .map(|(message, verdict)| {
                        serde_json::json!({
                            "message": message,
                            "accepted": verdict.accepted,
                            "contains_keyword": verdict.contains_keyword,
                            "sentiment": verdict.sentiment,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                terminal::display_verdicts(&results);
            }
        }

        Commands::Select {
            input,
            keyword,
            category,
            min_sentiment,
            max_sentiment,
            clean,
            deny,
        } => {
            let mut selected = read_messages(input.input.as_deref())?;

            // Each policy narrows the batch; survivors are copied forward.
            if !keyword.is_empty() {
                selected = owned(filters::filter_messages_by_keyword(&selected, &keyword));
            }
            if !category.is_empty() {
                selected = owned(filters::filter_messages_by_categories(&selected, &category));
            }
            if min_sentiment.is_some() || max_sentiment.is_some() {
                let min = min_sentiment.unwrap_or(f64::NEG_INFINITY);
                let max = max_sentiment.unwrap_or(f64::INFINITY);
                validate_sentiment_range(min, max)?;
                selected = owned(filters::filter_messages_by_sentiment(&selected, min, max));
            }
            if clean {
                let denylist = resolve_denylist(&config, deny.deny)?;
                selected = owned(filters::filter_messages_by_inappropriate_words(
                    &selected,
                    denylist.words(),
                ));
            }

            let refs: Vec<&Message> = selected.iter().collect();
            terminal::display_messages("Selected", &refs);
        }

        Commands::Categorize {
            input,
            by,
            keywords,
            deny,
            json,
        } => {
            let messages = read_messages(input.input.as_deref())?;

            let buckets = match by {
                CategorizeBy::Sentiment => categorize::categorize_messages_by_sentiment(&messages),
                CategorizeBy::Keyword => {
                    let keywords = if keywords.is_empty() {
                        config.keywords.clone()
                    } else {
                        keywords
                    };
                    if keywords.is_empty() {
                        anyhow::bail!("--by keyword needs --keywords or CHATSIEVE_KEYWORDS");
                    }
                    categorize::categorize_messages_by_keyword(&messages, &keywords)
                }
                CategorizeBy::Inappropriate => {
                    let denylist = resolve_denylist(&config, deny.deny)?;
                    categorize::categorize_messages_by_inappropriate_words(
                        &messages,
                        denylist.words(),
                    )
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&buckets)?);
            } else {
                terminal::display_categories(&buckets);
            }
        }

        Commands::Censor {
            input,
            words,
            denylist,
            deny,
        } => {
            if words.is_empty() && !denylist {
                anyhow::bail!("Nothing to censor: pass --word or --denylist");
            }

            let messages = read_messages(input.input.as_deref())?;

            let mut builder = MessageFilter::builder().options(config.filter_options());
            if denylist {
                builder = builder.denylist(resolve_denylist(&config, deny.deny)?);
            }
            let censor = with_censor(builder.build()?);

            let mut censored = Vec::with_capacity(messages.len());
            for message in &messages {
                let mut current = message.clone();
                for word in &words {
                    current = censor.censor(&current, word)?;
                }
                if denylist {
                    current = censor.apply_filter(CENSOR_DENYLIST, &current, &[])?;
                }
                censored.push(current);
            }

            let refs: Vec<&Message> = censored.iter().collect();
            terminal::display_messages("Censored", &refs);
        }

        Commands::Score { text, json } => {
            let tokens = WordTokenizer::for_sentiment().tokenize(&text);
            let result = AfinnScorer::new().analyze(&text);

            if json {
                let report = serde_json::json!({
                    "text": text,
                    "tokens": tokens,
                    "sentiment": result,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                terminal::display_sentiment(&text, &tokens, &result);
            }
        }
    }

    Ok(())
}

/// Read messages from a file, or stdin when no path is given.
fn read_messages(path: Option<&Path>) -> Result<Vec<Message>> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("Failed to read stdin")?,
    };

    let mut messages = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let message = if line.starts_with('{') {
            Message::from_json(line).with_context(|| format!("Line {}", i + 1))?
        } else {
            Message::new(line)
        };
        messages.push(message);
    }

    info!(count = messages.len(), "Read messages");
    Ok(messages)
}

/// Merge the configured denylist file with words given on the command line.
fn resolve_denylist(config: &Config, extra: Vec<String>) -> Result<Denylist> {
    if extra.is_empty() {
        config.require_denylist()?;
    }
    let mut words: Vec<String> = config
        .load_denylist()?
        .map(|list| list.words().to_vec())
        .unwrap_or_default();
    words.extend(extra);
    Ok(Denylist::new(words))
}

fn owned(messages: Vec<&Message>) -> Vec<Message> {
    messages.into_iter().cloned().collect()
}
