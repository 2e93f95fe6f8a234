mod settings;

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveTime, Timelike};
use clap::{Parser, Subcommand};

use wayfarer_core::category::domain::category_classifier::CategoryClassifier;
use wayfarer_core::category::domain::nearby_place::{nearest_place, PlaceCandidate, PlaceKind};
use wayfarer_core::currency::domain::amount_detector::AmountDetector;
use wayfarer_core::currency::domain::amount_input::AmountInput;
use wayfarer_core::currency::domain::yen_format::format_yen;
use wayfarer_core::expenses::domain::expense::Expense;
use wayfarer_core::expenses::domain::expense_summary::{group_by_day, ExpenseSummary};
use wayfarer_core::phrasebook::domain::phrase_suggester::{PhraseSuggester, ReplySuggestion};
use wayfarer_core::phrasebook::domain::phrasebook::ReplyStyle;
use wayfarer_core::phrasebook::infrastructure::phrasebook_loader;
use wayfarer_core::pipeline::conversation_use_case::ConversationUseCase;
use wayfarer_core::shared::language::Language;
use wayfarer_core::transcript::domain::recognized_fragment::RecognizedFragment;
use wayfarer_core::transcript::domain::segment_deduplicator::SegmentDeduplicator;
use wayfarer_core::translation::infrastructure::cached_translator::CachedTranslator;
use wayfarer_core::translation::infrastructure::passthrough_translator::PassthroughTranslator;
use wayfarer_core::translation::infrastructure::translation_memo::TranslationMemo;

use settings::Settings;

/// Euro amount conversion, expense categorisation and reply suggestions for
/// travellers.
#[derive(Parser)]
#[command(name = "wayfarer", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// EUR → JPY rate (overrides the saved setting).
    #[arg(long, global = true)]
    rate: Option<f64>,
}

#[derive(Subcommand)]
enum Command {
    /// List euro amounts found in text with their yen value.
    Detect { text: String },

    /// Print text with the yen value inserted after each euro amount.
    Annotate { text: String },

    /// Convert a euro amount, or replay keypad input (digits, '.', '<' = delete, 'c' = clear).
    Convert {
        amount: Option<f64>,

        #[arg(long, conflicts_with = "amount")]
        keys: Option<String>,
    },

    /// Suggest an expense category from the hour and nearby places.
    Classify {
        /// Hour of day (0-23); defaults to the current local hour.
        #[arg(long)]
        hour: Option<u32>,

        /// Nearby place as KIND:METERS[:NAME], e.g. cafe:40:Le Procope. Repeatable.
        #[arg(long = "place", value_parser = parse_place)]
        places: Vec<PlaceCandidate>,
    },

    /// Suggest replies to something heard.
    Suggest {
        text: String,

        /// Translation of the text, if available.
        #[arg(long, default_value = "")]
        translation: String,

        #[arg(long)]
        language: Option<Language>,

        #[arg(long)]
        style: Option<ReplyStyle>,
    },

    /// Read recognized lines from stdin and print translations and replies.
    Listen {
        #[arg(long)]
        language: Option<Language>,

        #[arg(long)]
        style: Option<ReplyStyle>,

        /// Translation memo capacity.
        #[arg(long)]
        cache_capacity: Option<usize>,
    },

    /// Totals for a JSON file of expenses.
    Summary {
        file: PathBuf,

        /// Day counted as today (YYYY-MM-DD); defaults to the local date.
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Trip start (YYYY-MM-DD); defaults to the saved setting.
        #[arg(long)]
        trip_start: Option<NaiveDate>,
    },

    /// Show or change saved settings.
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    Show,
    SetRate { rate: f64 },
    /// Omit the date to clear it.
    SetTripStart { date: Option<NaiveDate> },
    SetStyle { style: ReplyStyle },
    SetLanguage { language: Language },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let mut settings = Settings::load();
    let rate = cli.rate.unwrap_or(settings.eur_to_jpy_rate);

    match cli.command {
        Command::Detect { text } => run_detect(&text, rate),
        Command::Annotate { text } => println!("{}", AmountDetector::annotate(&text, rate)),
        Command::Convert { amount, keys } => run_convert(amount, keys.as_deref(), rate)?,
        Command::Classify { hour, places } => run_classify(hour, &places)?,
        Command::Suggest {
            text,
            translation,
            language,
            style,
        } => {
            let suggester = build_suggester(&settings);
            let replies = suggester.suggest(
                &text,
                &translation,
                language.unwrap_or(settings.source_language),
                style.unwrap_or(settings.reply_style),
            );
            print_replies(&replies);
        }
        Command::Listen {
            language,
            style,
            cache_capacity,
        } => run_listen(
            &settings,
            language.unwrap_or(settings.source_language),
            style.unwrap_or(settings.reply_style),
            cache_capacity.unwrap_or(settings.cache_capacity),
            rate,
        )?,
        Command::Summary {
            file,
            today,
            trip_start,
        } => run_summary(
            &file,
            today.unwrap_or_else(|| Local::now().date_naive()),
            trip_start.or(settings.trip_start_date),
            rate,
        )?,
        Command::Settings { action } => run_settings(&mut settings, action)?,
    }

    Ok(())
}

fn run_detect(text: &str, rate: f64) {
    let matches = AmountDetector::detect(text, rate);
    if matches.is_empty() {
        println!("No euro amounts found");
        return;
    }
    for m in &matches {
        println!(
            "{:>4}..{:<4} {:<12} €{:.2} → {}",
            m.start_offset,
            m.end_offset,
            m.original_text,
            m.amount,
            m.formatted_converted()
        );
    }
}

fn run_convert(
    amount: Option<f64>,
    keys: Option<&str>,
    rate: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut input = AmountInput::new(rate);
    match (amount, keys) {
        (Some(amount), _) => input.set_amount(amount),
        (None, Some(keys)) => replay_keys(&mut input, keys)?,
        (None, None) => return Err("Give an amount or --keys".into()),
    }
    println!(
        "€{} = {}",
        display_entry(input.text()),
        format_yen(input.converted_amount())
    );
    Ok(())
}

fn replay_keys(input: &mut AmountInput, keys: &str) -> Result<(), String> {
    for key in keys.chars() {
        match key {
            '0'..='9' => input.append_digit(key),
            '.' | ',' => input.append_dot(),
            '<' => input.delete_last(),
            'c' | 'C' => input.clear(),
            _ => return Err(format!("Unknown key '{key}'")),
        }
    }
    Ok(())
}

fn display_entry(text: &str) -> &str {
    if text.is_empty() {
        "0"
    } else {
        text
    }
}

fn run_classify(
    hour: Option<u32>,
    places: &[PlaceCandidate],
) -> Result<(), Box<dyn std::error::Error>> {
    let hour = hour.unwrap_or_else(|| Local::now().hour());
    let at = NaiveTime::from_hms_opt(hour, 0, 0)
        .ok_or_else(|| format!("Hour must be between 0 and 23, got {hour}"))?;
    let place = nearest_place(places);
    let suggestion = CategoryClassifier::new().classify(&at, place.as_ref());

    if let Some(place) = &place {
        println!(
            "Nearest place: {} ({}) at {:.0} m",
            place.name.as_deref().unwrap_or("unnamed"),
            place.category,
            place.distance_meters
        );
    }
    println!(
        "{} / {} (confidence {:.2}, {:?})",
        suggestion.category,
        suggestion.category.label_ja(),
        suggestion.confidence,
        suggestion.source
    );
    Ok(())
}

fn run_listen(
    settings: &Settings,
    language: Language,
    style: ReplyStyle,
    cache_capacity: usize,
    rate: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let memo = Arc::new(TranslationMemo::new(cache_capacity)?);
    let translator = CachedTranslator::new(Box::new(PassthroughTranslator), memo);
    let use_case = ConversationUseCase::new(
        Arc::new(SegmentDeduplicator::new()),
        Box::new(translator),
        build_suggester(settings),
        language,
        Language::Ja,
        style,
    );
    use_case.start_session();

    let locale = language.locale_identifier();
    for line in io::stdin().lock().lines() {
        let fragment = RecognizedFragment::finalized(line?, locale);
        if let Some(turn) = use_case.on_fragment(&fragment)? {
            println!("> {}", AmountDetector::annotate(&turn.segment, rate));
            println!("  {}", turn.translation);
            print_replies(&turn.replies);
        }
    }
    Ok(())
}

fn run_summary(
    file: &Path,
    today: NaiveDate,
    trip_start: Option<NaiveDate>,
    rate: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = fs::read_to_string(file)
        .map_err(|e| format!("Could not read {}: {e}", file.display()))?;
    let expenses: Vec<Expense> = serde_json::from_str(&json)?;
    log::info!("Loaded {} expenses from {}", expenses.len(), file.display());

    let trip_start = trip_start.map(|d| d.and_time(NaiveTime::MIN));
    let summary = ExpenseSummary::from_expenses(&expenses, today, trip_start);

    println!("Today: {}", money(summary.today_total, rate));
    println!("Trip:  {}", money(summary.trip_total, rate));
    for (category, total) in &summary.category_totals {
        println!("  {:<14} {}", category.to_string(), money(*total, rate));
    }

    for (day, items) in group_by_day(&expenses) {
        println!("{day}");
        for e in items {
            println!(
                "  {} {:<14} {} {}",
                e.created_at.format("%H:%M"),
                e.category.to_string(),
                format!("€{:.2} ({})", e.euro_amount, format_yen(e.converted_amount(rate))),
                e.memo
            );
        }
    }
    Ok(())
}

fn money(euros: f64, rate: f64) -> String {
    format!("€{euros:.2} ({})", format_yen(euros * rate))
}

fn run_settings(
    settings: &mut Settings,
    action: Option<SettingsAction>,
) -> Result<(), Box<dyn std::error::Error>> {
    match action.unwrap_or(SettingsAction::Show) {
        SettingsAction::Show => {
            println!("{}", serde_json::to_string_pretty(settings)?);
            return Ok(());
        }
        SettingsAction::SetRate { rate } => {
            check_rate(rate)?;
            settings.eur_to_jpy_rate = rate;
        }
        SettingsAction::SetTripStart { date } => settings.trip_start_date = date,
        SettingsAction::SetStyle { style } => settings.reply_style = style,
        SettingsAction::SetLanguage { language } => settings.source_language = language,
    }
    let path = settings.save()?;
    log::info!("Settings written to {}", path.display());
    Ok(())
}

fn build_suggester(settings: &Settings) -> PhraseSuggester {
    let phrasebook = phrasebook_loader::load(settings.phrasebook_path.as_deref());
    PhraseSuggester::new(Arc::new(phrasebook))
}

fn print_replies(replies: &[ReplySuggestion]) {
    if replies.is_empty() {
        println!("  (no replies available)");
    }
    for (i, r) in replies.iter().enumerate() {
        println!("  {}. [{}] {}", i + 1, r.category_id, r.local_text);
        println!("     {} / {}", r.english_text, r.hint_text);
    }
}

fn parse_place(value: &str) -> Result<PlaceCandidate, String> {
    let mut parts = value.splitn(3, ':');
    let kind: PlaceKind = parts.next().unwrap_or_default().parse()?;
    let distance = parts
        .next()
        .ok_or_else(|| format!("expected KIND:METERS[:NAME], got '{value}'"))?;
    let distance_meters: f64 = distance
        .trim()
        .parse()
        .map_err(|_| format!("invalid distance '{distance}'"))?;
    let name = parts
        .next()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string);
    Ok(PlaceCandidate {
        kind,
        distance_meters,
        name,
    })
}

fn check_rate(rate: f64) -> Result<(), String> {
    if !(rate.is_finite() && rate > 0.0) {
        return Err(format!("Rate must be a positive number, got {rate}"));
    }
    Ok(())
}

fn check_source_language(language: Language) -> Result<(), String> {
    if !Language::SOURCES.contains(&language) {
        return Err(format!(
            "Source language must be one of auto, en, fr, de, es, it, pt, nl, got '{language}'"
        ));
    }
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(rate) = cli.rate {
        check_rate(rate)?;
    }
    match &cli.command {
        Command::Convert {
            amount: Some(amount),
            ..
        } if !(amount.is_finite() && *amount >= 0.0) => {
            return Err(format!("Amount must not be negative, got {amount}").into());
        }
        Command::Classify { hour, places } => {
            if let Some(h) = hour {
                if *h > 23 {
                    return Err(format!("Hour must be between 0 and 23, got {h}").into());
                }
            }
            if let Some(p) = places
                .iter()
                .find(|p| p.distance_meters.is_nan() || p.distance_meters < 0.0)
            {
                return Err(format!(
                    "Distance must not be negative, got {}",
                    p.distance_meters
                )
                .into());
            }
        }
        Command::Listen {
            language,
            cache_capacity,
            ..
        } => {
            if *cache_capacity == Some(0) {
                return Err("Cache capacity must be at least 1".into());
            }
            if let Some(language) = language {
                check_source_language(*language)?;
            }
        }
        Command::Suggest {
            language: Some(language),
            ..
        } => check_source_language(*language)?,
        Command::Settings {
            action: Some(SettingsAction::SetLanguage { language }),
        } => check_source_language(*language)?,
        _ => {}
    }
    Ok(())
}
