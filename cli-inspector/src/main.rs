use clap::{Parser, ValueEnum};
use replies::{Body, MatchTier, PriceTable, ReplyError, assemble_body, sum_ruble_amounts};
use serde_json::json;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "cli_inspector",
    version,
    about = "Показывает, как разбираются данные о стоимости и какие позиции попадают в ответ.",
    long_about = None,
)]
struct Args {
    /// Файл с данными о стоимости (по умолчанию stdin)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Формат вывода
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Подробный лог в stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Поддерживаемые форматы вывода
#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("Произошла ошибка при обработке данных:\n{err}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn tier_name(tier: MatchTier) -> &'static str {
    match tier {
        MatchTier::Ordered => "упорядоченное поле",
        MatchTier::Extra => "доп. поле",
        MatchTier::AdditionalService => "доп. услуга",
    }
}

fn print_text<W: Write>(mut out: W, table: &PriceTable, body: &Body, total: &str) -> io::Result<()> {
    writeln!(out, "Разобрано позиций: {}", table.len())?;
    for (label, entry) in table.iter() {
        writeln!(out, "  {label}: {entry}")?;
    }

    writeln!(out)?;
    writeln!(out, "В ответ попадут:")?;
    for line in &body.lines {
        writeln!(out, "  [{}] {}", tier_name(line.tier), line.render())?;
    }

    if !body.dropped.is_empty() {
        writeln!(out)?;
        writeln!(out, "Не найдены в справочнике:")?;
        for label in &body.dropped {
            writeln!(out, "  {label}")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Итого: {total}")
}

fn run(args: Args) -> Result<(), ReplyError> {
    let text = match &args.input {
        Some(path) => {
            debug!(path = %path.display(), "reading input file");
            fs::read_to_string(path)?
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let table = PriceTable::parse(&text);
    let body = assemble_body(&table);
    let total = sum_ruble_amounts(&body.text())?.to_string();
    debug!(
        entries = table.len(),
        lines = body.lines.len(),
        dropped = body.dropped.len(),
        "price block inspected"
    );

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match args.format {
        Format::Text => print_text(&mut handle, &table, &body, &total)?,
        Format::Json => {
            let report = json!({
                "entries": table,
                "body": body,
                "total": total,
            });
            writeln!(handle, "{report:#}")?;
        }
    }

    Ok(())
}
