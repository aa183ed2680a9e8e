use clap::{Parser, Subcommand, ValueEnum};
use replies::{Reply, ReplyError, Template};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "cli_reply",
    version,
    about = "Формирует текст ответа клиенту по шаблону и вставленным данным заказа.",
    long_about = None,
)]
struct Args {
    /// Файл для результата (по умолчанию stdout)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Подробный лог в stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Показывает список шаблонов
    List,

    /// Ответ с расчётом стоимости заказа
    Common {
        /// Шаблон ответа
        #[arg(long, value_enum, default_value_t = PriceTemplate::Calculation)]
        template: PriceTemplate,

        /// Номер заказа
        #[arg(long)]
        order: String,

        /// Файл с данными о стоимости (по умолчанию stdin)
        #[arg(long)]
        prices: Option<PathBuf>,
    },

    /// Отмена части вручений в батче
    Batch {
        /// Файл с расчётным расстоянием и временем (по умолчанию stdin)
        #[arg(long)]
        calculation: Option<PathBuf>,

        /// Количество выполненных вручений
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        done: String,

        /// Общее количество вручений
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        total: String,
    },

    /// Оплата заказа двумя пополнениями
    SplitPayment {
        /// Файл с первым пополнением: дата и сумма
        #[arg(long)]
        first: PathBuf,

        /// Файл со вторым пополнением: дата и сумма
        #[arg(long)]
        second: PathBuf,
    },

    /// Поступление средств на баланс
    Inflow {
        /// Сумма поступления
        #[arg(long)]
        amount: String,

        /// Дата поступления
        #[arg(long)]
        date: String,

        /// Время поступления
        #[arg(long)]
        time: String,
    },
}

/// Шаблоны с расчётом стоимости
#[derive(Copy, Clone, Debug, ValueEnum)]
enum PriceTemplate {
    Calculation,
    Recalculation,
}

impl From<PriceTemplate> for Template {
    fn from(t: PriceTemplate) -> Self {
        match t {
            PriceTemplate::Calculation => Template::Calculation,
            PriceTemplate::Recalculation => Template::Recalculation,
        }
    }
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

/// Читает файл, либо stdin если путь не указан
fn read_input(path: Option<&Path>) -> Result<String, ReplyError> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "reading input file");
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(args: Args) -> Result<(), ReplyError> {
    let reply = match args.command {
        Command::List => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            for template in Template::ALL {
                writeln!(handle, "{template}")?;
            }
            return Ok(());
        }
        Command::Common {
            template,
            order,
            prices,
        } => Reply::Common {
            template: template.into(),
            order_number: order,
            prices: read_input(prices.as_deref())?,
        },
        Command::Batch {
            calculation,
            done,
            total,
        } => Reply::BatchCancellation {
            calculation: read_input(calculation.as_deref())?,
            done,
            total,
        },
        Command::SplitPayment { first, second } => Reply::SplitPayment {
            first: read_input(Some(first.as_path()))?,
            second: read_input(Some(second.as_path()))?,
        },
        Command::Inflow { amount, date, time } => Reply::Inflow { amount, date, time },
    };

    // при ошибке выход не трогаем
    let text = reply.render()?;
    info!(template = %reply.template(), "reply rendered");

    match args.output {
        Some(path) => fs::write(&path, format!("{text}\n"))?,
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{text}")?;
        }
    }

    Ok(())
}
