use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use date_range_picker_core::calendar::{self, DAY_NAMES};
use date_range_picker_core::clock::{Clock, FixedClock, SystemClock, ZonedClock};
use date_range_picker_core::config::{DateFormat, ExcludedWeekdays, Mode, PickerConfig};
use date_range_picker_core::picker::DateRangePicker;
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(
    name = "range-picker",
    about = "Render and drive a two-month date range picker"
)]
struct Cli {
    /// JSON config file (fields: mode, max_date_range, exclude_days, disable_past_dates, date_format)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Selection mode: basic, advanced
    #[arg(long)]
    mode: Option<Mode>,

    /// Maximum days between start and end (advanced mode)
    #[arg(long)]
    max_range: Option<u32>,

    /// Excluded weekday indices, Sunday = 0 (e.g. "0,6")
    #[arg(long)]
    exclude_days: Option<String>,

    /// Block dates before today (advanced mode)
    #[arg(long)]
    disable_past: bool,

    /// strftime pattern for rendered dates (default: %-m/%-d/%Y)
    #[arg(long)]
    date_format: Option<String>,

    /// Pretend the current local time is this (YYYY-MM-DDTHH:MM:SS)
    #[arg(long)]
    now: Option<NaiveDateTime>,

    /// IANA time zone used to determine today (default: system local)
    #[arg(long, conflicts_with = "now")]
    tz: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the two-month calendar view
    Grid {
        /// Left month to show (YYYY-MM, defaults to the current month)
        #[arg(long)]
        month: Option<String>,

        /// Range start to highlight
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Range end to highlight
        #[arg(long, requires = "start")]
        end: Option<NaiveDate>,

        /// Hover position for the range preview
        #[arg(long)]
        hover: Option<NaiveDate>,
    },

    /// Report whether dates can be picked
    Check {
        /// Dates to check (YYYY-MM-DD)
        #[arg(required = true)]
        dates: Vec<NaiveDate>,

        /// Range start already chosen
        #[arg(long)]
        start: Option<NaiveDate>,
    },

    /// Replay clicks and print the resulting range
    Select {
        /// Clicked dates in order (comma-separated)
        #[arg(short, long, value_delimiter = ',', required = true)]
        click: Vec<NaiveDate>,

        /// Hover after the clicks
        #[arg(long)]
        hover: Option<NaiveDate>,

        /// Push the range to the host value and print it
        #[arg(long)]
        apply: bool,
    },
}

/// Clock selected from the command line.
enum CliClock {
    System(SystemClock),
    Zoned(ZonedClock),
    Fixed(FixedClock),
}

impl Clock for CliClock {
    fn now(&self) -> NaiveDateTime {
        match self {
            CliClock::System(c) => c.now(),
            CliClock::Zoned(c) => c.now(),
            CliClock::Fixed(c) => c.now(),
        }
    }
}

fn create_clock(now: Option<NaiveDateTime>, tz: Option<&str>) -> Result<CliClock> {
    if let Some(now) = now {
        return Ok(CliClock::Fixed(FixedClock(now)));
    }
    match tz {
        Some(name) => {
            let tz: Tz = name
                .parse()
                .map_err(|e| anyhow::anyhow!("unknown time zone {name}: {e}"))?;
            Ok(CliClock::Zoned(ZonedClock::new(tz)))
        }
        None => Ok(CliClock::System(SystemClock)),
    }
}

fn build_config(cli: &Cli) -> Result<PickerConfig> {
    let mut config = match &cli.config {
        Some(path) => PickerConfig::from_json_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => PickerConfig::default(),
    };

    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if let Some(max) = cli.max_range {
        config.max_date_range = max;
    }
    if let Some(days) = &cli.exclude_days {
        config.exclude_days = ExcludedWeekdays::parse(days);
    }
    if cli.disable_past {
        config.disable_past_dates = true;
    }
    if let Some(pattern) = &cli.date_format {
        config.date_format = DateFormat::new(pattern.as_str())?;
    }

    if config.mode == Mode::Basic
        && (config.disable_past_dates || cli.max_range.is_some() || cli.exclude_days.is_some())
    {
        warn!("advanced options have no effect in basic mode");
    }
    debug!(?config, "resolved picker config");
    Ok(config)
}

const CELL_WIDTH: usize = 4;

/// Render one calendar cell. Cells outside `month` are blank.
fn render_cell<C: Clock>(picker: &DateRangePicker<C>, month: NaiveDate, day: NaiveDate) -> String {
    if day.month() != month.month() || day.year() != month.year() {
        return " ".repeat(CELL_WIDTH);
    }
    let d = day.day();
    if picker.is_selected(day) {
        format!("[{d:>2}]")
    } else if picker.is_in_range(day) {
        format!("({d:>2})")
    } else if picker.is_disabled(day) {
        format!(" {d:>2}*")
    } else {
        format!(" {d:>2} ")
    }
}

fn month_lines<C: Clock>(
    picker: &DateRangePicker<C>,
    month: NaiveDate,
    days: &[NaiveDate],
) -> Vec<String> {
    let width = CELL_WIDTH * 7;
    let title = month.format("%B %Y").to_string();
    let mut lines = vec![
        format!("{title:^width$}"),
        DAY_NAMES.iter().map(|n| format!("{n:>3} ")).collect(),
    ];
    for week in days.chunks(7) {
        let row: String = week
            .iter()
            .map(|d| render_cell(picker, month, *d))
            .collect();
        lines.push(format!("{row:<width$}"));
    }
    lines
}

fn render_view<C: Clock>(picker: &DateRangePicker<C>) -> String {
    let left = month_lines(picker, picker.left_month(), picker.left_days());
    let right = month_lines(picker, picker.right_month(), picker.right_days());
    let blank = " ".repeat(CELL_WIDTH * 7);
    let rows = left.len().max(right.len());

    let mut out = String::new();
    for i in 0..rows {
        let l = left.get(i).unwrap_or(&blank);
        let r = right.get(i).unwrap_or(&blank);
        out.push_str(format!("{l}   {r}").trim_end());
        out.push('\n');
    }
    out
}

fn cmd_grid<C: Clock>(
    picker: &mut DateRangePicker<C>,
    month: Option<&str>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    hover: Option<NaiveDate>,
) -> Result<()> {
    if let Some(month) = month {
        picker.show_month(calendar::parse_month(month)?);
    }
    for day in start.into_iter().chain(end) {
        if !picker.select_date(day) {
            warn!("{day} is disabled: {}", disabled_text(picker, day));
        }
    }
    if let Some(day) = hover {
        picker.on_date_hover(day);
    }

    print!("{}", render_view(picker));
    println!();
    println!("{}", picker.display_date_range());
    println!("[dd] selected  (dd) in range  dd* disabled");
    Ok(())
}

fn disabled_text<C: Clock>(picker: &DateRangePicker<C>, day: NaiveDate) -> String {
    match picker.disabled_reason(day) {
        Some(reason) => reason.to_string(),
        None => "selectable".to_string(),
    }
}

fn cmd_check<C: Clock>(
    picker: &mut DateRangePicker<C>,
    dates: &[NaiveDate],
    start: Option<NaiveDate>,
) -> Result<()> {
    if let Some(start) = start {
        if !picker.select_date(start) {
            anyhow::bail!("start {start} is disabled: {}", disabled_text(picker, start));
        }
    }
    for day in dates {
        match picker.disabled_reason(*day) {
            Some(reason) => println!("{day} ({}): disabled, {reason}", day.weekday()),
            None => println!("{day} ({}): selectable", day.weekday()),
        }
    }
    Ok(())
}

fn cmd_select<C: Clock>(
    picker: &mut DateRangePicker<C>,
    clicks: &[NaiveDate],
    hover: Option<NaiveDate>,
    apply: bool,
) -> Result<()> {
    picker.on_value_change(|value| info!("value pushed to host: {value}"));
    picker.on_input_focus();

    for day in clicks {
        if picker.select_date(*day) {
            info!("clicked {day}");
        } else {
            println!("ignored {day}: {}", disabled_text(picker, *day));
        }
    }
    if let Some(day) = hover {
        picker.on_date_hover(day);
    }

    println!("{}", picker.display_date_range());
    if let Some(days) = picker.range_days() {
        println!("{days} day(s)");
    }

    if apply {
        match picker.apply_date_range() {
            Some(value) => println!("value: {value}"),
            None => anyhow::bail!("cannot apply: range has no end date"),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = build_config(&cli)?;
    let clock = create_clock(cli.now, cli.tz.as_deref())?;
    let mut picker = DateRangePicker::new(config, clock);

    match &cli.command {
        Commands::Grid {
            month,
            start,
            end,
            hover,
        } => cmd_grid(&mut picker, month.as_deref(), *start, *end, *hover)?,
        Commands::Check { dates, start } => cmd_check(&mut picker, dates, *start)?,
        Commands::Select {
            click,
            hover,
            apply,
        } => cmd_select(&mut picker, click, *hover, *apply)?,
    }

    Ok(())
}
