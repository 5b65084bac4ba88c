use sqlrpn::{Dialect, QuoteStyle};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    Root,
    Where,
    Insert,
    Update,
    Select,
    Order,
    Init,
}

#[derive(Debug, Clone)]
pub enum Command {
    Help(HelpTopic),
    Build(BuildArgs),
    Init(InitArgs),
}

/// Which builder a `sqlrpn <kind>` invocation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildKind {
    Where,
    Insert,
    Update,
    Select,
    Order,
}

impl BuildKind {
    fn help_topic(self) -> HelpTopic {
        match self {
            BuildKind::Where => HelpTopic::Where,
            BuildKind::Insert => HelpTopic::Insert,
            BuildKind::Update => HelpTopic::Update,
            BuildKind::Select => HelpTopic::Select,
            BuildKind::Order => HelpTopic::Order,
        }
    }

    fn needs_table(self) -> bool {
        matches!(self, BuildKind::Insert | BuildKind::Update)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildKind::Where => "where",
            BuildKind::Insert => "insert",
            BuildKind::Update => "update",
            BuildKind::Select => "select",
            BuildKind::Order => "order",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct BuildArgs {
    pub kind: BuildKind,
    /// Explicit `--config`; `None` means use `sqlrpn.toml` if it exists.
    pub config: Option<PathBuf>,
    pub dialect: Option<Dialect>,
    pub quote_style: Option<QuoteStyle>,
    pub format: OutputFormat,
    pub table: Option<String>,
    pub input: Input,
}

#[derive(Debug, Clone)]
pub struct InitArgs {
    pub config: PathBuf,
}

pub fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let mut it = args.iter().skip(1);
    let Some(first) = it.next() else {
        return Ok(Command::Help(HelpTopic::Root));
    };

    let kind = match first.as_str() {
        "-h" | "--help" => return Ok(Command::Help(HelpTopic::Root)),
        "init" => return parse_init(it.map(|s| s.as_str())),
        "where" => BuildKind::Where,
        "insert" => BuildKind::Insert,
        "update" => BuildKind::Update,
        "select" => BuildKind::Select,
        "order" => BuildKind::Order,
        _ => anyhow::bail!("unknown command: {first}"),
    };
    parse_build(kind, it.map(|s| s.as_str()))
}

fn parse_build<'a>(kind: BuildKind, mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut config: Option<PathBuf> = None;
    let mut dialect: Option<Dialect> = None;
    let mut quote_style: Option<QuoteStyle> = None;
    let mut format = OutputFormat::default();
    let mut table: Option<String> = None;
    let mut input: Option<Input> = None;

    while let Some(token) = it.next() {
        let (flag, inline) = match token.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag, Some(value)),
            _ => (token, None),
        };
        let mut value = |name: &str| -> anyhow::Result<String> {
            match inline {
                Some(v) => Ok(v.to_string()),
                None => it
                    .next()
                    .map(str::to_string)
                    .ok_or_else(|| anyhow::anyhow!("{name} requires a value")),
            }
        };

        match flag {
            "-h" | "--help" => return Ok(Command::Help(kind.help_topic())),
            "--config" => config = Some(PathBuf::from(value("--config")?)),
            "--dialect" => dialect = Some(value("--dialect")?.parse()?),
            "--quote-style" => quote_style = Some(value("--quote-style")?.parse()?),
            "--format" => format = parse_format(&value("--format")?)?,
            "--table" => table = Some(value("--table")?),
            "-" => set_input(&mut input, Input::Stdin)?,
            _ if flag.starts_with('-') => anyhow::bail!("unknown option: {token}"),
            _ => set_input(&mut input, Input::File(PathBuf::from(token)))?,
        }
    }

    match (&table, kind.needs_table()) {
        (None, true) => anyhow::bail!("{} requires --table <NAME>", kind.as_str()),
        (Some(_), false) => anyhow::bail!("--table is not valid for {}", kind.as_str()),
        _ => {}
    }

    Ok(Command::Build(BuildArgs {
        kind,
        config,
        dialect,
        quote_style,
        format,
        table,
        input: input.unwrap_or(Input::Stdin),
    }))
}

fn parse_init<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut config = PathBuf::from(crate::config::DEFAULT_CONFIG);

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => return Ok(Command::Help(HelpTopic::Init)),
            "--config" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--config requires a value");
                };
                config = PathBuf::from(v);
            }
            _ if token.starts_with("--config=") => {
                config = PathBuf::from(token.trim_start_matches("--config="));
            }
            other => anyhow::bail!("unexpected argument: {other}"),
        }
    }

    Ok(Command::Init(InitArgs { config }))
}

fn parse_format(s: &str) -> anyhow::Result<OutputFormat> {
    match s {
        "json" => Ok(OutputFormat::Json),
        "text" => Ok(OutputFormat::Text),
        other => anyhow::bail!("unknown format: {other} (expected json or text)"),
    }
}

fn set_input(slot: &mut Option<Input>, input: Input) -> anyhow::Result<()> {
    if slot.is_some() {
        anyhow::bail!("only one input may be given");
    }
    *slot = Some(input);
    Ok(())
}

pub fn print_help(topic: HelpTopic) {
    match topic {
        HelpTopic::Root => {
            println!(
                "\
sqlrpn - build parameterized SQL from JSON

USAGE:
  sqlrpn <COMMAND> [OPTIONS] [INPUT]

COMMANDS:
  where         WHERE clause from an expression tree
  insert        INSERT statement from [[columns...], [row]...]
  update        UPDATE statement from {{column: value}}
  select        SELECT list from [columns...]
  order         ORDER BY clause from {{column: direction}}
  init          Write a starter sqlrpn.toml

INPUT is a JSON file, or `-` / omitted for stdin.

Run `sqlrpn <command> --help` for more."
            );
        }
        HelpTopic::Where => {
            println!(
                "\
USAGE:
  sqlrpn where [OPTIONS] [INPUT]

INPUT:
  {{\"and\": [{{\"=\": {{\"a\": 1}}}}, {{\">\": {{\"b\": 2}}}}]}}

  Operators: < <= > >= = != like and or.
  An empty object yields an empty clause.

{}",
                BUILD_OPTIONS
            );
        }
        HelpTopic::Insert => {
            println!(
                "\
USAGE:
  sqlrpn insert --table <NAME> [OPTIONS] [INPUT]

INPUT:
  [[\"a\", \"b\"], [1, 2], [3, 4]]

  The first array names the columns; each following array is one row.

{}",
                BUILD_OPTIONS
            );
        }
        HelpTopic::Update => {
            println!(
                "\
USAGE:
  sqlrpn update --table <NAME> [OPTIONS] [INPUT]

INPUT:
  {{\"name\": \"ann\", \"age\": 31}}

{}",
                BUILD_OPTIONS
            );
        }
        HelpTopic::Select => {
            println!(
                "\
USAGE:
  sqlrpn select [OPTIONS] [INPUT]

INPUT:
  [\"id\", \"u.name\", \"*\"]

  Anything other than an array selects *.

{}",
                BUILD_OPTIONS
            );
        }
        HelpTopic::Order => {
            println!(
                "\
USAGE:
  sqlrpn order [OPTIONS] [INPUT]

INPUT:
  {{\"created_at\": \"desc\", \"id\": \"asc\"}}

{}",
                BUILD_OPTIONS
            );
        }
        HelpTopic::Init => {
            println!(
                "\
USAGE:
  sqlrpn init [OPTIONS]

OPTIONS:
  --config <FILE>       Path to write (default: sqlrpn.toml)
  -h, --help            Print help"
            );
        }
    }
}

const BUILD_OPTIONS: &str = "\
OPTIONS:
  --config <FILE>         Config file (default: sqlrpn.toml if present)
  --dialect <DIALECT>     sqlite | mysql (overrides builder.dialect)
  --quote-style <STYLE>   always | minimal (overrides builder.quote_style)
  --format <FORMAT>       json | text (default: json)
  --table <NAME>          Target table (insert and update only)
  -h, --help              Print help";
