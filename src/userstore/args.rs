use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use userstore::api::Arguments;

/// Long flags that may also be spelled with a single dash (`-fileName x`).
const LONG_FLAGS: &[&str] = &[
    "operation", "fileName", "item", "id", "pretty", "verbose", "help", "version",
];

#[derive(Parser, Debug)]
#[command(name = "userstore", version, long_version = env!("USERSTORE_LONG_VERSION"))]
#[command(about = "Manage user records kept in a JSON file", long_about = None)]
pub struct Cli {
    /// Operation to perform: add, list, findById or remove
    #[arg(long = "operation", value_name = "OPERATION")]
    pub operation: Option<String>,

    /// JSON file holding the records (created if missing, never truncated on open)
    #[arg(long = "fileName", value_name = "PATH")]
    pub file_name: Option<PathBuf>,

    /// Record to add, e.g. '{"id":"1","email":"a@x.com","age":30}'
    #[arg(long, value_name = "JSON", allow_hyphen_values = true)]
    pub item: Option<String>,

    /// Id of the record to find or remove
    #[arg(long, value_name = "ID", allow_hyphen_values = true)]
    pub id: Option<String>,

    /// Write the collection indented
    #[arg(long)]
    pub pretty: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_arguments(self) -> Arguments {
        Arguments {
            operation: self.operation,
            file_name: self.file_name,
            item: self.item,
            id: self.id,
            pretty: self.pretty,
        }
    }
}

/// Rewrite `-name` and `-name=value` into `--name` / `--name=value` for the
/// flags in [`LONG_FLAGS`]. Everything after a bare `--` is left alone.
pub fn normalize_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut normalized = Vec::new();
    let mut passthrough = false;

    for (position, arg) in args.into_iter().enumerate() {
        if position == 0 || passthrough {
            normalized.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            normalized.push(arg);
            continue;
        }
        let rewritten = arg.to_str().and_then(single_dash_long_flag);
        normalized.push(rewritten.unwrap_or(arg));
    }

    normalized
}

fn single_dash_long_flag(arg: &str) -> Option<OsString> {
    let rest = arg.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS
        .contains(&name)
        .then(|| OsString::from(format!("-{}", arg)))
}
