use {
  arguments::Arguments,
  ascii_formatter::AsciiFormatter,
  clap::Parser,
  client::Client,
  course_details::CourseDetails,
  course_key::CourseKey,
  criterion::Criterion,
  crossterm::style::Stylize,
  details_request::DetailsRequest,
  details_response::DetailsResponse,
  error::Error,
  meeting_time::MeetingTime,
  query_config::QueryConfig,
  reqwest::{
    StatusCode,
    header::{CONTENT_TYPE, HeaderValue, USER_AGENT},
  },
  search_request::SearchRequest,
  search_response::SearchResponse,
  search_result::SearchResult,
  serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Unexpected},
  },
  serde_json::{
    Map, Value,
    ser::{Formatter, PrettyFormatter},
  },
  std::{
    backtrace::BacktraceStatus,
    io::{self, IsTerminal, Write},
    process,
    str::FromStr,
    time::Duration,
  },
  tracing::{debug, info},
  tracing_subscriber::EnvFilter,
  utils::{
    deserialize_optional_text, deserialize_string_or_number, strip_html,
    to_string_pretty_ascii,
  },
};

mod arguments;
mod ascii_formatter;
mod client;
mod course_details;
mod course_key;
mod criterion;
mod details_request;
mod details_response;
mod error;
mod meeting_time;
mod query_config;
mod search_request;
mod search_response;
mod search_result;
mod utils;

const DEFAULT_LOG_FILTER: &str = "warn";

const VERBOSE_LOG_FILTER: &str = "debug";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_tracing(verbose: bool) -> Result {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
    EnvFilter::new(if verbose {
      VERBOSE_LOG_FILTER
    } else {
      DEFAULT_LOG_FILTER
    })
  });

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_target(false)
    .try_init()
    .map_err(|error| anyhow::anyhow!(error))
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  initialize_tracing(arguments.verbose)?;

  let client = Client::new(arguments.into_config())?;

  client.run(&mut io::stdout().lock()).await
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
