// SPDX-License-Identifier: MPL-2.0
use info_bubble::app::{self, paths, Flags, Screen};
use info_bubble::logging;
use std::path::PathBuf;

const HELP: &str = "\
Info bubble demo

USAGE:
  info_bubble [OPTIONS]

OPTIONS:
  --config-dir <DIR>   Directory holding settings.toml
                       (overrides INFO_BUBBLE_CONFIG_DIR)
  --markup <FILE>      Markup document replacing the built-in actions
  --screen <NAME>      Startup screen: programmatic or markup
  --log <FILTER>       Tracing filter (overrides INFO_BUBBLE_LOG)
  -h, --help           Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let log_filter: Option<String> = args.opt_value_from_str("--log").unwrap_or_else(|err| {
        eprintln!("--log: {err}");
        None
    });
    logging::init(log_filter.as_deref());

    let flags = Flags {
        config_dir: opt_value(&mut args, "--config-dir"),
        markup_path: opt_value::<PathBuf>(&mut args, "--markup"),
        screen: opt_value::<Screen>(&mut args, "--screen"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

/// Reads an optional flag value, logging and ignoring malformed input.
fn opt_value<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(flag = key, %err, "ignoring invalid flag value");
        None
    })
}
