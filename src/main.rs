// SPDX-License-Identifier: MPL-2.0
use hackfolio::app::{self, Flags};
use hackfolio::gallery::GalleryMode;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
hackfolio

USAGE:
  hackfolio [OPTIONS]

OPTIONS:
  --lang <id>          Interface language (e.g. en-US, fr)
  --catalog <file>     Portfolio dataset replacing the bundled one
  --config-dir <dir>   Directory holding settings.toml
  --data-dir <dir>     Directory receiving diagnostics exports
  --mode <mode>        Initial gallery layout: grid, timeline, grouped, fun
  -h, --help           Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        catalog: args.opt_value_from_os_str("--catalog", |s| {
            Ok::<PathBuf, std::convert::Infallible>(PathBuf::from(s))
        })?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        mode: args.opt_value_from_str::<_, GalleryMode>("--mode")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
