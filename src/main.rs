// SPDX-License-Identifier: MPL-2.0
use iced_snackbar::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("iced_snackbar: {err}");
            eprintln!("usage: iced_snackbar [--config <path>] [--safe-area-top <px>]");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        config_path: args.opt_value_from_str("--config")?,
        safe_area_top: args.opt_value_from_str("--safe-area-top")?,
    })
}
