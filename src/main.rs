// SPDX-License-Identifier: MPL-2.0
use iced_playback_overlay::app::{self, Flags};
use iced_playback_overlay::domain::video::ResizeMode;
use std::path::PathBuf;

const USAGE: &str = "\
Usage: iced_playback_overlay [OPTIONS] [SOURCE]

Arguments:
  [SOURCE]                 Media source to play (sources starting with \"error:\" fail to load)

Options:
  --loop                   Restart playback when the media ends
  --fullscreen             Start in fullscreen
  --resize-mode <MODE>     contain, cover, stretch or none
  --duration <SECS>        Length of the simulated media
  --config <PATH>          Settings file to use instead of the default one
  -h, --help               Print this help";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        loop_enabled: args.contains("--loop"),
        full_screen: args.contains("--fullscreen"),
        resize_mode: args.opt_value_from_str::<_, ResizeMode>("--resize-mode")?,
        duration_secs: args.opt_value_from_str::<_, f64>("--duration")?,
        config_path: args.opt_value_from_str::<_, PathBuf>("--config")?,
        source: args.opt_free_from_str::<String>()?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {remaining:?}"),
        });
    }
    Ok(flags)
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    match parse_flags(args) {
        Ok(flags) => app::run(flags),
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    }
}
