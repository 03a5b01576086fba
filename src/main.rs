// SPDX-License-Identifier: MPL-2.0
use artefact::app::{self, Flags};
use artefact::config::paths;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
artefact - gallery of original paintings

USAGE:
    artefact [OPTIONS]

OPTIONS:
    --lang <LOCALE>        Interface language (e.g. ru, en-US)
    --config-dir <PATH>    Directory holding settings.toml
    -h, --help             Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "artefact=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring --lang");
        None
    });
    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring --config-dir");
            None
        });
    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "unused command line arguments");
    }

    paths::init_cli_override(config_dir);
    app::run(Flags { lang })
}
