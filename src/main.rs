use argdialog::types::{organize, to_command_line, Rgb};
use argdialog::{run_dialog, AppContext, ArgumentDescriptor, ArgumentSet, ValueKind};
use clap::Parser;
use log::{error, info, warn};

/// argdialog - fill in command-line arguments through a generated GTK dialog
#[derive(Parser, Debug, Clone)]
#[command(name = "argdialog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Window title (defaults to the application name)
    #[arg(short = 't', long = "title", value_name = "TITLE", default_value = "")]
    title: String,

    /// Put every argument in the main section
    #[arg(long = "flat")]
    flat: bool,

    /// Start from the declared defaults instead of the last accepted values
    #[arg(long = "no-restore")]
    no_restore: bool,

    /// Also print the accepted values as command-line arguments
    #[arg(long = "print-args")]
    print_args: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

/// Sample arguments covering every editor type
fn demo_arguments(flat: bool) -> ArgumentSet {
    let set = ArgumentSet::new(Some("Main settings"))
        .argument(
            ArgumentDescriptor::new("verbose", ValueKind::Bool).with_help("Print more output"),
        )
        .argument(
            ArgumentDescriptor::new(
                "iterations",
                ValueKind::Integer {
                    min: Some(1),
                    max: Some(100),
                },
            )
            .with_default(10),
        )
        .argument(
            ArgumentDescriptor::new(
                "scale",
                ValueKind::Float {
                    min: Some(0.0),
                    max: Some(4.0),
                    step: Some(0.25),
                },
            )
            .with_default(1.0),
        )
        .argument(
            ArgumentDescriptor::positional("output", ValueKind::Path)
                .with_help("Where to write results"),
        )
        .argument(
            ArgumentDescriptor::new("accent", ValueKind::Rgb)
                .with_default(Rgb(255, 136, 0).to_value()),
        )
        .argument(ArgumentDescriptor::new("overlay", ValueKind::Rgba))
        .argument(
            ArgumentDescriptor::new("port", ValueKind::Unrecognized("Serial".to_string()))
                .with_default("/dev/ttyUSB0"),
        );

    let set = if flat {
        set
    } else {
        set.group("Strings", Some("Text input"))
    };

    set.argument(
        ArgumentDescriptor::new("freetext", ValueKind::Text)
            .with_default("Enter freetext here")
            .with_help("Type anything you want here"),
    )
    .argument(
        ArgumentDescriptor::new("pickText", ValueKind::Text)
            .with_choices(["Bee mine", "I choo-choo-choose you"])
            .with_default("I choo-choo-choose you")
            .with_help("Choose one of these"),
    )
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting argdialog v{}", env!("CARGO_PKG_VERSION"));

    let ctx = AppContext::new("argdialog-demo")
        .with_title(cli.title.clone())
        .with_persist_values(!cli.no_restore);
    let arguments = demo_arguments(cli.flat);

    let values = match run_dialog(&ctx, &arguments) {
        Ok(Some(values)) => values,
        Ok(None) => {
            warn!("Dialog cancelled");
            std::process::exit(1);
        }
        Err(e) => {
            error!("Failed to run dialog: {:#}", e);
            std::process::exit(2);
        }
    };

    match serde_json::to_string_pretty(&values) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Failed to serialize values: {}", e),
    }

    if cli.print_args {
        let sections = organize(&arguments, &ctx.orphan);
        let args = to_command_line(&sections, &values, &ctx.orphan.display_name);
        println!("{}", args.join(" "));
    }
}
