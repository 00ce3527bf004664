use clap::Parser;
use langdev::cli::commands::{list::ListCommand, show::ShowCommand, CommandHandler, OutputFormat};
use langdev::cli::{Cli, Commands};
use langdev::LangdevError;

#[test]
fn no_subcommand_means_browse() {
    let cli = Cli::try_parse_from(["langdev"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn browse_accepts_an_os_flag() {
    let cli = Cli::try_parse_from(["langdev", "browse", "--os", "linux"]).unwrap();
    match cli.command {
        Some(Commands::Browse { os }) => assert_eq!(os, "linux"),
        _ => panic!("expected the browse command"),
    }
}

#[test]
fn show_defaults_to_mac_and_text() {
    let cli = Cli::try_parse_from(["langdev", "show", "rust"]).unwrap();
    match cli.command {
        Some(Commands::Show { id, os, format }) => {
            assert_eq!(id, "rust");
            assert_eq!(os, "mac");
            assert_eq!(format, "text");
        }
        _ => panic!("expected the show command"),
    }
}

#[test]
fn output_format_parsing() {
    assert_eq!(OutputFormat::parse("text").unwrap(), OutputFormat::Text);
    assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
    assert!(matches!(
        OutputFormat::parse("yaml"),
        Err(LangdevError::UnknownFormat(_))
    ));
}

#[test]
fn show_unknown_entry_errors() {
    let command = ShowCommand::new("cobol".into(), "mac".into(), "text".into());
    match command.execute() {
        Err(LangdevError::EntryNotFound(id)) => assert_eq!(id, "cobol"),
        other => panic!("expected EntryNotFound, got {other:?}"),
    }
}

#[test]
fn show_unknown_os_errors() {
    let command = ShowCommand::new("rust".into(), "amiga".into(), "text".into());
    assert!(matches!(
        command.execute(),
        Err(LangdevError::UnknownOs(_))
    ));
}

#[test]
fn list_runs_in_both_formats() {
    assert!(ListCommand::new("text".into()).execute().is_ok());
    assert!(ListCommand::new("json".into()).execute().is_ok());
    assert_eq!(ListCommand::new("json".into()).name(), "list");
}
