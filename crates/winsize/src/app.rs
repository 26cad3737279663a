use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("winsize")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Pick an open application window and resize it")
        .long_about(
            "winsize lists the open application windows, lets you filter and pick one, \
             asks for a width and height, then resizes the window and brings it to the front. \
             Requires accessibility and screen capture permissions on macOS.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "winsize");
    }

    #[test]
    fn test_cli_no_arguments() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["winsize"]);
        assert!(matches.is_ok());
        assert!(!matches.unwrap().get_flag("verbose"));
    }

    #[test]
    fn test_cli_verbose_flag() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["winsize", "-v"]).unwrap();
        assert!(matches.get_flag("verbose"));

        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["winsize", "--verbose"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_rejects_positional_arguments() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["winsize", "Terminal"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_verify() {
        build_cli().debug_assert();
    }
}
