#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command, OutputFormat};
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolve_defaults() {
        let cli = Cli::try_parse_from(["shellpack", "resolve"]).unwrap();
        let Command::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.output.is_none());
        assert!(args.project.root.is_none());
        assert!(args.project.env.is_none());
        assert!(!args.project.strict_env);
    }

    #[test]
    fn test_resolve_with_options() {
        let cli = Cli::try_parse_from([
            "shellpack",
            "resolve",
            "--root",
            "app",
            "--env",
            "production",
            "--strict-env",
            "--format",
            "toml",
            "-o",
            "out.toml",
        ])
        .unwrap();
        let Command::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.project.root, Some(PathBuf::from("app")));
        assert_eq!(args.project.env.as_deref(), Some("production"));
        assert!(args.project.strict_env);
        assert_eq!(args.format, OutputFormat::Toml);
        assert_eq!(args.output, Some(PathBuf::from("out.toml")));
    }

    #[test]
    fn test_check_fs_flag() {
        let cli = Cli::try_parse_from(["shellpack", "check", "--fs"]).unwrap();
        let Command::Check(args) = cli.command else {
            panic!("expected check");
        };
        assert!(args.fs);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["shellpack", "check", "--verbose", "--no-color"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["shellpack", "-v", "-q", "resolve"]).is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["shellpack", "resolve", "--format", "yaml"]).is_err());
    }
}
