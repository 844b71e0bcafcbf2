use super::*;

#[test]
fn parses_overlay_command() {
    let cli = Cli::try_parse_from([
        "healthbadge",
        "overlay",
        "--origin",
        "https://postmates.com",
        "--page",
        "page.html",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Overlay { ref origin, out: None, .. } if origin == "https://postmates.com"
    ));
}

#[test]
fn parses_overlay_output_path() {
    let cli = Cli::try_parse_from([
        "healthbadge",
        "overlay",
        "--origin",
        "https://www.trycaviar.com",
        "--page",
        "in.html",
        "--out",
        "out.html",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Overlay { out: Some(ref p), .. } if p == Path::new("out.html")
    ));
}

#[test]
fn overlay_requires_origin() {
    let result = Cli::try_parse_from(["healthbadge", "overlay", "--page", "page.html"]);
    assert!(result.is_err());
}

#[test]
fn parses_detect_command() {
    let cli = Cli::try_parse_from([
        "healthbadge",
        "detect",
        "--origin",
        "https://example.com",
        "--page",
        "page.html",
    ])
    .unwrap();
    assert!(matches!(cli.command, Commands::Detect { .. }));
}

#[test]
fn parses_lookup_command_with_apostrophe() {
    let cli = Cli::try_parse_from(["healthbadge", "lookup", "Joe's Diner"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Lookup { ref name } if name == "Joe's Diner"
    ));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["healthbadge"]).is_err());
}

fn invalid_config() -> Result<AppConfig, ConfigError> {
    Err(ConfigError::InvalidEnvVar {
        var: "HEALTHBADGE_INJECT_MAX_ATTEMPTS".to_string(),
        reason: "invalid digit found in string".to_string(),
    })
}

#[test]
fn help_is_shown_even_with_invalid_configuration() {
    let err = parse_then_load(["healthbadge", "--help"], invalid_config)
        .expect_err("help short-circuits startup");
    let usage = err
        .downcast_ref::<clap::Error>()
        .expect("help is reported by clap, not by config loading");
    assert_eq!(usage.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn configuration_errors_surface_after_a_valid_parse() {
    let err = parse_then_load(["healthbadge", "lookup", "Joe's Diner"], invalid_config)
        .expect_err("invalid configuration is an error");
    assert!(err.downcast_ref::<ConfigError>().is_some());
}
