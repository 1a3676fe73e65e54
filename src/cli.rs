use clap::{Arg, Command, ArgAction};
use log::debug;

pub fn build_cli() -> Command {
    debug!("⚙️ Building CLI interface...");
    Command::new("camcommission")
        .version("0.1.0")
        .about("Commissions scanning cameras by pushing their serial numbers, type and gain to the local config API.")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom configuration file")
                .action(ArgAction::Set)
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("camera-type")
                .short('t')
                .long("camera-type")
                .value_name("TYPE")
                .help("Camera type to apply (TYPE_A or TYPE_B); prompts when omitted")
                .value_parser(["TYPE_A", "TYPE_B"])
                .action(ArgAction::Set)
        )
        .arg(
            Arg::new("serials")
                .short('s')
                .long("serials")
                .value_name("FILE")
                .help("JSON file mapping camera IDs to serial numbers; prompts when omitted")
                .action(ArgAction::Set)
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .value_name("URL")
                .help("Overrides the camera config API endpoint")
                .action(ArgAction::Set)
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_is_valid() {
        let matches = build_cli().try_get_matches_from(["camcommission"]).unwrap();
        assert!(!matches.get_flag("debug"));
        assert!(matches.get_one::<String>("camera-type").is_none());
    }

    #[test]
    fn rejects_unknown_camera_type() {
        assert!(build_cli().try_get_matches_from(["camcommission", "-t", "TYPE_C"]).is_err());
    }

    #[test]
    fn accepts_non_interactive_flags() {
        let matches = build_cli()
            .try_get_matches_from(["camcommission", "-t", "TYPE_B", "-s", "serials.json", "--api-url", "http://robot:8888/api"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("camera-type").map(String::as_str), Some("TYPE_B"));
        assert_eq!(matches.get_one::<String>("serials").map(String::as_str), Some("serials.json"));
    }
}
