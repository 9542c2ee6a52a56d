#[cfg(test)]
mod tests {
    use clap::Parser;
    use log::LevelFilter;
    use plancut::config::{NestingConfig, OffsetPolicy};
    use plancut::packer::Heuristic;
    use plancut_cli::io;
    use plancut_cli::io::cli::Cli;
    use std::fs;
    use std::path::PathBuf;
    use test_case::test_case;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("plancut_cli_{}_{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test_case("warn", LevelFilter::Warn; "warn")]
    #[test_case("debug", LevelFilter::Debug; "debug")]
    #[test_case("off", LevelFilter::Off; "off")]
    fn arguments_are_parsed(level: &str, expected: LevelFilter) {
        let cli = Cli::try_parse_from([
            "plancut",
            "--input-file",
            "job.json",
            "--solution-folder",
            "out",
            "--log-level",
            level,
        ])
        .unwrap();
        assert_eq!(cli.input_file, PathBuf::from("job.json"));
        assert_eq!(cli.solution_folder, PathBuf::from("out"));
        assert_eq!(cli.config_file, None);
        assert_eq!(cli.log_level, expected);
    }

    #[test]
    fn input_file_is_required() {
        assert!(Cli::try_parse_from(["plancut", "-s", "out"]).is_err());
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let path = temp_file(
            "config.json",
            r#"{ "density": 2.7, "search": { "fast_heuristic": "max_rects_bssf" } }"#,
        );
        let config = io::read_config(&path).unwrap();
        assert_eq!(config.density, 2.7);
        assert_eq!(config.search.fast_heuristic, Heuristic::MaxRectsBssf);
        assert_eq!(config.search.full_set, NestingConfig::default().search.full_set);
        assert_eq!(config.max_sheets, 200);
        assert_eq!(config.offset_table.lookup(20.0).offset, 12.0);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn default_config_survives_serialization() {
        let config = NestingConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: NestingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn job_file_is_read() {
        let path = temp_file(
            "job.json",
            r#"{
                "name": "brackets",
                "sheet": { "width": 2500, "height": 1250 },
                "offset_policy": { "type": "thickness_table" },
                "parts": [
                    { "name": "b1", "shape": { "type": "rectangle", "width": 300, "height": 200 }, "quantity": 12 }
                ]
            }"#,
        );
        let job = io::read_job(&path).unwrap();
        assert_eq!(job.name, "brackets");
        assert_eq!(job.sheet.margin, 0.0);
        assert_eq!(job.offset_policy, OffsetPolicy::ThicknessTable);
        assert_eq!(job.default_thickness, 0.0);
        assert_eq!(job.parts[0].quantity, 12);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn malformed_job_file_is_an_error() {
        let path = temp_file("broken.json", r#"{ "name": "broken", "parts": [] }"#);
        assert!(io::read_job(&path).is_err());
        fs::remove_file(path).unwrap();
        assert!(io::read_job(&PathBuf::from("/nonexistent/job.json")).is_err());
    }
}
