use std::{fs, path::PathBuf};

use tempfile::{tempdir, TempDir};

use anatomy_cli::{run, Args, CliError, Command, ExportArgs, TreeArgs};

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
        .to_string_lossy()
        .to_string()
}

/// Empty config file so a user-level config cannot leak into the tests.
fn empty_config(dir: &TempDir) -> String {
    let path = dir.path().join("config.toml");
    fs::write(&path, "").expect("Failed to write config");
    path.to_string_lossy().to_string()
}

fn export_args(input: String, format: &str) -> ExportArgs {
    ExportArgs {
        input,
        format: Some(format.to_string()),
        anatomy_view: None,
        output: None,
        out_dir: None,
        name: "Component".to_string(),
    }
}

fn tree_args(input: String, output: String) -> TreeArgs {
    TreeArgs {
        input,
        component: None,
        output: Some(output),
        name: "Component".to_string(),
    }
}

fn args(config: String, command: Command) -> Args {
    Args {
        command,
        config: Some(config),
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_export_every_format() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = empty_config(&temp_dir);

    let mut failed = Vec::new();
    for (format, extension) in [
        ("yaml", "yaml"),
        ("json", "json"),
        ("typescript", "ts"),
        ("jsdoc", "js"),
    ] {
        let output = temp_dir.path().join(format!("button.{extension}"));
        let mut export = export_args(fixture("button.json"), format);
        export.output = Some(output.to_string_lossy().to_string());

        match run(&args(config.clone(), Command::Export(export))) {
            Ok(()) => {
                let content = fs::read_to_string(&output).expect("Output file missing");
                assert!(content.ends_with('\n'), "{format} output lacks final newline");
                assert!(content.contains("Button"), "{format} output lacks component name");
            }
            Err(err) => failed.push((format, err)),
        }
    }

    if !failed.is_empty() {
        for (format, err) in &failed {
            eprintln!("  - {format}: {err}");
        }
        panic!("{} format(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_export_json_is_structural_dump() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = empty_config(&temp_dir);
    let output = temp_dir.path().join("library.json");

    let mut export = export_args(fixture("library.json"), "json");
    export.output = Some(output.to_string_lossy().to_string());
    run(&args(config, Command::Export(export))).expect("Export failed");

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let names: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(names, ["Checkbox", "Badge", "Badge/Dot"]);
    assert_eq!(value["Checkbox"]["props"]["checked"]["type"], "BOOLEAN");
    assert_eq!(value["Badge"]["anatomy"][1]["path"], "Pill > Count");
}

#[test]
fn e2e_export_tree_view_replaces_anatomy() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = empty_config(&temp_dir);
    let output = temp_dir.path().join("button.json");

    let mut export = export_args(fixture("button.json"), "json");
    export.anatomy_view = Some("tree".to_string());
    export.output = Some(output.to_string_lossy().to_string());
    run(&args(config, Command::Export(export))).expect("Export failed");

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(
        value["Button"]["anatomy"],
        "Frame\n  type: FRAME\n└─ Label (TEXT)"
    );
}

#[test]
fn e2e_config_file_sets_defaults() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "[export]\nformat = \"typescript\"\n").unwrap();
    let output = temp_dir.path().join("button.ts");

    let mut export = export_args(fixture("button.json"), "typescript");
    export.format = None;
    export.output = Some(output.to_string_lossy().to_string());
    run(&args(
        config.to_string_lossy().to_string(),
        Command::Export(export),
    ))
    .expect("Export failed");

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("export interface ButtonProps"));
}

#[test]
fn e2e_export_out_dir_writes_one_file_per_component() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = empty_config(&temp_dir);
    let out_dir = temp_dir.path().join("generated");

    let mut export = export_args(fixture("library.json"), "yaml");
    export.out_dir = Some(out_dir.to_string_lossy().to_string());
    run(&args(config, Command::Export(export))).expect("Export failed");

    let mut files: Vec<String> = fs::read_dir(&out_dir)
        .unwrap()
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect();
    files.sort();
    assert_eq!(files, ["Badge.yaml", "Badge_Dot.yaml", "Checkbox.yaml"]);

    let checkbox = fs::read_to_string(out_dir.join("Checkbox.yaml")).unwrap();
    assert!(checkbox.starts_with("Checkbox:\n"));
    assert!(!checkbox.contains("Badge"));
}

#[test]
fn e2e_tree_prints_every_component() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = empty_config(&temp_dir);
    let output = temp_dir.path().join("tree.txt");

    let tree = tree_args(fixture("library.json"), output.to_string_lossy().to_string());
    run(&args(config, Command::Tree(tree))).expect("Tree failed");

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("# Checkbox\n\n[Variant: Unchecked]\n\nBox\n  type: FRAME"));
    assert!(content.contains("[Variant: Checked]\n\nBox\n  type: FRAME\n└─ Mark (VECTOR)"));
    assert!(content.contains("# Badge\n\nPill\n  type: FRAME\n└─ Count (TEXT)"));
    assert!(content.ends_with("# Badge/Dot\n"));
}

#[test]
fn e2e_tree_single_component() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = empty_config(&temp_dir);
    let output = temp_dir.path().join("tree.txt");

    let mut tree = tree_args(fixture("library.json"), output.to_string_lossy().to_string());
    tree.component = Some("Badge".to_string());
    run(&args(config, Command::Tree(tree))).expect("Tree failed");

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Pill\n  type: FRAME\n└─ Count (TEXT)\n"
    );
}

#[test]
fn e2e_invalid_invocations() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = empty_config(&temp_dir);

    let export = export_args(fixture("button.json"), "xml");
    assert!(matches!(
        run(&args(config.clone(), Command::Export(export))),
        Err(CliError::Export(_))
    ));

    let missing = temp_dir.path().join("missing.json");
    let export = export_args(missing.to_string_lossy().to_string(), "yaml");
    assert!(matches!(
        run(&args(config.clone(), Command::Export(export))),
        Err(CliError::Read { .. })
    ));

    let mut tree = tree_args(fixture("library.json"), temp_dir.path().join("t.txt").to_string_lossy().to_string());
    tree.component = Some("Slider".to_string());
    assert!(matches!(
        run(&args(config.clone(), Command::Tree(tree))),
        Err(CliError::UnknownComponent(name)) if name == "Slider"
    ));

    let not_json = temp_dir.path().join("broken.json");
    fs::write(&not_json, "[1, 2]").unwrap();
    let export = export_args(not_json.to_string_lossy().to_string(), "yaml");
    assert!(matches!(
        run(&args(config, Command::Export(export))),
        Err(CliError::Model(_))
    ));
}
