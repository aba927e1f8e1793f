//! Snapshot tests for emitted fragments.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::{fs, path::Path, str::FromStr};

use tempfile::TempDir;
use tidegen_codegen::{
    CompletionPipeline, Pipeline, PluginPipeline, ScriptBundle, group_keywords, hint_dispatch,
    keyword_dispatch, plugin_source,
};
use tidegen_core::Module;
use tidegen_manifest::{CompletionDocument, ManifestFile};

const COMPLETIONS: &str = r#"{
  "KeyWord": ["while", "var", "if", "import", "is", "fn", "for", "return", "app"],
  "hints": {
    "command": {
      "Tide": " <Name> = <Value>",
      "if": " (Expression) {Statement}",
      "while": " (Expression) {Statement}",
      "fn": " Name(Args) {Statement}"
    },
    "font": [35, 0]
  }
}"#;

fn write_module(root: &Path, name: &str, source: &str) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{}.vt", name)), source).unwrap();
}

/// Lay out a minimal Tide source tree with default manifest paths.
fn tide_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let extension = temp.path().join("Extension");
    write_module(
        &extension,
        "Regex",
        "class Regex {\n\tnew(pattern) {\n\t\tthis.p = pattern\n\t}\n}\n",
    );
    write_module(
        &extension,
        "Test",
        "fn assert(c) {\n\tif (!c) { print(\"failed\") }\n}\n",
    );
    let script_dir = temp.path().join("Util/Script");
    fs::create_dir_all(&script_dir).unwrap();
    fs::write(script_dir.join("autoCompletion.json"), COMPLETIONS).unwrap();
    temp
}

fn run_all(base: &Path) {
    let file = ManifestFile::discover(base).unwrap();
    let manifest = file.manifest();

    let source = plugin_source(&manifest.plugins, file.base_dir());
    PluginPipeline::from_source(&manifest.plugins, &source)
        .unwrap()
        .generate(file.base_dir())
        .unwrap();

    let document =
        CompletionDocument::open(file.resolve(&manifest.completions.source)).unwrap();
    CompletionPipeline::new(&manifest.completions, &document)
        .unwrap()
        .generate(file.base_dir())
        .unwrap();
}

#[test]
fn test_keyword_dispatch_snapshot() {
    let document = CompletionDocument::from_str(COMPLETIONS).unwrap();
    let groups = group_keywords(document.keywords.as_slice()).unwrap();
    let code = keyword_dispatch(&groups).unwrap().render();

    insta::assert_snapshot!(code, @r#"
    if (buf[0] == 'a') {
        linenoiseAddCompletion(lc, "app");
    } else if (buf[0] == 'f') {
        linenoiseAddCompletion(lc, "fn");
        linenoiseAddCompletion(lc, "for");
    } else if (buf[0] == 'i') {
        linenoiseAddCompletion(lc, "if");
        linenoiseAddCompletion(lc, "import");
        linenoiseAddCompletion(lc, "is");
    } else if (buf[0] == 'r') {
        linenoiseAddCompletion(lc, "return");
    } else if (buf[0] == 'v') {
        linenoiseAddCompletion(lc, "var");
    } else if (buf[0] == 'w') {
        linenoiseAddCompletion(lc, "while");
    }
    "#);
}

#[test]
fn test_hint_dispatch_snapshot() {
    let document = CompletionDocument::from_str(COMPLETIONS).unwrap();
    let code = hint_dispatch(&document.hint_entries()).unwrap().render();

    insta::assert_snapshot!(code, @r#"
    if (!strcasecmp(buf, "Tide")) {
        *color = 35;
        *bold = 0;
        return " <Name> = <Value>";
    } else if (!strcasecmp(buf, "if")) {
        *color = 35;
        *bold = 0;
        return " (Expression) {Statement}";
    } else if (!strcasecmp(buf, "while")) {
        *color = 35;
        *bold = 0;
        return " (Expression) {Statement}";
    } else if (!strcasecmp(buf, "fn")) {
        *color = 35;
        *bold = 0;
        return " Name(Args) {Statement}";
    }
    "#);
}

#[test]
fn test_script_bundle_snapshot() {
    let modules = vec![Module::from_source(
        "Math",
        "Extension/Math/Math.vt",
        "class Math {\n\tstatic pi() { return 3 }\n}\nprint(\"hi\") // trailing\n",
    )];

    insta::assert_snapshot!(ScriptBundle::new(&modules).render(), @r#"
    "class Math {\n"
    "\tstatic pi() { return 3 }\n"
    "}\n"
    "print(\"hi\""
    ;
    "#);
}

#[test]
fn test_full_run_outputs() {
    let tree = tide_tree();
    run_all(tree.path());

    let read = |rel: &str| fs::read_to_string(tree.path().join(rel)).unwrap();

    assert_eq!(
        read("Extension/exten.script.inc"),
        concat!(
            "\"class Regex {\\n\"\n",
            "\"\\tnew(pattern) {\\n\"\n",
            "\"\\t\\tthis.p = pattern\\n\"\n",
            "\"\\t}\\n\"\n",
            "\"}\\n\"\n",
            "\"fn assert(c) {\\n\"\n",
            "\"\\tif (!c) { print(\\\"failed\\\"\"\n",
            "\"}\\n\"\n",
            ";",
        )
    );
    assert_eq!(
        read("Extension/exten.Bind.inc"),
        "\t// Regex\n\textenRegexBind(vm, coreModule);\n\t// Test\n\textenTestBind(vm, coreModule);\n"
    );
    assert_eq!(
        read("Extension/extenHeader.h"),
        "#include \"Regex/Regex.h\"\n#include \"Test/Test.h\"\n"
    );
    assert!(read("Cli/AutoCom_KeyWord.inc").starts_with("if (buf[0] == 'a') {\n"));
    assert!(read("Cli/AutoCom_Hint.inc").starts_with("if (!strcasecmp(buf, \"Tide\")) {\n"));
}

#[test]
fn test_full_run_is_idempotent() {
    let tree = tide_tree();
    let outputs = [
        "Extension/exten.script.inc",
        "Extension/exten.Bind.inc",
        "Extension/extenHeader.h",
        "Cli/AutoCom_KeyWord.inc",
        "Cli/AutoCom_Hint.inc",
    ];
    let snapshot = || -> Vec<Vec<u8>> {
        outputs
            .iter()
            .map(|rel| fs::read(tree.path().join(rel)).unwrap())
            .collect()
    };

    run_all(tree.path());
    let first = snapshot();
    run_all(tree.path());
    let second = snapshot();

    assert_eq!(first, second);
}

#[test]
fn test_manifest_paths_are_honored() {
    let temp = TempDir::new().unwrap();
    write_module(&temp.path().join("plugins"), "Led", "on()\n");
    fs::write(
        temp.path().join("tidegen.toml"),
        r#"
        [plugins]
        root = "plugins"
        reserved = ["generated"]
        bundle = "plugins/generated/script.inc"
        bindings = "plugins/generated/bind.inc"
        headers = "plugins/generated/header.h"

        [plugins.binding]
        prefix = "ext_"
        context = "machine"
        "#,
    )
    .unwrap();

    let file = ManifestFile::discover(temp.path()).unwrap();
    let manifest = file.manifest();
    let source = plugin_source(&manifest.plugins, file.base_dir());

    for _ in 0..2 {
        PluginPipeline::from_source(&manifest.plugins, &source)
            .unwrap()
            .generate(file.base_dir())
            .unwrap();
    }

    assert_eq!(
        fs::read_to_string(temp.path().join("plugins/generated/bind.inc")).unwrap(),
        "\t// Led\n\text_LedBind(machine, coreModule);\n"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("plugins/generated/script.inc")).unwrap(),
        "\"on()\\n\"\n;"
    );
}
