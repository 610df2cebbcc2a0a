mod common;

use common::*;

#[test]
fn tree_prints_indented_listing() {
    let env = TestEnv::new();
    let tree = env.write("catalog.toml", TREE_TOML);

    let output = env.run(&["tree", "--tree", tree.to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Garden (garden)\n  Plant Pots (plant-pots)\n  Garden Tools (garden-tools)\nBooks (books)\n"
    );
}

#[test]
fn tree_json_counts_every_node() {
    let env = TestEnv::new();

    let output = env.run(&["--json", "tree"]);

    assert!(output.status.success());
    let events = events(&output);
    let nodes: Vec<_> = events.iter().filter(|e| e["event"] == "node").collect();
    assert_eq!(nodes.len(), 46);
    assert_eq!(nodes[0]["depth"], 0);
    assert_eq!(nodes[0]["label"], "Electronics");
    assert_eq!(events.last().unwrap()["count"], 46);
}

#[test]
fn tree_warns_about_duplicates_without_failing() {
    let env = TestEnv::new();
    let tree = env.write("dupes.json", TREE_WITH_DUPLICATES);

    let output = env.run(&["tree", "--tree", tree.to_str().unwrap()]);

    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("duplicate id 1 on 'Boots'"), "stderr: {err}");
    assert!(err.contains("duplicate value 'shoes'"), "stderr: {err}");
}

#[test]
fn tree_rejects_unknown_extension() {
    let env = TestEnv::new();
    let tree = env.write("catalog.yaml", "- nope\n");

    let output = env.run(&["tree", "--tree", tree.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("unsupported tree format"));
}

#[test]
fn tree_reports_invalid_json() {
    let env = TestEnv::new();
    let tree = env.write("broken.json", "[{\"id\": 1,");

    let output = env.run(&["--json", "tree", "--tree", tree.to_str().unwrap()]);

    assert!(!output.status.success());
    let events = events(&output);
    let error = events.last().unwrap();
    assert_eq!(error["code"], "INVALID_TREE");
    assert!(error["message"].as_str().unwrap().contains("invalid tree in"));
    assert!(error["message"].as_str().unwrap().contains("broken.json"));
}
