use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn help_text(args: &[&str]) -> String {
    let mut cmd = cargo_bin_cmd!("catalogctl");
    let output = cmd
        .args(args)
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8_lossy(&output).into_owned()
}

#[test]
fn top_level_lists_resources() {
    let text = help_text(&[]);
    for command in ["migrate", "category", "genre", "cast-member", "video"] {
        assert!(text.contains(command), "help missing '{command}'");
    }
}

#[test]
fn list_documents_pagination_flags() {
    let text = help_text(&["category", "list"]);
    for flag in ["--filter", "--order", "--page", "--per-page"] {
        assert!(text.contains(flag), "category list help missing {flag}");
    }
}

#[test]
fn video_exposes_encoded_path() {
    let text = help_text(&["video"]);
    assert!(text.contains("encoded-path"), "video help missing encoded-path");

    let create = help_text(&["video", "create"]);
    assert!(create.contains("--rating"), "video create help missing --rating");
    assert!(
        create.contains("--cast-member"),
        "video create help missing --cast-member"
    );
}

#[test]
fn unknown_cast_member_type_is_rejected() {
    let mut cmd = cargo_bin_cmd!("catalogctl");
    cmd.args(["cast-member", "create", "Jane Doe", "--type", "producer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid cast member type"));
}
