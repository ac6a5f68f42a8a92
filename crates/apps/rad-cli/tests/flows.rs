//! Guided flows against scripted tools and answers.

mod common;

use common::Harness;
use rad_cli::flows::{profile, project, publish, Outcome};
use rad_test_utils::*;
use serde_json::Value;

const PROFILE: &str = "rad-profile-dev";
const IDENTITIES: &str = "rad-identities-dev";

fn profile_tools() -> ScriptedRunner {
    let alice = person_stdout("rad:git:p1", "alice");
    ScriptedRunner::new()
        .on_success(PROFILE, &["create"], profile_stdout("a1"))
        .on_success(PROFILE, &["ssh", "add"], profile_stdout("a1"))
        .on_success(IDENTITIES, &["person", "create"], alice.clone())
        .on_success(IDENTITIES, &["local", "set"], alice)
}

// =============================================================================
// Create profile
// =============================================================================

#[tokio::test]
async fn test_create_profile_runs_every_step() {
    let mut h = Harness::new(profile_tools(), &["Y", "alice"]);
    let outcome = profile::create_profile(&mut h.ctx).await.unwrap();
    assert_eq!(outcome, Outcome::Completed);

    assert_eq!(
        h.runner.command_lines(),
        vec![
            "rad-profile-dev create".to_string(),
            "rad-profile-dev ssh add".to_string(),
            "rad-identities-dev person create new --payload {\"name\":\"alice\"}".to_string(),
            "rad-identities-dev local set --urn rad:git:p1".to_string(),
        ]
    );
    assert_eq!(
        h.lines(),
        vec![
            "i Creating new profile and radicle key...",
            "i Adding SSH-key...",
            "✓ Profile created successfully!",
            "- Profile:",
            "⋅ Name -> alice",
            "⋅ Id   -> a1",
            "⋅ URN  -> rad:git:p1",
            "i To add a project to Radicle, run `rad init` in an existing git repository.",
        ]
    );
}

#[tokio::test]
async fn test_create_profile_declined() {
    let mut h = Harness::new(profile_tools(), &["n"]);
    let outcome = profile::create_profile(&mut h.ctx).await.unwrap();
    assert_eq!(outcome, Outcome::Cancelled);
    assert!(h.runner.invocations().is_empty());
    assert!(h.lines().is_empty());
}

#[tokio::test]
async fn test_confirmation_accepts_only_exact_answers() {
    let mut h = Harness::new(profile_tools(), &["yes", "y", "N", "Y", "alice"]);
    let outcome = profile::create_profile(&mut h.ctx).await.unwrap();
    assert_eq!(outcome, Outcome::Completed);

    let asked = h.prompter.asked();
    let confirmations = asked.iter().filter(|p| p.starts_with("Create new")).count();
    assert_eq!(confirmations, 4);
}

#[tokio::test]
async fn test_create_profile_failure_stops_flow() {
    let runner = ScriptedRunner::new().on_exit(PROFILE, &["create"], 1);
    let mut h = Harness::new(runner, &["Y", "alice"]);

    let outcome = profile::create_profile(&mut h.ctx).await.unwrap();
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(h.error_lines(), 1);
    assert_eq!(h.out.count("Could not create profile."), 1);
    assert_eq!(h.runner.invocations().len(), 1);
    assert_eq!(h.prompter.remaining(), 1, "username must not be asked");
}

#[tokio::test]
async fn test_unreadable_ssh_answer_stops_flow() {
    let runner = ScriptedRunner::new()
        .on_success(PROFILE, &["create"], profile_stdout("a1"))
        .on_success(PROFILE, &["ssh", "add"], "not json at all");
    let mut h = Harness::new(runner, &["Y", "alice"]);

    let outcome = profile::create_profile(&mut h.ctx).await.unwrap();
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(h.error_lines(), 1);
    assert_eq!(h.out.count("Could not add SSH key."), 1);
    assert!(h.runner.calls_to(IDENTITIES).is_empty());
}

#[tokio::test]
async fn test_missing_identity_tool_stops_flow() {
    let runner = ScriptedRunner::new()
        .on_success(PROFILE, &["create"], profile_stdout("a1"))
        .on_success(PROFILE, &["ssh", "add"], profile_stdout("a1"));
    let mut h = Harness::new(runner, &["Y", "alice"]);

    let outcome = profile::create_profile(&mut h.ctx).await.unwrap();
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(h.error_lines(), 1);
    assert_eq!(h.out.count("Could not create identity."), 1);
    assert_eq!(h.out.count("Profile created"), 0);
}

#[tokio::test]
async fn test_set_default_identity_failure() {
    let alice = person_stdout("rad:git:p1", "alice");
    let runner = ScriptedRunner::new()
        .on_success(PROFILE, &["create"], profile_stdout("a1"))
        .on_success(PROFILE, &["ssh", "add"], profile_stdout("a1"))
        .on_success(IDENTITIES, &["person", "create"], alice)
        .on_exit(IDENTITIES, &["local", "set"], 2);
    let mut h = Harness::new(runner, &["Y", "alice"]);

    let outcome = profile::create_profile(&mut h.ctx).await.unwrap();
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(h.error_lines(), 1);
    assert_eq!(h.out.count("Could not set default identity."), 1);
}

#[tokio::test]
async fn test_username_with_quote_is_sent_as_valid_json() {
    let person = person_stdout("rad:git:p1", "o\"neil");
    let runner = ScriptedRunner::new()
        .on_success(PROFILE, &["create"], profile_stdout("a1"))
        .on_success(PROFILE, &["ssh", "add"], profile_stdout("a1"))
        .on_success(IDENTITIES, &["person", "create"], person.clone())
        .on_success(IDENTITIES, &["local", "set"], person);
    let mut h = Harness::new(runner, &["Y", "o\"neil"]);

    profile::create_profile(&mut h.ctx).await.unwrap();
    let call = &h.runner.calls_to(IDENTITIES)[0];
    let payload: Value = serde_json::from_str(call.arg_after("--payload").unwrap()).unwrap();
    assert_eq!(payload["name"], "o\"neil");
}

// =============================================================================
// List profiles
// =============================================================================

#[tokio::test]
async fn test_list_profiles_marks_active() {
    let runner = ScriptedRunner::new()
        .on_success(PROFILE, &["get"], profile_stdout("b2"))
        .on_success(PROFILE, &["list"], profiles_stdout(&["a1", "b2"]));
    let mut h = Harness::new(runner, &[]);

    let outcome = profile::list_profiles(&mut h.ctx).await.unwrap();
    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(
        h.lines(),
        vec![
            "i Found at least one existing profile.",
            "- Profiles:",
            "⋅ a1",
            "⊙ b2 (active)",
        ]
    );
}

#[tokio::test]
async fn test_list_profiles_without_active_profile_warns() {
    let runner = ScriptedRunner::new()
        .on_exit(PROFILE, &["get"], 1)
        .on_success(PROFILE, &["list"], profiles_stdout(&["a1"]));
    let mut h = Harness::new(runner, &[]);

    let outcome = profile::list_profiles(&mut h.ctx).await.unwrap();
    assert_eq!(outcome, Outcome::Completed);

    let lines = h.lines();
    assert_eq!(lines[0], "! Could not find any profile.");
    assert_eq!(
        lines[1],
        "i If you want to create a new profile, please use `rad auth`."
    );
    assert_eq!(h.error_lines(), 0);
    assert_eq!(h.out.count("(active)"), 0);
    assert_eq!(h.out.count("⋅ a1"), 1);
}

#[tokio::test]
async fn test_list_profiles_empty_is_silent() {
    let runner = ScriptedRunner::new()
        .on_success(PROFILE, &["get"], profile_stdout("a1"))
        .on_success(PROFILE, &["list"], profiles_stdout(&[]));
    let mut h = Harness::new(runner, &[]);

    let outcome = profile::list_profiles(&mut h.ctx).await.unwrap();
    assert_eq!(outcome, Outcome::Completed);
    assert!(h.out.contents().is_empty());
}

#[tokio::test]
async fn test_list_profiles_failure() {
    let runner = ScriptedRunner::new()
        .on_success(PROFILE, &["get"], profile_stdout("a1"))
        .on_success(PROFILE, &["list"], "\"[{\\\"id\\\":\"");
    let mut h = Harness::new(runner, &[]);

    let outcome = profile::list_profiles(&mut h.ctx).await.unwrap();
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(h.lines().len(), 1);
    assert!(h.lines()[0].starts_with("x Could not get list of profiles."));
}

#[tokio::test]
async fn test_show_paths_passes_output_through() {
    let runner =
        ScriptedRunner::new().on_success(PROFILE, &["paths"], "{\"git\":\"/rad/a1/git\"}\n");
    let mut h = Harness::new(runner, &[]);

    let outcome = profile::show_paths(&mut h.ctx).await.unwrap();
    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(h.out.contents(), "{\"git\":\"/rad/a1/git\"}\n");
}

// =============================================================================
// Projects
// =============================================================================

#[tokio::test]
async fn test_create_project_uses_parent_and_default_branch() {
    let runner = ScriptedRunner::new().on_success(
        IDENTITIES,
        &["project", "create"],
        project_stdout("rad:git:q1", "heartwood"),
    );
    let mut h = Harness::in_repo(runner, &["heartwood", ""], "heartwood");

    let outcome = project::create_project(&mut h.ctx).await.unwrap();
    assert_eq!(outcome, Outcome::Completed);

    let call = &h.runner.invocations()[0];
    let parent = h.cwd.parent().unwrap().to_string_lossy().into_owned();
    assert_eq!(call.arg_after("--path"), Some(parent.as_str()));
    assert_eq!(
        call.arg_after("--payload"),
        Some("{\"name\":\"heartwood\",\"default_branch\":\"main\"}")
    );

    assert_eq!(
        h.prompter.asked(),
        vec!["Please enter a name", "Default branch"]
    );
    let lines = h.lines();
    assert!(lines.contains(&"✓ Project initialized successfully!".to_string()));
    assert!(lines.contains(&"⋅ Name -> heartwood".to_string()));
    assert!(lines.contains(&"⋅ URN  -> rad:git:q1".to_string()));
    assert_eq!(
        lines.last().unwrap(),
        "i To publish, run `rad publish` or `git push rad`"
    );
}

#[tokio::test]
async fn test_create_project_with_quote_in_name() {
    let name = "the \"best\" project";
    let runner = ScriptedRunner::new().on_success(
        IDENTITIES,
        &["project", "create"],
        project_stdout("rad:git:q1", name),
    );
    let mut h = Harness::new(runner, &[name, "trunk"]);

    project::create_project(&mut h.ctx).await.unwrap();
    let call = &h.runner.invocations()[0];
    let payload: Value = serde_json::from_str(call.arg_after("--payload").unwrap()).unwrap();
    assert_eq!(payload["name"], name);
    assert_eq!(payload["default_branch"], "trunk");
}

#[tokio::test]
async fn test_create_project_failure() {
    let runner = ScriptedRunner::new().on_exit(IDENTITIES, &["project", "create"], 1);
    let mut h = Harness::new(runner, &["heartwood", "main"]);

    let outcome = project::create_project(&mut h.ctx).await.unwrap();
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(h.error_lines(), 1);
    assert_eq!(h.out.count("Could not create project."), 1);
    assert_eq!(h.out.count("Project initialized"), 0);
}

#[tokio::test]
async fn test_list_projects_marks_working_directory() {
    let runner = ScriptedRunner::new().on_success(
        IDENTITIES,
        &["project", "list"],
        projects_stdout(&[
            ("rad:git:1", "alpha"),
            ("rad:git:2", "heartwood"),
            ("rad:git:3", "heartwood"),
        ]),
    );
    let mut h = Harness::in_repo(runner, &[], "heartwood");

    let outcome = project::list_projects(&mut h.ctx).await.unwrap();
    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(
        h.lines(),
        vec![
            "- Projects:",
            "⋅ alpha",
            "⊙ heartwood (current)",
            "⋅ heartwood",
        ]
    );
}

#[tokio::test]
async fn test_list_projects_failure() {
    let runner = ScriptedRunner::new();
    let mut h = Harness::new(runner, &[]);

    let outcome = project::list_projects(&mut h.ctx).await.unwrap();
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(h.lines().len(), 1);
    assert!(h.lines()[0].starts_with("x Could not get list of projects."));
}

// =============================================================================
// Publish
// =============================================================================

#[tokio::test]
async fn test_publish_does_not_inspect_push() {
    let runner = ScriptedRunner::new().on_exit("git", &["push"], 1);
    let mut h = Harness::in_repo(runner, &[], "heartwood");

    let outcome = publish::publish_project(&mut h.ctx).await.unwrap();
    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(h.runner.command_lines(), vec!["git push rad"]);
    assert_eq!(
        h.lines(),
        vec![
            "i Publishing project...",
            "i To replicate to peers, run `rad node --setup`",
        ]
    );
}
